//! Common utility functions shared across the domain, record and player crates.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **WASM compatible** - all code must work in both native and WASM targets

pub mod string;

pub use string::{query_tokens, split_list, COMMA_SEPARATORS};
