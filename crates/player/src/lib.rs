//! Strategy Memo Player crate.
//!
//! This crate contains application services and infrastructure adapters
//! around the strategy memo model. Multi-platform support is provided via
//! compile-time `cfg` selection.

pub mod application;
pub mod infrastructure;
pub mod ports;

pub use application::services::{
    BackupError, BackupService, PersistenceService, SaveFailure, ShareImportError,
    ShareImportOutcome, ShareImportService,
};
pub use application::PlayerConfig;
