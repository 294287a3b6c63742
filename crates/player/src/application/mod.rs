//! Application layer - Use cases and orchestration

pub mod config;
pub mod services;

pub use config::PlayerConfig;
