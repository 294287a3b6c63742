//! Application services
//!
//! Services depend on port traits, not concrete infrastructure
//! implementations.

pub mod backup_service;
pub mod persistence_service;
pub mod share_import_service;

pub use backup_service::{BackupError, BackupService};
pub use persistence_service::{PersistenceService, SaveFailure};
pub use share_import_service::{ShareImportError, ShareImportOutcome, ShareImportService};
