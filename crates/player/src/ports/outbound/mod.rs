//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod platform;
pub mod remote_document_port;

pub use platform::{StorageError, StorageProvider, TimeProvider};
pub use remote_document_port::{RemoteDocumentPort, RemoteFetchError};

#[cfg(any(test, feature = "testing"))]
pub use remote_document_port::MockRemoteDocumentPort;
