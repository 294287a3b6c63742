//! Remote Document Port - one-shot fetch of a shared memo
//!
//! Uses `async_trait` for mockall compatibility.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteFetchError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
}

/// Fetches the body of a remote document as text
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait RemoteDocumentPort: Send + Sync {
    async fn fetch_text(&self, url: &Url) -> Result<String, RemoteFetchError>;
}
