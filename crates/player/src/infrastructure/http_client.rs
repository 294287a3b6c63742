//! HTTP client for shared memo documents (native targets)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::ports::outbound::{RemoteDocumentPort, RemoteFetchError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `reqwest`-backed implementation of [`RemoteDocumentPort`]
#[derive(Clone)]
pub struct ReqwestDocumentClient {
    client: Client,
}

impl ReqwestDocumentClient {
    pub fn new() -> Result<Self, RemoteFetchError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RemoteFetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl RemoteDocumentPort for ReqwestDocumentClient {
    async fn fetch_text(&self, url: &Url) -> Result<String, RemoteFetchError> {
        tracing::debug!(%url, "Fetching shared document");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| RemoteFetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteFetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| RemoteFetchError::Network(e.to_string()))
    }
}
