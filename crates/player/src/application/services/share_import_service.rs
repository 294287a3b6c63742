//! Share Import Service - open a memo shared by URL
//!
//! A shared memo is fetched once from an allow-listed `https` host and shown
//! read-only. It is never written back to storage.

use std::sync::Arc;

use stratmemo_domain::StrategyMemo;
use stratmemo_shared::{parse_strategy_memo, ImportError};
use thiserror::Error;
use url::Url;

use crate::ports::outbound::{RemoteDocumentPort, RemoteFetchError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShareImportError {
    #[error("Invalid share URL: {0}")]
    InvalidUrl(String),

    #[error("Host not allowed for sharing: {0}")]
    DisallowedHost(String),

    #[error("Failed to fetch shared memo: {0}")]
    Http(String),

    #[error("Shared memo request failed with HTTP status {0}")]
    Status(u16),

    #[error(transparent)]
    Import(#[from] ImportError),
}

impl From<RemoteFetchError> for ShareImportError {
    fn from(err: RemoteFetchError) -> Self {
        match err {
            RemoteFetchError::Network(message) => Self::Http(message),
            RemoteFetchError::Status(code) => Self::Status(code),
        }
    }
}

/// A successfully fetched shared memo
#[derive(Debug, Clone, PartialEq)]
pub struct ShareImportOutcome {
    pub memo: StrategyMemo,
    /// Shared memos are always opened read-only
    pub read_only: bool,
}

pub struct ShareImportService {
    remote: Arc<dyn RemoteDocumentPort>,
    allowed_hosts: Vec<String>,
}

impl ShareImportService {
    pub fn new(remote: Arc<dyn RemoteDocumentPort>, allowed_hosts: Vec<String>) -> Self {
        let allowed_hosts = allowed_hosts
            .into_iter()
            .map(|host| host.trim().to_ascii_lowercase())
            .filter(|host| !host.is_empty())
            .collect();
        Self {
            remote,
            allowed_hosts,
        }
    }

    pub fn allowed_hosts(&self) -> &[String] {
        &self.allowed_hosts
    }

    /// Parse `raw` and check it against the scheme and host allow-list.
    pub fn validate_url(&self, raw: &str) -> Result<Url, ShareImportError> {
        let url =
            Url::parse(raw.trim()).map_err(|e| ShareImportError::InvalidUrl(e.to_string()))?;
        if url.scheme() != "https" {
            return Err(ShareImportError::InvalidUrl(format!(
                "scheme must be https, got {}",
                url.scheme()
            )));
        }
        let host = url
            .host_str()
            .ok_or_else(|| ShareImportError::InvalidUrl("missing host".to_string()))?
            .to_ascii_lowercase();
        if !self.allowed_hosts.iter().any(|allowed| *allowed == host) {
            return Err(ShareImportError::DisallowedHost(host));
        }
        Ok(url)
    }

    /// Fetch and parse the memo behind `raw`.
    pub async fn import(&self, raw: &str) -> Result<ShareImportOutcome, ShareImportError> {
        let url = self.validate_url(raw)?;
        let text = self.remote.fetch_text(&url).await?;
        let memo = parse_strategy_memo(&text)?;

        tracing::info!(
            %url,
            game_name = memo.game_name(),
            maps = memo.game_maps().len(),
            "Imported shared strategy memo"
        );

        Ok(ShareImportOutcome {
            memo,
            read_only: true,
        })
    }

    /// Like [`Self::import`], but any failure yields an empty, editable memo.
    ///
    /// The error is returned alongside so the caller can report it.
    pub async fn import_or_empty(
        &self,
        raw: &str,
    ) -> (ShareImportOutcome, Option<ShareImportError>) {
        match self.import(raw).await {
            Ok(outcome) => (outcome, None),
            Err(e) => {
                tracing::warn!("Share import failed, starting empty: {}", e);
                let outcome = ShareImportOutcome {
                    memo: StrategyMemo::empty(),
                    read_only: false,
                };
                (outcome, Some(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRemoteDocumentPort;
    use mockall::predicate::*;

    const SHARE_URL: &str = "https://raw.githubusercontent.com/user/repo/main/memo.json";

    fn default_hosts() -> Vec<String> {
        vec![
            "raw.githubusercontent.com".to_string(),
            "gist.githubusercontent.com".to_string(),
        ]
    }

    fn service(mock: MockRemoteDocumentPort) -> ShareImportService {
        ShareImportService::new(Arc::new(mock), default_hosts())
    }

    #[test]
    fn validate_rejects_http_scheme() {
        let svc = service(MockRemoteDocumentPort::new());
        let err = svc
            .validate_url("http://raw.githubusercontent.com/memo.json")
            .unwrap_err();
        assert!(matches!(err, ShareImportError::InvalidUrl(_)));
    }

    #[test]
    fn validate_rejects_unknown_host() {
        let svc = service(MockRemoteDocumentPort::new());
        let err = svc.validate_url("https://evil.example.com/memo.json").unwrap_err();
        assert_eq!(
            err,
            ShareImportError::DisallowedHost("evil.example.com".to_string())
        );
    }

    #[test]
    fn validate_rejects_garbage() {
        let svc = service(MockRemoteDocumentPort::new());
        assert!(matches!(
            svc.validate_url("not a url"),
            Err(ShareImportError::InvalidUrl(_))
        ));
    }

    #[test]
    fn validate_accepts_allowed_host_case_insensitively() {
        let svc = service(MockRemoteDocumentPort::new());
        let url = svc
            .validate_url("https://GIST.githubusercontent.com/u/abc/raw/memo.json")
            .unwrap();
        assert_eq!(url.host_str(), Some("gist.githubusercontent.com"));
    }

    #[tokio::test]
    async fn import_success_is_read_only() {
        let mut mock = MockRemoteDocumentPort::new();
        mock.expect_fetch_text()
            .with(eq(Url::parse(SHARE_URL).unwrap()))
            .times(1)
            .returning(|_| Ok(r#"{"gameName":"Shared","memos":[{"title":"tip"}]}"#.to_string()));

        let outcome = service(mock).import(SHARE_URL).await.unwrap();
        assert!(outcome.read_only);
        assert_eq!(outcome.memo.game_name(), "Shared");
        assert_eq!(outcome.memo.memos().len(), 1);
    }

    #[tokio::test]
    async fn disallowed_host_never_fetches() {
        let mut mock = MockRemoteDocumentPort::new();
        mock.expect_fetch_text().times(0);

        let err = service(mock)
            .import("https://example.com/memo.json")
            .await
            .unwrap_err();
        assert!(matches!(err, ShareImportError::DisallowedHost(_)));
    }

    #[tokio::test]
    async fn import_or_empty_keeps_shared_memo_read_only() {
        let mut mock = MockRemoteDocumentPort::new();
        mock.expect_fetch_text()
            .returning(|_| Ok(r#"{"gameName":"Shared"}"#.to_string()));

        let (outcome, err) = service(mock).import_or_empty(SHARE_URL).await;
        assert_eq!(err, None);
        assert!(outcome.read_only);
        assert_eq!(outcome.memo.game_name(), "Shared");
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let mut mock = MockRemoteDocumentPort::new();
        mock.expect_fetch_text()
            .returning(|_| Err(RemoteFetchError::Status(404)));

        let err = service(mock).import(SHARE_URL).await.unwrap_err();
        assert_eq!(err, ShareImportError::Status(404));
    }

    #[tokio::test]
    async fn non_json_body_is_an_import_error() {
        let mut mock = MockRemoteDocumentPort::new();
        mock.expect_fetch_text()
            .returning(|_| Ok("<html>not found</html>".to_string()));

        let err = service(mock).import(SHARE_URL).await.unwrap_err();
        assert!(matches!(
            err,
            ShareImportError::Import(ImportError::InvalidJson(_))
        ));
    }

    #[tokio::test]
    async fn guard_failure_falls_back_to_empty_memo() {
        let mut mock = MockRemoteDocumentPort::new();
        mock.expect_fetch_text()
            .returning(|_| Ok(r#"{"gameMaps":"oops"}"#.to_string()));

        let (outcome, err) = service(mock).import_or_empty(SHARE_URL).await;
        assert!(outcome.memo.is_empty());
        assert!(!outcome.read_only);
        assert_eq!(err, Some(ShareImportError::Import(ImportError::InvalidFormat)));
    }
}
