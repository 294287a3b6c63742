//! Backup Service - export/import files and clipboard text

use std::sync::Arc;

use stratmemo_domain::StrategyMemo;
use stratmemo_shared::{
    export_document, from_clipboard_text, import_document, to_clipboard_text, ExportDocument,
    ImportError,
};
use thiserror::Error;

use crate::ports::outbound::TimeProvider;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackupError {
    #[error("Failed to serialize strategy memo: {0}")]
    Serialization(String),

    #[error(transparent)]
    Import(#[from] ImportError),
}

impl From<serde_json::Error> for BackupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub struct BackupService {
    time: Arc<dyn TimeProvider>,
}

impl BackupService {
    pub fn new(time: Arc<dyn TimeProvider>) -> Self {
        Self { time }
    }

    /// Build the download file, named after the game and the local time.
    pub fn export(&self, memo: &StrategyMemo) -> Result<ExportDocument, BackupError> {
        let document = export_document(memo, self.time.now_local())?;
        tracing::debug!(file_name = %document.file_name, "Exported strategy memo");
        Ok(document)
    }

    /// Parse an imported file. On error the current memo should be kept.
    pub fn import(&self, contents: &str) -> Result<StrategyMemo, BackupError> {
        Ok(import_document(contents)?)
    }

    pub fn copy_text(&self, memo: &StrategyMemo) -> Result<String, BackupError> {
        Ok(to_clipboard_text(memo)?)
    }

    pub fn paste_text(&self, text: &str) -> Result<StrategyMemo, BackupError> {
        Ok(from_clipboard_text(text)?)
    }
}
