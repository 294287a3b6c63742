//! Text encodings of a strategy memo: storage, export files and clipboard

use chrono::NaiveDateTime;
use serde_json::Value;
use stratmemo_domain::StrategyMemo;

use crate::error::ImportError;
use crate::records::{
    convert_to_strategy_memo, convert_to_strategy_memo_record, is_strategy_memo_record,
    StrategyMemoRecord,
};

/// Key under which the memo is persisted
pub const STORAGE_KEY: &str = "strategy-memo";

const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// A file ready to be offered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: String,
    pub contents: String,
}

/// Migrate any JSON value into a valid memo.
pub fn strategy_memo_from_value(value: &Value) -> StrategyMemo {
    convert_to_strategy_memo(&StrategyMemoRecord::copied(value))
}

/// Serialize for storage, ids included.
pub fn to_storage_json(memo: &StrategyMemo) -> Result<String, serde_json::Error> {
    serde_json::to_string(&convert_to_strategy_memo_record(memo))
}

/// Read stored text. Unparseable or missing data yields an empty memo.
pub fn from_storage_json(text: Option<&str>) -> StrategyMemo {
    let Some(text) = text else {
        tracing::debug!("No stored strategy memo, starting empty");
        return StrategyMemo::empty();
    };
    match serde_json::from_str::<Value>(text) {
        Ok(value) => strategy_memo_from_value(&value),
        Err(e) => {
            tracing::warn!("Stored strategy memo is not valid JSON, starting empty: {}", e);
            StrategyMemo::empty()
        }
    }
}

/// Parse text supplied by the user (import file, clipboard, share link).
///
/// Unlike the storage path this rejects input that fails the structural
/// guard, so the caller can keep its current state and report the error.
pub fn parse_strategy_memo(text: &str) -> Result<StrategyMemo, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    if !is_strategy_memo_record(&value) {
        return Err(ImportError::InvalidFormat);
    }
    Ok(strategy_memo_from_value(&value))
}

/// `{gameName}_{yyyyMMdd_HHmmss}.json`
pub fn export_file_name(game_name: &str, now: NaiveDateTime) -> String {
    format!("{}_{}.json", game_name, now.format(EXPORT_TIMESTAMP_FORMAT))
}

/// Pretty JSON without list ids; they are re-derived on import.
pub fn export_document(
    memo: &StrategyMemo,
    now: NaiveDateTime,
) -> Result<ExportDocument, serde_json::Error> {
    let record = convert_to_strategy_memo_record(memo).without_list_ids();
    Ok(ExportDocument {
        file_name: export_file_name(memo.game_name(), now),
        contents: serde_json::to_string_pretty(&record)?,
    })
}

pub fn import_document(contents: &str) -> Result<StrategyMemo, ImportError> {
    parse_strategy_memo(contents)
}

/// Full JSON for manual backup, ids included so a restore is exact.
pub fn to_clipboard_text(memo: &StrategyMemo) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&convert_to_strategy_memo_record(memo))
}

pub fn from_clipboard_text(text: &str) -> Result<StrategyMemo, ImportError> {
    parse_strategy_memo(text.trim())
}
