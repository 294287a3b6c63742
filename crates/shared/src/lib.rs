//! Strategy Memo Shared - record types and text codecs for the memo
//!
//! This crate sits between the domain model and anything that stores or
//! transfers it:
//! - Record types: primitive-only mirrors of the domain entities
//! - Defensive migration from arbitrary JSON into records
//! - Record <-> domain conversion
//! - Storage, export-file and clipboard encodings
//!
//! # Design Principles
//!
//! 1. **Never fail on stored data** - malformed fields reset to defaults
//! 2. **No business logic** - conversions and codecs only
//! 3. **WASM compatible** - must compile for both native and wasm32 targets

pub mod documents;
pub mod error;
pub mod records;

pub use documents::{
    export_document, export_file_name, from_clipboard_text, from_storage_json, import_document,
    parse_strategy_memo, strategy_memo_from_value, to_clipboard_text, to_storage_json,
    ExportDocument, STORAGE_KEY,
};
pub use error::ImportError;
pub use records::{
    convert_to_strategy_memo, convert_to_strategy_memo_record, is_strategy_memo_record,
    GameMapDetailRecord, GameMapRecord, GameMapShapeRecord, MemoRecord, PreparationRecord,
    StrategyMemoRecord,
};
