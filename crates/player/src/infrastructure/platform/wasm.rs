//! Browser platform implementations backed by `window.localStorage`

use crate::ports::outbound::{StorageError, StorageProvider, TimeProvider};
use chrono::{Local, NaiveDateTime};
use wasm_bindgen::JsValue;

/// `localStorage` access; the handle is looked up per call so the provider
/// stays `Send + Sync`.
#[derive(Clone, Default)]
pub struct LocalStorageProvider;

impl LocalStorageProvider {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Other("No window available".to_string()))?
            .local_storage()
            .map_err(js_failure)?
            .ok_or_else(|| StorageError::Other("localStorage is unavailable".to_string()))
    }
}

fn js_failure(err: JsValue) -> StorageError {
    StorageError::from_failure_message(format!("{:?}", err))
}

impl StorageProvider for LocalStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(js_failure)
    }

    fn load(&self, key: &str) -> Option<String> {
        match Self::storage() {
            Ok(storage) => storage.get_item(key).ok().flatten(),
            Err(e) => {
                tracing::error!("Failed to open localStorage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?.remove_item(key).map_err(js_failure)
    }
}

#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
