//! Persistence Service - debounced saving of the strategy memo
//!
//! Every edit calls [`PersistenceService::set`]; the actual write happens
//! once the edits pause for the configured debounce delay. A newer `set`
//! supersedes any write still waiting.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use stratmemo_domain::StrategyMemo;
use stratmemo_shared::{from_storage_json, to_storage_json, STORAGE_KEY};

use crate::infrastructure::spawn::spawn_delayed;
use crate::ports::outbound::{StorageError, StorageProvider};

/// A debounced write that did not reach storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveFailure {
    /// The store is full
    QuotaExceeded,
    /// Any other failure, with its description
    Other(String),
}

impl SaveFailure {
    /// Message suitable for showing to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::QuotaExceeded => "Failed to save: the data is too large.",
            Self::Other(_) => "Failed to save.",
        }
    }
}

impl From<StorageError> for SaveFailure {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::QuotaExceeded(_) => Self::QuotaExceeded,
            other => Self::Other(other.to_string()),
        }
    }
}

/// The single pending-write slot
#[derive(Default)]
struct PendingWrite {
    generation: u64,
    json: Option<String>,
}

/// Loads the memo from storage and writes it back, debounced
pub struct PersistenceService {
    storage: Arc<dyn StorageProvider>,
    debounce: Duration,
    pending: Arc<Mutex<PendingWrite>>,
    failures: UnboundedSender<SaveFailure>,
}

impl PersistenceService {
    /// Create the service together with the receiver for failed writes.
    pub fn new(
        storage: Arc<dyn StorageProvider>,
        debounce: Duration,
    ) -> (Self, UnboundedReceiver<SaveFailure>) {
        let (failures, receiver) = unbounded();
        let service = Self {
            storage,
            debounce,
            pending: Arc::new(Mutex::new(PendingWrite::default())),
            failures,
        };
        (service, receiver)
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Read the stored memo. Missing or unreadable data yields an empty memo.
    pub fn get(&self) -> StrategyMemo {
        let stored = self.storage.load(STORAGE_KEY);
        tracing::debug!(found = stored.is_some(), "Loading strategy memo");
        from_storage_json(stored.as_deref())
    }

    /// Schedule `memo` to be written once the debounce delay passes.
    ///
    /// On native targets this must run inside a tokio runtime.
    pub fn set(&self, memo: &StrategyMemo) {
        let json = match to_storage_json(memo) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize strategy memo: {}", e);
                self.report(StorageError::from(e).into());
                return;
            }
        };

        let generation = {
            let Ok(mut pending) = self.pending.lock() else {
                self.report(SaveFailure::Other("pending write slot poisoned".to_string()));
                return;
            };
            pending.generation += 1;
            pending.json = Some(json);
            pending.generation
        };

        let storage = Arc::clone(&self.storage);
        let pending = Arc::clone(&self.pending);
        let failures = self.failures.clone();
        spawn_delayed(self.debounce, move || {
            // Hold the slot until the write finishes.
            let Ok(mut slot) = pending.lock() else {
                return;
            };
            // Superseded by a later `set` or taken by `flush`.
            if slot.generation != generation {
                return;
            }
            if let Some(json) = slot.json.take() {
                if let Err(e) = write(storage.as_ref(), &json) {
                    let _ = failures.unbounded_send(e.into());
                }
            }
        });
    }

    /// True while a write is waiting for its debounce delay.
    pub fn has_pending(&self) -> bool {
        self.pending
            .lock()
            .map(|pending| pending.json.is_some())
            .unwrap_or(false)
    }

    /// Write the pending value now, cancelling its timer.
    pub fn flush(&self) -> Result<(), StorageError> {
        let mut pending = self
            .pending
            .lock()
            .map_err(|e| StorageError::Other(e.to_string()))?;
        pending.generation += 1;
        match pending.json.take() {
            Some(json) => write(self.storage.as_ref(), &json),
            None => Ok(()),
        }
    }

    fn report(&self, failure: SaveFailure) {
        let _ = self.failures.unbounded_send(failure);
    }
}

fn write(storage: &dyn StorageProvider, json: &str) -> Result<(), StorageError> {
    match storage.save(STORAGE_KEY, json) {
        Ok(()) => {
            tracing::debug!(bytes = json.len(), "Saved strategy memo");
            Ok(())
        }
        Err(e) => {
            tracing::warn!("Failed to save strategy memo: {}", e);
            Err(e)
        }
    }
}
