//! Player configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_SAVE_DEBOUNCE_MS: u64 = 1000;

/// Hosts a shared memo may be fetched from unless configured otherwise
pub const DEFAULT_SHARE_HOSTS: [&str; 2] =
    ["raw.githubusercontent.com", "gist.githubusercontent.com"];

/// Player configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Storage file override; the platform default is used when unset
    pub storage_path: Option<PathBuf>,
    /// Quiet period before an edit is written to storage
    pub save_debounce: Duration,
    /// Hosts allowed for share import
    pub share_hosts: Vec<String>,
    /// Shared memo to open at start-up
    pub share_url: Option<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            save_debounce: Duration::from_millis(DEFAULT_SAVE_DEBOUNCE_MS),
            share_hosts: DEFAULT_SHARE_HOSTS.iter().map(|h| h.to_string()).collect(),
            share_url: None,
        }
    }
}

impl PlayerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let save_debounce = match var("STRATMEMO_SAVE_DEBOUNCE_MS") {
            Some(ms) => Duration::from_millis(
                ms.parse()
                    .context("STRATMEMO_SAVE_DEBOUNCE_MS must be a number of milliseconds")?,
            ),
            None => defaults.save_debounce,
        };

        let share_hosts = match var("STRATMEMO_SHARE_HOSTS") {
            Some(hosts) => hosts
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.share_hosts,
        };

        Ok(Self {
            storage_path: var("STRATMEMO_STORAGE_PATH").map(PathBuf::from),
            save_debounce,
            share_hosts,
            share_url: var("STRATMEMO_SHARE_URL"),
        })
    }
}
