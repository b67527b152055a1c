//! Runtime configuration.
//!
//! Values come from environment variables (a `.env` file is honoured) and
//! fall back to [`cocktail_core::defaults`]:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `COCKTAIL_CONFIG_SOURCE` | `./config.json` |
//! | `COCKTAIL_SEED_SOURCE` | `./cocktails.json` |
//! | `COCKTAIL_DATA_DIR` | `./data` |
//! | `COCKTAIL_STORAGE_KEY` | `cocktails` |
//! | `COCKTAIL_STORAGE_QUOTA_BYTES` | unlimited |
//! | `COCKTAIL_HTTP_TIMEOUT_SECS` | `10` |
//!
//! Sources may be local paths or `http(s)://` URLs.

use cocktail_core::{defaults, DocumentSource, Result};
use cocktail_store::{source_from_location, FileKeyValueStore};
use std::path::PathBuf;
use tracing::warn;

/// Where the catalog reads its documents and keeps its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub config_source: String,
    pub seed_source: String,
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub storage_quota_bytes: Option<usize>,
    pub http_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_source: defaults::CONFIG_SOURCE.to_string(),
            seed_source: defaults::SEED_SOURCE.to_string(),
            data_dir: PathBuf::from(defaults::DATA_DIR),
            storage_key: defaults::STORAGE_KEY.to_string(),
            storage_quota_bytes: None,
            http_timeout_secs: defaults::HTTP_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment with fallback to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = non_empty(lookup("COCKTAIL_CONFIG_SOURCE")) {
            config.config_source = val;
        }

        if let Some(val) = non_empty(lookup("COCKTAIL_SEED_SOURCE")) {
            config.seed_source = val;
        }

        if let Some(val) = non_empty(lookup("COCKTAIL_DATA_DIR")) {
            config.data_dir = PathBuf::from(val);
        }

        if let Some(val) = non_empty(lookup("COCKTAIL_STORAGE_KEY")) {
            config.storage_key = val;
        }

        if let Some(val) = non_empty(lookup("COCKTAIL_STORAGE_QUOTA_BYTES")) {
            match val.parse::<usize>() {
                Ok(bytes) => config.storage_quota_bytes = Some(bytes),
                Err(_) => {
                    warn!(value = %val, "Invalid COCKTAIL_STORAGE_QUOTA_BYTES, storage is unlimited")
                }
            }
        }

        if let Some(val) = non_empty(lookup("COCKTAIL_HTTP_TIMEOUT_SECS")) {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => config.http_timeout_secs = secs,
                _ => warn!(value = %val, "Invalid COCKTAIL_HTTP_TIMEOUT_SECS, using default"),
            }
        }

        config
    }

    /// Source of the vocabulary document.
    pub fn config_document(&self) -> Result<Box<dyn DocumentSource>> {
        source_from_location(&self.config_source, self.http_timeout_secs)
    }

    /// Source of the seed recipe document.
    pub fn seed_document(&self) -> Result<Box<dyn DocumentSource>> {
        source_from_location(&self.seed_source, self.http_timeout_secs)
    }

    /// File-backed store rooted at `data_dir`, with the configured quota.
    pub fn file_store(&self) -> FileKeyValueStore {
        let store = FileKeyValueStore::new(&self.data_dir);
        match self.storage_quota_bytes {
            Some(bytes) => store.with_quota(bytes),
            None => store,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
