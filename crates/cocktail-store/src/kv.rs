//! Key-value store backends for persisted catalog state.
//!
//! Two backends implement [`KeyValueStore`]:
//! - [`FileKeyValueStore`]: one file per key under a directory, written
//!   atomically (temp file + rename)
//! - [`MemoryKeyValueStore`]: in-process map for tests and ephemeral sessions
//!
//! Both accept an optional per-value byte quota. A write exceeding it fails
//! with [`Error::Storage`] and leaves the previous value untouched, the way
//! a browser's local storage raises a quota error.

use async_trait::async_trait;
use cocktail_core::{Error, KeyValueStore, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, warn};

fn check_quota(key: &str, value: &str, quota: Option<usize>) -> Result<()> {
    match quota {
        Some(limit) if value.len() > limit => Err(Error::Storage(format!(
            "quota exceeded writing '{}': {} bytes > {} bytes",
            key,
            value.len(),
            limit
        ))),
        _ => Ok(()),
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "storage key must be non-empty ASCII alphanumerics, '-' or '_': {:?}",
            key
        )))
    }
}

// =============================================================================
// FILESYSTEM BACKEND
// =============================================================================

/// Directory-backed store. Key `k` lives in `{base_path}/k.json`.
pub struct FileKeyValueStore {
    base_path: PathBuf,
    quota_bytes: Option<usize>,
}

impl FileKeyValueStore {
    /// Create a store rooted at `base_path`. The directory is created on
    /// first write.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            quota_bytes: None,
        }
    }

    /// Limit the size of any single stored value.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota_bytes = Some(bytes);
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "kv_store: read failed");
                Err(e.into())
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        check_quota(key, value, self.quota_bytes)?;
        debug!(path = %path.display(), bytes = value.len(), "kv_store: write");

        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            warn!(dir = %self.base_path.display(), error = %e, "kv_store: create_dir_all failed");
            Error::Storage(format!("cannot create {}: {}", self.base_path.display(), e))
        })?;

        // Atomic write: temp file + rename
        let temp_path = path.with_extension("json.tmp");
        let write = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(value.as_bytes()).await?;
            file.sync_all().await?;
            drop(file);
            fs::rename(&temp_path, &path).await
        };
        if let Err(e) = write.await {
            warn!(path = %path.display(), error = %e, "kv_store: atomic write failed");
            let _ = fs::remove_file(&temp_path).await; // Best-effort cleanup
            return Err(Error::Storage(format!("cannot write {}: {}", path.display(), e)));
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Storage(format!("cannot remove {}: {}", path.display(), e))),
        }
    }
}

// =============================================================================
// IN-MEMORY BACKEND
// =============================================================================

/// Process-local store.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the size of any single stored value.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota_bytes = Some(bytes);
        self
    }

    /// Pre-populate a key, bypassing the quota.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.get_mut().insert(key.into(), value.into());
        self
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        check_quota(key, value, self.quota_bytes)?;
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
