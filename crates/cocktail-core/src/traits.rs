//! Core traits for catalog I/O.
//!
//! These traits define the seams between the pure catalog logic and the
//! outside world, enabling pluggable backends and testability.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::error::Result;

// =============================================================================
// PERSISTED STORAGE
// =============================================================================

/// String key-value store holding persisted catalog state.
///
/// Writes are treated as atomic: a call either replaces the value or fails
/// leaving the previous value in place.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` if never written.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<()>;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key).await
    }
}

// =============================================================================
// DOCUMENT SOURCES
// =============================================================================

/// A retrievable document (configuration or seed dataset).
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable location, used in logs.
    fn describe(&self) -> String;

    /// Retrieve the raw document bytes.
    async fn fetch(&self) -> Result<Vec<u8>>;
}

/// Retrieve a document and parse it as JSON.
pub async fn fetch_json<T, S>(source: &S) -> Result<T>
where
    T: DeserializeOwned,
    S: DocumentSource + ?Sized,
{
    let bytes = source.fetch().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
