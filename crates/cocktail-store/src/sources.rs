//! Document sources for configuration and seed datasets.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cocktail_store::sources::source_from_location;
//!
//! let config = source_from_location("https://example.com/config.json", 10)?;
//! let seed = source_from_location("./cocktails.json", 10)?;
//! ```

use async_trait::async_trait;
use cocktail_core::{DocumentSource, Error, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

// =============================================================================
// FILE SOURCE
// =============================================================================

/// Document read from the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        debug!(source = %self.path.display(), "file_source: read");
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| Error::Source(format!("{}: {}", self.path.display(), e)))
    }
}

// =============================================================================
// HTTP SOURCE
// =============================================================================

/// Document retrieved with an HTTP GET.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Create a source for `url` with a request timeout.
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        debug!(source = %self.url, "http_source: GET");
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Source(format!(
                "HTTP error! status: {}",
                status.as_u16()
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

// =============================================================================
// STATIC SOURCE
// =============================================================================

/// Document held in memory, or a source that is known to be unavailable.
///
/// Useful for bundling a dataset into the binary with `include_bytes!` and
/// for exercising fallback paths.
pub struct StaticSource {
    name: String,
    content: std::result::Result<Vec<u8>, String>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: Ok(bytes.into()),
        }
    }

    /// A source whose every fetch fails with `reason`.
    pub fn unavailable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Err(reason.into()),
        }
    }
}

#[async_trait]
impl DocumentSource for StaticSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        self.content.clone().map_err(Error::Source)
    }
}

// =============================================================================
// LOCATION PARSING
// =============================================================================

/// Build a source from a location string: `http://` and `https://` URLs are
/// fetched over HTTP, anything else is a filesystem path.
pub fn source_from_location(location: &str, timeout_secs: u64) -> Result<Box<dyn DocumentSource>> {
    if location.trim().is_empty() {
        return Err(Error::Config("document location cannot be empty".to_string()));
    }
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, timeout_secs)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}
