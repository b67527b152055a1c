//! Tracing subscriber setup.
//!
//! Environment variables:
//!   LOG_FORMAT  - "json" or "text" (default: "text")
//!   LOG_FILE    - path to log file (optional, enables file logging)
//!   LOG_ANSI    - "true"/"false" override ANSI colors (auto-detected by default)
//!   RUST_LOG    - standard env filter (default: "cocktail_app=info,cocktail_store=info,cocktail_core=info")

use cocktail_core::{Error, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "cocktail_app=info,cocktail_store=info,cocktail_core=info";

const DEFAULT_LOG_FILE_NAME: &str = "cocktail-catalog.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Output settings read from `LOG_*` variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogSettings {
    pub format: LogFormat,
    pub file: Option<PathBuf>,
    pub ansi: Option<bool>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let file = lookup("LOG_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let ansi = lookup("LOG_ANSI").map(|v| v == "true" || v == "1");
        Self { format, file, ansi }
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the process. Fails if a subscriber is already installed.
pub fn init_tracing(settings: &LogSettings) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(env_filter);

    let guard = if let Some(ref path) = settings.file {
        let file_dir = path.parent().unwrap_or(Path::new("."));
        let file_name = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(DEFAULT_LOG_FILE_NAME);
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        match settings.format {
            LogFormat::Json => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .try_init(),
            LogFormat::Text => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        // no ANSI in files unless asked for
                        .with_ansi(settings.ansi.unwrap_or(false)),
                )
                .try_init(),
        }
        .map_err(|e| Error::Config(format!("tracing already initialised: {}", e)))?;
        Some(guard)
    } else {
        match settings.format {
            LogFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init(),
            LogFormat::Text => {
                let mut layer = tracing_subscriber::fmt::layer();
                if let Some(ansi) = settings.ansi {
                    layer = layer.with_ansi(ansi);
                }
                registry.with(layer).try_init()
            }
        }
        .map_err(|e| Error::Config(format!("tracing already initialised: {}", e)))?;
        None
    };

    tracing::info!(
        format = ?settings.format,
        file = ?settings.file,
        "Tracing initialised"
    );
    Ok(guard)
}
