//! Centralized default constants for the cocktail catalog.
//!
//! All crates reference these constants instead of defining their own
//! magic values.

// =============================================================================
// STORAGE
// =============================================================================

/// Key under which the full collection is persisted.
pub const STORAGE_KEY: &str = "cocktails";

/// Directory used by the file-backed key-value store.
pub const DATA_DIR: &str = "./data";

// =============================================================================
// SOURCES
// =============================================================================

/// Location of the vocabulary configuration document.
pub const CONFIG_SOURCE: &str = "./config.json";

/// Location of the seed recipe dataset.
pub const SEED_SOURCE: &str = "./cocktails.json";

/// Timeout for HTTP document retrieval in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// RECIPES
// =============================================================================

/// Image shown for recipes without their own picture.
pub const PLACEHOLDER_IMAGE: &str = "/colorful-cocktail-drink.jpg";

/// Lowest allowed score.
pub const SCORE_MIN: f64 = 0.0;

/// Highest allowed score.
pub const SCORE_MAX: f64 = 10.0;

/// Score prefilled in a blank recipe form.
pub const DRAFT_SCORE: f64 = 5.0;

/// Largest accepted image upload (5 MiB).
pub const IMAGE_MAX_BYTES: usize = 5 * 1024 * 1024;

// =============================================================================
// FILTERS
// =============================================================================

/// Wildcard value for family/type selections.
pub const SELECT_ALL: &str = "all";

/// Minimum score threshold of a cleared filter.
pub const MIN_SCORE_THRESHOLD: f64 = 0.0;
