//! # cocktail-app
//!
//! Application layer of the cocktail catalog: explicit state, user actions
//! with a pure transition function, and the runtime that loads data on
//! startup and persists changes.
//!
//! ```rust,no_run
//! use cocktail_app::{Action, AppConfig, Catalog};
//!
//! # async fn run() -> cocktail_app::cocktail_core::Result<()> {
//! let config = AppConfig::from_env();
//! let mut catalog = Catalog::open(&config).await?;
//! catalog.dispatch(Action::SetSearch("mojito".into())).await?;
//! for recipe in catalog.state().visible_recipes() {
//!     println!("{} ({})", recipe.name, recipe.score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod config;
pub mod runtime;
pub mod state;
pub mod telemetry;

pub use action::{reduce, Action, Change, Effect, Transition};
pub use config::AppConfig;
pub use runtime::{Catalog, Dispatched, Notice};
pub use state::CatalogState;
pub use telemetry::{init_tracing, LogFormat, LogSettings};

// Re-export lower layers for convenience
pub use cocktail_core;
pub use cocktail_store;
