//! Catalog runtime.
//!
//! Owns the [`CatalogState`] and the [`CollectionStore`], runs the startup
//! sequence, and executes the effects produced by [`reduce`].

use cocktail_core::{DocumentSource, KeyValueStore, Result};
use cocktail_store::{load_vocabulary, CollectionStore, FileKeyValueStore, LoadOrigin};
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

use crate::action::{reduce, Action, Change, Effect};
use crate::config::AppConfig;
use crate::state::CatalogState;

/// User-facing message produced while executing effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Notice {
    /// The change is applied in memory but was not written to storage.
    SaveFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SaveFailed(reason) => write!(
                f,
                "Error al guardar los datos. Por favor, inténtalo de nuevo. ({})",
                reason
            ),
        }
    }
}

/// Outcome of a dispatched action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dispatched {
    pub change: Option<Change>,
    pub notices: Vec<Notice>,
}

/// A running catalog over a key-value backend.
pub struct Catalog<S> {
    state: CatalogState,
    store: CollectionStore<S>,
    load_origin: LoadOrigin,
}

impl<S: KeyValueStore> Catalog<S> {
    /// Load the vocabulary, then the collection, and build the initial state.
    ///
    /// Never fails: each step falls back to built-in data.
    pub async fn start<C, D>(config: &C, seed: &D, store: CollectionStore<S>) -> Self
    where
        C: DocumentSource + ?Sized,
        D: DocumentSource + ?Sized,
    {
        let (vocabulary, vocabulary_origin) = load_vocabulary(config).await;
        let loaded = store.load(seed).await;
        let state = CatalogState::new(vocabulary, vocabulary_origin, loaded.collection);

        info!(
            vocabulary_origin = %vocabulary_origin,
            collection_origin = %loaded.origin,
            recipe_count = state.collection().len(),
            "Catalog started"
        );

        Self {
            state,
            store,
            load_origin: loaded.origin,
        }
    }

    /// Apply an action and execute its effects.
    ///
    /// Validation failures are returned as errors with the state untouched.
    /// A failed save is reported as [`Notice::SaveFailed`]; the in-memory
    /// change is kept.
    pub async fn dispatch(&mut self, action: Action) -> Result<Dispatched> {
        let transition = reduce(&mut self.state, action)?;

        let mut notices = Vec::new();
        for effect in transition.effects {
            match effect {
                Effect::Persist => {
                    if let Err(e) = self.store.persist(self.state.collection()).await {
                        warn!(error = %e, "Change kept in memory only");
                        notices.push(Notice::SaveFailed(e.to_string()));
                    }
                }
            }
        }

        if let Some(change) = transition.change {
            info!(change = ?change, saved = notices.is_empty(), "Collection changed");
        }

        Ok(Dispatched {
            change: transition.change,
            notices,
        })
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Where the collection came from at startup.
    pub fn load_origin(&self) -> LoadOrigin {
        self.load_origin
    }

    pub fn store(&self) -> &CollectionStore<S> {
        &self.store
    }
}

impl Catalog<FileKeyValueStore> {
    /// Start a file-backed catalog from configuration.
    pub async fn open(config: &AppConfig) -> Result<Self> {
        let config_document = config.config_document()?;
        let seed_document = config.seed_document()?;
        let store = CollectionStore::new(config.file_store()).with_key(config.storage_key.clone());
        Ok(Self::start(&*config_document, &*seed_document, store).await)
    }
}
