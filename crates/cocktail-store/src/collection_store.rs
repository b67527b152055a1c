//! Loading and persisting the recipe collection.
//!
//! Load order on startup:
//! 1. Persisted storage (the collection written by the last session)
//! 2. Seed document, cached into storage on success
//! 3. Built-in fallback recipes
//!
//! Every path yields a populated [`Collection`]; failures are logged, never
//! returned. Persisting, on the other hand, returns its error so the caller
//! can tell the user their change was not saved.

use cocktail_core::{
    defaults, fetch_json, Collection, DocumentSource, KeyValueStore, Result,
};
use std::fmt;
use tracing::{debug, error, info, warn};

use crate::fallback::builtin_collection;

/// Where a loaded collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    Storage,
    Seed,
    BuiltIn,
}

impl fmt::Display for LoadOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage => write!(f, "storage"),
            Self::Seed => write!(f, "seed"),
            Self::BuiltIn => write!(f, "builtin"),
        }
    }
}

/// A collection together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedCollection {
    pub collection: Collection,
    pub origin: LoadOrigin,
}

/// Persistence of the full collection under a single storage key.
pub struct CollectionStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CollectionStore<S> {
    /// Create a store persisting under [`defaults::STORAGE_KEY`].
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: defaults::STORAGE_KEY.to_string(),
        }
    }

    /// Use a different storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Load the collection, falling back as described in the module docs.
    pub async fn load<D>(&self, seed: &D) -> LoadedCollection
    where
        D: DocumentSource + ?Sized,
    {
        let loaded = match self.store.get(&self.key).await {
            Ok(Some(text)) if !text.trim().is_empty() => self.load_stored(&text),
            Ok(_) => {
                debug!(storage_key = %self.key, "Nothing persisted, trying seed document");
                self.load_seed(seed).await
            }
            Err(e) => {
                error!(storage_key = %self.key, error = %e, "Persisted storage unreadable");
                builtin()
            }
        };
        info!(
            origin = %loaded.origin,
            recipe_count = loaded.collection.len(),
            "Collection loaded"
        );
        loaded
    }

    /// Serialize the full collection and overwrite the storage key.
    pub async fn persist(&self, collection: &Collection) -> Result<()> {
        let text = serde_json::to_string(collection)?;
        match self.store.set(&self.key, &text).await {
            Ok(()) => {
                debug!(
                    storage_key = %self.key,
                    recipe_count = collection.len(),
                    bytes = text.len(),
                    "Collection persisted"
                );
                Ok(())
            }
            Err(e) => {
                error!(storage_key = %self.key, error = %e, "Failed to persist collection");
                Err(e)
            }
        }
    }

    fn load_stored(&self, text: &str) -> LoadedCollection {
        match serde_json::from_str::<Collection>(text) {
            Ok(collection) => LoadedCollection {
                collection,
                origin: LoadOrigin::Storage,
            },
            Err(e) => {
                // Left in place: a later successful persist overwrites it.
                error!(storage_key = %self.key, error = %e, "Persisted collection is corrupt");
                builtin()
            }
        }
    }

    async fn load_seed<D>(&self, seed: &D) -> LoadedCollection
    where
        D: DocumentSource + ?Sized,
    {
        match fetch_json::<Collection, D>(seed).await {
            Ok(collection) => {
                if let Err(e) = self.persist(&collection).await {
                    warn!(error = %e, "Could not cache seed collection, continuing in memory");
                }
                LoadedCollection {
                    collection,
                    origin: LoadOrigin::Seed,
                }
            }
            Err(e) => {
                warn!(
                    source = %seed.describe(),
                    error = %e,
                    "Seed document unavailable, using built-in recipes"
                );
                builtin()
            }
        }
    }
}

fn builtin() -> LoadedCollection {
    LoadedCollection {
        collection: builtin_collection(),
        origin: LoadOrigin::BuiltIn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKeyValueStore;
    use crate::sources::StaticSource;
    use cocktail_core::{RecipeDraft, RecipeId};

    const SEED: &str = r#"[
        {"id": 1, "nombre": "Daiquiri", "tipo": "Refrescante", "familia": "Clásicos", "puntaje": 8},
        {"id": 4, "nombre": "Negroni", "tipo": "Aperitivo", "familia": "Clásicos", "puntaje": 9}
    ]"#;

    #[tokio::test]
    async fn test_seed_used_and_cached_when_storage_empty() {
        let store = CollectionStore::new(MemoryKeyValueStore::new());
        let seed = StaticSource::new("cocktails.json", SEED);

        let loaded = store.load(&seed).await;
        assert_eq!(loaded.origin, LoadOrigin::Seed);
        assert_eq!(loaded.collection.len(), 2);

        let cached = store.backend().get("cocktails").await.unwrap();
        assert!(cached.is_some());
    }

    #[tokio::test]
    async fn test_storage_preferred_over_seed() {
        let store = CollectionStore::new(MemoryKeyValueStore::new());
        let mut collection = Collection::new();
        collection.create(RecipeDraft::new("Sazerac").with_score(8.0)).unwrap();
        store.persist(&collection).await.unwrap();

        let seed = StaticSource::new("cocktails.json", SEED);
        let loaded = store.load(&seed).await;
        assert_eq!(loaded.origin, LoadOrigin::Storage);
        assert_eq!(loaded.collection, collection);
    }

    #[tokio::test]
    async fn test_builtin_when_everything_fails() {
        let store = CollectionStore::new(MemoryKeyValueStore::new());
        let seed = StaticSource::unavailable("cocktails.json", "HTTP error! status: 500");

        let loaded = store.load(&seed).await;
        assert_eq!(loaded.origin, LoadOrigin::BuiltIn);
        assert_eq!(loaded.collection.len(), 2);
        // Fallback data is not cached.
        assert_eq!(store.backend().get("cocktails").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_storage_falls_back_without_overwrite() {
        let backend = MemoryKeyValueStore::new().with_entry("cocktails", "[{broken");
        let store = CollectionStore::new(backend);
        let seed = StaticSource::new("cocktails.json", SEED);

        let loaded = store.load(&seed).await;
        assert_eq!(loaded.origin, LoadOrigin::BuiltIn);
        assert_eq!(
            store.backend().get("cocktails").await.unwrap().as_deref(),
            Some("[{broken")
        );
    }

    #[tokio::test]
    async fn test_blank_storage_treated_as_absent() {
        let store = CollectionStore::new(MemoryKeyValueStore::new().with_entry("cocktails", "  "));
        let seed = StaticSource::new("cocktails.json", SEED);

        let loaded = store.load(&seed).await;
        assert_eq!(loaded.origin, LoadOrigin::Seed);
        assert!(loaded.collection.contains(RecipeId(4)));
    }

    #[tokio::test]
    async fn test_bad_record_does_not_discard_stored_collection() {
        let stored = r#"[
            {"id": 1, "nombre": "Mojito", "tipo": "Refrescante", "familia": "Clásicos", "puntaje": 8.5},
            {"id": 2, "nombre": "Pisco Sour", "puntaje": null,
             "ingredientes": [{"cantidad": 4, "unidad": "cl", "nombre": "Pisco"}]},
            {"id": 3, "familia": "Tropicales"},
            {"id": 7, "nombre": "Zombie", "tipo": "Refrescante", "familia": "Tropicales", "puntaje": 7}
        ]"#;
        let store = CollectionStore::new(MemoryKeyValueStore::new().with_entry("cocktails", stored));
        let seed = StaticSource::new("cocktails.json", SEED);

        let loaded = store.load(&seed).await;
        assert_eq!(loaded.origin, LoadOrigin::Storage);
        let names: Vec<&str> = loaded.collection.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Mojito", "Pisco Sour", "Zombie"]);

        // Persisting again keeps every readable record.
        store.persist(&loaded.collection).await.unwrap();
        let reloaded = store.load(&seed).await;
        assert_eq!(reloaded.collection, loaded.collection);
        assert!(reloaded.collection.contains(RecipeId(7)));
    }

    #[tokio::test]
    async fn test_seed_kept_when_cache_write_fails() {
        let store = CollectionStore::new(MemoryKeyValueStore::new().with_quota(8));
        let seed = StaticSource::new("cocktails.json", SEED);

        let loaded = store.load(&seed).await;
        assert_eq!(loaded.origin, LoadOrigin::Seed);
        assert!(loaded.collection.contains(RecipeId(4)));
    }

    #[tokio::test]
    async fn test_custom_key() {
        let store = CollectionStore::new(MemoryKeyValueStore::new()).with_key("bar");
        store.persist(&Collection::new()).await.unwrap();
        assert_eq!(store.key(), "bar");
        assert_eq!(store.backend().get("bar").await.unwrap().as_deref(), Some("[]"));
    }
}
