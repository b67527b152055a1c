//! # cocktail-store
//!
//! Persistence and document retrieval for the cocktail catalog.
//!
//! Provides key-value store backends, configuration and seed document
//! sources, and the collection store that loads (with fallbacks) and
//! persists the recipe collection.

pub mod collection_store;
pub mod fallback;
pub mod kv;
pub mod sources;
pub mod vocabulary_loader;

pub use collection_store::{CollectionStore, LoadOrigin, LoadedCollection};
pub use fallback::builtin_collection;
pub use kv::{FileKeyValueStore, MemoryKeyValueStore};
pub use sources::{source_from_location, FileSource, HttpSource, StaticSource};
pub use vocabulary_loader::load_vocabulary;

// Re-export core for convenience
pub use cocktail_core;
