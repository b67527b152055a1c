//! # cocktail-core
//!
//! Core types, traits, and pure logic for the cocktail catalog.
//!
//! This crate provides the recipe data model (with legacy ingredient
//! normalization), the in-memory collection, the derived index, and the
//! filter engine. I/O backends live in `cocktail-store`; application state
//! and dispatch live in `cocktail-app`.

pub mod collection;
pub mod defaults;
pub mod error;
pub mod filter;
pub mod image;
pub mod index;
pub mod models;
pub mod traits;
pub mod vocabulary;

// Re-export commonly used types at crate root
pub use collection::Collection;
pub use error::{Error, Result};
pub use filter::{FilterCriteria, MatchMode, Selection};
pub use image::{validate_image, ImageRef, ImageUpload};
pub use index::DerivedIndex;
pub use models::*;
pub use traits::*;
pub use vocabulary::{Vocabulary, VocabularyOrigin};
