//! The authoritative in-memory recipe collection.
//!
//! All mutations go through [`Collection::create`], [`Collection::update`]
//! and [`Collection::remove`], which keep identifiers unique. Persistence is
//! the caller's concern; see `cocktail_store::CollectionStore`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

use crate::error::{Error, Result};
use crate::models::{Recipe, RecipeDraft, RecipeId};

/// Ordered list of recipes with unique identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Collection {
    recipes: Vec<Recipe>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from loaded records.
    ///
    /// Records repeating an earlier identifier are dropped so the
    /// uniqueness invariant holds for whatever storage handed us.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let mut seen = HashSet::with_capacity(recipes.len());
        let mut kept = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            if seen.insert(recipe.id) {
                kept.push(recipe);
            } else {
                warn!(recipe_id = %recipe.id, name = %recipe.name, "Dropping recipe with duplicate id");
            }
        }
        Self { recipes: kept }
    }

    /// Build a collection from raw JSON records, one at a time.
    ///
    /// A record that does not parse is dropped with a warning; the rest of
    /// the collection survives.
    pub fn from_records(records: Vec<serde_json::Value>) -> Self {
        let total = records.len();
        let recipes: Vec<Recipe> = records
            .into_iter()
            .enumerate()
            .filter_map(|(position, record)| match serde_json::from_value::<Recipe>(record) {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    warn!(position, error = %e, "Dropping unreadable recipe record");
                    None
                }
            })
            .collect();
        if recipes.len() < total {
            warn!(
                kept = recipes.len(),
                dropped = total - recipes.len(),
                "Collection loaded partially"
            );
        }
        Self::from_recipes(recipes)
    }

    /// Identifier the next created recipe receives: `max(ids ∪ {0}) + 1`.
    ///
    /// `None` once the largest identifier is `u64::MAX`.
    pub fn next_id(&self) -> Option<RecipeId> {
        let max = self.recipes.iter().map(|r| r.id.0).max().unwrap_or(0);
        max.checked_add(1).map(RecipeId)
    }

    /// Append a new recipe and return its identifier.
    pub fn create(&mut self, draft: RecipeDraft) -> Result<RecipeId> {
        let id = self
            .next_id()
            .ok_or_else(|| Error::InvalidInput("recipe identifiers exhausted".to_string()))?;
        self.recipes.push(draft.into_recipe(id));
        Ok(id)
    }

    /// Replace the recipe with `id` in place. Returns `false` if absent.
    pub fn update(&mut self, id: RecipeId, draft: RecipeDraft) -> bool {
        match self.recipes.iter_mut().find(|r| r.id == id) {
            Some(slot) => {
                *slot = draft.into_recipe(id);
                true
            }
            None => false,
        }
    }

    /// Remove the recipe with `id`. Returns `false` if absent.
    pub fn remove(&mut self, id: RecipeId) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        self.recipes.len() != before
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<serde_json::Value>::deserialize(deserializer).map(Collection::from_records)
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
