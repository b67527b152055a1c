//! Derived index: sorted distinct families, types, and ingredient names.
//!
//! The index is a projection of a [`Collection`] and carries no data of
//! its own. It becomes stale after any mutation and must be rebuilt with
//! [`DerivedIndex::build`] before filter controls are repopulated.

use std::collections::BTreeSet;

use crate::collection::Collection;

/// Distinct values present in the collection, each list sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedIndex {
    pub families: Vec<String>,
    pub types: Vec<String>,
    pub ingredients: Vec<String>,
}

impl DerivedIndex {
    pub fn build(collection: &Collection) -> Self {
        let mut families = BTreeSet::new();
        let mut types = BTreeSet::new();
        let mut ingredients = BTreeSet::new();

        for recipe in collection {
            families.insert(recipe.family.as_str());
            types.insert(recipe.kind.as_str());
            ingredients.extend(recipe.ingredient_names());
        }

        Self {
            families: owned(families),
            types: owned(types),
            ingredients: owned(ingredients),
        }
    }
}

fn owned(set: BTreeSet<&str>) -> Vec<String> {
    set.into_iter().map(str::to_owned).collect()
}
