//! Explicit application state.
//!
//! Everything the catalog knows lives in one [`CatalogState`] value that is
//! passed to [`crate::action::reduce`]; there is no hidden global.

use cocktail_core::{
    Collection, DerivedIndex, Error, FilterCriteria, Recipe, RecipeDraft, RecipeId, Result,
    Vocabulary, VocabularyOrigin,
};
use tracing::debug;

/// Vocabulary, collection, derived index, filter criteria, and the current
/// filtered view.
#[derive(Debug, Clone)]
pub struct CatalogState {
    vocabulary: Vocabulary,
    vocabulary_origin: VocabularyOrigin,
    pub(crate) collection: Collection,
    index: DerivedIndex,
    pub(crate) criteria: FilterCriteria,
    visible: Vec<RecipeId>,
}

impl CatalogState {
    /// Build state from loaded data with cleared filters.
    pub fn new(vocabulary: Vocabulary, vocabulary_origin: VocabularyOrigin, collection: Collection) -> Self {
        let mut state = Self {
            vocabulary,
            vocabulary_origin,
            collection,
            index: DerivedIndex::default(),
            criteria: FilterCriteria::new(),
            visible: Vec::new(),
        };
        state.reindex();
        state.refilter();
        state
    }

    // =========================================================================
    // DERIVED DATA
    // =========================================================================

    /// Rebuild the derived index. Required after every collection mutation.
    pub(crate) fn reindex(&mut self) {
        self.index = DerivedIndex::build(&self.collection);
    }

    /// Re-run the filter engine over the whole collection.
    pub(crate) fn refilter(&mut self) {
        self.visible = self
            .criteria
            .apply(&self.collection)
            .into_iter()
            .map(|r| r.id)
            .collect();
        debug!(
            result_count = self.visible.len(),
            recipe_count = self.collection.len(),
            "Filters applied"
        );
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn vocabulary_origin(&self) -> VocabularyOrigin {
        self.vocabulary_origin
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn index(&self) -> &DerivedIndex {
        &self.index
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.collection.get(id)
    }

    /// Prefilled form contents for editing an existing recipe.
    pub fn edit_draft(&self, id: RecipeId) -> Result<RecipeDraft> {
        self.collection
            .get(id)
            .map(Recipe::to_draft)
            .ok_or(Error::RecipeNotFound(id))
    }

    /// Ids of recipes passing the current filters, in collection order.
    pub fn visible_ids(&self) -> &[RecipeId] {
        &self.visible
    }

    /// Recipes passing the current filters, in collection order.
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        self.visible
            .iter()
            .filter_map(|id| self.collection.get(*id))
            .collect()
    }

    /// "N cóctel(es) encontrado(s)" style counter text.
    pub fn result_summary(&self) -> String {
        let n = self.visible.len();
        if n == 1 {
            "1 cóctel encontrado".to_string()
        } else {
            format!("{} cócteles encontrados", n)
        }
    }
}
