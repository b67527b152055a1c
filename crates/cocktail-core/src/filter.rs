//! Filter engine for the recipe collection.
//!
//! [`FilterCriteria`] composes every filtering dimension the catalog offers:
//!
//! - **Search**: case-insensitive substring match on the recipe name
//! - **Family / Type**: exact label match, or the `all` wildcard
//! - **Score**: minimum score threshold (inclusive)
//! - **Ingredients**: flexible (any overlap) or strict (exact set) matching
//!
//! A recipe is kept only when every dimension matches. Filtering is a pure
//! function of the collection and the criteria and always re-runs in full.
//!
//! # Example
//!
//! ```
//! use cocktail_core::{Collection, FilterCriteria, MatchMode, RecipeDraft};
//!
//! let mut collection = Collection::new();
//! collection.create(RecipeDraft::new("Margarita").with_family("Clásicos").with_score(9.0)).unwrap();
//! collection.create(RecipeDraft::new("Mojito").with_family("Clásicos").with_score(8.5)).unwrap();
//!
//! let criteria = FilterCriteria::new()
//!     .in_family("Clásicos")
//!     .with_min_score(9.0)
//!     .with_match_mode(MatchMode::Strict);
//!
//! let names: Vec<&str> = criteria.apply(&collection).iter().map(|r| r.name.as_str()).collect();
//! assert_eq!(names, vec!["Margarita"]);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::collection::Collection;
use crate::defaults;
use crate::models::Recipe;

// =============================================================================
// SELECTION
// =============================================================================

/// A single-valued select control: the wildcard or one label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn only(label: impl Into<String>) -> Self {
        Selection::Only(label.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Whether `value` passes this selection.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(label) => label == value,
        }
    }
}

impl From<String> for Selection {
    fn from(s: String) -> Self {
        if s == defaults::SELECT_ALL {
            Selection::All
        } else {
            Selection::Only(s)
        }
    }
}

impl From<&str> for Selection {
    fn from(s: &str) -> Self {
        Selection::from(s.to_string())
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => defaults::SELECT_ALL.to_string(),
            Selection::Only(label) => label,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(defaults::SELECT_ALL),
            Selection::Only(label) => f.write_str(label),
        }
    }
}

// =============================================================================
// MATCH MODE
// =============================================================================

/// How selected ingredients are compared with a recipe's ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// At least one selected ingredient appears in the recipe.
    #[default]
    Flexible,
    /// The recipe's ingredient set equals the selected set exactly.
    /// A recipe using extra ingredients does not match.
    Strict,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Flexible => write!(f, "flexible"),
            MatchMode::Strict => write!(f, "strict"),
        }
    }
}

// =============================================================================
// FILTER CRITERIA
// =============================================================================

/// Session-only filter state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Substring searched in recipe names (case-insensitive).
    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub family: Selection,

    #[serde(default)]
    pub kind: Selection,

    /// Recipes scoring below this are excluded.
    #[serde(default)]
    pub min_score: f64,

    /// Selected ingredient names, in selection order, without duplicates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub match_mode: MatchMode,

    /// Whether the filter panel is shown. Not a filtering dimension.
    #[serde(default)]
    pub show_panel: bool,
}

impl FilterCriteria {
    /// Create empty criteria (matches every recipe).
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // BUILDER METHODS
    // =========================================================================

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn in_family(mut self, family: impl Into<String>) -> Self {
        self.family = Selection::from(family.into());
        self
    }

    pub fn of_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Selection::from(kind.into());
        self
    }

    pub fn with_min_score(mut self, score: f64) -> Self {
        self.min_score = score;
        self
    }

    pub fn with_ingredient(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.ingredients.contains(&name) {
            self.ingredients.push(name);
        }
        self
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    // =========================================================================
    // MUTATORS
    // =========================================================================

    /// Select `name` if unselected, otherwise unselect it.
    pub fn toggle_ingredient(&mut self, name: &str) {
        if let Some(pos) = self.ingredients.iter().position(|i| i == name) {
            self.ingredients.remove(pos);
        } else {
            self.ingredients.push(name.to_string());
        }
    }

    /// Reset every filtering dimension. Panel visibility is kept.
    pub fn clear(&mut self) {
        *self = Self {
            show_panel: self.show_panel,
            min_score: defaults::MIN_SCORE_THRESHOLD,
            ..Self::default()
        };
    }

    // =========================================================================
    // CONSTRAINT CHECKS
    // =========================================================================

    /// Check whether no dimension constrains the result.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.family.is_all()
            && self.kind.is_all()
            && self.min_score <= defaults::MIN_SCORE_THRESHOLD
            && self.ingredients.is_empty()
    }

    /// Number of dimensions currently narrowing the result.
    pub fn active_dimension_count(&self) -> usize {
        [
            !self.search.is_empty(),
            !self.family.is_all(),
            !self.kind.is_all(),
            self.min_score > defaults::MIN_SCORE_THRESHOLD,
            !self.ingredients.is_empty(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    // =========================================================================
    // MATCHING
    // =========================================================================

    /// Check a single recipe against every dimension.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.prepared().matches(recipe)
    }

    /// Recipes matching the criteria, in collection order.
    pub fn apply<'a>(&self, collection: &'a Collection) -> Vec<&'a Recipe> {
        let prepared = self.prepared();
        collection.iter().filter(|r| prepared.matches(r)).collect()
    }

    fn prepared(&self) -> PreparedCriteria<'_> {
        PreparedCriteria {
            criteria: self,
            search: self.search.to_lowercase(),
            selected: self.ingredients.iter().map(String::as_str).collect(),
        }
    }
}

/// Criteria with per-run work (lowercasing, set building) done once.
struct PreparedCriteria<'c> {
    criteria: &'c FilterCriteria,
    search: String,
    selected: BTreeSet<&'c str>,
}

impl PreparedCriteria<'_> {
    fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_name(recipe)
            && self.criteria.family.accepts(&recipe.family)
            && self.criteria.kind.accepts(&recipe.kind)
            && recipe.score >= self.criteria.min_score
            && self.matches_ingredients(recipe)
    }

    fn matches_name(&self, recipe: &Recipe) -> bool {
        self.search.is_empty() || recipe.name.to_lowercase().contains(&self.search)
    }

    fn matches_ingredients(&self, recipe: &Recipe) -> bool {
        if self.selected.is_empty() {
            return true;
        }
        let names = recipe.ingredient_name_set();
        match self.criteria.match_mode {
            MatchMode::Flexible => self.selected.iter().any(|s| names.contains(s)),
            MatchMode::Strict => names == self.selected,
        }
    }
}
