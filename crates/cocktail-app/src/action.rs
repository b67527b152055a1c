//! Actions and the pure state transition.
//!
//! [`reduce`] applies one [`Action`] to a [`CatalogState`] and reports the
//! I/O it requires as [`Effect`]s. It performs no I/O itself; the runtime in
//! [`crate::runtime`] executes the effects.

use cocktail_core::{Error, MatchMode, RecipeDraft, RecipeId, Result, Selection};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::CatalogState;

/// Everything a user can do to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    SetSearch(String),
    SelectFamily(Selection),
    SelectType(Selection),
    SetMinScore(f64),
    ToggleIngredient(String),
    SetMatchMode(MatchMode),
    ToggleFilterPanel,
    ClearFilters,
    CreateRecipe(RecipeDraft),
    UpdateRecipe { id: RecipeId, draft: RecipeDraft },
    /// Removal only happens once the user has confirmed it.
    DeleteRecipe { id: RecipeId, confirmed: bool },
}

/// I/O requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Write the full collection to storage.
    Persist,
}

/// What a transition did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Change {
    Created(RecipeId),
    Updated(RecipeId),
    Deleted(RecipeId),
}

/// Result of applying one action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transition {
    pub change: Option<Change>,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged() -> Self {
        Self::default()
    }

    fn mutated(change: Change) -> Self {
        Self {
            change: Some(change),
            effects: vec![Effect::Persist],
        }
    }
}

/// Apply `action` to `state`.
///
/// Filter actions refilter; collection actions also reindex and request a
/// persist. An invalid draft returns `Error::InvalidInput` and leaves the
/// state untouched. Updating or deleting an unknown id is a no-op.
pub fn reduce(state: &mut CatalogState, action: Action) -> Result<Transition> {
    debug!(action = action_name(&action), "Reducing action");

    match action {
        Action::SetSearch(term) => {
            state.criteria.search = term;
            state.refilter();
        }
        Action::SelectFamily(selection) => {
            state.criteria.family = selection;
            state.refilter();
        }
        Action::SelectType(selection) => {
            state.criteria.kind = selection;
            state.refilter();
        }
        Action::SetMinScore(score) => {
            if score.is_nan() {
                return Err(Error::InvalidInput("minimum score must be a number".to_string()));
            }
            state.criteria.min_score = score;
            state.refilter();
        }
        Action::ToggleIngredient(name) => {
            state.criteria.toggle_ingredient(&name);
            state.refilter();
        }
        Action::SetMatchMode(mode) => {
            state.criteria.match_mode = mode;
            state.refilter();
        }
        Action::ToggleFilterPanel => {
            state.criteria.show_panel = !state.criteria.show_panel;
        }
        Action::ClearFilters => {
            state.criteria.clear();
            state.refilter();
        }
        Action::CreateRecipe(draft) => {
            draft.validate()?;
            let id = state.collection.create(draft)?;
            after_mutation(state);
            return Ok(Transition::mutated(Change::Created(id)));
        }
        Action::UpdateRecipe { id, draft } => {
            if !state.collection.contains(id) {
                debug!(recipe_id = %id, "Update ignored, recipe not found");
                return Ok(Transition::unchanged());
            }
            draft.validate()?;
            state.collection.update(id, draft);
            after_mutation(state);
            return Ok(Transition::mutated(Change::Updated(id)));
        }
        Action::DeleteRecipe { id, confirmed } => {
            if !confirmed {
                debug!(recipe_id = %id, "Delete not confirmed");
                return Ok(Transition::unchanged());
            }
            if !state.collection.remove(id) {
                debug!(recipe_id = %id, "Delete ignored, recipe not found");
                return Ok(Transition::unchanged());
            }
            after_mutation(state);
            return Ok(Transition::mutated(Change::Deleted(id)));
        }
    }

    Ok(Transition::unchanged())
}

fn after_mutation(state: &mut CatalogState) {
    state.reindex();
    state.refilter();
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::SetSearch(_) => "set_search",
        Action::SelectFamily(_) => "select_family",
        Action::SelectType(_) => "select_type",
        Action::SetMinScore(_) => "set_min_score",
        Action::ToggleIngredient(_) => "toggle_ingredient",
        Action::SetMatchMode(_) => "set_match_mode",
        Action::ToggleFilterPanel => "toggle_filter_panel",
        Action::ClearFilters => "clear_filters",
        Action::CreateRecipe(_) => "create_recipe",
        Action::UpdateRecipe { .. } => "update_recipe",
        Action::DeleteRecipe { .. } => "delete_recipe",
    }
}
