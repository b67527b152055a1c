//! Core data models for the cocktail catalog.
//!
//! Field names on the wire follow the catalog's JSON documents (`nombre`,
//! `tipo`, `familia`, ...) so that persisted collections and seed datasets
//! round-trip unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::{Error, Result};
use crate::image::{ImageRef, ImageUpload};

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Unique, monotonically assigned recipe identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// INGREDIENTS
// =============================================================================

/// Measurement unit of an ingredient line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "oz")]
    Ounce,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "gotas")]
    Drop,
    #[serde(rename = "dash")]
    Dash,
    #[serde(rename = "cucharada")]
    Tablespoon,
    #[serde(rename = "cucharadita")]
    Teaspoon,
    #[serde(rename = "taza")]
    Cup,
    #[serde(rename = "pizca")]
    Pinch,
}

impl Unit {
    /// Every unit, in the order forms present them.
    pub const ALL: [Unit; 8] = [
        Unit::Ounce,
        Unit::Milliliter,
        Unit::Drop,
        Unit::Dash,
        Unit::Tablespoon,
        Unit::Teaspoon,
        Unit::Cup,
        Unit::Pinch,
    ];

    /// Wire spelling of the unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Ounce => "oz",
            Unit::Milliliter => "ml",
            Unit::Drop => "gotas",
            Unit::Dash => "dash",
            Unit::Tablespoon => "cucharada",
            Unit::Teaspoon => "cucharadita",
            Unit::Cup => "taza",
            Unit::Pinch => "pizca",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| Error::InvalidInput(format!("unknown unit: {}", s)))
    }
}

/// One normalized ingredient line of a recipe.
///
/// Deserialization accepts both the structured object form and the legacy
/// bare-string form; both end up here, so nothing downstream needs to care
/// which one the document used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "IngredientEntry")]
pub struct IngredientLine {
    #[serde(rename = "cantidad")]
    pub quantity: f64,
    #[serde(rename = "unidad")]
    pub unit: Unit,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl IngredientLine {
    /// Build a line, replacing a non-positive or non-finite quantity with 1.
    pub fn new(quantity: f64, unit: Unit, name: impl Into<String>) -> Self {
        Self {
            quantity: normalize_quantity(quantity),
            unit,
            name: name.into(),
        }
    }

    /// Normalize a legacy name-only entry: one ounce of `name`.
    pub fn legacy(name: impl Into<String>) -> Self {
        Self::new(1.0, Unit::Ounce, name)
    }
}

impl fmt::Display for IngredientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.quantity, self.unit, self.name)
    }
}

fn normalize_quantity(quantity: f64) -> f64 {
    if quantity.is_finite() && quantity > 0.0 {
        quantity
    } else {
        1.0
    }
}

/// Raw ingredient entry as found in documents.
#[derive(Deserialize)]
#[serde(untagged)]
enum IngredientEntry {
    Legacy(String),
    Structured {
        #[serde(rename = "cantidad", default)]
        quantity: Option<f64>,
        #[serde(rename = "unidad", default)]
        unit: Option<String>,
        #[serde(rename = "nombre")]
        name: String,
    },
}

impl From<IngredientEntry> for IngredientLine {
    fn from(entry: IngredientEntry) -> Self {
        match entry {
            IngredientEntry::Legacy(name) => IngredientLine::legacy(name),
            IngredientEntry::Structured {
                quantity,
                unit,
                name,
            } => {
                let unit = unit.as_deref().map(lenient_unit).unwrap_or_default();
                IngredientLine::new(quantity.unwrap_or(1.0), unit, name)
            }
        }
    }
}

/// Unknown spellings read as ounces rather than failing the recipe.
fn lenient_unit(spelling: &str) -> Unit {
    spelling.parse().unwrap_or_else(|_| {
        warn!(unit = spelling, "Unknown ingredient unit, reading as oz");
        Unit::default()
    })
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// RECIPES
// =============================================================================

/// A cocktail recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(rename = "familia", default, deserialize_with = "null_as_default")]
    pub family: String,
    /// Missing or `null` scores (a form's `NaN`) read as 0.
    #[serde(rename = "puntaje", default, deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(rename = "descripcion", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "ingredientes", default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<IngredientLine>,
    #[serde(rename = "preparacion", default, deserialize_with = "null_as_default")]
    pub steps: Vec<String>,
    #[serde(rename = "dificultad", default, deserialize_with = "null_as_default")]
    pub difficulty: String,
    #[serde(rename = "tiempo", default, deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(rename = "imagen", default, deserialize_with = "null_as_default")]
    pub image: ImageRef,
}

impl Recipe {
    /// Ingredient names in recipe order (may repeat).
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|line| line.name.as_str())
    }

    /// Distinct ingredient names.
    pub fn ingredient_name_set(&self) -> BTreeSet<&str> {
        self.ingredient_names().collect()
    }

    /// Extract the editable fields as a draft, e.g. to prefill an edit form.
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            name: self.name.clone(),
            kind: self.kind.clone(),
            family: self.family.clone(),
            score: self.score,
            description: self.description.clone(),
            ingredients: self.ingredients.clone(),
            steps: self.steps.clone(),
            difficulty: self.difficulty.clone(),
            time: self.time.clone(),
            image: self.image.clone(),
        }
    }
}

/// Recipe contents without an identifier, as submitted by a create or
/// update form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "familia")]
    pub family: String,
    #[serde(rename = "puntaje")]
    pub score: f64,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "ingredientes", default)]
    pub ingredients: Vec<IngredientLine>,
    #[serde(rename = "preparacion", default)]
    pub steps: Vec<String>,
    #[serde(rename = "dificultad", default)]
    pub difficulty: String,
    #[serde(rename = "tiempo", default)]
    pub time: String,
    #[serde(rename = "imagen", default)]
    pub image: ImageRef,
}

impl RecipeDraft {
    /// Create a draft with the given name and neutral defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: crate::defaults::DRAFT_SCORE,
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_ingredient(mut self, line: IngredientLine) -> Self {
        self.ingredients.push(line);
        self
    }

    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = image;
        self
    }

    /// Replace the image with an uploaded file. A rejected upload leaves the
    /// current image in place.
    pub fn set_image_upload(&mut self, upload: ImageUpload) -> Result<()> {
        self.image = upload.into_image_ref()?;
        Ok(())
    }

    /// Check the fields a form cannot be trusted to enforce.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidInput("recipe name cannot be empty".to_string()));
        }
        if !self.score.is_finite()
            || self.score < crate::defaults::SCORE_MIN
            || self.score > crate::defaults::SCORE_MAX
        {
            return Err(Error::InvalidInput(format!(
                "score must be between {} and {}, got {}",
                crate::defaults::SCORE_MIN,
                crate::defaults::SCORE_MAX,
                self.score
            )));
        }
        Ok(())
    }

    /// Attach an identifier, producing a full recipe.
    pub fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            name: self.name,
            kind: self.kind,
            family: self.family,
            score: self.score,
            description: self.description,
            ingredients: self.ingredients,
            steps: self.steps,
            difficulty: self.difficulty,
            time: self.time,
            image: self.image,
        }
    }
}
