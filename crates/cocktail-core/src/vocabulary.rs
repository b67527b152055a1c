//! Enumerated vocabularies used to populate selection widgets.

use serde::{Deserialize, Serialize};

/// Allowed ingredient names, recipe types, and family labels.
///
/// Loaded once at startup; an empty list is valid and simply yields an
/// empty selection widget.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(rename = "ingredientes", default)]
    pub ingredients: Vec<String>,
    #[serde(rename = "tipos", default)]
    pub types: Vec<String>,
    #[serde(rename = "familias", default)]
    pub families: Vec<String>,
}

impl Vocabulary {
    /// The vocabulary used when no configuration document is available.
    pub fn builtin() -> Self {
        Self {
            ingredients: to_strings(&[
                "Ron blanco",
                "Vodka",
                "Gin",
                "Tequila",
                "Whisky",
                "Jugo de limón",
                "Jugo de lima",
                "Jugo de naranja",
                "Agua tónica",
                "Soda",
                "Hielo",
            ]),
            types: to_strings(&["Aperitivo", "Digestivo", "Cóctel clásico", "Refrescante"]),
            families: to_strings(&["Clásicos", "Tropicales", "Cremosos", "Modernos"]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.types.is_empty() && self.families.is_empty()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Where the active vocabulary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyOrigin {
    Document,
    BuiltIn,
}

impl std::fmt::Display for VocabularyOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Document => write!(f, "document"),
            Self::BuiltIn => write!(f, "builtin"),
        }
    }
}
