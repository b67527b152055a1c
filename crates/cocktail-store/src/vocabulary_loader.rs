//! Startup loading of the configuration vocabulary.

use cocktail_core::{fetch_json, DocumentSource, Vocabulary, VocabularyOrigin};
use tracing::{info, warn};

/// Fetch the vocabulary document, or fall back to [`Vocabulary::builtin`].
///
/// Never fails: retrieval and parse errors are logged and absorbed so the
/// catalog stays usable offline.
pub async fn load_vocabulary<S>(source: &S) -> (Vocabulary, VocabularyOrigin)
where
    S: DocumentSource + ?Sized,
{
    match fetch_json::<Vocabulary, S>(source).await {
        Ok(vocabulary) => {
            info!(
                source = %source.describe(),
                ingredients = vocabulary.ingredients.len(),
                types = vocabulary.types.len(),
                families = vocabulary.families.len(),
                "Loaded vocabulary from document"
            );
            (vocabulary, VocabularyOrigin::Document)
        }
        Err(e) => {
            warn!(
                source = %source.describe(),
                error = %e,
                "Vocabulary unavailable, using built-in defaults"
            );
            (Vocabulary::builtin(), VocabularyOrigin::BuiltIn)
        }
    }
}
