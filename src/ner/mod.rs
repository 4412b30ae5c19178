//! Named-entity recognition for place names.
//!
//! The page scraper only depends on the `EntityRecognizer` trait. A recognizer
//! is built once by `initialization::init_recognizer(&config)` and shared as an
//! immutable `Arc<dyn EntityRecognizer>`, so concurrent analyses never contend
//! on mutable model state.
//!
//! Two implementations exist: the built-in `GazetteerRecognizer` and, with the
//! `ner-model` feature, `GlinerRecognizer`, which runs a GLiNER model loaded
//! from disk.

mod gazetteer;
#[cfg(feature = "ner-model")]
mod model;

pub use gazetteer::GazetteerRecognizer;
#[cfg(feature = "ner-model")]
pub use model::GlinerRecognizer;

use crate::error_handling::RecognizerError;

/// Entity categories a recognizer can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    /// Geopolitical entity: countries, cities, states
    Gpe,
    /// Non-GPE location: continents, regions, bodies of water
    Loc,
    /// Any other entity kind
    Other,
}

impl EntityLabel {
    /// Whether entities with this label count as place mentions.
    pub fn is_place(&self) -> bool {
        matches!(self, EntityLabel::Gpe | EntityLabel::Loc)
    }
}

/// A recognized span of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// A read-only entity recognizer.
///
/// Implementations must be safe to call from several analyses at once.
pub trait EntityRecognizer: Send + Sync {
    /// Returns the entities found in `text`, in order of appearance.
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_label_is_place() {
        assert!(EntityLabel::Gpe.is_place());
        assert!(EntityLabel::Loc.is_place());
        assert!(!EntityLabel::Other.is_place());
    }
}
