//! Error types for hazing requests.

use thiserror::Error;

use crate::translate::TranslationError;
use crate::types::LanguageTag;

/// Why a request was rejected before any transformation ran.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("text is empty")]
    Empty,

    #[error("text is {length} characters long, limit is {max}")]
    TooLong { length: usize, max: usize },

    #[error("source and bridge language are both {0}")]
    SameLanguage(LanguageTag),

    #[error("max iterations must be at least 1")]
    MaxIterations,

    #[error("similarity threshold {0} is outside [0, 1]")]
    Threshold(f64),
}

/// An error returned by [`Hazer`](crate::Hazer) operations.
#[derive(Debug, Error)]
pub enum HazeError {
    /// No phonetic rules exist for one direction of the round trip.
    #[error("no phonetic rules for {source_lang} → {bridge_lang}")]
    UnsupportedLanguagePair {
        source_lang: LanguageTag,
        bridge_lang: LanguageTag,
    },

    /// The translation collaborator failed or timed out.
    #[error("translation service error: {0}")]
    TranslationService(#[from] TranslationError),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

impl HazeError {
    /// Whether the failure came from the outbound translation service.
    pub fn is_translation_failure(&self) -> bool {
        matches!(self, HazeError::TranslationService(_))
    }
}
