use tracing::debug;

use super::{TranslationError, Translator};
use crate::types::LanguageTag;

/// Tries `primary`, and on failure tries `fallback` once.
///
/// When both fail, the primary's error is returned.
#[derive(Debug, Clone)]
pub struct FallbackTranslator<P, F> {
    primary: P,
    fallback: F,
}

impl<P: Translator, F: Translator> FallbackTranslator<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: Translator, F: Translator> Translator for FallbackTranslator<P, F> {
    fn translate(
        &self,
        text: &str,
        from: LanguageTag,
        to: LanguageTag,
    ) -> Result<String, TranslationError> {
        match self.primary.translate(text, from, to) {
            Ok(translated) => Ok(translated),
            Err(primary_error) => {
                debug!(
                    %from,
                    %to,
                    error = %primary_error,
                    "primary translator failed, using fallback"
                );
                self.fallback
                    .translate(text, from, to)
                    .map_err(|_| primary_error)
            }
        }
    }
}
