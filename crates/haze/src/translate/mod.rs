//! Translation collaborators.
//!
//! The [`Translator`] trait is the only thing [`Hazer`](crate::Hazer) knows
//! about translation. Implementations here cover an HTTP service, an offline
//! word dictionary, and composition of the two.

mod dictionary;
mod error;
mod fallback;
mod http;

use std::sync::Arc;

pub use dictionary::DictionaryTranslator;
pub use error::TranslationError;
pub use fallback::FallbackTranslator;
pub use http::HttpTranslator;

use crate::types::LanguageTag;

/// Translates text between two languages.
///
/// One call is one attempt; implementations must not retry on their own
/// beyond what they document.
pub trait Translator: Send + Sync {
    fn translate(
        &self,
        text: &str,
        from: LanguageTag,
        to: LanguageTag,
    ) -> Result<String, TranslationError>;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(
        &self,
        text: &str,
        from: LanguageTag,
        to: LanguageTag,
    ) -> Result<String, TranslationError> {
        (**self).translate(text, from, to)
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn translate(
        &self,
        text: &str,
        from: LanguageTag,
        to: LanguageTag,
    ) -> Result<String, TranslationError> {
        (**self).translate(text, from, to)
    }
}

impl<T: Translator + ?Sized> Translator for Arc<T> {
    fn translate(
        &self,
        text: &str,
        from: LanguageTag,
        to: LanguageTag,
    ) -> Result<String, TranslationError> {
        (**self).translate(text, from, to)
    }
}

/// A translator that always fails with [`TranslationError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableTranslator;

impl Translator for UnavailableTranslator {
    fn translate(
        &self,
        _text: &str,
        _from: LanguageTag,
        _to: LanguageTag,
    ) -> Result<String, TranslationError> {
        Err(TranslationError::Unavailable)
    }
}
