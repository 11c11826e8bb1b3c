use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{LanguageTag, TransformMethod};

/// One hazing request: the text, the language it is written in, the language
/// to bridge through, and the method to bridge with.
///
/// # Example
///
/// ```
/// use haze::{LanguageTag, TransformMethod, TransformationRequest};
///
/// let request = TransformationRequest::builder()
///     .text("hello world")
///     .source_lang(LanguageTag::English)
///     .bridge_lang(LanguageTag::Spanish)
///     .build();
///
/// assert_eq!(request.method, TransformMethod::Hybrid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct TransformationRequest {
    pub text: String,
    pub source_lang: LanguageTag,
    pub bridge_lang: LanguageTag,
    #[builder(default)]
    pub method: TransformMethod,
}

impl TransformationRequest {
    pub fn new(
        text: impl Into<String>,
        source_lang: LanguageTag,
        bridge_lang: LanguageTag,
        method: TransformMethod,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang,
            bridge_lang,
            method,
        }
    }

    /// Returns a copy of this request carrying different text.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }
}
