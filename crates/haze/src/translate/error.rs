use std::time::Duration;

use thiserror::Error;

use crate::types::LanguageTag;

/// A failed call to a translation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("request timed out after {after:?}")]
    Timeout { after: Duration },

    #[error("service unreachable: {message}")]
    Unreachable { message: String },

    #[error("service answered {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("no translation available for {from} → {to}")]
    UnsupportedPair { from: LanguageTag, to: LanguageTag },

    #[error("no translation service configured")]
    Unavailable,
}
