mod language;
mod method;
mod request;
mod result;

pub use language::{LanguageTag, UnknownLanguage, compute_suggestions};
pub use method::{TransformMethod, UnknownMethod};
pub use request::TransformationRequest;
pub use result::{ChainStep, TransformationResult, WordScore};
