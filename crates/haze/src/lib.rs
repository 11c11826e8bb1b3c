//! Round-trip text through a bridge language.
//!
//! A [`Hazer`] takes text in a source language, renders it in a bridge
//! language, and renders that back into the source. The round trip is either
//! *fuzzy* (phonetic spelling rules, see [`rules`]), *translate* (an injected
//! [`Translator`](translate::Translator)), or *hybrid* (fuzzy first, then
//! translation when the rules cannot help). The result carries both stages
//! and a similarity score against the original. Fuzzy stages can also snap
//! each word to the nearest entry of a built-in [`wordlist`].

pub mod config;
pub mod error;
pub mod hazer;
pub mod phonetic;
pub mod rehaze;
pub mod rules;
pub mod similarity;
pub mod translate;
pub mod types;
pub mod wordlist;

pub use config::HazeConfig;
pub use error::{HazeError, InvalidInput};
pub use hazer::Hazer;
pub use rehaze::{RehazeIteration, RehazeOptions, RehazeReport, RehazeStop};
pub use types::{
    ChainStep, LanguageTag, TransformMethod, TransformationRequest, TransformationResult,
    UnknownLanguage, UnknownMethod, WordScore,
};
