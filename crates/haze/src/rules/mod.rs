//! Phonetic rule tables.
//!
//! This module provides the rule file parser, the [`RuleTable`] that holds one
//! ordered [`RuleSet`] per direction, and the engine that rewrites text with
//! those rules.

mod ast;
mod engine;
mod error;
mod file;
mod table;

pub use ast::{Anchor, DuplicateRule, PhoneticRule, RuleSet};
pub(crate) use engine::{is_word, match_case};
pub use engine::{RuleHit, apply_rules};
pub use error::{LoadError, ParseError};
pub use file::parse_file;
pub use table::{BUILTIN_RULES, RuleTable};
