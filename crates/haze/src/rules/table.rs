//! The process-wide table of phonetic rule sets.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use super::ast::RuleSet;
use super::error::{LoadError, ParseError};
use super::file::parse_file;
use crate::types::LanguageTag;

/// Source of the built-in rules, embedded at compile time.
pub const BUILTIN_RULES: &str = include_str!("builtin.rules");

static BUILTIN: LazyLock<Arc<RuleTable>> = LazyLock::new(|| {
    Arc::new(RuleTable::parse(BUILTIN_RULES).expect("built-in rules should parse"))
});

/// Rule sets keyed by direction (source, bridge).
///
/// A table is built once and then only read. Share it between hazers with
/// [`Arc`]; [`RuleTable::builtin`] hands out the shared built-in table.
///
/// # Example
///
/// ```
/// use haze::LanguageTag;
/// use haze::rules::RuleTable;
///
/// let table: RuleTable = r#"
///     english -> spanish { "th" => "z"; }
///     spanish -> english { "z" => "th"; }
/// "#.parse().unwrap();
///
/// assert!(table.supports_round_trip(LanguageTag::English, LanguageTag::Spanish));
/// assert!(!table.supports_round_trip(LanguageTag::English, LanguageTag::French));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    sets: BTreeMap<(LanguageTag, LanguageTag), RuleSet>,
    path: Option<PathBuf>,
}

impl RuleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared built-in table.
    pub fn builtin() -> Arc<RuleTable> {
        Arc::clone(&BUILTIN)
    }

    /// Parse a table from rule file source.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut table = Self::new();
        for set in parse_file(input)? {
            table.insert(set);
        }
        Ok(table)
    }

    /// Load a table from a rule file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut table = Self::parse(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        table.path = Some(path.to_path_buf());
        Ok(table)
    }

    /// The file this table was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Insert a rule set, replacing and returning any set for the same direction.
    pub fn insert(&mut self, set: RuleSet) -> Option<RuleSet> {
        self.sets.insert((set.source, set.bridge), set)
    }

    pub fn get(&self, source: LanguageTag, bridge: LanguageTag) -> Option<&RuleSet> {
        self.sets.get(&(source, bridge))
    }

    /// Whether both directions between `source` and `bridge` have rules.
    pub fn supports_round_trip(&self, source: LanguageTag, bridge: LanguageTag) -> bool {
        self.get(source, bridge).is_some() && self.get(bridge, source).is_some()
    }

    /// Every covered direction, ordered by source then bridge.
    pub fn pairs(&self) -> impl Iterator<Item = (LanguageTag, LanguageTag)> + '_ {
        self.sets.keys().copied()
    }

    /// Every rule set, ordered like [`pairs`](Self::pairs).
    pub fn rule_sets(&self) -> impl Iterator<Item = &RuleSet> {
        self.sets.values()
    }

    /// Number of covered directions.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl FromStr for RuleTable {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
