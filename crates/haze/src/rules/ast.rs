//! Phonetic rule types.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;
use thiserror::Error;

use crate::types::LanguageTag;

/// Where inside a word a rule's pattern may match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Anywhere in the word.
    Anywhere,
    /// `^pattern`: only at the start of a word.
    Initial,
    /// `pattern$`: only at the end of a word.
    Final,
    /// `^pattern$`: only the whole word.
    Whole,
}

impl Anchor {
    /// Whether a match of `len` characters at `start` in a word of
    /// `word_len` characters satisfies this anchor.
    pub fn admits(self, start: usize, len: usize, word_len: usize) -> bool {
        let at_start = start == 0;
        let at_end = start + len == word_len;
        match self {
            Anchor::Anywhere => true,
            Anchor::Initial => at_start,
            Anchor::Final => at_end,
            Anchor::Whole => at_start && at_end,
        }
    }
}

/// A single substitution: every match of `pattern` becomes `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneticRule {
    /// Lowercase pattern without anchor markers.
    pub pattern: String,
    pub replacement: String,
    pub anchor: Anchor,
    #[serde(skip)]
    chars: Vec<char>,
}

impl PhoneticRule {
    /// Creates a rule. The pattern is case-folded; it should not be empty.
    pub fn new(pattern: &str, replacement: impl Into<String>, anchor: Anchor) -> Self {
        let chars: Vec<char> = pattern.chars().map(fold_char).collect();
        Self {
            pattern: chars.iter().collect(),
            replacement: replacement.into(),
            anchor,
            chars,
        }
    }

    /// Creates a rule from its written form, where a leading `^` and a
    /// trailing `$` set the anchor.
    ///
    /// ```
    /// use haze::rules::{Anchor, PhoneticRule};
    ///
    /// let rule = PhoneticRule::parse_written("^Ph", "f");
    /// assert_eq!(rule.pattern, "ph");
    /// assert_eq!(rule.anchor, Anchor::Initial);
    /// ```
    pub fn parse_written(written: &str, replacement: impl Into<String>) -> Self {
        let (initial, rest) = match written.strip_prefix('^') {
            Some(rest) => (true, rest),
            None => (false, written),
        };
        let (fin, pattern) = match rest.strip_suffix('$') {
            Some(pattern) => (true, pattern),
            None => (false, rest),
        };
        let anchor = match (initial, fin) {
            (true, true) => Anchor::Whole,
            (true, false) => Anchor::Initial,
            (false, true) => Anchor::Final,
            (false, false) => Anchor::Anywhere,
        };
        Self::new(pattern, replacement, anchor)
    }

    /// The case-folded pattern characters.
    pub fn pattern_chars(&self) -> &[char] {
        &self.chars
    }

    /// The pattern with its anchor markers, as written in a rule file.
    pub fn written_pattern(&self) -> String {
        match self.anchor {
            Anchor::Anywhere => self.pattern.clone(),
            Anchor::Initial => format!("^{}", self.pattern),
            Anchor::Final => format!("{}$", self.pattern),
            Anchor::Whole => format!("^{}$", self.pattern),
        }
    }

    fn key(&self) -> (&str, Anchor) {
        (&self.pattern, self.anchor)
    }
}

impl Display for PhoneticRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "\"{}\" => \"{}\"",
            self.written_pattern(),
            self.replacement
        )
    }
}

/// Folds a character for case-insensitive matching.
pub(crate) fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// A rule whose pattern and anchor already exist in the set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate pattern \"{pattern}\" in {source_lang} → {bridge_lang}")]
pub struct DuplicateRule {
    pub pattern: String,
    pub source_lang: LanguageTag,
    pub bridge_lang: LanguageTag,
}

/// The ordered rules for one direction, e.g. English to Spanish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    pub source: LanguageTag,
    pub bridge: LanguageTag,
    rules: Vec<PhoneticRule>,
}

impl RuleSet {
    pub fn new(source: LanguageTag, bridge: LanguageTag) -> Self {
        Self {
            source,
            bridge,
            rules: Vec::new(),
        }
    }

    /// Appends a rule. Fails if a rule with the same pattern and anchor is
    /// already present.
    pub fn push(&mut self, rule: PhoneticRule) -> Result<(), DuplicateRule> {
        if self.rules.iter().any(|existing| existing.key() == rule.key()) {
            return Err(DuplicateRule {
                pattern: rule.written_pattern(),
                source_lang: self.source,
                bridge_lang: self.bridge,
            });
        }
        self.rules.push(rule);
        Ok(())
    }

    pub fn rules(&self) -> &[PhoneticRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
