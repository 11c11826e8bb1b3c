//! Rule application.
//!
//! Text is split on Unicode word boundaries. Segments without an alphanumeric
//! character (spaces, punctuation) are copied through. Every word runs through
//! the rules of a [`RuleSet`] in order; each rule rewrites all non-overlapping
//! matches, scanning left to right, and the next rule sees the result.

use unicode_segmentation::UnicodeSegmentation;

use super::ast::{PhoneticRule, RuleSet, fold_char};
use super::table::RuleTable;
use crate::error::HazeError;
use crate::types::LanguageTag;

/// A rule that changed a word, with the word before and after it ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit<'a> {
    pub rule: &'a PhoneticRule,
    pub before: String,
    pub after: String,
}

/// Applies the rules for `source → bridge` to `text`.
///
/// Fails with [`HazeError::UnsupportedLanguagePair`] when the table has no
/// rules for that direction.
pub fn apply_rules(
    table: &RuleTable,
    text: &str,
    source: LanguageTag,
    bridge: LanguageTag,
) -> Result<String, HazeError> {
    let set = table
        .get(source, bridge)
        .ok_or(HazeError::UnsupportedLanguagePair {
            source_lang: source,
            bridge_lang: bridge,
        })?;
    Ok(set.apply(text))
}

/// Whether a word-boundary segment is a word rather than spacing or punctuation.
pub(crate) fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

impl RuleSet {
    /// Rewrites every word of `text`, leaving everything between words as is.
    pub fn apply(&self, text: &str) -> String {
        text.split_word_bounds()
            .map(|segment| {
                if is_word(segment) {
                    self.apply_word(segment)
                } else {
                    segment.to_string()
                }
            })
            .collect()
    }

    /// Rewrites a single word.
    pub fn apply_word(&self, word: &str) -> String {
        let mut current: Vec<char> = word.chars().collect();
        for rule in self.rules() {
            if let Some(next) = rewrite(&current, rule) {
                current = next;
            }
        }
        current.into_iter().collect()
    }

    /// Rewrites a single word, recording each rule that changed it.
    pub fn trace_word(&self, word: &str) -> Vec<RuleHit<'_>> {
        let mut hits = Vec::new();
        let mut current: Vec<char> = word.chars().collect();
        for rule in self.rules() {
            if let Some(next) = rewrite(&current, rule) {
                hits.push(RuleHit {
                    rule,
                    before: current.iter().collect(),
                    after: next.iter().collect(),
                });
                current = next;
            }
        }
        hits
    }
}

/// Replaces every match of `rule` in `word`, or returns `None` if it never
/// matches.
fn rewrite(word: &[char], rule: &PhoneticRule) -> Option<Vec<char>> {
    let pattern = rule.pattern_chars();
    let len = pattern.len();
    if len == 0 || len > word.len() {
        return None;
    }

    let folded: Vec<char> = word.iter().copied().map(fold_char).collect();
    let mut out: Vec<char> = Vec::with_capacity(word.len() + rule.replacement.len());
    let mut matched = false;
    let mut i = 0;
    while i < word.len() {
        let fits = i + len <= word.len()
            && folded[i..i + len] == *pattern
            && rule.anchor.admits(i, len, word.len());
        if fits {
            let style = CaseStyle::of(&word[i..i + len], word);
            style.push_replacement(&rule.replacement, &mut out);
            matched = true;
            i += len;
        } else {
            out.push(word[i]);
            i += 1;
        }
    }

    matched.then_some(out)
}

/// Writes `replacement` in the case `source` is written in.
pub(crate) fn match_case(source: &str, replacement: &str) -> String {
    let source: Vec<char> = source.chars().collect();
    let mut out = Vec::with_capacity(replacement.len());
    CaseStyle::of(&source, &source).push_replacement(replacement, &mut out);
    out.into_iter().collect()
}

/// The case a replacement is written in, copied from the text it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseStyle {
    /// Replacement exactly as written in the rule.
    AsWritten,
    /// First character uppercased.
    Capitalized,
    /// Every character uppercased.
    Upper,
}

impl CaseStyle {
    /// Single-letter matches take their case from the whole word.
    fn of(matched: &[char], word: &[char]) -> Self {
        let context = if cased_count(matched) >= 2 {
            matched
        } else {
            word
        };
        if is_shouted(context) {
            CaseStyle::Upper
        } else if matched.first().is_some_and(|c| c.is_uppercase()) {
            CaseStyle::Capitalized
        } else {
            CaseStyle::AsWritten
        }
    }

    fn push_replacement(self, replacement: &str, out: &mut Vec<char>) {
        match self {
            CaseStyle::AsWritten => out.extend(replacement.chars()),
            CaseStyle::Upper => out.extend(replacement.chars().flat_map(char::to_uppercase)),
            CaseStyle::Capitalized => {
                let mut chars = replacement.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                }
                out.extend(chars);
            }
        }
    }
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

fn cased_count(chars: &[char]) -> usize {
    chars.iter().filter(|c| is_cased(**c)).count()
}

/// At least two cased characters, none of them lowercase.
fn is_shouted(chars: &[char]) -> bool {
    cased_count(chars) >= 2 && !chars.iter().any(|c| c.is_lowercase())
}
