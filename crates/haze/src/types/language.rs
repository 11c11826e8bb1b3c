use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::levenshtein;
use thiserror::Error;

/// A language text can be hazed from or bridged through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    #[serde(alias = "en")]
    English,
    #[serde(alias = "es")]
    Spanish,
    #[serde(alias = "fr")]
    French,
    #[serde(alias = "de")]
    German,
    #[serde(alias = "it")]
    Italian,
    #[serde(alias = "pt")]
    Portuguese,
}

impl LanguageTag {
    /// Every supported language, in declaration order.
    pub const ALL: [LanguageTag; 6] = [
        LanguageTag::English,
        LanguageTag::Spanish,
        LanguageTag::French,
        LanguageTag::German,
        LanguageTag::Italian,
        LanguageTag::Portuguese,
    ];

    /// ISO 639-1 code (e.g. "es").
    pub fn code(self) -> &'static str {
        match self {
            LanguageTag::English => "en",
            LanguageTag::Spanish => "es",
            LanguageTag::French => "fr",
            LanguageTag::German => "de",
            LanguageTag::Italian => "it",
            LanguageTag::Portuguese => "pt",
        }
    }

    /// Lowercase English name (e.g. "spanish").
    pub fn name(self) -> &'static str {
        match self {
            LanguageTag::English => "english",
            LanguageTag::Spanish => "spanish",
            LanguageTag::French => "french",
            LanguageTag::German => "german",
            LanguageTag::Italian => "italian",
            LanguageTag::Portuguese => "portuguese",
        }
    }
}

impl Display for LanguageTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// A language name that is neither a supported name nor an ISO code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language '{name}'{}", format_suggestions(.suggestions))]
pub struct UnknownLanguage {
    pub name: String,
    pub suggestions: Vec<String>,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

impl FromStr for LanguageTag {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        LanguageTag::ALL
            .into_iter()
            .find(|tag| tag.name() == wanted || tag.code() == wanted)
            .ok_or_else(|| UnknownLanguage {
                name: s.to_string(),
                suggestions: compute_suggestions(&wanted),
            })
    }
}

/// Returns up to three language names within a small edit distance of `name`,
/// closest first.
pub fn compute_suggestions(name: &str) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &str)> = LanguageTag::ALL
        .into_iter()
        .filter_map(|tag| {
            let dist = levenshtein(name, tag.name());
            if dist <= max_distance && dist > 0 {
                Some((dist, tag.name()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, s)| s.to_string())
        .collect()
}
