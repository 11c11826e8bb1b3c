use serde::{Deserialize, Serialize};

use super::{LanguageTag, TransformMethod};

/// One stage of a round trip, e.g. English to Spanish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainStep {
    pub from: LanguageTag,
    pub to: LanguageTag,
    /// Either `Fuzzy` or `Translate`; a stage is never `Hybrid`.
    pub method: TransformMethod,
    pub input: String,
    pub output: String,
}

impl ChainStep {
    /// Whether this stage changed its input.
    pub fn changed(&self) -> bool {
        self.input != self.output
    }
}

/// Similarity of one original word against the word it was aligned with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordScore {
    pub word: String,
    /// Aligned word from the transformed text, empty if there was none.
    pub aligned: String,
    /// String similarity in [0, 1].
    pub score: f64,
    /// Sound-alike similarity in [0, 1].
    pub phonetic: f64,
}

/// The complete outcome of a successful transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationResult {
    pub original_text: String,
    pub bridged_text: String,
    /// Text as it stood in the bridge language.
    pub intermediate_text: String,
    pub chain: Vec<ChainStep>,
    pub similarity: f64,
    pub word_scores: Vec<WordScore>,
    pub requested_method: TransformMethod,
    pub method_used: TransformMethod,
}

impl TransformationResult {
    /// Whether a hybrid request fell back to translation.
    pub fn fell_back(&self) -> bool {
        self.requested_method != self.method_used
    }

    /// Renders the route as "english → spanish → english".
    pub fn route(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.chain.len() + 1);
        if let Some(first) = self.chain.first() {
            parts.push(first.from.to_string());
        }
        parts.extend(self.chain.iter().map(|step| step.to.to_string()));
        parts.join(" → ")
    }
}
