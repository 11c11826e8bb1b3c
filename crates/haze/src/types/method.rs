use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a request is carried through the bridge language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMethod {
    /// Phonetic substitution rules in both directions.
    Fuzzy,
    /// The external translation collaborator in both directions.
    Translate,
    /// Fuzzy first, Translate when the rules are missing or change nothing.
    #[default]
    Hybrid,
}

impl TransformMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            TransformMethod::Fuzzy => "fuzzy",
            TransformMethod::Translate => "translate",
            TransformMethod::Hybrid => "hybrid",
        }
    }
}

impl Display for TransformMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown method '{0}', expected one of: fuzzy, translate, hybrid")]
pub struct UnknownMethod(pub String);

impl FromStr for TransformMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fuzzy" => Ok(TransformMethod::Fuzzy),
            "translate" => Ok(TransformMethod::Translate),
            "hybrid" => Ok(TransformMethod::Hybrid),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}
