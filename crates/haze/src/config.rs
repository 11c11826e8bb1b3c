//! Runtime configuration for a [`Hazer`](crate::Hazer).

use std::time::Duration;

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Default limit on request text, in characters.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 5000;

/// Default total timeout for one translation request.
pub const DEFAULT_TRANSLATE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default timeout for connecting to the translation service.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Limits and translation service settings.
///
/// ```
/// use std::time::Duration;
/// use haze::HazeConfig;
///
/// let config = HazeConfig::builder()
///     .max_input_chars(200)
///     .translate_url("http://localhost:5000")
///     .build();
///
/// assert_eq!(config.max_input_chars, 200);
/// assert_eq!(config.translate_timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct HazeConfig {
    /// Longest accepted request text, in characters.
    #[builder(default = DEFAULT_MAX_INPUT_CHARS)]
    pub max_input_chars: usize,

    /// Base URL of a LibreTranslate-compatible service.
    #[builder(into)]
    pub translate_url: Option<String>,

    #[builder(into)]
    pub translate_api_key: Option<String>,

    #[builder(default = DEFAULT_TRANSLATE_TIMEOUT)]
    pub translate_timeout: Duration,

    #[builder(default = DEFAULT_CONNECT_TIMEOUT)]
    pub connect_timeout: Duration,

    /// After each fuzzy stage, replace every word with the nearest word of
    /// the built-in list for that stage's target language.
    #[builder(default)]
    pub snap_to_words: bool,
}

impl Default for HazeConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = HazeConfig::default();
        assert_eq!(config.max_input_chars, 5000);
        assert_eq!(config.translate_url, None);
        assert_eq!(config.translate_timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert!(!config.snap_to_words);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let config: HazeConfig = serde_json::from_str(r#"{"max_input_chars": 10}"#).unwrap();
        assert_eq!(config.max_input_chars, 10);
        assert_eq!(config.translate_timeout, DEFAULT_TRANSLATE_TIMEOUT);
    }
}
