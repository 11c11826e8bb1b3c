//! Setup shared by the hazing commands.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use haze::config::DEFAULT_MAX_INPUT_CHARS;
use haze::rules::RuleTable;
use haze::translate::{DictionaryTranslator, FallbackTranslator, HttpTranslator, Translator};
use haze::{HazeConfig, HazeError, Hazer};
use miette::{miette, IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;

use crate::output::HazeDiagnostic;

/// Options for building a hazer.
#[derive(Debug, Args)]
pub struct HazerArgs {
    /// Rule file to use instead of the built-in rules
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Base URL of a LibreTranslate-compatible translation service
    #[arg(long, env = "HAZE_TRANSLATE_URL")]
    pub translate_url: Option<String>,

    /// API key for the translation service
    #[arg(long, env = "HAZE_TRANSLATE_API_KEY", hide_env_values = true)]
    pub translate_api_key: Option<String>,

    /// Translation request timeout in seconds
    #[arg(long, env = "HAZE_TRANSLATE_TIMEOUT_SECS", default_value_t = 5)]
    pub translate_timeout_secs: u64,

    /// Longest accepted input, in characters
    #[arg(long, env = "HAZE_MAX_INPUT_CHARS", default_value_t = DEFAULT_MAX_INPUT_CHARS)]
    pub max_input_chars: usize,

    /// Replace each fuzzy-stage word with the nearest built-in vocabulary word
    #[arg(long, env = "HAZE_SNAP_WORDS")]
    pub snap_words: bool,
}

impl HazerArgs {
    pub fn config(&self) -> HazeConfig {
        HazeConfig::builder()
            .max_input_chars(self.max_input_chars)
            .maybe_translate_url(self.translate_url.clone())
            .maybe_translate_api_key(self.translate_api_key.clone())
            .translate_timeout(Duration::from_secs(self.translate_timeout_secs))
            .snap_to_words(self.snap_words)
            .build()
    }

    /// Build a hazer from the rule file and translation settings.
    pub fn build(&self) -> Result<Hazer<Box<dyn Translator>>> {
        let config = self.config();
        let rules = load_rules(self.rules.as_deref())?;
        let translator = translator(&config)?;
        Ok(Hazer::with_config(rules, translator, config))
    }
}

/// Load a rule file, or the built-in rules when no file is given.
pub fn load_rules(path: Option<&Path>) -> Result<Arc<RuleTable>> {
    let Some(path) = path else {
        return Ok(RuleTable::builtin());
    };
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read rule file {}: {}", path.display(), e))?;

    match RuleTable::parse(&content) {
        Ok(table) => {
            debug!(path = %path.display(), directions = table.len(), "Loaded rule file");
            Ok(Arc::new(table))
        }
        Err(e) => Err(HazeDiagnostic::from_parse_error(path, &content, &e).into()),
    }
}

/// The HTTP service backed by the dictionary when a URL is configured,
/// otherwise the dictionary alone.
fn translator(config: &HazeConfig) -> Result<Box<dyn Translator>> {
    let dictionary = DictionaryTranslator::builtin();
    if config.translate_url.is_none() {
        debug!("No translation service configured, using the built-in dictionary");
        return Ok(Box::new(dictionary));
    }

    let http = HttpTranslator::from_config(config)
        .map_err(|e| miette!("Failed to set up translation client: {}", e))?;
    debug!(endpoint = http.endpoint(), "Using translation service");
    Ok(Box::new(FallbackTranslator::new(http, dictionary)))
}

/// Exit code for a failed hazing operation.
pub fn exit_code(error: &HazeError) -> i32 {
    match error {
        HazeError::TranslationService(_) => exitcode::UNAVAILABLE,
        HazeError::UnsupportedLanguagePair { .. } | HazeError::InvalidInput(_) => exitcode::DATAERR,
    }
}

/// Print a failed operation to stderr and return its exit code.
pub fn report_failure(error: &HazeError, json: bool) -> i32 {
    if json {
        let output = serde_json::json!({
            "error": error.to_string()
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        eprintln!(
            "{} {}",
            "error:".if_supports_color(Stream::Stderr, |s| s.red()),
            error
        );
    }
    exit_code(error)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{}", json_output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use haze::translate::TranslationError;
    use haze::{InvalidInput, LanguageTag};

    fn args() -> HazerArgs {
        HazerArgs {
            rules: None,
            translate_url: Some("http://localhost:5000".to_string()),
            translate_api_key: None,
            translate_timeout_secs: 3,
            max_input_chars: 100,
            snap_words: true,
        }
    }

    #[test]
    fn config_from_args() {
        let config = args().config();
        assert_eq!(config.max_input_chars, 100);
        assert_eq!(config.translate_url.as_deref(), Some("http://localhost:5000"));
        assert_eq!(config.translate_timeout, Duration::from_secs(3));
        assert!(config.snap_to_words);
    }

    #[test]
    fn exit_codes() {
        assert_eq!(
            exit_code(&HazeError::TranslationService(TranslationError::Unavailable)),
            exitcode::UNAVAILABLE
        );
        assert_eq!(
            exit_code(&HazeError::InvalidInput(InvalidInput::Empty)),
            exitcode::DATAERR
        );
        assert_eq!(
            exit_code(&HazeError::UnsupportedLanguagePair {
                source_lang: LanguageTag::German,
                bridge_lang: LanguageTag::Italian,
            }),
            exitcode::DATAERR
        );
    }

    #[test]
    fn builtin_rules_without_file() {
        let rules = load_rules(None).unwrap();
        assert!(Arc::ptr_eq(&rules, &RuleTable::builtin()));
    }
}
