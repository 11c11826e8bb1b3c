//! The transformation dispatcher.

use std::sync::Arc;

use crate::config::HazeConfig;
use crate::error::{HazeError, InvalidInput};
use crate::rules::{RuleTable, apply_rules};
use crate::similarity::{per_word_scores, score};
use crate::translate::Translator;
use crate::types::{
    ChainStep, LanguageTag, TransformMethod, TransformationRequest, TransformationResult,
};
use crate::wordlist::WordList;

/// Runs text through a bridge language and back.
///
/// A `Hazer` holds no per-request state, so one instance can serve any
/// number of threads when its translator allows it. The rule table is shared
/// through an [`Arc`].
///
/// # Example
///
/// ```
/// use haze::{Hazer, LanguageTag, TransformMethod, TransformationRequest};
/// use haze::rules::RuleTable;
/// use haze::translate::UnavailableTranslator;
///
/// let hazer = Hazer::new(RuleTable::builtin(), UnavailableTranslator);
/// let request = TransformationRequest::new(
///     "hello world",
///     LanguageTag::English,
///     LanguageTag::Spanish,
///     TransformMethod::Fuzzy,
/// );
///
/// let result = hazer.transform(&request).unwrap();
/// assert_eq!(result.intermediate_text, "jelo guorld");
/// assert_eq!(result.bridged_text, "helow world");
/// ```
#[derive(Debug, Clone)]
pub struct Hazer<T> {
    rules: Arc<RuleTable>,
    translator: T,
    config: HazeConfig,
}

/// Both stages of a round trip and the method that produced them.
struct RoundTrip {
    there: ChainStep,
    back: ChainStep,
    method: TransformMethod,
}

impl<T: Translator> Hazer<T> {
    /// Create a hazer with the default configuration.
    pub fn new(rules: Arc<RuleTable>, translator: T) -> Self {
        Self::with_config(rules, translator, HazeConfig::default())
    }

    pub fn with_config(rules: Arc<RuleTable>, translator: T, config: HazeConfig) -> Self {
        Self {
            rules,
            translator,
            config,
        }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    pub fn config(&self) -> &HazeConfig {
        &self.config
    }

    /// Checks a request without transforming it.
    pub fn validate(&self, request: &TransformationRequest) -> Result<(), InvalidInput> {
        if request.text.trim().is_empty() {
            return Err(InvalidInput::Empty);
        }
        let length = request.text.chars().count();
        if length > self.config.max_input_chars {
            return Err(InvalidInput::TooLong {
                length,
                max: self.config.max_input_chars,
            });
        }
        if request.source_lang == request.bridge_lang {
            return Err(InvalidInput::SameLanguage(request.source_lang));
        }
        Ok(())
    }

    /// Transforms `request.text` with the requested method.
    ///
    /// # Errors
    ///
    /// - [`HazeError::InvalidInput`] if the request fails [`validate`](Self::validate).
    /// - [`HazeError::UnsupportedLanguagePair`] for a fuzzy request on a pair
    ///   without rules in both directions.
    /// - [`HazeError::TranslationService`] if translation was needed and failed.
    pub fn transform(
        &self,
        request: &TransformationRequest,
    ) -> Result<TransformationResult, HazeError> {
        self.validate(request)?;

        let text = request.text.as_str();
        let (source, bridge) = (request.source_lang, request.bridge_lang);
        let trip = match request.method {
            TransformMethod::Fuzzy => self.fuzzy(text, source, bridge)?,
            TransformMethod::Translate => self.translate(text, source, bridge)?,
            TransformMethod::Hybrid => self.hybrid(text, source, bridge)?,
        };

        let similarity = score(text, &trip.back.output);
        let word_scores = per_word_scores(text, &trip.back.output);
        Ok(TransformationResult {
            original_text: request.text.clone(),
            bridged_text: trip.back.output.clone(),
            intermediate_text: trip.there.output.clone(),
            chain: vec![trip.there, trip.back],
            similarity,
            word_scores,
            requested_method: request.method,
            method_used: trip.method,
        })
    }

    fn fuzzy(
        &self,
        text: &str,
        source: LanguageTag,
        bridge: LanguageTag,
    ) -> Result<RoundTrip, HazeError> {
        let intermediate = self.fuzzy_stage(text, source, bridge)?;
        let output = self.fuzzy_stage(&intermediate, bridge, source)?;
        Ok(RoundTrip::new(
            TransformMethod::Fuzzy,
            source,
            bridge,
            text,
            intermediate,
            output,
        ))
    }

    fn fuzzy_stage(
        &self,
        text: &str,
        from: LanguageTag,
        to: LanguageTag,
    ) -> Result<String, HazeError> {
        let spelled = apply_rules(&self.rules, text, from, to)?;
        if self.config.snap_to_words {
            Ok(WordList::builtin(to).snap(&spelled))
        } else {
            Ok(spelled)
        }
    }

    /// One attempt per direction; a failure is never retried here.
    fn translate(
        &self,
        text: &str,
        source: LanguageTag,
        bridge: LanguageTag,
    ) -> Result<RoundTrip, HazeError> {
        let intermediate = self.translator.translate(text, source, bridge)?;
        let output = self.translator.translate(&intermediate, bridge, source)?;
        Ok(RoundTrip::new(
            TransformMethod::Translate,
            source,
            bridge,
            text,
            intermediate,
            output,
        ))
    }

    /// Fuzzy first; translation when the pair has no rules or the round trip
    /// gave back the input unchanged.
    fn hybrid(
        &self,
        text: &str,
        source: LanguageTag,
        bridge: LanguageTag,
    ) -> Result<RoundTrip, HazeError> {
        match self.fuzzy(text, source, bridge) {
            Ok(trip) if trip.back.output != text => Ok(trip),
            Ok(_) | Err(HazeError::UnsupportedLanguagePair { .. }) => {
                self.translate(text, source, bridge)
            }
            Err(other) => Err(other),
        }
    }
}

impl RoundTrip {
    fn new(
        method: TransformMethod,
        source: LanguageTag,
        bridge: LanguageTag,
        input: &str,
        intermediate: String,
        output: String,
    ) -> Self {
        Self {
            there: ChainStep {
                from: source,
                to: bridge,
                method,
                input: input.to_string(),
                output: intermediate.clone(),
            },
            back: ChainStep {
                from: bridge,
                to: source,
                method,
                input: intermediate,
                output,
            },
            method,
        }
    }
}
