//! Repeated hazing until the text stops changing.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::{HazeError, InvalidInput};
use crate::hazer::Hazer;
use crate::similarity::score;
use crate::translate::Translator;
use crate::types::{TransformMethod, TransformationRequest};

/// When a rehaze run stops.
#[derive(Debug, Clone, Copy, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct RehazeOptions {
    /// Upper bound on the number of round trips, at least 1.
    #[builder(default = 20)]
    pub max_iterations: usize,

    /// Stop once consecutive outputs are at least this similar.
    #[builder(default = 0.96)]
    pub similarity_threshold: f64,
}

impl Default for RehazeOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RehazeOptions {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.max_iterations == 0 {
            return Err(InvalidInput::MaxIterations);
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(InvalidInput::Threshold(self.similarity_threshold));
        }
        Ok(())
    }
}

/// One round trip of a rehaze run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RehazeIteration {
    /// Position in the run, starting at 1.
    pub index: usize,
    pub input: String,
    pub output: String,
    /// Similarity of `output` to the previous iteration's output; absent for
    /// the first iteration.
    pub similarity_to_previous: Option<f64>,
    pub method_used: TransformMethod,
}

/// Why a rehaze run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RehazeStop {
    /// Consecutive outputs reached the similarity threshold.
    Converged,
    /// All `max_iterations` round trips ran.
    IterationLimit,
    /// An output had no text left to feed back in.
    EmptyOutput,
    /// An output grew past the configured input limit.
    OutputTooLong { length: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RehazeReport {
    pub iterations: Vec<RehazeIteration>,
    /// Whether the run stopped on the similarity threshold.
    pub converged: bool,
    pub stop: RehazeStop,
    pub final_text: String,
}

impl RehazeReport {
    /// Every iteration's output, one per line.
    pub fn transcript(&self) -> String {
        self.iterations
            .iter()
            .map(|it| it.output.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<T: Translator> Hazer<T> {
    /// Feeds each output back in as the next input.
    ///
    /// Every iteration is a full [`transform`](Self::transform) with the
    /// request's languages and method. The run stops when an output is at
    /// least `similarity_threshold` similar to the output before it, or after
    /// `max_iterations` round trips. An output that is empty or longer than
    /// the input limit cannot be fed back in, so it ends the run early with
    /// the iterations so far. Any failing iteration fails the run.
    ///
    /// ```
    /// use haze::{Hazer, LanguageTag, TransformMethod, TransformationRequest};
    /// use haze::rehaze::RehazeOptions;
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
    /// let report = hazer.rehaze(&request, &RehazeOptions::default()).unwrap();
    /// assert!(report.converged);
    /// assert_eq!(report.iterations[0].output, "helow world");
    /// ```
    pub fn rehaze(
        &self,
        request: &TransformationRequest,
        options: &RehazeOptions,
    ) -> Result<RehazeReport, HazeError> {
        options.validate()?;
        self.validate(request)?;

        let mut iterations = Vec::new();
        let mut current = request.text.clone();
        let mut stop = RehazeStop::IterationLimit;
        for index in 1..=options.max_iterations {
            let result = self.transform(&request.with_text(current.as_str()))?;
            let similarity_to_previous =
                (index > 1).then(|| score(&current, &result.bridged_text));
            let converged = similarity_to_previous
                .is_some_and(|similarity| similarity >= options.similarity_threshold);

            iterations.push(RehazeIteration {
                index,
                input: current,
                output: result.bridged_text.clone(),
                similarity_to_previous,
                method_used: result.method_used,
            });
            current = result.bridged_text;
            if converged {
                stop = RehazeStop::Converged;
                break;
            }
            if let Some(out_of_bounds) = self.out_of_bounds(&current) {
                stop = out_of_bounds;
                break;
            }
        }

        Ok(RehazeReport {
            iterations,
            converged: stop == RehazeStop::Converged,
            stop,
            final_text: current,
        })
    }

    fn out_of_bounds(&self, output: &str) -> Option<RehazeStop> {
        if output.trim().is_empty() {
            return Some(RehazeStop::EmptyOutput);
        }
        let length = output.chars().count();
        let max = self.config().max_input_chars;
        (length > max).then_some(RehazeStop::OutputTooLong { length, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = RehazeOptions::default();
        assert_eq!(options.max_iterations, 20);
        assert_eq!(options.similarity_threshold, 0.96);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn transcript_joins_outputs() {
        let iteration = |index: usize, output: &str| RehazeIteration {
            index,
            input: String::new(),
            output: output.to_string(),
            similarity_to_previous: None,
            method_used: TransformMethod::Fuzzy,
        };
        let report = RehazeReport {
            iterations: vec![iteration(1, "jelo"), iteration(2, "helow")],
            converged: false,
            stop: RehazeStop::IterationLimit,
            final_text: "helow".to_string(),
        };
        assert_eq!(report.transcript(), "jelo\nhelow");
    }

    #[test]
    fn rejects_bad_options() {
        let zero = RehazeOptions::builder().max_iterations(0).build();
        assert_eq!(zero.validate(), Err(InvalidInput::MaxIterations));

        let high = RehazeOptions::builder().similarity_threshold(1.5).build();
        assert_eq!(high.validate(), Err(InvalidInput::Threshold(1.5)));

        let nan = RehazeOptions::builder().similarity_threshold(f64::NAN).build();
        assert!(nan.validate().is_err());
    }
}
