//! Miette diagnostic wrapper for rule file parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use haze::rules::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::Path;
use thiserror::Error;

/// A miette-compatible diagnostic for rule file parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(haze::rules))]
pub struct HazeDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl HazeDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column) = err.position();
        let (message, help) = match err {
            ParseError::Syntax { message, .. } => (format!("syntax error: {message}"), None),
            ParseError::UnexpectedEof { .. } => (
                "unexpected end of file".to_string(),
                Some("a block may be missing its closing '}'".to_string()),
            ),
            ParseError::Language { error, .. } => (
                format!("unknown language '{}'", error.name),
                (!error.suggestions.is_empty())
                    .then(|| format!("did you mean: {}?", error.suggestions.join(", "))),
            ),
            ParseError::SameLanguage { language, .. } => (
                format!("{language} cannot bridge through itself"),
                None,
            ),
            ParseError::DuplicatePair {
                source_lang,
                bridge_lang,
                ..
            } => (
                format!("rules for {source_lang} → {bridge_lang} are already defined"),
                Some("merge both blocks into one".to_string()),
            ),
            ParseError::DuplicatePattern { pattern, .. } => (
                format!("duplicate pattern \"{pattern}\""),
                Some("remove one of the two rules".to_string()),
            ),
            ParseError::EmptyPattern { .. } => ("empty pattern".to_string(), None),
        };

        let offset = byte_offset(content, line, column);
        let len = content[offset..].chars().next().map_or(0, char::len_utf8);

        HazeDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, len).into(),
            message,
            help,
        }
    }
}

/// Converts a 1-based line and character column to a byte offset, clamped to
/// the content.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let line_start = line_start.min(content.len());
    let within_line = content[line_start..]
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(content.len() - line_start, |(i, _)| i);
    line_start + within_line
}
