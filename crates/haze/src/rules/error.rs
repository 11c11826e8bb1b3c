//! Rule file error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{LanguageTag, UnknownLanguage};

/// An error that occurred while parsing a rule file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Unexpected end of input.
    #[error("unexpected end of input at {line}:{column}")]
    UnexpectedEof { line: usize, column: usize },

    /// A block header names a language that does not exist.
    #[error("{line}:{column}: {error}")]
    Language {
        line: usize,
        column: usize,
        error: UnknownLanguage,
    },

    /// A block maps a language onto itself.
    #[error("{line}:{column}: {language} cannot bridge through itself")]
    SameLanguage {
        line: usize,
        column: usize,
        language: LanguageTag,
    },

    /// Two blocks cover the same direction.
    #[error("{line}:{column}: rules for {source_lang} → {bridge_lang} are already defined")]
    DuplicatePair {
        line: usize,
        column: usize,
        source_lang: LanguageTag,
        bridge_lang: LanguageTag,
    },

    /// Two rules in a block share pattern and anchor.
    #[error("{line}:{column}: duplicate pattern \"{pattern}\"")]
    DuplicatePattern {
        line: usize,
        column: usize,
        pattern: String,
    },

    /// A pattern with no characters besides anchors.
    #[error("{line}:{column}: empty pattern")]
    EmptyPattern { line: usize, column: usize },
}

impl ParseError {
    /// The 1-based line and column the error points at.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. }
            | ParseError::UnexpectedEof { line, column }
            | ParseError::Language { line, column, .. }
            | ParseError::SameLanguage { line, column, .. }
            | ParseError::DuplicatePair { line, column, .. }
            | ParseError::DuplicatePattern { line, column, .. }
            | ParseError::EmptyPattern { line, column } => (*line, *column),
        }
    }
}

/// Errors that occur while loading a rule file from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the rule file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error, with the file it came from.
    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}
