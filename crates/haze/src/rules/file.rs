//! Rule file format parser.
//!
//! A rule file is a sequence of blocks, one per direction:
//!
//! ```text
//! // comment
//! english -> spanish {
//!     "ph" => "f";
//!     "^h" => "j";
//! }
//! ```

use std::str::FromStr;

use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_while};

use super::ast::{PhoneticRule, RuleSet};
use super::error::ParseError;
use crate::types::LanguageTag;

/// Parse an entire rule file into rule sets, in file order.
///
/// Besides syntax, this rejects unknown languages, blocks that bridge a
/// language through itself, repeated directions, repeated patterns within a
/// block, and empty patterns.
pub fn parse_file(input: &str) -> Result<Vec<RuleSet>, ParseError> {
    let mut remaining = input;
    let mut sets: Vec<RuleSet> = Vec::new();

    skip(input, &mut remaining)?;
    while !remaining.is_empty() {
        let block_at = remaining;
        let set = block(input, &mut remaining)?;
        if sets
            .iter()
            .any(|existing| existing.source == set.source && existing.bridge == set.bridge)
        {
            let (line, column) = calculate_position(input, block_at);
            return Err(ParseError::DuplicatePair {
                line,
                column,
                source_lang: set.source,
                bridge_lang: set.bridge,
            });
        }
        sets.push(set);
        skip(input, &mut remaining)?;
    }

    Ok(sets)
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos + 1..].chars().count() + 1,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

fn syntax_error(original: &str, remaining: &str, expected: &str) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    match remaining.chars().next() {
        Some(found) => ParseError::Syntax {
            line,
            column,
            message: format!("expected {expected}, found '{found}'"),
        },
        None => ParseError::UnexpectedEof { line, column },
    }
}

/// Runs `parser`, turning a failure into a positioned syntax error.
fn run<'i, O>(
    original: &str,
    remaining: &mut &'i str,
    mut parser: impl Parser<&'i str, O, ErrMode<ContextError>>,
    expected: &str,
) -> Result<O, ParseError> {
    let before = *remaining;
    parser.parse_next(remaining).map_err(|_| {
        *remaining = before;
        syntax_error(original, before, expected)
    })
}

fn skip(original: &str, remaining: &mut &str) -> Result<(), ParseError> {
    run(original, remaining, skip_ws_and_comments, "whitespace")
}

/// Parse one `source -> bridge { ... }` block.
fn block(original: &str, remaining: &mut &str) -> Result<RuleSet, ParseError> {
    let source = language(original, remaining)?;
    skip(original, remaining)?;
    run(original, remaining, "->", "'->'")?;
    skip(original, remaining)?;

    let bridge_at = *remaining;
    let bridge = language(original, remaining)?;
    if source == bridge {
        let (line, column) = calculate_position(original, bridge_at);
        return Err(ParseError::SameLanguage {
            line,
            column,
            language: bridge,
        });
    }
    skip(original, remaining)?;
    run(original, remaining, '{', "'{'")?;

    let mut set = RuleSet::new(source, bridge);
    loop {
        skip(original, remaining)?;
        if remaining.is_empty() {
            return Err(syntax_error(original, remaining, "'}'"));
        }
        if let Some(rest) = remaining.strip_prefix('}') {
            *remaining = rest;
            break;
        }

        let rule_at = *remaining;
        let (written, replacement) = run(original, remaining, rule_entry, "a rule")?;
        let rule = PhoneticRule::parse_written(&written, replacement);
        let (line, column) = calculate_position(original, rule_at);
        if rule.pattern.is_empty() {
            return Err(ParseError::EmptyPattern { line, column });
        }
        set.push(rule).map_err(|dup| ParseError::DuplicatePattern {
            line,
            column,
            pattern: dup.pattern,
        })?;
    }

    Ok(set)
}

fn language(original: &str, remaining: &mut &str) -> Result<LanguageTag, ParseError> {
    let at = *remaining;
    let name = run(original, remaining, language_name, "a language name")?;
    LanguageTag::from_str(name).map_err(|error| {
        let (line, column) = calculate_position(original, at);
        ParseError::Language {
            line,
            column,
            error,
        }
    })
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

fn language_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphabetic()).parse_next(input)
}

/// Parse a rule: "pattern" => "replacement";
fn rule_entry(input: &mut &str) -> ModalResult<(String, String)> {
    let pattern = quoted(input)?;
    skip_ws_and_comments(input)?;
    "=>".parse_next(input)?;
    skip_ws_and_comments(input)?;
    let replacement = quoted(input)?;
    skip_ws_and_comments(input)?;
    ';'.parse_next(input)?;
    Ok((pattern, replacement))
}

/// Parse a double-quoted string with `\"` and `\\` escapes.
fn quoted(input: &mut &str) -> ModalResult<String> {
    delimited('"', repeat(0.., string_char), '"').parse_next(input)
}

fn string_char(input: &mut &str) -> ModalResult<char> {
    alt((preceded('\\', one_of(['"', '\\'])), none_of(['"', '\\', '\n']))).parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_counts_characters_not_bytes() {
        let input = "ñañ\nxy";
        assert_eq!(calculate_position(input, &input[input.len() - 1..]), (2, 2));
        assert_eq!(calculate_position(input, &input[2..]), (1, 2));
    }
}
