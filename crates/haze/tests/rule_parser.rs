//! Integration tests for rule file parsing

use haze::LanguageTag;
use haze::rules::{Anchor, BUILTIN_RULES, ParseError, RuleTable, parse_file};

#[test]
fn test_single_block() {
    let sets = parse_file(r#"english -> spanish { "ph" => "f"; }"#).unwrap();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].source, LanguageTag::English);
    assert_eq!(sets[0].bridge, LanguageTag::Spanish);
    assert_eq!(sets[0].len(), 1);
    assert_eq!(sets[0].rules()[0].pattern, "ph");
    assert_eq!(sets[0].rules()[0].replacement, "f");
    assert_eq!(sets[0].rules()[0].anchor, Anchor::Anywhere);
}

#[test]
fn test_rules_keep_file_order() {
    let sets = parse_file(
        r#"
        english -> spanish {
            "th" => "z";
            "ph" => "f";
            "k" => "c";
        }
    "#,
    )
    .unwrap();
    let patterns: Vec<&str> = sets[0].rules().iter().map(|r| r.pattern.as_str()).collect();
    assert_eq!(patterns, vec!["th", "ph", "k"]);
}

#[test]
fn test_anchors() {
    let sets = parse_file(
        r#"
        english -> french {
            "^h" => "";
            "er$" => "eur";
            "^a$" => "un";
        }
    "#,
    )
    .unwrap();
    let anchors: Vec<Anchor> = sets[0].rules().iter().map(|r| r.anchor).collect();
    assert_eq!(anchors, vec![Anchor::Initial, Anchor::Final, Anchor::Whole]);
    assert_eq!(sets[0].rules()[0].written_pattern(), "^h");
    assert_eq!(sets[0].rules()[1].written_pattern(), "er$");
}

#[test]
fn test_patterns_are_case_folded() {
    let sets = parse_file(r#"english -> spanish { "PH" => "F"; }"#).unwrap();
    assert_eq!(sets[0].rules()[0].pattern, "ph");
    assert_eq!(sets[0].rules()[0].replacement, "F");
}

#[test]
fn test_language_codes_and_comments() {
    let sets = parse_file(
        r#"
        // header comment
        en -> es { // trailing comment
            "w" => "gu"; // per-rule comment
        }
        es -> en {}
    "#,
    )
    .unwrap();
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[1].source, LanguageTag::Spanish);
    assert!(sets[1].is_empty());
}

#[test]
fn test_escapes_in_strings() {
    let sets = parse_file(r#"english -> spanish { "\"" => "\\"; }"#).unwrap();
    assert_eq!(sets[0].rules()[0].pattern, "\"");
    assert_eq!(sets[0].rules()[0].replacement, "\\");
}

#[test]
fn test_empty_file() {
    assert!(parse_file("").unwrap().is_empty());
    assert!(parse_file("  // nothing here\n").unwrap().is_empty());
}

#[test]
fn test_unknown_language_suggests() {
    let err = parse_file(r#"englsh -> spanish {}"#).unwrap_err();
    match err {
        ParseError::Language {
            line,
            column,
            error,
        } => {
            assert_eq!((line, column), (1, 1));
            assert_eq!(error.name, "englsh");
            assert_eq!(error.suggestions, vec!["english"]);
        }
        other => panic!("expected language error, got {other:?}"),
    }
}

#[test]
fn test_same_language_block() {
    let err = parse_file("spanish -> spanish {}").unwrap_err();
    assert_eq!(
        err,
        ParseError::SameLanguage {
            line: 1,
            column: 12,
            language: LanguageTag::Spanish,
        }
    );
}

#[test]
fn test_duplicate_pair() {
    let err = parse_file("english -> spanish {}\nenglish -> spanish {}").unwrap_err();
    assert_eq!(
        err,
        ParseError::DuplicatePair {
            line: 2,
            column: 1,
            source_lang: LanguageTag::English,
            bridge_lang: LanguageTag::Spanish,
        }
    );
}

#[test]
fn test_duplicate_pattern() {
    let err = parse_file(
        "english -> spanish {\n    \"ph\" => \"f\";\n    \"PH\" => \"ff\";\n}",
    )
    .unwrap_err();
    assert_eq!(
        err,
        ParseError::DuplicatePattern {
            line: 3,
            column: 5,
            pattern: "ph".to_string(),
        }
    );
}

#[test]
fn test_same_pattern_with_different_anchor_is_allowed() {
    let sets = parse_file(r#"english -> spanish { "h" => "j"; "^h" => "j"; }"#).unwrap();
    assert_eq!(sets[0].len(), 2);
}

#[test]
fn test_empty_pattern() {
    let err = parse_file(r#"english -> spanish { "^$" => "x"; }"#).unwrap_err();
    assert_eq!(err, ParseError::EmptyPattern { line: 1, column: 22 });
}

#[test]
fn test_missing_semicolon() {
    let err = parse_file(r#"english -> spanish { "ph" => "f" }"#).unwrap_err();
    assert!(matches!(err, ParseError::Syntax { line: 1, column: 22, .. }));
}

#[test]
fn test_missing_arrow() {
    let err = parse_file("english spanish {}").unwrap_err();
    match err {
        ParseError::Syntax {
            line,
            column,
            message,
        } => {
            assert_eq!((line, column), (1, 9));
            assert_eq!(message, "expected '->', found 's'");
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_unclosed_block() {
    let err = parse_file("english -> spanish {\n  \"ph\" => \"f\";\n").unwrap_err();
    assert_eq!(err, ParseError::UnexpectedEof { line: 3, column: 1 });
}

#[test]
fn test_error_display_has_position() {
    let err = parse_file("english -> spanish {\n  x\n}").unwrap_err();
    assert_eq!(err.position(), (2, 3));
    assert!(err.to_string().starts_with("syntax error at 2:3"));
}

#[test]
fn test_builtin_rules_parse() {
    let table = RuleTable::parse(BUILTIN_RULES).unwrap();
    assert_eq!(table.len(), 20);
    assert!(table.supports_round_trip(LanguageTag::English, LanguageTag::Spanish));
    assert!(table.supports_round_trip(LanguageTag::French, LanguageTag::German));
    assert!(!table.supports_round_trip(LanguageTag::German, LanguageTag::Portuguese));
    assert!(!table.supports_round_trip(LanguageTag::Italian, LanguageTag::Portuguese));
}
