//! Integration tests for applying phonetic rules

use haze::rules::{Anchor, PhoneticRule, RuleSet, RuleTable, apply_rules};
use haze::{HazeError, LanguageTag};

fn english_spanish(text: &str) -> String {
    apply_rules(&RuleTable::builtin(), text, LanguageTag::English, LanguageTag::Spanish).unwrap()
}

fn spanish_english(text: &str) -> String {
    apply_rules(&RuleTable::builtin(), text, LanguageTag::Spanish, LanguageTag::English).unwrap()
}

#[test]
fn test_hello_world_round_trip() {
    let spanish = english_spanish("hello world");
    assert_eq!(spanish, "jelo guorld");
    assert_eq!(spanish_english(&spanish), "helow world");
}

#[test]
fn test_capitalized_words_stay_capitalized() {
    let spanish = english_spanish("Hello World");
    assert_eq!(spanish, "Jelo Guorld");
    assert_eq!(spanish_english(&spanish), "Helow World");
}

#[test]
fn test_shouted_words_stay_shouted() {
    let spanish = english_spanish("HELLO WORLD");
    assert_eq!(spanish, "JELO GUORLD");
    assert_eq!(spanish_english(&spanish), "HELOW WORLD");
}

#[test]
fn test_punctuation_and_spacing_pass_through() {
    assert_eq!(english_spanish("hello,  world!"), "jelo,  guorld!");
    assert_eq!(english_spanish("  \t"), "  \t");
}

#[test]
fn test_unmatched_word_is_unchanged() {
    assert_eq!(english_spanish("sun"), "sun");
    assert_eq!(spanish_english("sun"), "sun");
}

#[test]
fn test_rules_apply_in_order() {
    let mut set = RuleSet::new(LanguageTag::English, LanguageTag::Spanish);
    set.push(PhoneticRule::new("a", "b", Anchor::Anywhere)).unwrap();
    set.push(PhoneticRule::new("b", "c", Anchor::Anywhere)).unwrap();
    assert_eq!(set.apply("ab"), "cc");

    let mut reversed = RuleSet::new(LanguageTag::English, LanguageTag::Spanish);
    reversed.push(PhoneticRule::new("b", "c", Anchor::Anywhere)).unwrap();
    reversed.push(PhoneticRule::new("a", "b", Anchor::Anywhere)).unwrap();
    assert_eq!(reversed.apply("ab"), "bc");
}

#[test]
fn test_anchors_limit_matches() {
    let mut set = RuleSet::new(LanguageTag::English, LanguageTag::French);
    set.push(PhoneticRule::parse_written("^h", "")).unwrap();
    set.push(PhoneticRule::parse_written("y$", "i")).unwrap();
    assert_eq!(set.apply("hihy yay"), "ihi yai");
}

#[test]
fn test_whole_word_anchor() {
    let mut set = RuleSet::new(LanguageTag::English, LanguageTag::French);
    set.push(PhoneticRule::parse_written("^the$", "le")).unwrap();
    assert_eq!(set.apply("the theme"), "le theme");
}

#[test]
fn test_anchors_apply_per_word() {
    let mut set = RuleSet::new(LanguageTag::English, LanguageTag::Spanish);
    set.push(PhoneticRule::parse_written("^h", "j")).unwrap();
    assert_eq!(set.apply("oh hello"), "oh jello");
}

#[test]
fn test_trace_word_records_each_firing_rule() {
    let table = RuleTable::builtin();
    let set = table.get(LanguageTag::English, LanguageTag::Spanish).unwrap();
    let hits = set.trace_word("hello");
    let steps: Vec<(String, &str, &str)> = hits
        .iter()
        .map(|hit| (hit.rule.written_pattern(), hit.before.as_str(), hit.after.as_str()))
        .collect();
    assert_eq!(
        steps,
        vec![
            ("^h".to_string(), "hello", "jello"),
            ("ll".to_string(), "jello", "jelo"),
        ]
    );
}

#[test]
fn test_unsupported_direction() {
    let err = apply_rules(
        &RuleTable::builtin(),
        "hallo",
        LanguageTag::German,
        LanguageTag::Portuguese,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        HazeError::UnsupportedLanguagePair {
            source_lang: LanguageTag::German,
            bridge_lang: LanguageTag::Portuguese,
        }
    ));
}

#[test]
fn test_application_is_deterministic() {
    let text = "The quick brown fox, the phone, the knight.";
    assert_eq!(english_spanish(text), english_spanish(text));
}
