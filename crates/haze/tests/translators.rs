//! Tests for the translation collaborators

use std::sync::Arc;

use haze::rules::RuleTable;
use haze::translate::{
    DictionaryTranslator, FallbackTranslator, TranslationError, Translator, UnavailableTranslator,
};
use haze::{Hazer, LanguageTag, TransformMethod, TransformationRequest};

#[test]
fn test_dictionary_translates_known_words() {
    let dictionary = DictionaryTranslator::builtin();
    let text = dictionary
        .translate("el gato rojo", LanguageTag::Spanish, LanguageTag::Italian)
        .unwrap();
    assert_eq!(text, "el gatto rosso");
}

#[test]
fn test_dictionary_works_in_both_directions() {
    let dictionary = DictionaryTranslator::builtin();
    assert_eq!(
        dictionary
            .translate("Chien, chat!", LanguageTag::French, LanguageTag::German)
            .unwrap(),
        "Hund, katze!"
    );
    assert_eq!(
        dictionary
            .translate("HUND", LanguageTag::German, LanguageTag::French)
            .unwrap(),
        "CHIEN"
    );
}

#[test]
fn test_dictionary_without_pair() {
    let dictionary = DictionaryTranslator::builtin();
    assert!(!dictionary.supports(LanguageTag::English, LanguageTag::Spanish));
    assert_eq!(
        dictionary.translate("dog", LanguageTag::English, LanguageTag::Spanish),
        Err(TranslationError::UnsupportedPair {
            from: LanguageTag::English,
            to: LanguageTag::Spanish,
        })
    );
}

#[test]
fn test_custom_dictionary() {
    let dictionary = DictionaryTranslator::new().with_pairs(
        LanguageTag::English,
        LanguageTag::Spanish,
        &[("dog", "perro"), ("house", "casa")],
    );
    assert_eq!(
        dictionary
            .translate("Dog house", LanguageTag::English, LanguageTag::Spanish)
            .unwrap(),
        "Perro casa"
    );
    assert_eq!(
        dictionary
            .translate("perro", LanguageTag::Spanish, LanguageTag::English)
            .unwrap(),
        "dog"
    );
}

#[test]
fn test_fallback_uses_secondary_on_failure() {
    let translator =
        FallbackTranslator::new(UnavailableTranslator, DictionaryTranslator::builtin());
    assert_eq!(
        translator
            .translate("perro", LanguageTag::Spanish, LanguageTag::French)
            .unwrap(),
        "chien"
    );
}

#[test]
fn test_fallback_reports_primary_error() {
    let translator =
        FallbackTranslator::new(UnavailableTranslator, DictionaryTranslator::builtin());
    assert_eq!(
        translator.translate("dog", LanguageTag::English, LanguageTag::German),
        Err(TranslationError::Unavailable)
    );
}

#[test]
fn test_hazer_with_shared_dictionary() {
    let dictionary = Arc::new(DictionaryTranslator::builtin());
    let hazer = Hazer::new(RuleTable::builtin(), Arc::clone(&dictionary));
    let result = hazer
        .transform(&TransformationRequest::new(
            "el perro azul",
            LanguageTag::Spanish,
            LanguageTag::French,
            TransformMethod::Translate,
        ))
        .unwrap();
    assert_eq!(result.intermediate_text, "el chien bleu");
    assert_eq!(result.bridged_text, "el perro azul");
    assert_eq!(result.similarity, 1.0);
}
