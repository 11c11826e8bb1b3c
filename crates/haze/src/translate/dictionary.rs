//! Offline word-for-word translation.

use std::collections::{BTreeMap, HashMap};

use unicode_segmentation::UnicodeSegmentation;

use super::{TranslationError, Translator};
use crate::rules::{is_word, match_case};
use crate::types::LanguageTag;

const SPANISH_FRENCH: &[(&str, &str)] = &[
    ("casa", "maison"),
    ("agua", "eau"),
    ("fuego", "feu"),
    ("árbol", "arbre"),
    ("libro", "livre"),
    ("amigo", "ami"),
    ("perro", "chien"),
    ("gato", "chat"),
    ("rojo", "rouge"),
    ("azul", "bleu"),
    ("verde", "vert"),
    ("grande", "grand"),
];

const SPANISH_ITALIAN: &[(&str, &str)] = &[
    ("casa", "casa"),
    ("agua", "acqua"),
    ("fuego", "fuoco"),
    ("árbol", "albero"),
    ("libro", "libro"),
    ("amigo", "amico"),
    ("perro", "cane"),
    ("gato", "gatto"),
    ("rojo", "rosso"),
    ("azul", "blu"),
    ("verde", "verde"),
    ("grande", "grande"),
];

const GERMAN_FRENCH: &[(&str, &str)] = &[
    ("haus", "maison"),
    ("wasser", "eau"),
    ("feuer", "feu"),
    ("baum", "arbre"),
    ("buch", "livre"),
    ("freund", "ami"),
    ("hund", "chien"),
    ("katze", "chat"),
    ("rot", "rouge"),
    ("blau", "bleu"),
    ("grün", "vert"),
    ("groß", "grand"),
];

/// Word-for-word translation from a fixed dictionary.
///
/// Words are looked up case-insensitively and the translation takes the
/// case of the original word. Words missing from the dictionary pass through
/// unchanged. A direction with no dictionary at all fails with
/// [`TranslationError::UnsupportedPair`].
///
/// ```
/// use haze::LanguageTag;
/// use haze::translate::{DictionaryTranslator, Translator};
///
/// let dictionary = DictionaryTranslator::builtin();
/// let text = dictionary
///     .translate("El Perro azul", LanguageTag::Spanish, LanguageTag::French)
///     .unwrap();
/// assert_eq!(text, "El Chien bleu");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DictionaryTranslator {
    entries: BTreeMap<(LanguageTag, LanguageTag), HashMap<String, String>>,
}

impl DictionaryTranslator {
    /// Create a translator with no dictionaries.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in dictionaries: Spanish, French, Italian and German
    /// household words, in both directions.
    pub fn builtin() -> Self {
        Self::new()
            .with_pairs(LanguageTag::Spanish, LanguageTag::French, SPANISH_FRENCH)
            .with_pairs(LanguageTag::Spanish, LanguageTag::Italian, SPANISH_ITALIAN)
            .with_pairs(LanguageTag::German, LanguageTag::French, GERMAN_FRENCH)
    }

    /// Adds word pairs for `a → b` and their inverse for `b → a`.
    pub fn with_pairs(mut self, a: LanguageTag, b: LanguageTag, pairs: &[(&str, &str)]) -> Self {
        for (left, right) in pairs {
            self.insert(a, b, left, right);
            self.insert(b, a, right, left);
        }
        self
    }

    /// Adds one word translation for the `from → to` direction.
    pub fn insert(&mut self, from: LanguageTag, to: LanguageTag, word: &str, translation: &str) {
        self.entries
            .entry((from, to))
            .or_default()
            .insert(word.to_lowercase(), translation.to_string());
    }

    /// Whether a dictionary exists for `from → to`.
    pub fn supports(&self, from: LanguageTag, to: LanguageTag) -> bool {
        self.entries.contains_key(&(from, to))
    }
}

impl Translator for DictionaryTranslator {
    fn translate(
        &self,
        text: &str,
        from: LanguageTag,
        to: LanguageTag,
    ) -> Result<String, TranslationError> {
        let dictionary = self
            .entries
            .get(&(from, to))
            .ok_or(TranslationError::UnsupportedPair { from, to })?;

        Ok(text
            .split_word_bounds()
            .map(|segment| {
                if !is_word(segment) {
                    return segment.to_string();
                }
                match dictionary.get(&segment.to_lowercase()) {
                    Some(translation) => match_case(segment, translation),
                    None => segment.to_string(),
                }
            })
            .collect())
    }
}
