//! Built-in vocabularies and nearest-word search.
//!
//! Each [`LanguageTag`] has a small embedded list of common words, one per
//! line. Snapping replaces every word of a text with the list word that
//! sounds most like it, so a phonetic rendering lands on real words.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use unicode_segmentation::UnicodeSegmentation;

use crate::rules::{is_word, match_case};
use crate::similarity::phonetic_similarity;
use crate::types::LanguageTag;

static ENGLISH: LazyLock<WordList> =
    LazyLock::new(|| WordList::parse(LanguageTag::English, include_str!("words/english.txt")));
static SPANISH: LazyLock<WordList> =
    LazyLock::new(|| WordList::parse(LanguageTag::Spanish, include_str!("words/spanish.txt")));
static FRENCH: LazyLock<WordList> =
    LazyLock::new(|| WordList::parse(LanguageTag::French, include_str!("words/french.txt")));
static GERMAN: LazyLock<WordList> =
    LazyLock::new(|| WordList::parse(LanguageTag::German, include_str!("words/german.txt")));
static ITALIAN: LazyLock<WordList> =
    LazyLock::new(|| WordList::parse(LanguageTag::Italian, include_str!("words/italian.txt")));
static PORTUGUESE: LazyLock<WordList> = LazyLock::new(|| {
    WordList::parse(LanguageTag::Portuguese, include_str!("words/portuguese.txt"))
});

/// A list word chosen as the closest match for some input word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordMatch<'a> {
    pub word: &'a str,
    /// [`phonetic_similarity`] between the input and `word`.
    pub similarity: f64,
}

/// The vocabulary of one language, lowercased, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    language: LanguageTag,
    words: Vec<String>,
}

impl WordList {
    /// Read one word per line; blank lines and `#` comments are skipped and
    /// repeated words keep their first position.
    ///
    /// ```
    /// use haze::LanguageTag;
    /// use haze::wordlist::WordList;
    ///
    /// let list = WordList::parse(LanguageTag::English, "# pets\nCat\ndog\ncat\n");
    /// assert_eq!(list.words().collect::<Vec<_>>(), ["cat", "dog"]);
    /// ```
    pub fn parse(language: LanguageTag, source: &str) -> Self {
        let mut seen = BTreeSet::new();
        let words = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .filter(|word| seen.insert(word.clone()))
            .collect();
        Self { language, words }
    }

    /// The embedded list for `language`.
    pub fn builtin(language: LanguageTag) -> &'static WordList {
        match language {
            LanguageTag::English => &ENGLISH,
            LanguageTag::Spanish => &SPANISH,
            LanguageTag::French => &FRENCH,
            LanguageTag::German => &GERMAN,
            LanguageTag::Italian => &ITALIAN,
            LanguageTag::Portuguese => &PORTUGUESE,
        }
    }

    pub fn language(&self) -> LanguageTag {
        self.language
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is on the list, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.iter().any(|w| *w == word)
    }

    /// The list word that sounds most like `word`, other than `word` itself.
    ///
    /// Ties go to the word listed first. Returns `None` when the list holds
    /// no other word.
    pub fn nearest(&self, word: &str) -> Option<WordMatch<'_>> {
        let target = word.to_lowercase();
        let mut best: Option<WordMatch<'_>> = None;
        for candidate in &self.words {
            if *candidate == target {
                continue;
            }
            let similarity = phonetic_similarity(&target, candidate);
            if best.is_none_or(|b| similarity > b.similarity) {
                best = Some(WordMatch {
                    word: candidate,
                    similarity,
                });
            }
        }
        best
    }

    /// Replaces every word of `text` with its [`nearest`](Self::nearest)
    /// match, written in the case of the word it replaces.
    pub fn snap(&self, text: &str) -> String {
        text.split_word_bounds()
            .map(|segment| {
                let found = is_word(segment).then(|| self.nearest(segment)).flatten();
                match found {
                    Some(found) => match_case(segment, found.word),
                    None => segment.to_string(),
                }
            })
            .collect()
    }
}

/// The built-in `language` word closest in sound to `word`, never `word`
/// itself.
///
/// ```
/// use haze::LanguageTag;
/// use haze::wordlist::nearest_word;
///
/// let found = nearest_word("helo", LanguageTag::English).unwrap();
/// assert_eq!(found.word, "hello");
/// ```
pub fn nearest_word(word: &str, language: LanguageTag) -> Option<WordMatch<'static>> {
    WordList::builtin(language).nearest(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_list() {
        for language in LanguageTag::ALL {
            let list = WordList::builtin(language);
            assert_eq!(list.language(), language);
            assert!(list.len() > 100, "{language} list is too short");
        }
    }

    #[test]
    fn nearest_skips_exact_match() {
        let list = WordList::parse(LanguageTag::English, "cat\ncart\n");
        assert_eq!(list.nearest("CAT").map(|m| m.word), Some("cart"));
    }

    #[test]
    fn nearest_on_single_word_list() {
        let list = WordList::parse(LanguageTag::English, "cat");
        assert_eq!(list.nearest("cat"), None);
        assert_eq!(list.nearest("bat").map(|m| m.word), Some("cat"));
    }

    #[test]
    fn snap_keeps_spacing_and_case() {
        let list = WordList::parse(LanguageTag::English, "hello\ncart\n");
        assert_eq!(list.snap("Helo, cat!"), "Hello, cart!");
    }
}
