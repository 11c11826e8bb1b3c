//! Similarity between an original text and its hazed rendering.
//!
//! Whole texts and word pairs are compared with normalized Levenshtein
//! similarity over lowercased characters: `1 - distance / max_len`. The
//! ratio is symmetric, lies in [0, 1], and is 1 exactly when the lowercased
//! inputs are equal.

use strsim::normalized_levenshtein;
use unicode_segmentation::UnicodeSegmentation;

use crate::phonetic::{metaphone, soundex};
use crate::rules::is_word;
use crate::types::WordScore;

/// Similarity of two texts in [0, 1], ignoring case.
///
/// ```
/// use haze::similarity::score;
///
/// assert_eq!(score("hello world", "Hello World"), 1.0);
/// assert!(score("hello", "jelo") < 1.0);
/// ```
pub fn score(original: &str, transformed: &str) -> f64 {
    ratio(&original.to_lowercase(), &transformed.to_lowercase())
}

fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b).clamp(0.0, 1.0)
}

/// How alike two words sound, in [0, 1].
///
/// Blends Soundex, Metaphone, and spelling similarity (weights 0.4, 0.4, 0.2),
/// minus a tenth of the relative length difference.
pub fn phonetic_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let soundex_sim = ratio(&soundex(&a), &soundex(&b));
    let metaphone_sim = ratio(&metaphone(&a), &metaphone(&b));
    let string_sim = ratio(&a, &b);

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let longest = len_a.max(len_b).max(1);
    let len_penalty = len_a.abs_diff(len_b) as f64 / longest as f64;

    (soundex_sim * 0.4 + metaphone_sim * 0.4 + string_sim * 0.2 - len_penalty * 0.1)
        .clamp(0.0, 1.0)
}

/// The words of a text, in order.
pub fn words(text: &str) -> Vec<&str> {
    text.split_word_bounds().filter(|s| is_word(s)).collect()
}

/// Scores every word of `original` against a word of `transformed`.
///
/// With equal word counts, words pair up by position. Otherwise word `i`
/// pairs with transformed word `min(i, m - 1)`, where `m` is the transformed
/// word count. This clamping is an approximation, not a true alignment: an
/// inserted or dropped word shifts every later pairing. When `transformed` has
/// no words at all, each word aligns with the empty string and scores 0.
pub fn per_word_scores(original: &str, transformed: &str) -> Vec<WordScore> {
    let originals = words(original);
    let targets = words(transformed);

    originals
        .into_iter()
        .enumerate()
        .map(|(i, word)| match targets.get(i.min(targets.len().saturating_sub(1))) {
            Some(aligned) => WordScore {
                word: word.to_string(),
                aligned: (*aligned).to_string(),
                score: score(word, aligned),
                phonetic: phonetic_similarity(word, aligned),
            },
            None => WordScore {
                word: word.to_string(),
                aligned: String::new(),
                score: 0.0,
                phonetic: 0.0,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_texts_are_identical() {
        assert_eq!(score("", ""), 1.0);
    }

    #[test]
    fn completely_different_texts_score_zero() {
        assert_eq!(score("abc", "xyz"), 0.0);
    }

    #[test]
    fn identical_words_sound_identical() {
        assert_eq!(phonetic_similarity("hello", "HELLO"), 1.0);
    }
}
