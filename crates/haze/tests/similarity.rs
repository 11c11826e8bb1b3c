//! Tests for similarity scoring

use haze::similarity::{per_word_scores, phonetic_similarity, score, words};
use proptest::prelude::*;

#[test]
fn test_identical_texts_score_one() {
    assert_eq!(score("hello world", "hello world"), 1.0);
}

#[test]
fn test_case_is_ignored() {
    assert_eq!(score("Hello World", "hello world"), 1.0);
}

#[test]
fn test_two_edits() {
    // "hello" -> "helow" is two substitutions; both texts are 11 characters
    let expected = 1.0 - 2.0 / 11.0;
    assert!((score("hello world", "helow world") - expected).abs() < 1e-9);
}

#[test]
fn test_words_skip_punctuation() {
    assert_eq!(words("Hello, big world!"), vec!["Hello", "big", "world"]);
    assert!(words(" ... ").is_empty());
}

#[test]
fn test_per_word_scores_pair_by_position() {
    let scores = per_word_scores("hello world", "helow world");
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].word, "hello");
    assert_eq!(scores[0].aligned, "helow");
    assert_eq!(scores[1].aligned, "world");
    assert_eq!(scores[1].score, 1.0);
    assert_eq!(scores[1].phonetic, 1.0);
}

#[test]
fn test_per_word_scores_clamp_to_last_word() {
    let scores = per_word_scores("one two three", "uno dos");
    let aligned: Vec<&str> = scores.iter().map(|s| s.aligned.as_str()).collect();
    assert_eq!(aligned, vec!["uno", "dos", "dos"]);
}

#[test]
fn test_per_word_scores_without_transformed_words() {
    let scores = per_word_scores("hello world", "!?");
    assert_eq!(scores.len(), 2);
    assert!(scores.iter().all(|s| s.aligned.is_empty() && s.score == 0.0));
}

#[test]
fn test_sound_alikes_beat_spelling() {
    assert!(phonetic_similarity("phone", "fone") > score("phone", "fone"));
    assert!(phonetic_similarity("robert", "rupert") > phonetic_similarity("robert", "alice"));
}

proptest! {
    #[test]
    fn score_is_bounded(a in "\\PC{0,40}", b in "\\PC{0,40}") {
        let s = score(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn score_is_symmetric(a in "[a-zA-Z ]{0,30}", b in "[a-zA-Z ]{0,30}") {
        prop_assert_eq!(score(&a, &b), score(&b, &a));
    }

    #[test]
    fn text_is_identical_to_itself(a in "\\PC{0,40}") {
        prop_assert_eq!(score(&a, &a), 1.0);
    }

    #[test]
    fn phonetic_similarity_is_bounded(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        let s = phonetic_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn one_alignment_per_original_word(a in "[a-z ]{0,40}", b in "[a-z ]{0,40}") {
        prop_assert_eq!(per_word_scores(&a, &b).len(), words(&a).len());
    }
}
