//! Phonetic keys for sound-alike comparison.
//!
//! Two words that sound alike tend to share a key even when their spelling
//! differs, so comparing keys rates "fone" close to "phone".

/// American Soundex code: the first letter followed by three digits.
///
/// Letters with the same digit collapse when adjacent or separated only by
/// `h` or `w`; vowels separate them. Characters outside ASCII letters are
/// ignored, and a word without any letters yields `"0000"`.
///
/// ```
/// use haze::phonetic::soundex;
///
/// assert_eq!(soundex("Robert"), "R163");
/// assert_eq!(soundex("Rupert"), "R163");
/// assert_eq!(soundex("Ashcraft"), "A261");
/// ```
pub fn soundex(word: &str) -> String {
    let mut letters = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase());
    let Some(first) = letters.next() else {
        return "0000".to_string();
    };

    let mut code = String::with_capacity(4);
    code.push(first);
    let mut last = soundex_digit(first);
    for c in letters {
        if code.len() == 4 {
            break;
        }
        match soundex_digit(c) {
            Some(digit) => {
                if last != Some(digit) {
                    code.push(digit);
                }
                last = Some(digit);
            }
            None if c == 'H' || c == 'W' => {}
            None => last = None,
        }
    }

    while code.len() < 4 {
        code.push('0');
    }
    code
}

fn soundex_digit(c: char) -> Option<char> {
    match c {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}

/// Maximum length of a [`metaphone`] key.
pub const METAPHONE_LEN: usize = 6;

/// A simplified Metaphone key: the consonant skeleton of a word.
///
/// `PH` and `GH` become `F`, `CK` becomes `K`, `SCH` becomes `SK`; a vowel is
/// kept only in first position and repeated letters collapse.
///
/// ```
/// use haze::phonetic::metaphone;
///
/// assert_eq!(metaphone("phone"), "FN");
/// assert_eq!(metaphone("Apple"), "APL");
/// assert_eq!(metaphone("knight"), "KNFT");
/// ```
pub fn metaphone(word: &str) -> String {
    let upper: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect();
    let rewritten = upper
        .replace("PH", "F")
        .replace("GH", "F")
        .replace("CK", "K")
        .replace("SCH", "SK");

    let mut key = String::new();
    let mut prev: Option<char> = None;
    for c in rewritten.chars() {
        if is_vowel(c) {
            if key.is_empty() {
                key.push(c);
            }
        } else if prev != Some(c) {
            key.push(c);
        }
        prev = Some(c);
    }

    key.chars().take(METAPHONE_LEN).collect()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}
