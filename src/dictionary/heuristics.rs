//! Shape checks for words missing from the curated lists
//!
//! These are a permissive safety net for when the curated guess list is not
//! available. They catch keyboard mashing, not every non-word.

use crate::core::Word;

/// Vowels for the "has a vowel" check (`y` counts)
const VOWELS_WITH_Y: &[u8] = b"aeiouy";

/// Vowels for run-length checks (`y` is a consonant here)
const VOWELS: &[u8] = b"aeiou";

/// Longest allowed run of consonants
const MAX_CONSONANT_RUN: usize = 3;

/// Longest allowed run of vowels
const MAX_VOWEL_RUN: usize = 2;

/// Word is a single letter repeated, e.g. "aaaaa"
#[must_use]
pub fn is_repeating_pattern(word: &Word) -> bool {
    let first = word.chars()[0];
    word.chars().iter().all(|&c| c == first)
}

/// Word contains at least one of a, e, i, o, u, y
#[must_use]
pub fn has_vowel(word: &Word) -> bool {
    word.chars().iter().any(|c| VOWELS_WITH_Y.contains(c))
}

/// Word has 4+ consonants or 3+ vowels in a row
#[must_use]
pub fn has_unlikely_cluster(word: &Word) -> bool {
    let mut consonants = 0;
    let mut vowels = 0;

    for c in word.chars() {
        if VOWELS.contains(c) {
            vowels += 1;
            consonants = 0;
        } else {
            consonants += 1;
            vowels = 0;
        }
        if consonants > MAX_CONSONANT_RUN || vowels > MAX_VOWEL_RUN {
            return true;
        }
    }

    false
}
