//! Guess validation
//!
//! Curated words are accepted outright. Anything else goes through the
//! heuristic shape checks, so the game stays playable on the fallback
//! dictionary.

use crate::core::{WORD_LENGTH, Word};
use crate::dictionary::{Dictionary, heuristics};
use thiserror::Error;

/// Why a guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("Not enough letters")]
    TooShort,
    #[error("Too many letters")]
    TooLong,
    #[error("Only letters A-Z are allowed")]
    InvalidChars,
    #[error("Not in word list")]
    NotInDictionary,
    #[error("A single repeated letter is not a word")]
    RepeatingPattern,
    #[error("Words need at least one vowel")]
    NoVowels,
}

/// Classify `guess` as an accepted word or a rejection reason
///
/// Checks run in order and stop at the first failure: length, characters,
/// curated lists, then the heuristic fallback.
///
/// # Errors
///
/// Returns the first `ValidationError` that applies.
///
/// # Examples
/// ```
/// use wordle_board::dictionary::Dictionary;
/// use wordle_board::game::{ValidationError, validate};
///
/// let dict = Dictionary::builtin();
/// assert_eq!(validate(&dict, "CRANE").unwrap().text(), "crane");
/// assert_eq!(validate(&dict, "aaaaa"), Err(ValidationError::RepeatingPattern));
/// ```
pub fn validate(dictionary: &Dictionary, guess: &str) -> Result<Word, ValidationError> {
    let len = guess.chars().count();
    if len < WORD_LENGTH {
        return Err(ValidationError::TooShort);
    }
    if len > WORD_LENGTH {
        return Err(ValidationError::TooLong);
    }

    let word = Word::new(guess).map_err(|_| ValidationError::InvalidChars)?;

    if dictionary.contains(&word) {
        return Ok(word);
    }

    if heuristics::is_repeating_pattern(&word) {
        return Err(ValidationError::RepeatingPattern);
    }
    if !heuristics::has_vowel(&word) {
        return Err(ValidationError::NoVowels);
    }
    if heuristics::has_unlikely_cluster(&word) {
        return Err(ValidationError::NotInDictionary);
    }

    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;

    fn curated() -> Dictionary {
        Dictionary::from_words(
            words_from_slice(&["crwth", "xyzzy", "aaaaa", "queue"]),
            words_from_slice(&["crane", "level"]),
        )
    }

    #[test]
    fn length_checks_come_first() {
        let dict = Dictionary::builtin();
        assert_eq!(validate(&dict, ""), Err(ValidationError::TooShort));
        assert_eq!(validate(&dict, "abc"), Err(ValidationError::TooShort));
        assert_eq!(validate(&dict, "abcdef"), Err(ValidationError::TooLong));
        // Length wins over bad characters
        assert_eq!(validate(&dict, "ab1"), Err(ValidationError::TooShort));
    }

    #[test]
    fn non_letters_rejected() {
        let dict = Dictionary::builtin();
        assert_eq!(validate(&dict, "cr4ne"), Err(ValidationError::InvalidChars));
        assert_eq!(validate(&dict, "cra e"), Err(ValidationError::InvalidChars));
        assert_eq!(validate(&dict, "crané"), Err(ValidationError::InvalidChars));
    }

    #[test]
    fn builtin_targets_accepted() {
        let dict = Dictionary::builtin();
        assert_eq!(validate(&dict, "Level").unwrap().text(), "level");
    }

    #[test]
    fn repeating_pattern_rejected() {
        let dict = Dictionary::builtin();
        assert_eq!(
            validate(&dict, "aaaaa"),
            Err(ValidationError::RepeatingPattern)
        );
    }

    #[test]
    fn no_vowels_rejected() {
        let dict = Dictionary::builtin();
        assert_eq!(validate(&dict, "crwth"), Err(ValidationError::NoVowels));
    }

    #[test]
    fn consonant_run_rejected() {
        let dict = Dictionary::builtin();
        assert_eq!(
            validate(&dict, "xyzzy"),
            Err(ValidationError::NotInDictionary)
        );
    }

    #[test]
    fn vowel_run_rejected() {
        let dict = Dictionary::builtin();
        assert_eq!(
            validate(&dict, "queue"),
            Err(ValidationError::NotInDictionary)
        );
    }

    #[test]
    fn plausible_unknown_word_accepted() {
        let dict = Dictionary::builtin();
        assert_eq!(validate(&dict, "blorp").unwrap().text(), "blorp");
    }

    #[test]
    fn curated_words_bypass_heuristics() {
        let dict = curated();
        for word in ["crwth", "xyzzy", "aaaaa", "queue", "CRANE"] {
            assert!(validate(&dict, word).is_ok(), "{word} should be accepted");
        }
    }
}
