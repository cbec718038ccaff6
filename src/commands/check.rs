//! Word check command
//!
//! Runs the validator against a dictionary and reports how the word fared.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::game::{ValidationError, validate};

/// Result of checking a word
#[derive(Debug)]
pub struct CheckResult {
    pub input: String,
    pub verdict: Result<Word, ValidationError>,
    /// Accepted because it is on a curated list rather than by heuristics
    pub curated: bool,
    /// Only the built-in fallback was available
    pub fallback: bool,
}

impl CheckResult {
    #[must_use]
    pub const fn accepted(&self) -> bool {
        self.verdict.is_ok()
    }
}

/// Validate `input` against `dictionary`
#[must_use]
pub fn check_word(dictionary: &Dictionary, input: &str) -> CheckResult {
    let verdict = validate(dictionary, input);
    let curated = verdict.as_ref().is_ok_and(|word| dictionary.contains(word));

    CheckResult {
        input: input.to_string(),
        verdict,
        curated,
        fallback: dictionary.is_fallback(),
    }
}
