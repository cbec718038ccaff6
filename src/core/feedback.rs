//! Guess scoring and per-letter feedback
//!
//! Each position of a guess is classified as:
//! - Correct (right letter, right place)
//! - Present (letter in the target, elsewhere)
//! - Absent (letter not available in the target)
//!
//! `Empty` marks cells that have not been scored yet.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback category for a single cell
///
/// Variants are declared weakest first, so the derived ordering is the
/// "best known" ordering used by the letter tracker:
/// `Correct > Present > Absent > Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum CellStatus {
    #[default]
    Empty,
    Absent,
    Present,
    Correct,
}

impl CellStatus {
    /// Emoji used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Empty => '⬛',
        }
    }
}

/// Score `guess` against `target`
///
/// Implements the duplicate-aware rules:
/// 1. First pass: mark exact matches and remove them from the unmatched pool
/// 2. Second pass, left to right: mark `Present` while the pool still holds
///    the letter, consuming one occurrence each time; otherwise `Absent`
///
/// # Examples
/// ```
/// use wordle_board::core::{CellStatus::*, Word, score};
///
/// let guess = Word::new("elves").unwrap();
/// let target = Word::new("level").unwrap();
/// assert_eq!(
///     score(&guess, &target),
///     [Present, Present, Correct, Correct, Absent]
/// );
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> [CellStatus; WORD_LENGTH] {
    let mut result = [CellStatus::Absent; WORD_LENGTH];
    let mut unmatched = target.char_counts();

    // Allow: Index needed to access guess[i], target[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.chars()[i] == target.chars()[i] {
            result[i] = CellStatus::Correct;
            if let Some(count) = unmatched.get_mut(&guess.chars()[i]) {
                *count = count.saturating_sub(1);
            }
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == CellStatus::Correct {
            continue;
        }
        if let Some(count) = unmatched.get_mut(&guess.chars()[i])
            && *count > 0
        {
            result[i] = CellStatus::Present;
            *count -= 1;
        }
    }

    result
}

/// Scored feedback for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([CellStatus; WORD_LENGTH]);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        Self(score(guess, target))
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[CellStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == CellStatus::Correct)
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: CellStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert to an emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl From<[CellStatus; WORD_LENGTH]> for Feedback {
    fn from(statuses: [CellStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellStatus::{Absent, Correct, Present};

    fn scored(guess: &str, target: &str) -> [CellStatus; WORD_LENGTH] {
        score(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn status_ordering_strongest_last() {
        assert!(CellStatus::Correct > CellStatus::Present);
        assert!(CellStatus::Present > CellStatus::Absent);
        assert!(CellStatus::Absent > CellStatus::Empty);
    }

    #[test]
    fn score_all_absent() {
        assert_eq!(scored("abcde", "fghij"), [Absent; 5]);
    }

    #[test]
    fn score_all_correct() {
        assert_eq!(scored("speed", "speed"), [Correct; 5]);
        assert!(Feedback::calculate(&Word::new("speed").unwrap(), &Word::new("SPEED").unwrap()).is_solved());
    }

    #[test]
    fn score_duplicates_consumed_left_to_right() {
        // Target LEVEL has L,E,L left after V and E match exactly
        assert_eq!(
            scored("elves", "level"),
            [Present, Present, Correct, Correct, Absent]
        );
    }

    #[test]
    fn score_repeated_guess_letter_single_target_occurrence() {
        // MOTOR has a single R, already matched at the end
        assert_eq!(
            scored("error", "motor"),
            [Absent, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn score_green_takes_priority_over_earlier_yellow() {
        // ROBOT vs FLOOR: the second O is exact, the first one still finds
        // the other O in FLOOR
        assert_eq!(
            scored("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn score_is_case_insensitive() {
        assert_eq!(scored("CRANE", "slate"), scored("crane", "SLATE"));
        assert_eq!(scored("crane", "slate"), [Absent, Absent, Correct, Absent, Correct]);
    }

    #[test]
    fn feedback_counts_and_emoji() {
        let feedback = Feedback::from([Correct, Present, Absent, Correct, Present]);
        assert_eq!(feedback.count(Correct), 2);
        assert_eq!(feedback.count(Present), 2);
        assert_eq!(feedback.count(Absent), 1);
        assert!(!feedback.is_solved());
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(feedback.to_string(), "🟩🟨⬜🟩🟨");
    }
}
