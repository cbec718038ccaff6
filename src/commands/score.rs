//! Score command
//!
//! Scores one guess against one target without starting a game.

use crate::core::{Feedback, Word, WordError};

/// Result of scoring a guess
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either argument is not a 5-letter word.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e: WordError| format!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e: WordError| format!("Invalid target: {e}"))?;
    let feedback = Feedback::calculate(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellStatus;

    #[test]
    fn scores_duplicates() {
        let result = score_words("ERROR", "motor").unwrap();
        assert_eq!(result.feedback.to_emoji(), "⬜⬜⬜🟩🟩");
        assert_eq!(result.guess.text(), "error");
    }

    #[test]
    fn perfect_match() {
        let result = score_words("speed", "speed").unwrap();
        assert!(result.feedback.is_solved());
    }

    #[test]
    fn invalid_arguments() {
        assert!(score_words("abc", "speed").unwrap_err().contains("guess"));
        assert!(score_words("speed", "sp3ed").unwrap_err().contains("target"));
    }

    #[test]
    fn summary_counts() {
        let result = score_words("crane", "slate").unwrap();
        assert_eq!(result.feedback.count(CellStatus::Correct), 2);
        assert_eq!(result.feedback.count(CellStatus::Absent), 3);
        assert!(format!("{result:?}").starts_with("ScoreResult"));
    }
}
