//! One game from target draw to win or loss
//!
//! State machine: `Loading -> Playing -> {Won | Lost}`. Leaving a terminal
//! state means replacing the session with a new one.

use super::board::{Board, CellRef, Grid};
use super::validator::{ValidationError, validate};
use crate::core::{Feedback, LetterStatusMap, Word};
use crate::dictionary::Dictionary;
use thiserror::Error;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// No target chosen yet
    Loading,
    Playing,
    /// Solved, with the number of guesses used
    Won(usize),
    /// Out of rows; carries the target for display
    Lost(Word),
}

impl SessionOutcome {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won(_) | Self::Lost(_))
    }
}

/// Why a submit was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Select a cell in the current row first")]
    InvalidRow,
    #[error("This row has already been submitted")]
    AlreadySubmitted,
    #[error("The game is over")]
    GameOver,
    #[error("Fill all five letters before submitting")]
    IncompleteWord,
    #[error("{0}")]
    InvalidWord(#[from] ValidationError),
}

/// A successfully scored row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub row: usize,
    pub word: Word,
    pub feedback: Feedback,
}

/// Read-only projection of a session for the view layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub grid: Grid,
    pub active_row: usize,
    pub locked_rows: Vec<usize>,
    pub outcome: SessionOutcome,
    pub focus: Option<CellRef>,
    pub letters: LetterStatusMap,
    /// Pending dictionary diagnostic, filled in by the controller
    pub diagnostic: Option<String>,
}

/// Board, target, letter summary and outcome of a single game
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    target: Option<Word>,
    letters: LetterStatusMap,
    outcome: SessionOutcome,
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}

impl Session {
    /// Fresh session waiting for a target
    #[must_use]
    pub fn loading() -> Self {
        Self {
            board: Board::new(),
            target: None,
            letters: LetterStatusMap::new(),
            outcome: SessionOutcome::Loading,
        }
    }

    /// Fresh session already playing against `target`
    #[must_use]
    pub fn with_target(target: Word) -> Self {
        let mut session = Self::loading();
        session.begin(target);
        session
    }

    /// Set the target and start play
    ///
    /// Only meaningful while `Loading`; ignored afterwards so a late draw
    /// cannot swap the word mid-game.
    pub fn begin(&mut self, target: Word) -> bool {
        if self.outcome != SessionOutcome::Loading {
            return false;
        }
        self.target = Some(target);
        self.outcome = SessionOutcome::Playing;
        self.board.focus_row_start();
        true
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[must_use]
    pub const fn outcome(&self) -> &SessionOutcome {
        &self.outcome
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterStatusMap {
        &self.letters
    }

    #[must_use]
    pub const fn active_row(&self) -> usize {
        self.board.active_row()
    }

    #[must_use]
    pub const fn focus(&self) -> Option<CellRef> {
        self.board.focus()
    }

    fn is_playing(&self) -> bool {
        self.outcome == SessionOutcome::Playing
    }

    /// Focus a cell of the active row
    pub fn focus_cell(&mut self, at: CellRef) -> bool {
        self.is_playing() && self.board.set_focus(at)
    }

    /// Type a letter into the focused cell
    pub fn type_letter(&mut self, letter: char) -> bool {
        self.is_playing() && self.board.type_letter(letter)
    }

    /// Delete-back from the focused cell
    pub fn backspace(&mut self) -> bool {
        self.is_playing() && self.board.backspace()
    }

    /// Submit the focused row
    ///
    /// A rejected word clears the row and keeps it active without using up
    /// an attempt. Every other error leaves the board untouched.
    ///
    /// # Errors
    ///
    /// Returns a `SubmissionError` describing the first failed guard.
    pub fn submit(&mut self, dictionary: &Dictionary) -> Result<Submission, SubmissionError> {
        if self.outcome.is_terminal() {
            return Err(SubmissionError::GameOver);
        }
        let target = match (&self.outcome, &self.target) {
            (SessionOutcome::Playing, Some(target)) => target.clone(),
            _ => return Err(SubmissionError::InvalidRow),
        };

        let row = match self.board.focus() {
            Some(at) if at.row == self.board.active_row() => at.row,
            _ => return Err(SubmissionError::InvalidRow),
        };
        if self.board.is_locked(row) {
            return Err(SubmissionError::AlreadySubmitted);
        }
        let Some(text) = self.board.row_word(row) else {
            return Err(SubmissionError::IncompleteWord);
        };

        let word = match validate(dictionary, &text) {
            Ok(word) => word,
            Err(reason) => {
                self.board.clear_row(row);
                return Err(SubmissionError::InvalidWord(reason));
            }
        };

        let feedback = Feedback::calculate(&word, &target);
        self.board.lock_row(row, feedback.statuses());
        self.letters.absorb(&word, feedback.statuses());

        if feedback.is_solved() {
            self.outcome = SessionOutcome::Won(row + 1);
            self.board.clear_focus();
        } else if self.board.is_last_row(row) {
            self.outcome = SessionOutcome::Lost(target);
            self.board.clear_focus();
        } else {
            self.board.advance_row();
        }

        Ok(Submission {
            row,
            word,
            feedback,
        })
    }

    /// Project the session for rendering
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            grid: *self.board.grid(),
            active_row: self.board.active_row(),
            locked_rows: self.board.locked_rows().iter().copied().collect(),
            outcome: self.outcome.clone(),
            focus: self.board.focus(),
            letters: self.letters.clone(),
            diagnostic: None,
        }
    }
}
