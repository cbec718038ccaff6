//! Core domain types for the puzzle
//!
//! Words, scoring and letter tracking. Everything here is pure and has no
//! knowledge of boards, sessions or hosts.

mod feedback;
mod letters;
mod word;

pub use feedback::{CellStatus, Feedback, score};
pub use letters::{LetterStatusMap, merge};
pub use word::{WORD_LENGTH, Word, WordError};
