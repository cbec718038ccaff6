//! Game state machine
//!
//! Validation, the board grid, the per-game session and the event-driven
//! controller that hosts talk to.

mod board;
mod controller;
mod session;
mod validator;

pub use board::{Board, Cell, CellRef, Grid, ROWS};
pub use controller::{Controller, GameEvent, Notice, Statistics};
pub use session::{BoardSnapshot, Session, SessionOutcome, Submission, SubmissionError};
pub use validator::{ValidationError, validate};
