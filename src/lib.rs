//! Word Board
//!
//! A six-row, five-letter word guessing game with a TUI, a line-oriented
//! mode and a few one-shot commands.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_board::core::{CellStatus, Feedback, Word};
//!
//! let guess = Word::new("level").unwrap();
//! let target = Word::new("elves").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &target);
//! assert_eq!(feedback.count(CellStatus::Correct), 2);
//! assert_eq!(feedback.to_string(), "🟨🟨🟩🟩⬜");
//! ```

// Core domain types
pub mod core;

// Word lists and validation data
pub mod dictionary;

// Board, session and controller
pub mod game;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
