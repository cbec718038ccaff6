//! Simple interactive CLI mode
//!
//! Text-based game without the TUI. Every line is typed into the active row
//! and submitted through the same events the TUI sends.

use crate::core::WORD_LENGTH;
use crate::dictionary::PendingLoad;
use crate::game::{
    CellRef, Controller, GameEvent, Notice, SubmissionError, ValidationError,
};
use crate::output::{print_board, print_notice, print_stats};
use rand::Rng;
use std::io::{self, Write};

/// Type `text` into the active row and submit it
///
/// The row is wiped first so leftovers from an incomplete attempt do not mix
/// with the new word.
pub fn enter_word<R: Rng>(controller: &mut Controller<R>, text: &str) -> Option<Notice> {
    if text.chars().count() > WORD_LENGTH {
        return Some(Notice::Rejected(SubmissionError::InvalidWord(
            ValidationError::TooLong,
        )));
    }
    // The board ignores non-letters, so catch them before typing
    if !text.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some(Notice::Rejected(SubmissionError::InvalidWord(
            ValidationError::InvalidChars,
        )));
    }

    let row = controller.session().active_row();
    controller.handle(GameEvent::FocusCell(CellRef::new(row, WORD_LENGTH - 1)));
    for _ in 0..WORD_LENGTH {
        controller.handle(GameEvent::Backspace);
    }
    for c in text.chars() {
        controller.handle(GameEvent::TypeLetter(c));
    }
    controller.handle(GameEvent::Submit)
}

fn deliver_dictionary<R: Rng>(controller: &mut Controller<R>, pending: &mut PendingLoad) {
    if let Some(result) = pending.poll()
        && let Some(notice) = controller.handle(GameEvent::DictionaryLoaded(result))
    {
        print_notice(&notice);
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(
    mut controller: Controller<R>,
    mut pending: PendingLoad,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Word Puzzle - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden 5-letter word in 6 tries.");
    println!("  - 🟩 right letter, right place");
    println!("  - 🟨 right letter, wrong place");
    println!("  - ⬜ letter not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for new game\n");

    loop {
        deliver_dictionary(&mut controller, &mut pending);

        let snapshot = controller.snapshot();
        print_board(&snapshot);

        if snapshot.outcome.is_terminal() {
            print_stats(controller.stats());
            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    controller.handle(GameEvent::NewGame);
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let input = get_user_input(&format!("Guess {}", snapshot.active_row + 1))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                controller.handle(GameEvent::NewGame);
                println!("\n🔄 New game started!\n");
            }
            "" => {}
            _ => {
                if let Some(notice) = enter_word(&mut controller, &input) {
                    print_notice(&notice);
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
