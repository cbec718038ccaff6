//! Formatting utilities for terminal output

use crate::core::{CellStatus, LetterStatusMap};
use crate::game::Cell;
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout, shared by the CLI and the TUI
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Render one letter as a coloured tile like " A "
#[must_use]
pub fn tile(letter: Option<char>, status: CellStatus) -> ColoredString {
    let text = format!(" {} ", letter.map_or('_', |c| c.to_ascii_uppercase()));
    match status {
        CellStatus::Correct => text.black().on_green().bold(),
        CellStatus::Present => text.black().on_yellow().bold(),
        CellStatus::Absent => text.white().on_bright_black(),
        CellStatus::Empty => text.normal(),
    }
}

/// Render a row of cells as coloured tiles
#[must_use]
pub fn format_row(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|cell| tile(cell.letter, cell.status).to_string())
        .collect()
}

/// Render the keyboard summary, one string per keyboard row
#[must_use]
pub fn format_keyboard(letters: &LetterStatusMap) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .chars()
                .map(|c| tile(Some(c), letters.status_of(c)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
