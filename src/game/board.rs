//! Puzzle grid with active-row cursor, locked rows and focus
//!
//! The board only knows about cells. Scoring, validation and win/loss
//! decisions live in the session, which drives the board through these
//! operations.

use crate::core::{CellStatus, WORD_LENGTH};
use std::collections::BTreeSet;

/// Number of guesses per game
pub const ROWS: usize = 6;

/// Row/column address of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One letter slot of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub position: CellRef,
    pub letter: Option<char>,
    pub status: CellStatus,
}

impl Cell {
    const fn empty(position: CellRef) -> Self {
        Self {
            position,
            letter: None,
            status: CellStatus::Empty,
        }
    }

    fn clear(&mut self) {
        self.letter = None;
        self.status = CellStatus::Empty;
    }
}

pub type Grid = [[Cell; WORD_LENGTH]; ROWS];

/// Grid of cells plus input cursor state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
    active_row: usize,
    locked_rows: BTreeSet<usize>,
    focus: Option<CellRef>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board with row 0 active and nothing focused
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|row| {
                std::array::from_fn(|col| Cell::empty(CellRef::new(row, col)))
            }),
            active_row: 0,
            locked_rows: BTreeSet::new(),
            focus: None,
        }
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, at: CellRef) -> Option<&Cell> {
        self.cells.get(at.row).and_then(|row| row.get(at.col))
    }

    #[must_use]
    pub const fn active_row(&self) -> usize {
        self.active_row
    }

    #[must_use]
    pub const fn locked_rows(&self) -> &BTreeSet<usize> {
        &self.locked_rows
    }

    #[must_use]
    pub fn is_locked(&self, row: usize) -> bool {
        self.locked_rows.contains(&row)
    }

    #[must_use]
    pub const fn focus(&self) -> Option<CellRef> {
        self.focus
    }

    #[must_use]
    pub const fn is_last_row(&self, row: usize) -> bool {
        row + 1 == ROWS
    }

    /// Whether `at` is an editable cell of the active row
    fn is_editable(&self, at: CellRef) -> bool {
        at.row == self.active_row && at.col < WORD_LENGTH && !self.is_locked(at.row)
    }

    /// Focus `at` if it lies in the active row; otherwise no-op
    pub fn set_focus(&mut self, at: CellRef) -> bool {
        if !self.is_editable(at) {
            return false;
        }
        self.focus = Some(at);
        true
    }

    /// Focus the first cell of the active row
    pub fn focus_row_start(&mut self) {
        self.focus = Some(CellRef::new(self.active_row, 0));
    }

    /// Remove focus entirely
    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    fn focused_editable(&self) -> Option<CellRef> {
        self.focus.filter(|&at| self.is_editable(at))
    }

    /// Write `letter` into the focused cell and move focus right
    ///
    /// The letter is stored lowercase with `Empty` status. Returns false if
    /// nothing editable is focused or the character is not an ASCII letter.
    pub fn type_letter(&mut self, letter: char) -> bool {
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        let Some(at) = self.focused_editable() else {
            return false;
        };

        let cell = &mut self.cells[at.row][at.col];
        cell.letter = Some(letter.to_ascii_lowercase());
        cell.status = CellStatus::Empty;

        if at.col + 1 < WORD_LENGTH {
            self.focus = Some(CellRef::new(at.row, at.col + 1));
        }
        true
    }

    /// Delete-back: clear the focused cell, or step left and clear that one
    pub fn backspace(&mut self) -> bool {
        let Some(at) = self.focused_editable() else {
            return false;
        };

        if self.cells[at.row][at.col].letter.is_some() {
            self.cells[at.row][at.col].clear();
            return true;
        }
        if at.col == 0 {
            return false;
        }

        let prev = CellRef::new(at.row, at.col - 1);
        self.cells[prev.row][prev.col].clear();
        self.focus = Some(prev);
        true
    }

    /// Number of filled cells in `row`
    #[must_use]
    pub fn filled_count(&self, row: usize) -> usize {
        self.cells
            .get(row)
            .map_or(0, |cells| cells.iter().filter(|c| c.letter.is_some()).count())
    }

    /// The row's letters as a string, if every cell is filled
    #[must_use]
    pub fn row_word(&self, row: usize) -> Option<String> {
        self.cells.get(row)?.iter().map(|c| c.letter).collect()
    }

    /// Clear every cell of `row` and focus its first cell
    pub fn clear_row(&mut self, row: usize) {
        if let Some(cells) = self.cells.get_mut(row) {
            cells.iter_mut().for_each(Cell::clear);
            self.focus = Some(CellRef::new(row, 0));
        }
    }

    /// Write scored statuses into `row` and lock it
    pub fn lock_row(&mut self, row: usize, statuses: &[CellStatus; WORD_LENGTH]) {
        if let Some(cells) = self.cells.get_mut(row) {
            for (cell, &status) in cells.iter_mut().zip(statuses) {
                cell.status = status;
            }
            self.locked_rows.insert(row);
        }
    }

    /// Move the cursor to the next row and focus its first cell
    ///
    /// Returns false when already on the last row.
    pub fn advance_row(&mut self) -> bool {
        if self.is_last_row(self.active_row) {
            return false;
        }
        self.active_row += 1;
        self.focus_row_start();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focused_board() -> Board {
        let mut board = Board::new();
        board.focus_row_start();
        board
    }

    fn type_word(board: &mut Board, word: &str) {
        for c in word.chars() {
            board.type_letter(c);
        }
    }

    #[test]
    fn new_board_is_blank() {
        let board = Board::new();
        assert_eq!(board.active_row(), 0);
        assert!(board.locked_rows().is_empty());
        assert_eq!(board.focus(), None);
        assert!(board
            .grid()
            .iter()
            .flatten()
            .all(|c| c.letter.is_none() && c.status == CellStatus::Empty));
        assert_eq!(board.cell(CellRef::new(2, 3)).unwrap().position, CellRef::new(2, 3));
        assert!(board.cell(CellRef::new(6, 0)).is_none());
    }

    #[test]
    fn focus_only_in_active_row() {
        let mut board = Board::new();
        assert!(board.set_focus(CellRef::new(0, 3)));
        assert!(!board.set_focus(CellRef::new(1, 0)));
        assert!(!board.set_focus(CellRef::new(0, 5)));
        assert_eq!(board.focus(), Some(CellRef::new(0, 3)));
    }

    #[test]
    fn typing_advances_focus_and_stops_at_end() {
        let mut board = focused_board();
        type_word(&mut board, "CRANES");
        // Sixth letter overwrites the last cell
        assert_eq!(board.row_word(0).as_deref(), Some("crans"));
        assert_eq!(board.focus(), Some(CellRef::new(0, 4)));
    }

    #[test]
    fn typing_ignores_non_letters() {
        let mut board = focused_board();
        assert!(!board.type_letter('3'));
        assert!(!board.type_letter(' '));
        assert_eq!(board.filled_count(0), 0);
    }

    #[test]
    fn typing_without_focus_is_noop() {
        let mut board = Board::new();
        assert!(!board.type_letter('a'));
        assert_eq!(board.filled_count(0), 0);
    }

    #[test]
    fn backspace_clears_focused_then_steps_back() {
        let mut board = focused_board();
        type_word(&mut board, "cra");
        assert_eq!(board.focus(), Some(CellRef::new(0, 3)));

        // Focused cell empty: step back and clear 'a'
        assert!(board.backspace());
        assert_eq!(board.focus(), Some(CellRef::new(0, 2)));
        assert_eq!(board.filled_count(0), 2);

        // Refocus a filled cell: clear in place
        board.set_focus(CellRef::new(0, 0));
        assert!(board.backspace());
        assert_eq!(board.focus(), Some(CellRef::new(0, 0)));
        assert_eq!(board.cell(CellRef::new(0, 0)).unwrap().letter, None);
        assert_eq!(board.cell(CellRef::new(0, 1)).unwrap().letter, Some('r'));

        // Empty first cell: nothing to do
        assert!(!board.backspace());
    }

    #[test]
    fn full_row_backspace_clears_last_letter_in_place() {
        let mut board = focused_board();
        type_word(&mut board, "crane");
        assert!(board.backspace());
        assert_eq!(board.focus(), Some(CellRef::new(0, 4)));
        assert_eq!(board.filled_count(0), 4);
    }

    #[test]
    fn row_word_requires_full_row() {
        let mut board = focused_board();
        type_word(&mut board, "cra");
        assert_eq!(board.row_word(0), None);
        type_word(&mut board, "ne");
        assert_eq!(board.row_word(0).as_deref(), Some("crane"));
    }

    #[test]
    fn lock_and_advance() {
        let mut board = focused_board();
        type_word(&mut board, "crane");
        board.lock_row(0, &[CellStatus::Absent; 5]);
        assert!(board.is_locked(0));
        assert!(board.advance_row());
        assert_eq!(board.active_row(), 1);
        assert_eq!(board.focus(), Some(CellRef::new(1, 0)));

        // Locked row rejects focus and edits
        assert!(!board.set_focus(CellRef::new(0, 0)));
        assert_eq!(board.cell(CellRef::new(0, 0)).unwrap().status, CellStatus::Absent);
    }

    #[test]
    fn advance_stops_at_last_row() {
        let mut board = Board::new();
        for _ in 0..ROWS - 1 {
            assert!(board.advance_row());
        }
        assert_eq!(board.active_row(), ROWS - 1);
        assert!(!board.advance_row());
    }

    #[test]
    fn clear_row_resets_cells_and_focus() {
        let mut board = focused_board();
        type_word(&mut board, "xyzzy");
        board.clear_row(0);
        assert_eq!(board.filled_count(0), 0);
        assert_eq!(board.focus(), Some(CellRef::new(0, 0)));
    }
}
