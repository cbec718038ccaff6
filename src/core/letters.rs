//! Best-known status of each letter across submitted guesses
//!
//! Feeds the keyboard summary. Only letters from locked rows are recorded.

use super::feedback::CellStatus;
use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Map from lowercase letter to the strongest status seen for it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatusMap {
    letters: FxHashMap<char, CellStatus>,
}

impl LetterStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of `letter`, or `Empty` if it has not been played
    #[must_use]
    pub fn status_of(&self, letter: char) -> CellStatus {
        self.letters
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Record one letter, keeping the stronger of the old and new status
    pub fn record(&mut self, letter: char, status: CellStatus) {
        let entry = self
            .letters
            .entry(letter.to_ascii_lowercase())
            .or_insert(status);
        if status > *entry {
            *entry = status;
        }
    }

    /// Fold a scored word into the map in place
    pub fn absorb(&mut self, word: &Word, statuses: &[CellStatus; WORD_LENGTH]) {
        for (letter, &status) in word.letters().zip(statuses) {
            self.record(letter, status);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters and statuses in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, CellStatus)> {
        let mut entries: Vec<_> = self.letters.iter().map(|(&c, &s)| (c, s)).collect();
        entries.sort_unstable();
        entries
    }
}

/// Merge a scored word into `current`, returning the updated map
///
/// Absent letters are inserted; present ones are replaced only by a strictly
/// stronger status, so a letter known `Correct` is never downgraded.
#[must_use]
pub fn merge(
    current: &LetterStatusMap,
    word: &Word,
    statuses: &[CellStatus; WORD_LENGTH],
) -> LetterStatusMap {
    let mut next = current.clone();
    next.absorb(word, statuses);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;
    use CellStatus::{Absent, Correct, Empty, Present};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn unplayed_letter_is_empty() {
        let map = LetterStatusMap::new();
        assert_eq!(map.status_of('q'), Empty);
        assert!(map.is_empty());
    }

    #[test]
    fn merge_inserts_new_letters() {
        let guess = word("crane");
        let statuses = score(&guess, &word("slate"));
        let map = merge(&LetterStatusMap::new(), &guess, &statuses);

        assert_eq!(map.len(), 5);
        assert_eq!(map.status_of('a'), Correct);
        assert_eq!(map.status_of('C'), Absent);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut map = LetterStatusMap::new();
        map.record('e', Correct);
        map.record('e', Absent);
        map.record('e', Present);
        assert_eq!(map.status_of('e'), Correct);
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut map = LetterStatusMap::new();
        map.record('l', Present);
        map.record('l', Correct);
        assert_eq!(map.status_of('l'), Correct);
    }

    #[test]
    fn duplicate_letter_in_one_word_keeps_best() {
        // ERROR vs MOTOR: first R absent, last R correct
        let guess = word("error");
        let statuses = score(&guess, &word("motor"));
        let map = merge(&LetterStatusMap::new(), &guess, &statuses);
        assert_eq!(map.status_of('r'), Correct);
        assert_eq!(map.status_of('o'), Correct);
        assert_eq!(map.status_of('e'), Absent);
    }

    #[test]
    fn merge_is_idempotent() {
        let guess = word("elves");
        let statuses = score(&guess, &word("level"));
        let once = merge(&LetterStatusMap::new(), &guess, &statuses);
        let twice = merge(&once, &guess, &statuses);
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_order_does_not_matter() {
        let target = word("level");
        let a = word("elves");
        let b = word("hello");
        let sa = score(&a, &target);
        let sb = score(&b, &target);

        let ab = merge(&merge(&LetterStatusMap::new(), &a, &sa), &b, &sb);
        let ba = merge(&merge(&LetterStatusMap::new(), &b, &sb), &a, &sa);
        assert_eq!(ab, ba);
    }

    #[test]
    fn sorted_is_alphabetical() {
        let mut map = LetterStatusMap::new();
        map.record('z', Absent);
        map.record('a', Present);
        assert_eq!(map.sorted(), vec![('a', Present), ('z', Absent)]);
    }
}
