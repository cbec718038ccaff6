//! Word sets used for validation and target selection
//!
//! The built-in fallback carries the embedded target list and no curated
//! guess list. A loaded dictionary replaces it once available.

mod embedded;
pub mod heuristics;
pub mod loader;

pub use embedded::{TARGETS, TARGETS_COUNT};
pub use loader::{
    DictionaryData, DictionarySource, FileSource, LoadError, PendingLoad, load, spawn_load,
};

use crate::core::Word;
use loader::words_from_slice;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Where the current dictionary came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    /// Embedded fallback, validation is heuristic-only
    Builtin,
    /// Curated list from an external source
    Loaded,
}

/// Immutable pair of word sets: acceptable guesses and possible targets
#[derive(Debug, Clone)]
pub struct Dictionary {
    valid_guesses: FxHashSet<Word>,
    target_set: FxHashSet<Word>,
    // Kept alongside the set for uniform random draws
    targets: Vec<Word>,
    origin: Origin,
}

impl Dictionary {
    /// The embedded fallback dictionary
    #[must_use]
    pub fn builtin() -> Self {
        Self::build(Vec::new(), words_from_slice(TARGETS), Origin::Builtin)
    }

    /// Build a curated dictionary from explicit word lists
    ///
    /// An empty target list falls back to the embedded targets so a game can
    /// always be started.
    #[must_use]
    pub fn from_words(valid_guesses: Vec<Word>, targets: Vec<Word>) -> Self {
        let targets = if targets.is_empty() {
            words_from_slice(TARGETS)
        } else {
            targets
        };
        Self::build(valid_guesses, targets, Origin::Loaded)
    }

    fn build(valid_guesses: Vec<Word>, targets: Vec<Word>, origin: Origin) -> Self {
        let mut target_set = FxHashSet::default();
        let targets: Vec<Word> = targets
            .into_iter()
            .filter(|w| target_set.insert(w.clone()))
            .collect();

        Self {
            valid_guesses: valid_guesses.into_iter().collect(),
            target_set,
            targets,
            origin,
        }
    }

    /// True while only the embedded fallback is available
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.origin == Origin::Builtin
    }

    /// Member of either the curated guess list or the target list
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.valid_guesses.contains(word) || self.target_set.contains(word)
    }

    #[must_use]
    pub fn is_target(&self, word: &Word) -> bool {
        self.target_set.contains(word)
    }

    #[must_use]
    pub fn valid_guess_count(&self) -> usize {
        self.valid_guesses.len()
    }

    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Draw a target uniformly at random
    ///
    /// Returns `None` only if the target list is empty, which the
    /// constructors rule out for the embedded list.
    pub fn draw_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.targets.choose(rng)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::builtin()
    }
}
