//! Runtime configuration
//!
//! Assembled from command-line flags by the binary; library users can build
//! it directly.

use crate::dictionary::FileSource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Default tracing filter when neither a flag nor `RUST_LOG` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings shared by every host mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Curated word list to load in the background
    pub dictionary: Option<PathBuf>,
    /// Fixed RNG seed for reproducible target draws
    pub seed: Option<u64>,
    /// `tracing` filter directive, e.g. "info" or "wordle_board=debug"
    pub log_level: String,
    /// Write logs here instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary: None,
            seed: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
        }
    }
}

impl GameConfig {
    /// RNG for target draws, seeded when configured
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Source for the curated dictionary, if one was configured
    #[must_use]
    pub fn dictionary_source(&self) -> Option<FileSource> {
        self.dictionary.as_ref().map(FileSource::new)
    }
}
