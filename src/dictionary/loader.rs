//! Dictionary loading
//!
//! The game never blocks on this: a source is fetched on a background thread
//! and the result is handed back over a channel for the host to deliver as an
//! event. Any failure leaves the built-in fallback in force.

use super::Dictionary;
use crate::core::Word;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Raw word lists as supplied by a source
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryData {
    pub valid_guesses: Vec<String>,
    #[serde(default)]
    pub target_words: Vec<String>,
}

/// Errors from fetching or decoding dictionary data
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed dictionary data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dictionary contained no usable words")]
    Empty,
    #[error("dictionary loader stopped before finishing")]
    Interrupted,
}

/// Injected provider of dictionary data
pub trait DictionarySource {
    /// Fetch the raw word lists
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the data cannot be retrieved or decoded.
    fn fetch(&self) -> Result<DictionaryData, LoadError>;

    /// Short human-readable name for logs
    fn describe(&self) -> String;
}

/// Dictionary stored in a local file
///
/// JSON files use `{ "validGuesses": [...], "targetWords": [...] }`;
/// anything else is read as one guess word per line.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DictionarySource for FileSource {
    fn fetch(&self) -> Result<DictionaryData, LoadError> {
        let content = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Decode dictionary text, JSON object or plain word list
///
/// # Errors
///
/// Returns `LoadError::Parse` if the text looks like JSON but does not match
/// the expected schema.
pub fn parse(content: &str) -> Result<DictionaryData, LoadError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    if content.trim_start().starts_with('{') {
        return Ok(serde_json::from_str(content)?);
    }

    let valid_guesses = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    Ok(DictionaryData {
        valid_guesses,
        target_words: Vec::new(),
    })
}

/// Turn raw data into a dictionary, dropping entries that are not words
///
/// Target words also count as valid guesses, so a file with only
/// `targetWords` is usable.
///
/// # Errors
///
/// Returns `LoadError::Empty` if neither list has a usable word.
pub fn build(data: &DictionaryData) -> Result<Dictionary, LoadError> {
    let valid_guesses = words_from_slice(&data.valid_guesses);
    let targets = words_from_slice(&data.target_words);
    let skipped = data.valid_guesses.len() + data.target_words.len()
        - valid_guesses.len()
        - targets.len();
    if skipped > 0 {
        debug!(skipped, "ignored malformed word entries");
    }
    if valid_guesses.is_empty() && targets.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(Dictionary::from_words(valid_guesses, targets))
}

/// Fetch and build a dictionary on the calling thread
///
/// # Errors
///
/// Propagates any fetch, decode or empty-list error.
pub fn load<S: DictionarySource + ?Sized>(source: &S) -> Result<Dictionary, LoadError> {
    let result = source.fetch().and_then(|data| build(&data));
    match &result {
        Ok(dict) => info!(
            source = %source.describe(),
            guesses = dict.valid_guess_count(),
            targets = dict.target_count(),
            "dictionary loaded"
        ),
        Err(e) => warn!(source = %source.describe(), error = %e, "dictionary load failed"),
    }
    result
}

/// Load a dictionary on a background thread
///
/// The receiver yields exactly one result. If the worker dies without
/// sending, `recv` on the receiver fails and the host should treat it as
/// `LoadError::Interrupted`.
pub fn spawn_load<S>(source: S) -> mpsc::Receiver<Result<Dictionary, LoadError>>
where
    S: DictionarySource + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        // Receiver may be gone if the host quit first
        let _ = tx.send(load(&source));
    });
    rx
}

/// Handle on an in-flight background load
///
/// Hosts poll this between input events; it yields the result once and is
/// idle afterwards.
#[derive(Debug, Default)]
pub struct PendingLoad {
    rx: Option<mpsc::Receiver<Result<Dictionary, LoadError>>>,
}

impl PendingLoad {
    /// Start loading `source` in the background
    pub fn spawn<S>(source: S) -> Self
    where
        S: DictionarySource + Send + 'static,
    {
        Self {
            rx: Some(spawn_load(source)),
        }
    }

    /// Nothing to load
    #[must_use]
    pub const fn idle() -> Self {
        Self { rx: None }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.rx.is_some()
    }

    /// Take the result if it has arrived, without blocking
    pub fn poll(&mut self) -> Option<Result<Dictionary, LoadError>> {
        let rx = self.rx.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => Err(LoadError::Interrupted),
        };
        self.rx = None;
        Some(result)
    }

    /// Block until the result arrives
    pub fn wait(&mut self) -> Option<Result<Dictionary, LoadError>> {
        let rx = self.rx.take()?;
        Some(rx.recv().unwrap_or(Err(LoadError::Interrupted)))
    }
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_board::dictionary::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "SLATE"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<Word> {
    slice.iter().filter_map(|s| Word::new(s.as_ref().trim()).ok()).collect()
}
