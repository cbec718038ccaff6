//! Routes input events into session transitions
//!
//! The controller owns the dictionary, the current session and the RNG used
//! for target draws. Hosts feed it one `GameEvent` at a time and render the
//! `BoardSnapshot` it exposes afterwards.

use super::board::{CellRef, ROWS};
use super::session::{BoardSnapshot, Session, SessionOutcome, Submission, SubmissionError};
use crate::core::{Feedback, Word};
use crate::dictionary::{Dictionary, LoadError};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

/// Discrete input delivered by a host
#[derive(Debug)]
pub enum GameEvent {
    FocusCell(CellRef),
    TypeLetter(char),
    Backspace,
    Submit,
    NewGame,
    DictionaryLoaded(Result<Dictionary, LoadError>),
    DismissDiagnostic,
}

/// User-visible result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Submit refused; the message is transient
    Rejected(SubmissionError),
    /// Row scored, game continues
    Scored { row: usize, feedback: Feedback },
    Won { guesses: usize, target: Word },
    Lost { target: Word },
    NewGame,
    DictionaryReady { guesses: usize },
    DictionaryUnavailable(String),
}

/// Per-run win/loss tally
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub played: usize,
    pub won: usize,
    /// Index `n` counts wins in `n + 1` guesses
    pub distribution: [usize; ROWS],
}

impl Statistics {
    fn record(&mut self, outcome: &SessionOutcome) {
        match outcome {
            SessionOutcome::Won(guesses) => {
                self.played += 1;
                self.won += 1;
                if let Some(slot) = guesses.checked_sub(1).and_then(|i| self.distribution.get_mut(i)) {
                    *slot += 1;
                }
            }
            SessionOutcome::Lost(_) => self.played += 1,
            SessionOutcome::Loading | SessionOutcome::Playing => {}
        }
    }

    /// Win percentage, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }
}

/// Event-driven owner of the game state
pub struct Controller<R: Rng = StdRng> {
    dictionary: Dictionary,
    session: Session,
    rng: R,
    diagnostic: Option<String>,
    stats: Statistics,
}

impl<R: Rng> Controller<R> {
    /// Create a controller and start the first game
    pub fn new(dictionary: Dictionary, rng: R) -> Self {
        let mut controller = Self {
            dictionary,
            session: Session::loading(),
            rng,
            diagnostic: None,
            stats: Statistics::default(),
        };
        controller.start_new_game();
        controller
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Apply one event
    ///
    /// Returns a notice when the event produced something worth telling the
    /// player. Focus and typing changes are silent.
    pub fn handle(&mut self, event: GameEvent) -> Option<Notice> {
        match event {
            GameEvent::FocusCell(at) => {
                self.session.focus_cell(at);
                None
            }
            GameEvent::TypeLetter(letter) => {
                self.session.type_letter(letter);
                None
            }
            GameEvent::Backspace => {
                self.session.backspace();
                None
            }
            GameEvent::Submit => Some(self.submit()),
            GameEvent::NewGame => {
                self.start_new_game();
                Some(Notice::NewGame)
            }
            GameEvent::DictionaryLoaded(result) => Some(self.install_dictionary(result)),
            GameEvent::DismissDiagnostic => {
                self.diagnostic = None;
                None
            }
        }
    }

    /// Read-only projection for the view layer
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snapshot = self.session.snapshot();
        snapshot.diagnostic.clone_from(&self.diagnostic);
        snapshot
    }

    fn submit(&mut self) -> Notice {
        match self.session.submit(&self.dictionary) {
            Ok(Submission { row, word, feedback }) => {
                debug!(row, guess = %word, feedback = %feedback, "guess scored");
                let outcome = self.session.outcome().clone();
                self.stats.record(&outcome);
                match outcome {
                    SessionOutcome::Won(guesses) => {
                        info!(guesses, "game won");
                        Notice::Won {
                            guesses,
                            target: word,
                        }
                    }
                    SessionOutcome::Lost(target) => {
                        info!("game lost");
                        Notice::Lost { target }
                    }
                    SessionOutcome::Loading | SessionOutcome::Playing => {
                        Notice::Scored { row, feedback }
                    }
                }
            }
            Err(err) => {
                debug!(error = %err, "submission rejected");
                Notice::Rejected(err)
            }
        }
    }

    /// Replace the session and draw a new target
    ///
    /// The session stays `Loading` only if no target list is usable at all.
    fn start_new_game(&mut self) {
        self.session = Session::loading();

        let target = self
            .dictionary
            .draw_target(&mut self.rng)
            .cloned()
            .or_else(|| Dictionary::builtin().draw_target(&mut self.rng).cloned());

        match target {
            Some(target) => {
                self.session.begin(target);
                info!(
                    fallback = self.dictionary.is_fallback(),
                    targets = self.dictionary.target_count(),
                    "new game started"
                );
            }
            None => warn!("no target words available, session left loading"),
        }
    }

    fn install_dictionary(&mut self, result: Result<Dictionary, LoadError>) -> Notice {
        match result {
            Ok(dictionary) => {
                let guesses = dictionary.valid_guess_count();
                self.dictionary = dictionary;
                self.diagnostic = None;
                Notice::DictionaryReady { guesses }
            }
            Err(err) => {
                warn!(error = %err, "keeping built-in dictionary");
                let message = format!("Word list unavailable, using built-in words ({err})");
                self.diagnostic = Some(message.clone());
                Notice::DictionaryUnavailable(message)
            }
        }
    }
}
