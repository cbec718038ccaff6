//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::dictionary::PendingLoad;
use crate::game::{CellRef, Controller, GameEvent, Notice};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How long to wait for a key before checking the dictionary loader again
const TICK: Duration = Duration::from_millis(100);

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App<R: Rng = StdRng> {
    pub controller: Controller<R>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pending: PendingLoad,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(controller: Controller<R>, pending: PendingLoad) -> Self {
        let mut app = Self {
            controller,
            messages: Vec::new(),
            should_quit: false,
            pending,
        };
        app.add_message("Guess the hidden word in 6 tries.", MessageStyle::Info);
        if app.pending.is_pending() {
            app.add_message("Loading word list...", MessageStyle::Info);
        }
        app
    }

    /// Whether a background dictionary load is still running
    #[must_use]
    pub const fn is_loading_dictionary(&self) -> bool {
        self.pending.is_pending()
    }

    /// Deliver the dictionary if the loader has finished
    pub fn poll_dictionary(&mut self) {
        if let Some(result) = self.pending.poll() {
            self.dispatch(GameEvent::DictionaryLoaded(result));
        }
    }

    /// Send an event to the controller and log any notice it returns
    pub fn dispatch(&mut self, event: GameEvent) {
        if let Some(notice) = self.controller.handle(event) {
            self.log_notice(&notice);
        }
    }

    fn log_notice(&mut self, notice: &Notice) {
        match notice {
            Notice::Rejected(err) => self.add_message(&err.to_string(), MessageStyle::Error),
            Notice::Scored { .. } => {}
            Notice::Won { guesses, .. } => {
                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Notice::Lost { target } => {
                self.add_message(
                    &format!("The word was {}", target.text().to_uppercase()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Notice::NewGame => self.add_message("New game started!", MessageStyle::Info),
            Notice::DictionaryReady { guesses } => self.add_message(
                &format!("Word list loaded ({guesses} words)"),
                MessageStyle::Success,
            ),
            // Shown in its own dismissable banner
            Notice::DictionaryUnavailable(_) => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Move focus left or right within the active row
    fn shift_focus(&mut self, delta: isize) {
        let session = self.controller.session();
        let row = session.active_row();
        let col = session.focus().map_or(0, |at| at.col);
        if let Some(col) = col.checked_add_signed(delta)
            && col < WORD_LENGTH
        {
            self.dispatch(GameEvent::FocusCell(CellRef::new(row, col)));
        }
    }

    /// Translate one key press into game events
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let finished = self.controller.session().outcome().is_terminal();

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.dispatch(GameEvent::NewGame),
            KeyCode::Char('q') if finished => self.should_quit = true,
            KeyCode::Char('n') if finished => self.dispatch(GameEvent::NewGame),
            KeyCode::Esc => {
                if self.controller.diagnostic().is_some() {
                    self.dispatch(GameEvent::DismissDiagnostic);
                } else if finished {
                    self.should_quit = true;
                }
            }
            KeyCode::Char(c) if !ctrl => self.dispatch(GameEvent::TypeLetter(c)),
            KeyCode::Backspace => self.dispatch(GameEvent::Backspace),
            KeyCode::Enter => self.dispatch(GameEvent::Submit),
            KeyCode::Left => self.shift_focus(-1),
            KeyCode::Right => self.shift_focus(1),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        app.poll_dictionary();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
