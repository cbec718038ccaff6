//! Word Board - CLI
//!
//! Guess the hidden five-letter word in six tries, in a TUI or a plain
//! terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;
use wordle_board::{
    commands::{check_word, run_simple, score_words},
    config::{DEFAULT_LOG_LEVEL, GameConfig},
    dictionary::{Dictionary, PendingLoad, load},
    game::Controller,
    logging::{self, Fallback},
    output::{print_check_result, print_score_result},
};

#[derive(Parser)]
#[command(
    name = "wordle_board",
    about = "Six-row word guessing game with a terminal UI",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list to load (JSON with validGuesses/targetWords, or one word per line)
    #[arg(short = 'w', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Seed for reproducible target words
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log filter, e.g. 'info' or 'wordle_board=debug' (RUST_LOG overrides)
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole words at a prompt)
    Simple,

    /// Check whether a word would be accepted as a guess
    Check {
        /// Word to check
        word: String,
    },

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            dictionary: self.dictionary.clone(),
            seed: self.seed,
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let fallback = match command {
        Commands::Play => Fallback::Discard,
        _ => Fallback::Stderr,
    };
    logging::init(&config, fallback)?;

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { word } => {
            run_check_command(&config, &word);
            Ok(())
        }
        Commands::Score { guess, target } => run_score_command(&guess, &target),
    }
}

/// Start a controller on the built-in list and kick off the configured load
fn start(config: &GameConfig) -> (Controller, PendingLoad) {
    let controller = Controller::new(Dictionary::builtin(), config.rng());
    let pending = config
        .dictionary_source()
        .map_or_else(PendingLoad::idle, PendingLoad::spawn);
    (controller, pending)
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use wordle_board::interactive::{App, run_tui};

    let (controller, pending) = start(config);
    run_tui(App::new(controller, pending))
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let (controller, pending) = start(config);
    run_simple(controller, pending).map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(config: &GameConfig, word: &str) {
    let dictionary = match config.dictionary_source() {
        Some(source) => {
            let spinner = ProgressBar::new_spinner();
            spinner.set_message(format!("Loading {}", source.path().display()));
            spinner.enable_steady_tick(Duration::from_millis(80));
            let loaded = load(&source);
            spinner.finish_and_clear();
            loaded.unwrap_or_else(|e| {
                eprintln!("⚠️  {e}; using the built-in list");
                Dictionary::builtin()
            })
        }
        None => Dictionary::builtin(),
    };

    print_check_result(&check_word(&dictionary, word));
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_words(guess, target).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}
