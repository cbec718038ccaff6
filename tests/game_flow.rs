//! End-to-end games driven through the controller

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;
use wordle_board::commands::enter_word;
use wordle_board::core::{CellStatus, Feedback, Word};
use wordle_board::dictionary::loader::words_from_slice;
use wordle_board::dictionary::{Dictionary, FileSource, PendingLoad};
use wordle_board::game::{
    Controller, GameEvent, Notice, SessionOutcome, SubmissionError, ValidationError,
};

const GUESSES: &[&str] = &["crane", "slate", "motor", "speed", "apple", "error"];

fn controller() -> Controller {
    let dict = Dictionary::from_words(words_from_slice(GUESSES), words_from_slice(&["lemon"]));
    Controller::new(dict, StdRng::seed_from_u64(1))
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("wordle_board_{}_{name}", std::process::id()))
}

#[test]
fn win_on_third_guess() {
    let mut game = controller();

    assert!(matches!(
        enter_word(&mut game, "crane"),
        Some(Notice::Scored { row: 0, .. })
    ));
    assert!(matches!(
        enter_word(&mut game, "slate"),
        Some(Notice::Scored { row: 1, .. })
    ));
    assert_eq!(
        enter_word(&mut game, "lemon"),
        Some(Notice::Won {
            guesses: 3,
            target: Word::new("lemon").unwrap(),
        })
    );

    let snapshot = game.snapshot();
    assert_eq!(snapshot.outcome, SessionOutcome::Won(3));
    assert_eq!(snapshot.locked_rows, vec![0, 1, 2]);
    assert_eq!(snapshot.focus, None);
    assert_eq!(game.stats().distribution[2], 1);
}

#[test]
fn loss_after_six_misses() {
    let mut game = controller();

    for (row, guess) in GUESSES.iter().take(5).enumerate() {
        assert!(matches!(
            enter_word(&mut game, guess),
            Some(Notice::Scored { row: r, .. }) if r == row
        ));
    }
    assert_eq!(
        enter_word(&mut game, "error"),
        Some(Notice::Lost {
            target: Word::new("lemon").unwrap(),
        })
    );

    assert_eq!(
        game.session().outcome(),
        &SessionOutcome::Lost(Word::new("lemon").unwrap())
    );
    assert_eq!(
        enter_word(&mut game, "lemon"),
        Some(Notice::Rejected(SubmissionError::GameOver))
    );
    assert_eq!(game.stats().played, 1);
    assert_eq!(game.stats().won, 0);
}

#[test]
fn incomplete_row_is_rejected_and_kept() {
    let mut game = controller();
    for c in "cra".chars() {
        game.handle(GameEvent::TypeLetter(c));
    }

    assert_eq!(
        game.handle(GameEvent::Submit),
        Some(Notice::Rejected(SubmissionError::IncompleteWord))
    );
    assert_eq!(game.session().board().filled_count(0), 3);
    assert_eq!(game.session().active_row(), 0);
}

#[test]
fn invalid_word_clears_row_for_retry() {
    let mut game = controller();

    assert_eq!(
        enter_word(&mut game, "zzzzz"),
        Some(Notice::Rejected(SubmissionError::InvalidWord(
            ValidationError::RepeatingPattern
        )))
    );
    assert_eq!(game.session().board().filled_count(0), 0);
    assert_eq!(game.session().active_row(), 0);

    assert_eq!(
        enter_word(&mut game, "slate"),
        Some(Notice::Scored {
            row: 0,
            feedback: Feedback::from([
                CellStatus::Absent,
                CellStatus::Present,
                CellStatus::Absent,
                CellStatus::Absent,
                CellStatus::Present,
            ]),
        })
    );
    let letters = &game.snapshot().letters;
    assert_eq!(letters.status_of('t'), CellStatus::Absent);
    assert_eq!(letters.status_of('e'), CellStatus::Present);
    assert_eq!(letters.status_of('l'), CellStatus::Present);
}

#[test]
fn new_game_after_win_resets_board() {
    let mut game = controller();
    enter_word(&mut game, "lemon");
    assert_eq!(game.handle(GameEvent::NewGame), Some(Notice::NewGame));

    let snapshot = game.snapshot();
    assert_eq!(snapshot.outcome, SessionOutcome::Playing);
    assert!(snapshot.locked_rows.is_empty());
    assert!(snapshot.letters.is_empty());
    assert_eq!(game.stats().played, 1);
}

#[test]
fn background_load_from_json_file() {
    let path = temp_path("dict.json");
    fs::write(
        &path,
        r#"{ "validGuesses": ["crane", "qajaq"], "targetWords": ["lemon"] }"#,
    )
    .unwrap();

    let mut game = Controller::new(Dictionary::builtin(), StdRng::seed_from_u64(3));
    let mut pending = PendingLoad::spawn(FileSource::new(&path));
    let result = pending.wait().unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(
        game.handle(GameEvent::DictionaryLoaded(result)),
        Some(Notice::DictionaryReady { guesses: 2 })
    );
    assert!(!game.dictionary().is_fallback());
    assert!(!pending.is_pending());

    // Curated words skip the shape checks
    assert!(matches!(
        enter_word(&mut game, "qajaq"),
        Some(Notice::Scored { .. } | Notice::Won { .. })
    ));
}

#[test]
fn missing_file_keeps_builtin_and_reports() {
    let mut game = Controller::new(Dictionary::builtin(), StdRng::seed_from_u64(3));
    let mut pending = PendingLoad::spawn(FileSource::new(temp_path("missing.json")));
    let result = pending.wait().unwrap();
    assert!(result.is_err());

    assert!(matches!(
        game.handle(GameEvent::DictionaryLoaded(result)),
        Some(Notice::DictionaryUnavailable(_))
    ));
    assert!(game.dictionary().is_fallback());
    assert!(game.snapshot().diagnostic.is_some());
    assert_eq!(game.session().outcome(), &SessionOutcome::Playing);

    game.handle(GameEvent::DismissDiagnostic);
    assert!(game.snapshot().diagnostic.is_none());
}
