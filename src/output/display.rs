//! Display functions for command results and game state

use super::formatters::{create_progress_bar, format_keyboard, format_row};
use crate::commands::{CheckResult, ScoreResult};
use crate::core::CellStatus;
use crate::game::{BoardSnapshot, Notice, SessionOutcome, Statistics};
use colored::Colorize;

/// Print the grid and keyboard summary
pub fn print_board(snapshot: &BoardSnapshot) {
    println!("{}", "─".repeat(40).cyan());
    for (i, row) in snapshot.grid.iter().enumerate() {
        let marker = if i == snapshot.active_row && snapshot.outcome == SessionOutcome::Playing {
            "▶".bright_yellow().to_string()
        } else {
            " ".to_string()
        };
        println!("  {marker} {}", format_row(row));
    }
    println!();
    for line in format_keyboard(&snapshot.letters) {
        println!("  {line}");
    }
    if let Some(diagnostic) = &snapshot.diagnostic {
        println!("\n  {}", diagnostic.bright_black());
    }
    println!("{}", "─".repeat(40).cyan());
}

/// Print a notice from the controller
pub fn print_notice(notice: &Notice) {
    match notice {
        Notice::Rejected(err) => println!("❌ {}", err.to_string().red()),
        Notice::Scored { feedback, .. } => println!("   {feedback}"),
        Notice::Won { guesses, target } => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                "    🎉 🎊 ✨  S O L V E D !  ✨ 🎊 🎉    ".bright_green().bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
            println!(
                "\n  {} in {} {}\n",
                target.text().to_uppercase().bright_white().bold(),
                guesses.to_string().bright_cyan().bold(),
                if *guesses == 1 { "guess" } else { "guesses" }
            );
        }
        Notice::Lost { target } => println!(
            "\n💀 Out of guesses! The word was {}\n",
            target.text().to_uppercase().bright_yellow().bold()
        ),
        Notice::NewGame => {}
        Notice::DictionaryReady { guesses } => {
            println!("{}", format!("📖 Word list loaded ({guesses} words)").green());
        }
        Notice::DictionaryUnavailable(message) => println!("⚠️  {}", message.yellow()),
    }
}

/// Print win/loss statistics with a guess distribution
pub fn print_stats(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:    {}", stats.played);
    println!("   Win rate:  {:.0}%", stats.win_rate());

    let best = stats.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(count, best, 20);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
    println!();
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    let word = result.input.to_uppercase();
    match &result.verdict {
        Ok(_) if result.curated => {
            println!("✅ {} is in the word list", word.bright_green().bold());
        }
        Ok(_) => println!(
            "✅ {} accepted {}",
            word.bright_green().bold(),
            "(not listed, passes shape checks)".bright_black()
        ),
        Err(reason) => println!("❌ {} rejected: {reason}", word.red().bold()),
    }
    if result.fallback {
        println!(
            "{}",
            "   Only the built-in list was available; pass --dictionary for a full check."
                .bright_black()
        );
    }
}

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    let feedback = &result.feedback;
    println!(
        "{} vs {}: {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow(),
        feedback
    );
    if feedback.is_solved() {
        println!("   {}", "Solved!".bright_green().bold());
    } else {
        println!(
            "   {} correct, {} present, {} absent",
            feedback.count(CellStatus::Correct).to_string().green(),
            feedback.count(CellStatus::Present).to_string().yellow(),
            feedback.count(CellStatus::Absent)
        );
    }
}
