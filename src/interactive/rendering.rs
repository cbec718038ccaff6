//! TUI rendering with ratatui
//!
//! Draws the board projection; never mutates game state.

use super::app::{App, MessageStyle};
use crate::core::{CellStatus, LetterStatusMap};
use crate::game::{BoardSnapshot, Cell, SessionOutcome};
use crate::output::formatters::KEYBOARD_ROWS;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let snapshot = app.controller.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Messages and stats
        ])
        .split(chunks[1]);

    render_play_area(f, &snapshot, main_chunks[0]);
    render_info_panel(f, app, &snapshot, main_chunks[1]);

    render_status(f, app, &snapshot, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD PUZZLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn status_style(status: CellStatus) -> Style {
    match status {
        CellStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellStatus::Empty => Style::default().fg(Color::White),
    }
}

fn cell_span(cell: &Cell, focused: bool) -> Span<'static> {
    let letter = cell.letter.map_or('·', |c| c.to_ascii_uppercase());
    let mut style = status_style(cell.status);
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!(" {letter} "), style)
}

fn render_play_area(f: &mut Frame, snapshot: &BoardSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Grid
            Constraint::Length(5), // Keyboard
        ])
        .split(area);

    let playing = snapshot.outcome == SessionOutcome::Playing;
    let lines: Vec<Line> = snapshot
        .grid
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let marker = if playing && row == snapshot.active_row {
                Span::styled("▶ ", Style::default().fg(Color::Yellow))
            } else {
                Span::raw("  ")
            };
            let mut spans = vec![marker];
            for cell in cells {
                spans.push(cell_span(cell, snapshot.focus == Some(cell.position)));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, chunks[0]);

    render_keyboard(f, &snapshot.letters, chunks[1]);
}

fn render_keyboard(f: &mut Frame, letters: &LetterStatusMap, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    Span::styled(
                        format!(" {} ", c.to_ascii_uppercase()),
                        status_style(letters.status_of(c)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, snapshot: &BoardSnapshot, area: Rect) {
    let banner_height = if snapshot.diagnostic.is_some() { 4 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height), // Dictionary diagnostic
            Constraint::Min(5),                // Messages
            Constraint::Length(10),            // Statistics
        ])
        .split(area);

    if let Some(diagnostic) = &snapshot.diagnostic {
        let banner = Paragraph::new(diagnostic.as_str())
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" Notice (Esc to dismiss) ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(banner, chunks[0]);
    }

    render_messages(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_stats<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let stats = app.controller.stats();
    let best = stats.distribution.iter().copied().max().unwrap_or(0);

    let mut lines = vec![Line::from(format!(
        "Played: {} | Win Rate: {:.0}%",
        stats.played,
        stats.win_rate()
    ))];
    for (i, &count) in stats.distribution.iter().enumerate() {
        let width = if best == 0 { 0 } else { count * 16 / best };
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, snapshot: &BoardSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let state_text = match &snapshot.outcome {
        SessionOutcome::Loading => "Drawing word...".to_string(),
        SessionOutcome::Playing => format!("Guess {} of 6", snapshot.active_row + 1),
        SessionOutcome::Won(guesses) => format!("Solved in {guesses}"),
        SessionOutcome::Lost(target) => format!("Answer: {}", target.text().to_uppercase()),
    };
    let state = Paragraph::new(state_text).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let dictionary = app.controller.dictionary();
    let dict_text = if app.is_loading_dictionary() {
        "Words: loading...".to_string()
    } else if dictionary.is_fallback() {
        format!("Words: built-in ({})", dictionary.target_count())
    } else {
        format!("Words: {}", dictionary.valid_guess_count())
    };
    let dict = Paragraph::new(dict_text).alignment(Alignment::Center);
    f.render_widget(dict, chunks[1]);

    let help_text = if snapshot.outcome.is_terminal() {
        "q: Quit | n: New Game"
    } else {
        "Enter: Submit | ←/→: Move | Ctrl-N: New | Ctrl-C: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
