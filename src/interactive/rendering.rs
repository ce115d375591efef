//! TUI rendering with ratatui
//!
//! Layout for the interactive Hangman screen.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::format_used_letters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input hint
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word panel
            Constraint::Percentage(40), // Attempts and messages
        ])
        .split(chunks[1]);

    render_word_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN - Guess the hidden words")
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

fn render_word_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Masked word and clue
            Constraint::Percentage(40), // Used letters
        ])
        .split(area);

    render_current_word(f, app, chunks[0]);
    render_used_letters(f, app, chunks[1]);
}

fn render_current_word(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Word {} of {} ", app.round, app.total_words))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(session) = app.session.as_ref() else {
        let paragraph = Paragraph::new("No words left").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    // Space the letters out so the placeholders are easy to count
    let spaced: String = session
        .mask()
        .chars()
        .map(|c| c.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let word_style = match app.input_mode {
        InputMode::RoundWon => Style::default().fg(Color::Green),
        InputMode::GameOver => Style::default().fg(Color::Red),
        InputMode::Guessing | InputMode::Victory => Style::default().fg(Color::Yellow),
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(spaced, word_style.add_modifier(Modifier::BOLD)))
            .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::raw("Clue: "),
            Span::styled(
                app.clue.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            ),
        ]),
    ];

    if app.input_mode == InputMode::GameOver {
        content.push(Line::from(vec![
            Span::raw("Answer: "),
            Span::styled(
                session.target().to_uppercase(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_used_letters(f: &mut Frame, app: &App, area: Rect) {
    let text = app
        .session
        .as_ref()
        .map_or_else(String::new, |s| format_used_letters(s.used_letters()));

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Letters Used ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let (remaining, max) = app.session.as_ref().map_or(
        (app.config.max_attempts, app.config.max_attempts),
        |s| (s.attempts_remaining(), s.max_attempts()),
    );
    let ratio = if max == 0 {
        0.0
    } else {
        f64::from(remaining) / f64::from(max)
    };

    let color = if remaining <= 2 { Color::Red } else { Color::Cyan };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Tries Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{remaining}/{max}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guessing => (" Type a letter to guess | Esc to quit ", Color::Yellow),
        InputMode::RoundWon => (" CORRECT! | Enter for the next word ", Color::Green),
        InputMode::GameOver => (" GAME OVER | Press 'q' to quit ", Color::Red),
        InputMode::Victory => (" YOU BEAT THE GAME! | Press 'q' to quit ", Color::Green),
    };

    let input = Paragraph::new("")
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let solved = Paragraph::new(format!("Solved: {}", app.solved)).alignment(Alignment::Center);
    f.render_widget(solved, chunks[0]);

    let left = Paragraph::new(format!("Words left: {}", app.pool.remaining()))
        .alignment(Alignment::Center);
    f.render_widget(left, chunks[1]);

    let help = Paragraph::new("Esc / Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
