//! TUI rendering with ratatui
//!
//! Board, eliminated letters and status for the game interface.

use super::app::{App, MessageStyle};
use crate::core::{Verdict, WORD_LENGTH};
use crate::game::{MAX_ATTEMPTS, WordSource};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: WordSource>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Exact => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {} ", letter.to_uppercase()), style),
        Span::raw(" "),
    ]
}

fn render_board<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let empty = Style::default().fg(Color::DarkGray);
    let pending = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let mut lines = Vec::with_capacity(MAX_ATTEMPTS as usize * 2);
    for (word, feedback) in &app.board {
        let spans: Vec<Span> = word
            .chars()
            .iter()
            .zip(feedback.iter())
            .flat_map(|(&letter, verdict)| tile(letter, verdict_style(verdict)))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    if !app.session.is_over() {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| match typed.get(i) {
                Some(&letter) => tile(letter, pending),
                None => tile('·', empty),
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    while lines.len() < MAX_ATTEMPTS as usize * 2 {
        let spans: Vec<Span> = (0..WORD_LENGTH).flat_map(|_| tile('·', empty)).collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Incorrect letters
            Constraint::Length(6), // Statistics
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_eliminated(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_eliminated<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let letters = crate::output::formatters::letter_list(app.eliminated.iter().copied());
    let paragraph = Paragraph::new(letters)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Incorrect Letters ")
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_statistics<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let stats = &app.stats;
    let distribution: Vec<Span> = stats
        .guess_distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(guesses, count)| Span::raw(format!("{guesses}:{count} ")))
        .collect();

    let content = vec![
        Line::from(format!(
            "Games: {} | Won: {} | Win Rate: {:.0}%",
            stats.total_games,
            stats.games_won,
            stats.win_rate()
        )),
        Line::from("Guess distribution:"),
        Line::from(distribution),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
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

fn render_input<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, color) = if app.session.is_over() {
        (" Game over | Ctrl-R for a new game ", Color::Green)
    } else {
        (" Enter your 5-letter guess ", Color::Yellow)
    };

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let attempts = Paragraph::new(format!(
        "Attempts left: {}/{MAX_ATTEMPTS}",
        app.session.attempts_remaining()
    ))
    .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let help = Paragraph::new("Enter: Submit | Backspace: Delete | Ctrl-R: New Game | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
