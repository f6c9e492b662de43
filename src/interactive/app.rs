//! TUI application state and logic

use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::error::GameError;
use crate::game::{GameSession, MAX_ATTEMPTS, WordSource};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::BTreeSet;
use std::io;

/// Application state
pub struct App<S: WordSource> {
    pub session: GameSession<S>,
    /// Guesses of the current game with their feedback
    pub board: Vec<(Word, Feedback)>,
    pub input_buffer: String,
    pub eliminated: BTreeSet<char>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` holds the number of games won with `n` guesses
    pub guess_distribution: [usize; MAX_ATTEMPTS as usize + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<S: WordSource> App<S> {
    #[must_use]
    pub fn new(session: GameSession<S>) -> Self {
        Self {
            session,
            board: Vec::new(),
            input_buffer: String::new(),
            eliminated: BTreeSet::new(),
            messages: vec![Message {
                text: "Welcome to Wordle! Type a 5-letter guess and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Append a typed character to the pending guess
    pub fn push_char(&mut self, c: char) {
        if !self.session.is_over()
            && !c.is_whitespace()
            && self.input_buffer.chars().count() < WORD_LENGTH
        {
            self.input_buffer.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the pending guess to the session
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();

        match self.session.submit_guess(&guess) {
            Ok(feedback) => {
                self.input_buffer.clear();
                if let Ok(word) = Word::new(&guess) {
                    self.eliminated.extend(feedback.eliminated_letters(&word));
                    self.board.push((word, feedback));
                }
                if self.session.is_over() {
                    self.finish_game();
                }
            }
            Err(GameError::InvalidGuess(_)) => {
                self.add_message("Please enter exactly 5 letters.", MessageStyle::Error);
            }
            Err(e @ GameError::GameOver) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        let target = self.session.current_target().text().to_uppercase();
        self.stats.total_games += 1;

        if self.session.is_won() {
            self.stats.games_won += 1;
            let guess_count = self.board.len();
            if guess_count < self.stats.guess_distribution.len() {
                self.stats.guess_distribution[guess_count] += 1;
            }
            self.add_message(
                &format!("🎉 Congratulations! You've guessed the word: {target}"),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("Game Over! The correct word was: {target}"),
                MessageStyle::Error,
            );
        }
        self.add_message("Press Ctrl-R for a new game or Esc to quit.", MessageStyle::Info);
    }

    /// Abandon the current game and start a new one
    pub fn new_game(&mut self) {
        self.session.reset();
        self.board.clear();
        self.input_buffer.clear();
        self.eliminated.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('r') if ctrl => app.new_game(),
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => app.pop_char(),
                KeyCode::Enter => app.submit_guess(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
