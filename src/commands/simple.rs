//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one guess per line, colored tiles as
//! feedback.

use crate::core::Word;
use crate::error::GameError;
use crate::game::{GameSession, WordSource};
use crate::output::formatters::{feedback_row, letter_list};
use colored::Colorize;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

/// A line typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleInput {
    Guess(String),
    NewGame,
    Quit,
    Empty,
}

impl SimpleInput {
    /// Interpret one input line
    ///
    /// Commands start with `/` so that no five-letter guess is mistaken for
    /// one.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Self::Empty,
            "/new" | "/reset" | "/n" => Self::NewGame,
            "/quit" | "/exit" | "/q" => Self::Quit,
            _ => Self::Guess(trimmed.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: WordSource>(session: &mut GameSession<S>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the simple mode against any reader and writer
///
/// Stops at end of input or on `/quit`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<S, R, W>(
    session: &mut GameSession<S>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Welcome to Wordle!                        ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the 5-letter word in 6 tries.")?;
    writeln!(out, "Commands: '/new' for a new game, '/quit' to exit\n")?;

    let mut eliminated: BTreeSet<char> = BTreeSet::new();
    let mut line = String::new();

    loop {
        if session.is_over() {
            write!(out, "Type '/new' to play again or '/quit' to exit: ")?;
        } else {
            write!(
                out,
                "Guess {} ({} left): ",
                session.attempts_used() + 1,
                session.attempts_remaining()
            )?;
        }
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match SimpleInput::parse(&line) {
            SimpleInput::Empty => {}
            SimpleInput::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            SimpleInput::NewGame => {
                session.reset();
                eliminated.clear();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            SimpleInput::Guess(text) => match session.submit_guess(&text) {
                Ok(feedback) => {
                    // Length was just validated by the session
                    if let Ok(guess) = Word::new(&text) {
                        eliminated.extend(feedback.eliminated_letters(&guess));
                        writeln!(out, "\n  {}\n", feedback_row(&guess, &feedback))?;
                    }
                    if !eliminated.is_empty() {
                        writeln!(
                            out,
                            "  Incorrect letters: {}\n",
                            letter_list(eliminated.iter().copied()).bright_black()
                        )?;
                    }
                    if session.is_over() {
                        write_final_message(session, out)?;
                    }
                }
                Err(GameError::InvalidGuess(e)) => {
                    writeln!(out, "{} {e}\n", "❌ Invalid input:".red())?;
                }
                Err(GameError::GameOver) => {
                    writeln!(out, "{}\n", GameError::GameOver.to_string().yellow())?;
                }
            },
        }
    }
}

fn write_final_message<S: WordSource, W: Write>(
    session: &GameSession<S>,
    out: &mut W,
) -> io::Result<()> {
    let target = session.current_target().text().to_uppercase();
    if session.is_won() {
        writeln!(
            out,
            "{}\n",
            format!("🎉 Congratulations! You've guessed the word: {target}")
                .green()
                .bold()
        )
    } else {
        writeln!(
            out,
            "{}\n",
            format!("❌ Game Over! The correct word was: {target}")
                .red()
                .bold()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::CyclingWordSource;
    use crate::wordlists::loader::words_from_slice;

    fn play(targets: &[&str], script: &str) -> (GameSession<CyclingWordSource>, String) {
        colored::control::set_override(false);
        let source = CyclingWordSource::new(words_from_slice(targets)).unwrap();
        let mut session = GameSession::new(source);
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        run_simple_with(&mut session, &mut input, &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_commands_and_guesses() {
        assert_eq!(SimpleInput::parse("  /QUIT \n"), SimpleInput::Quit);
        assert_eq!(SimpleInput::parse("/new"), SimpleInput::NewGame);
        assert_eq!(SimpleInput::parse("\n"), SimpleInput::Empty);
        assert_eq!(
            SimpleInput::parse(" Reset \n"),
            SimpleInput::Guess("Reset".to_string())
        );
    }

    #[test]
    fn winning_game_prints_congratulations() {
        let (session, output) = play(&["apple"], "grape\napple\n/quit\n");

        assert!(session.is_won());
        assert!(output.contains("Incorrect letters: G R"));
        assert!(output.contains("Congratulations! You've guessed the word: APPLE"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn losing_game_reveals_target() {
        let script = "grape\n".repeat(6);
        let (session, output) = play(&["apple"], &script);

        assert!(session.is_over());
        assert!(!session.is_won());
        assert!(output.contains("Game Over! The correct word was: APPLE"));
    }

    #[test]
    fn invalid_guess_is_reported_and_free() {
        let (session, output) = play(&["apple"], "toolong\n");

        assert!(output.contains("Invalid input"));
        assert_eq!(session.attempts_remaining(), 6);
    }

    #[test]
    fn guess_after_game_over_is_rejected() {
        let (session, output) = play(&["apple"], "apple\ngrape\n");

        assert!(output.contains("game is already over"));
        assert!(session.is_won());
    }

    #[test]
    fn new_game_resets_session() {
        let (session, output) = play(&["apple", "stone"], "apple\n/new\ngrape\n");

        assert!(output.contains("New game started"));
        assert_eq!(session.current_target().text(), "stone");
        assert_eq!(session.attempts_remaining(), 5);
    }
}
