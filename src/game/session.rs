//! Game session state
//!
//! A [`GameSession`] owns one game: the current target, the attempts left and
//! whether the target has been found. It is the only thing that mutates that
//! state. Sessions are independent values; hosts serving several players
//! create one per player.

use super::source::WordSource;
use crate::core::{Feedback, Word};
use crate::error::GameError;
use tracing::{debug, info};

/// Number of guesses a player gets per game
pub const MAX_ATTEMPTS: u8 = 6;

/// One active game
///
/// Terminality is derived: the game is over once it is won or no attempts
/// remain. A winning guess never costs an attempt.
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::{CyclingWordSource, GameSession};
///
/// let source = CyclingWordSource::fixed(Word::new("apple").unwrap());
/// let mut session = GameSession::new(source);
///
/// let feedback = session.submit_guess("grape").unwrap();
/// assert_eq!(feedback.to_string(), "--YYG");
/// assert_eq!(session.attempts_remaining(), 5);
///
/// assert!(session.submit_guess("APPLE").unwrap().is_solved());
/// assert!(session.is_over() && session.is_won());
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<S: WordSource> {
    source: S,
    target: Word,
    attempts_remaining: u8,
    won: bool,
}

impl<S: WordSource> GameSession<S> {
    /// Start a new game with a target drawn from `source`
    pub fn new(mut source: S) -> Self {
        let target = source.next_word();
        debug!("new game started");
        Self {
            source,
            target,
            attempts_remaining: MAX_ATTEMPTS,
            won: false,
        }
    }

    /// Submit a guess and get its feedback
    ///
    /// A guess equal to the target (ignoring case) wins the game; any other
    /// guess uses up one attempt.
    ///
    /// # Errors
    /// - `GameError::GameOver` if the game has already ended
    /// - `GameError::InvalidGuess` if the guess is not exactly 5 characters
    ///
    /// The session is unchanged when an error is returned.
    pub fn submit_guess(&mut self, guess: &str) -> Result<Feedback, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let guess = Word::new(guess)?;
        self.submit_word(&guess)
    }

    /// Submit an already validated word
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game has already ended.
    pub fn submit_word(&mut self, guess: &Word) -> Result<Feedback, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let feedback = Feedback::calculate(guess, &self.target);
        if *guess == self.target {
            self.won = true;
            info!(attempts = self.attempts_used() + 1, "target found");
        } else {
            self.attempts_remaining -= 1;
            debug!(
                guess = %guess,
                feedback = %feedback,
                attempts_remaining = self.attempts_remaining,
                "guess evaluated"
            );
            if self.attempts_remaining == 0 {
                info!("out of attempts");
            }
        }

        Ok(feedback)
    }

    /// Check if the game has ended, won or lost
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.won || self.attempts_remaining == 0
    }

    /// Check if the target has been found
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// The word being guessed
    ///
    /// Reveals the answer; callers decide when to show it.
    #[must_use]
    pub const fn current_target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    /// Non-winning guesses made so far
    #[must_use]
    pub const fn attempts_used(&self) -> u8 {
        MAX_ATTEMPTS - self.attempts_remaining
    }

    /// Start over with a freshly drawn target
    ///
    /// The new target may repeat the previous one.
    pub fn reset(&mut self) {
        self.target = self.source.next_word();
        self.attempts_remaining = MAX_ATTEMPTS;
        self.won = false;
        info!("game reset");
    }
}
