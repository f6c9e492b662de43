//! Wordle Game
//!
//! A word guessing game: find the hidden five-letter word in six attempts,
//! with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{GameSession, RandomWordSource};
//! use wordle_game::wordlists::{WORDS, loader::words_from_slice};
//!
//! let source = RandomWordSource::with_seed(words_from_slice(WORDS), 7).unwrap();
//! let mut session = GameSession::new(source);
//!
//! let feedback = session.submit_guess("crane").unwrap();
//! println!("{} ({} attempts left)", feedback.to_emoji(), session.attempts_remaining());
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Game sessions and target selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
