//! Error types for the game core

use std::path::PathBuf;

/// A word did not have the required shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    /// Word was not exactly five characters long
    #[error("word must be exactly 5 characters, got {0}")]
    InvalidLength(usize),
}

/// Failures signaled by a game session
///
/// Both leave the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The guess was rejected before evaluation
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] WordError),

    /// A guess was submitted after the session ended
    #[error("game is already over, reset to play again")]
    GameOver,
}

/// Problems building a word list
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    /// The word list holds no usable words
    #[error("word list is empty")]
    Empty,

    /// The word list file could not be read
    #[error("failed to read word list '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
