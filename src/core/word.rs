//! Word representation
//!
//! A Word stores a normalized 5-character word. Any characters are accepted;
//! the only requirement is the length.

use crate::error::WordError;
use std::fmt;
use std::str::FromStr;

/// Number of characters in every guess and target
pub const WORD_LENGTH: usize = 5;

/// A 5-character word, normalized to lowercase
///
/// Two words compare equal when their normalized forms match, so `"CRANE"`
/// and `"crane"` are the same word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the string is not exactly
    /// 5 characters long.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0r!").is_ok());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();
        let count = text.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        let mut chars = [' '; WORD_LENGTH];
        for (slot, ch) in chars.iter_mut().zip(text.chars()) {
            *slot = fold_case(ch);
        }

        Ok(Self {
            text: chars.iter().collect(),
            chars,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the normalized characters
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }
}

/// Lowercase a single character, keeping it unchanged when its lowercase
/// form is more than one character.
fn fold_case(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
