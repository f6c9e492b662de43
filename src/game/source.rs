//! Target word providers
//!
//! A session asks its [`WordSource`] for a fresh target at start and on every
//! reset. The random source is what real games use; the cycling source gives
//! reproducible targets for tests and fixed-word play.

use crate::core::Word;
use crate::error::WordListError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies target words on demand
pub trait WordSource {
    /// Draw the next target word
    fn next_word(&mut self) -> Word;
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn next_word(&mut self) -> Word {
        (**self).next_word()
    }
}

/// Draws words uniformly at random from a fixed, non-empty corpus
#[derive(Debug, Clone)]
pub struct RandomWordSource<R = StdRng> {
    words: Vec<Word>,
    rng: R,
}

impl RandomWordSource<StdRng> {
    /// Create a source seeded from the operating system
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Create a source whose draws are fully determined by `seed`
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn with_seed(words: Vec<Word>, seed: u64) -> Result<Self, WordListError> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWordSource<R> {
    /// Create a source drawing with the given random number generator
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn with_rng(words: Vec<Word>, rng: R) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words, rng })
    }
}

impl<R: Rng> WordSource for RandomWordSource<R> {
    fn next_word(&mut self) -> Word {
        let index = self.rng.random_range(0..self.words.len());
        self.words[index].clone()
    }
}

/// Returns its words in order, wrapping around at the end
#[derive(Debug, Clone)]
pub struct CyclingWordSource {
    words: Vec<Word>,
    next: usize,
}

impl CyclingWordSource {
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words, next: 0 })
    }

    /// A source that always returns `word`
    #[must_use]
    pub fn fixed(word: Word) -> Self {
        Self {
            words: vec![word],
            next: 0,
        }
    }
}

impl WordSource for CyclingWordSource {
    fn next_word(&mut self) -> Word {
        let word = self.words[self.next].clone();
        self.next = (self.next + 1) % self.words.len();
        word
    }
}
