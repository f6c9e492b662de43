//! Core domain types for the game
//!
//! Words, verdicts and the guess evaluator. Everything here is pure and
//! has no knowledge of sessions or word sources.

mod feedback;
mod word;

pub use feedback::{Feedback, Verdict, evaluate};
pub use word::{WORD_LENGTH, Word};
