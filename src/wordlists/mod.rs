//! Word lists for target selection
//!
//! The default corpus is embedded into the binary; any other list can be
//! loaded from a file without touching the game logic.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
