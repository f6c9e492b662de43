//! Game state and target selection

mod session;
mod source;

pub use session::{GameSession, MAX_ATTEMPTS};
pub use source::{CyclingWordSource, RandomWordSource, WordSource};
