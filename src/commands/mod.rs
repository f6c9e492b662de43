//! Command implementations

pub mod analyze;
pub mod simple;
pub mod simulate;

pub use analyze::{AnalysisResult, analyze_guess, remaining_candidates};
pub use simple::{SimpleInput, run_simple};
pub use simulate::{GameOutcome, SimulationConfig, SimulationResult, play_game, run_simulation};
