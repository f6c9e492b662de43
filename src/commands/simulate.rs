//! Simulation command
//!
//! Plays many independent games with an automated player and collects
//! statistics. Every game owns its own session and seeded word source, so
//! games run in parallel and a given seed always reproduces the same run.

use crate::core::{Feedback, Word};
use crate::error::WordListError;
use crate::game::{GameSession, MAX_ATTEMPTS, RandomWordSource};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Mixed into the game seed so the player and the word source draw differently
const PLAYER_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            show_progress: true,
        }
    }
}

/// Result of one simulated game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub target: String,
    pub guesses: Vec<String>,
    pub won: bool,
}

/// Aggregate statistics over all simulated games
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub wins: usize,
    /// Index `n` holds the number of games won with `n` guesses
    pub distribution: [usize; MAX_ATTEMPTS as usize + 1],
    pub average_guesses: f64,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub const fn losses(&self) -> usize {
        self.games - self.wins
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64 * 100.0
        }
    }
}

/// Play one game with the given seed
///
/// The player always guesses a random word that is consistent with all
/// feedback received so far.
///
/// # Errors
///
/// Returns `WordListError::Empty` if `corpus` is empty.
pub fn play_game(corpus: &[Word], seed: u64) -> Result<GameOutcome, WordListError> {
    let source = RandomWordSource::with_seed(corpus.to_vec(), seed)?;
    let mut session = GameSession::new(source);
    let mut rng = StdRng::seed_from_u64(seed ^ PLAYER_SEED_SALT);

    let mut candidates: Vec<&Word> = corpus.iter().collect();
    let mut guesses = Vec::new();

    while !session.is_over() {
        let Some(&guess) = candidates.choose(&mut rng) else {
            break;
        };
        let Ok(feedback) = session.submit_word(guess) else {
            break;
        };
        guesses.push(guess.text().to_string());
        candidates.retain(|&candidate| Feedback::calculate(guess, candidate) == feedback);
    }

    Ok(GameOutcome {
        target: session.current_target().text().to_string(),
        guesses,
        won: session.is_won(),
    })
}

/// Run `config.games` games in parallel
///
/// # Errors
///
/// Returns `WordListError::Empty` if `corpus` is empty.
pub fn run_simulation(
    corpus: &[Word],
    config: &SimulationConfig,
) -> Result<SimulationResult, WordListError> {
    if corpus.is_empty() {
        return Err(WordListError::Empty);
    }

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let outcomes = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let outcome = play_game(corpus, config.seed.wrapping_add(index as u64));
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution = [0; MAX_ATTEMPTS as usize + 1];
    let mut wins = 0;
    let mut winning_guesses = 0;
    for outcome in outcomes.iter().filter(|o| o.won) {
        wins += 1;
        winning_guesses += outcome.guesses.len();
        distribution[outcome.guesses.len()] += 1;
    }

    let average_guesses = if wins == 0 {
        0.0
    } else {
        winning_guesses as f64 / wins as f64
    };
    let secs = duration.as_secs_f64();
    let games_per_second = if secs > 0.0 {
        config.games as f64 / secs
    } else {
        0.0
    };

    info!(games = config.games, wins, "simulation finished");

    Ok(SimulationResult {
        games: config.games,
        wins,
        distribution,
        average_guesses,
        duration,
        games_per_second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn quiet(games: usize, seed: u64) -> SimulationConfig {
        SimulationConfig {
            show_progress: false,
            ..SimulationConfig::new(games, seed)
        }
    }

    #[test]
    fn play_game_respects_attempt_limit() {
        let words = words_from_slice(WORDS);
        for seed in 0..50 {
            let outcome = play_game(&words, seed).unwrap();
            assert!(!outcome.guesses.is_empty());
            assert!(outcome.guesses.len() <= MAX_ATTEMPTS as usize);
            if outcome.won {
                assert_eq!(outcome.guesses.last(), Some(&outcome.target));
            } else {
                assert_eq!(outcome.guesses.len(), MAX_ATTEMPTS as usize);
            }
        }
    }

    #[test]
    fn play_game_is_reproducible() {
        let words = words_from_slice(WORDS);
        let a = play_game(&words, 77).unwrap();
        let b = play_game(&words, 77).unwrap();

        assert_eq!(a.target, b.target);
        assert_eq!(a.guesses, b.guesses);
    }

    #[test]
    fn single_word_corpus_always_wins_first_try() {
        let words = words_from_slice(&["apple"]);
        let outcome = play_game(&words, 3).unwrap();

        assert!(outcome.won);
        assert_eq!(outcome.guesses, ["apple"]);
    }

    #[test]
    fn simulation_totals_add_up() {
        let words = words_from_slice(WORDS);
        let result = run_simulation(&words, &quiet(40, 1)).unwrap();

        assert_eq!(result.games, 40);
        assert_eq!(result.wins + result.losses(), 40);
        assert_eq!(result.distribution.iter().sum::<usize>(), result.wins);
        assert_eq!(result.distribution[0], 0);
        assert!(result.win_rate() <= 100.0);
    }

    #[test]
    fn simulation_rejects_empty_corpus() {
        assert!(matches!(
            run_simulation(&[], &quiet(5, 0)),
            Err(WordListError::Empty)
        ));
    }
}
