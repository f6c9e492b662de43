//! Wordle Game - CLI
//!
//! Play Wordle in a full-screen TUI or a plain line-based mode, analyze
//! guesses and simulate games.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{
        SimulationConfig, analyze_guess, remaining_candidates, run_simple, run_simulation,
    },
    core::{Feedback, Word},
    game::{CyclingWordSource, GameSession, RandomWordSource, WordSource},
    output::{print_analysis_result, print_remaining_candidates, print_simulation_result},
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, 30 words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Play with a fixed target word instead of a random one (play and simple only)
    #[arg(long, global = true, conflicts_with = "seed")]
    target: Option<String>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show how a guess splits the word list
    Analyze {
        /// Guess to analyze
        word: String,

        /// Feedback received for the guess (e.g. 'GY-GY'); lists the words still possible
        #[arg(short, long, allow_hyphen_values = true)]
        feedback: Option<String>,
    },

    /// Auto-play many games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the word list selected with the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    use wordle_game::wordlists::loader::load_from_file;

    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("loading word list from {path}")),
    }
}

/// Build the target provider from the --target and --seed flags
fn make_source(
    words: Vec<Word>,
    target: Option<&str>,
    seed: Option<u64>,
) -> Result<Box<dyn WordSource>> {
    if let Some(target) = target {
        let word = Word::new(target).context("invalid --target")?;
        return Ok(Box::new(CyclingWordSource::fixed(word)));
    }
    let source = match seed {
        Some(seed) => RandomWordSource::with_seed(words, seed)?,
        None => RandomWordSource::new(words)?,
    };
    Ok(Box::new(source))
}

/// Reject --target for commands that never draw a target
fn check_target_usage(command: &Commands, target: Option<&str>) -> Result<()> {
    let draws_target = !matches!(command, Commands::Analyze { .. } | Commands::Simulate { .. });
    if target.is_some() && !draws_target {
        bail!("--target only applies to the play and simple commands");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let words = load_wordlist(&cli.wordlist)?;
    tracing::debug!(count = words.len(), wordlist = %cli.wordlist, "word list ready");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    check_target_usage(&command, cli.target.as_deref())?;

    match command {
        Commands::Play => {
            use wordle_game::interactive::{App, run_tui};

            let source = make_source(words, cli.target.as_deref(), cli.seed)?;
            run_tui(App::new(GameSession::new(source)))
        }
        Commands::Simple => {
            let source = make_source(words, cli.target.as_deref(), cli.seed)?;
            let mut session = GameSession::new(source);
            run_simple(&mut session)?;
            Ok(())
        }
        Commands::Analyze { word, feedback } => {
            let result = analyze_guess(&word, &words)?;
            print_analysis_result(&result);
            if let Some(feedback) = feedback {
                let feedback: Feedback = feedback.parse().map_err(anyhow::Error::msg)?;
                let remaining = remaining_candidates(&word, &feedback, &words)?;
                print_remaining_candidates(&word, &feedback, &remaining);
            }
            Ok(())
        }
        Commands::Simulate { count } => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            println!("Simulating {count} games (seed {seed})...");
            let result = run_simulation(&words, &SimulationConfig::new(count, seed))?;
            print_simulation_result(&result);
            Ok(())
        }
    }
}
