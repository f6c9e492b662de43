//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AnalysisResult, SimulationResult};
use crate::core::{Feedback, Word};
use colored::Colorize;

/// Number of feedback groups listed in an analysis
const TOP_BUCKETS: usize = 10;

/// Print the result of a guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible targets:", result.total_words);
    println!(
        "   Distinct feedbacks: {}",
        result.distinct_feedbacks().to_string().bright_yellow()
    );
    println!("   Entropy:            {:.3} bits", result.entropy);
    println!(
        "   Expected remain:    {:.1} candidates",
        result.expected_remaining
    );
    println!("   Worst case:         {} candidates", result.largest_bucket);

    println!("\n📈 {}", "Largest feedback groups:".bright_cyan().bold());
    for (feedback, count) in result.buckets.iter().take(TOP_BUCKETS) {
        let bar = create_progress_bar(*count as f64, result.largest_bucket as f64, 30);
        println!("   {} {} {count:4}", feedback.to_emoji(), bar.green());
    }
    if result.buckets.len() > TOP_BUCKETS {
        println!(
            "   {}",
            format!("... {} more", result.buckets.len() - TOP_BUCKETS).bright_black()
        );
    }
}

/// Print the words left after a guess received the given feedback
pub fn print_remaining_candidates(guess: &str, feedback: &Feedback, remaining: &[&Word]) {
    println!(
        "\n🔎 {} {} {}",
        "Remaining after".bright_cyan().bold(),
        guess.to_uppercase().bright_yellow().bold(),
        feedback.to_emoji()
    );
    if remaining.is_empty() {
        println!("   {}", "No word in the list matches this feedback".red());
        return;
    }
    println!("   {} candidates:", remaining.len());
    for word in remaining {
        println!("   • {}", word.text().to_uppercase());
    }
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcome:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Won:              {}",
        format!("{} ({:.1}%)", result.wins, result.win_rate()).green()
    );
    println!(
        "   Lost:             {}",
        result.losses().to_string().red()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guess_count, &count) in result.distribution.iter().enumerate().skip(1) {
        let pct = (count as f64 / result.games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
    let pct = (result.losses() as f64 / result.games as f64) * 100.0;
    let bar = create_progress_bar(pct, 100.0, 40);
    println!("   X: {} {:4} ({pct:5.1}%)", bar.red(), result.losses());
}
