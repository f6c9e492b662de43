//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match verdict {
        Verdict::Exact => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// Render a guessed word with its feedback as a row of tiles
#[must_use]
pub fn feedback_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.iter())
        .map(|(&letter, verdict)| letter_tile(letter, verdict).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join letters as an uppercase, space separated list
#[must_use]
pub fn letter_list<I: IntoIterator<Item = char>>(letters: I) -> String {
    letters
        .into_iter()
        .flat_map(char::to_uppercase)
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_row_keeps_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("grape").unwrap();
        let feedback: Feedback = "--YYG".parse().unwrap();

        assert_eq!(feedback_row(&guess, &feedback), " G   R   A   P   E ");
    }

    #[test]
    fn letter_list_uppercases() {
        assert_eq!(letter_list(['g', 'r', 'z']), "G R Z");
        assert_eq!(letter_list(std::iter::empty()), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
