//! Guess analysis command
//!
//! Shows how a single guess splits the word list into feedback groups.

use crate::core::{Feedback, Word};
use crate::error::WordError;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: String,
    pub total_words: usize,
    /// Feedback groups, largest first
    pub buckets: Vec<(Feedback, usize)>,
    pub largest_bucket: usize,
    pub expected_remaining: f64,
    pub entropy: f64,
}

impl AnalysisResult {
    #[must_use]
    pub fn distinct_feedbacks(&self) -> usize {
        self.buckets.len()
    }
}

/// Evaluate `guess` against every word in `corpus`
///
/// # Errors
///
/// Returns an error if the guess is not exactly 5 characters.
pub fn analyze_guess(guess: &str, corpus: &[Word]) -> Result<AnalysisResult, WordError> {
    let guess_word = Word::new(guess)?;

    let counts: FxHashMap<Feedback, usize> = corpus
        .par_iter()
        .map(|target| Feedback::calculate(&guess_word, target))
        .fold(FxHashMap::default, |mut counts, feedback| {
            *counts.entry(feedback).or_insert(0) += 1;
            counts
        })
        .reduce(FxHashMap::default, |mut merged, partial| {
            for (feedback, count) in partial {
                *merged.entry(feedback).or_insert(0) += count;
            }
            merged
        });

    let total_words = corpus.len();
    let mut buckets: Vec<(Feedback, usize)> = counts.into_iter().collect();
    // Ties broken by feedback text so output is stable
    buckets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_string().cmp(&b.0.to_string())));

    let (entropy, expected_remaining) = if total_words == 0 {
        (0.0, 0.0)
    } else {
        let total = total_words as f64;
        buckets.iter().fold((0.0, 0.0), |(entropy, expected), &(_, count)| {
            let p = count as f64 / total;
            (entropy - p * p.log2(), expected + p * count as f64)
        })
    };

    Ok(AnalysisResult {
        guess: guess_word.text().to_string(),
        total_words,
        largest_bucket: buckets.first().map_or(0, |&(_, count)| count),
        buckets,
        expected_remaining,
        entropy,
    })
}

/// Words from `corpus` that would have produced `feedback` for `guess`
///
/// # Errors
///
/// Returns an error if the guess is not exactly 5 characters.
pub fn remaining_candidates<'a>(
    guess: &str,
    feedback: &Feedback,
    corpus: &'a [Word],
) -> Result<Vec<&'a Word>, WordError> {
    let guess_word = Word::new(guess)?;
    Ok(corpus
        .par_iter()
        .filter(|&target| Feedback::calculate(&guess_word, target) == *feedback)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn analyze_counts_every_word() {
        let words = words_from_slice(WORDS);
        let result = analyze_guess("CRANE", &words).unwrap();

        assert_eq!(result.guess, "crane");
        assert_eq!(result.total_words, words.len());
        let bucket_total: usize = result.buckets.iter().map(|&(_, count)| count).sum();
        assert_eq!(bucket_total, words.len());
        assert_eq!(result.largest_bucket, result.buckets[0].1);
    }

    #[test]
    fn analyze_distinct_words_give_max_entropy() {
        // Each target yields a different feedback for this guess
        let words = words_from_slice(&["apple", "grape", "zzzzz"]);
        let result = analyze_guess("apple", &words).unwrap();

        assert_eq!(result.distinct_feedbacks(), 3);
        assert_eq!(result.largest_bucket, 1);
        assert!((result.entropy - 3f64.log2()).abs() < 1e-9);
        assert!((result.expected_remaining - 1.0).abs() < 1e-9);
    }

    #[test]
    fn analyze_single_bucket() {
        let words = words_from_slice(&["aaaaa", "bbbbb", "ccccc"]);
        let result = analyze_guess("zzzzz", &words).unwrap();

        assert_eq!(result.distinct_feedbacks(), 1);
        assert_eq!(result.largest_bucket, 3);
        assert!(result.entropy.abs() < 1e-9);
        assert!((result.expected_remaining - 3.0).abs() < 1e-9);
    }

    #[test]
    fn analyze_invalid_guess() {
        let words = words_from_slice(WORDS);
        assert_eq!(
            analyze_guess("toolong", &words).err(),
            Some(WordError::InvalidLength(7))
        );
    }

    #[test]
    fn remaining_candidates_match_typed_feedback() {
        let words = words_from_slice(WORDS);
        let feedback: Feedback = "--YYG".parse().unwrap();
        let remaining = remaining_candidates("GRAPE", &feedback, &words).unwrap();

        let texts: Vec<&str> = remaining.iter().map(|w| w.text()).collect();
        assert!(texts.contains(&"apple"));
        for word in remaining {
            assert_eq!(Feedback::calculate(&Word::new("grape").unwrap(), word), feedback);
        }
    }

    #[test]
    fn remaining_candidates_solved_feedback_keeps_only_guess() {
        let words = words_from_slice(WORDS);
        let remaining = remaining_candidates("stone", &Feedback::SOLVED, &words).unwrap();

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].text(), "stone");
    }

    #[test]
    fn remaining_candidates_invalid_guess() {
        let feedback: Feedback = "-----".parse().unwrap();
        assert_eq!(
            remaining_candidates("st", &feedback, &[]).err(),
            Some(WordError::InvalidLength(2))
        );
    }

    #[test]
    fn analyze_empty_corpus() {
        let result = analyze_guess("crane", &[]).unwrap();
        assert_eq!(result.total_words, 0);
        assert_eq!(result.largest_bucket, 0);
        assert!(result.entropy.abs() < f64::EPSILON);
    }
}
