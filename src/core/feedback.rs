//! Guess evaluation and per-letter feedback
//!
//! Every guess receives one [`Verdict`] per position:
//! - Exact (green): right letter, right position
//! - Present (yellow): letter occurs elsewhere in the target and that
//!   occurrence has not been credited yet
//! - Absent (gray): letter contributes no further match

use super::word::{WORD_LENGTH, Word};
use crate::error::WordError;
use std::fmt;
use std::str::FromStr;

/// Verdict for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Exact,
    Present,
    Absent,
}

impl Verdict {
    /// One-character symbol: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Colored square emoji
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Whether the letter counts toward the target's letters
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Exact | Self::Present)
    }

    const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, index-aligned with the guessed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All exact (solved)
    pub const SOLVED: Self = Self([Verdict::Exact; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those target positions
    /// 2. Second pass: for each remaining guess letter, consume the leftmost
    ///    unconsumed target position holding the same letter (present),
    ///    otherwise the letter is absent
    ///
    /// Exact matches always win over present ones, and a repeated letter is
    /// never credited more often than it occurs in the target.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let target = Word::new("floor").unwrap();
    ///
    /// // R(yellow) O(yellow) B(gray) O(green) T(gray)
    /// assert_eq!(Feedback::calculate(&guess, &target).to_string(), "YY-G-");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess = guess.chars();
        let target = target.chars();
        let mut result = [None; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // Allow: Index needed to compare guess[i] with target[i] and mark both arrays
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                result[i] = Some(Verdict::Exact);
                consumed[i] = true;
            }
        }

        for (i, &letter) in guess.iter().enumerate() {
            if result[i].is_some() {
                continue;
            }
            let unconsumed = (0..WORD_LENGTH).find(|&j| !consumed[j] && target[j] == letter);
            result[i] = Some(match unconsumed {
                Some(j) => {
                    consumed[j] = true;
                    Verdict::Present
                }
                None => Verdict::Absent,
            });
        }

        Self(result.map(|verdict| verdict.unwrap_or(Verdict::Absent)))
    }

    /// The verdicts in guess order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Iterate over the verdicts in guess order
    pub fn iter(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.0.iter().copied()
    }

    /// Check if every position is exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Letters of `guess` that the target does not contain at all
    ///
    /// A letter marked absent only counts when no other occurrence of it in
    /// the same guess was exact or present; otherwise the target holds it and
    /// the absent verdict just means it was already fully credited.
    pub fn eliminated_letters<'a>(&'a self, guess: &'a Word) -> impl Iterator<Item = char> + 'a {
        let letters = guess.chars();
        letters
            .iter()
            .zip(self.iter())
            .filter(move |&(&letter, verdict)| {
                verdict == Verdict::Absent
                    && !letters
                        .iter()
                        .zip(self.iter())
                        .any(|(&other, v)| other == letter && v.is_match())
            })
            .map(|(&letter, _)| letter)
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

/// Evaluate a guess string against a target string
///
/// Both strings are compared case-insensitively.
///
/// # Errors
/// Returns `WordError::InvalidLength` if either string is not exactly
/// 5 characters long. Nothing is evaluated in that case.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, Verdict::*};
///
/// let feedback = evaluate("SPEED", "erase").unwrap();
/// assert_eq!(feedback.verdicts(), &[Present, Absent, Present, Present, Absent]);
///
/// assert!(evaluate("speedy", "erase").is_err());
/// ```
pub fn evaluate(guess: &str, target: &str) -> Result<Feedback, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(Feedback::calculate(&guess, &target))
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.symbol())?;
        }
        Ok(())
    }
}

/// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid feedback string: {s}");
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut chars = s.chars();

        for slot in &mut verdicts {
            let ch = chars.next().ok_or_else(invalid)?;
            *slot = Verdict::from_symbol(ch).ok_or_else(invalid)?;
        }
        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Self(verdicts))
    }
}

#[cfg(test)]
mod tests {
    use super::Verdict::{Absent, Exact, Present};
    use super::*;

    fn calc(guess: &str, target: &str) -> Feedback {
        evaluate(guess, target).unwrap()
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = calc("abcde", "fghij");
        assert_eq!(feedback.count(Absent), 5);
        assert_eq!(feedback.to_string(), "-----");
    }

    #[test]
    fn feedback_all_exact() {
        let feedback = calc("crane", "crane");
        assert_eq!(feedback, Feedback::SOLVED);
        assert!(feedback.is_solved());
    }

    #[test]
    fn is_solved_only_when_every_verdict_exact() {
        assert!(!calc("grape", "apple").is_solved());
        assert!(!"GGGGY".parse::<Feedback>().unwrap().is_solved());
        assert!("GGGGG".parse::<Feedback>().unwrap().is_solved());
    }

    #[test]
    fn feedback_ignores_case() {
        assert!(calc("APPLE", "apple").is_solved());
        assert!(calc("apple", "ApPlE").is_solved());
    }

    #[test]
    fn grape_against_apple() {
        // a-p-p-l-e: the guess's P at index 3 faces target L, so it is only present
        let feedback = calc("grape", "apple");
        assert_eq!(
            feedback.verdicts(),
            &[Absent, Absent, Present, Present, Exact]
        );
    }

    #[test]
    fn repeated_guess_letters_not_over_credited() {
        // Two P's in APPLE are both taken by exact matches, leaving none for index 0
        let feedback = calc("pppaa", "apple");
        assert_eq!(feedback.verdicts(), &[Absent, Exact, Exact, Present, Absent]);
    }

    #[test]
    fn exact_takes_priority_over_earlier_present() {
        // Left-to-right scanning alone would give the first L the only L
        let feedback = calc("lllll", "apple");
        assert_eq!(feedback.verdicts(), &[Absent, Absent, Absent, Exact, Absent]);
    }

    #[test]
    fn paper_against_apple() {
        let feedback = calc("paper", "apple");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Present, Exact, Present, Absent]
        );
    }

    #[test]
    fn duplicate_letters_both_present() {
        // SPEED vs ERASE: both E's find an E in ERASE
        let feedback = calc("speed", "erase");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn duplicate_letters_exact_and_present() {
        // ROBOT vs FLOOR: second O is exact, first O takes the other O
        let feedback = calc("robot", "floor");
        assert_eq!(feedback.verdicts(), &[Present, Present, Absent, Exact, Absent]);
    }

    #[test]
    fn matches_never_exceed_target_letter_counts() {
        let words = [
            "apple", "pasta", "teeth", "brood", "lever", "eerie", "aaaaa", "pppaa", "tatty",
            "geese", "llama", "sissy",
        ];
        for guess in words {
            for target in words {
                let feedback = calc(guess, target);
                let g: Vec<char> = guess.chars().collect();
                for letter in g.iter().copied() {
                    let credited = g
                        .iter()
                        .zip(feedback.iter())
                        .filter(|&(&c, v)| c == letter && v.is_match())
                        .count();
                    let available = target.chars().filter(|&c| c == letter).count();
                    assert!(
                        credited <= available,
                        "{guess} vs {target}: '{letter}' credited {credited} > {available}"
                    );
                }
            }
        }
    }

    #[test]
    fn evaluate_rejects_bad_lengths() {
        assert_eq!(evaluate("four", "apple"), Err(WordError::InvalidLength(4)));
        assert_eq!(evaluate("apple", "sixsix"), Err(WordError::InvalidLength(6)));
    }

    #[test]
    fn eliminated_letters_skip_credited_duplicates() {
        let guess = Word::new("pppaa").unwrap();
        let feedback = calc("pppaa", "apple");

        // Every gray letter here also scored elsewhere in the guess
        assert_eq!(feedback.eliminated_letters(&guess).count(), 0);

        let guess = Word::new("grape").unwrap();
        let feedback = calc("grape", "apple");
        let eliminated: Vec<char> = feedback.eliminated_letters(&guess).collect();
        assert_eq!(eliminated, ['g', 'r']);
    }

    #[test]
    fn feedback_from_str_valid() {
        let f1: Feedback = "GYG--".parse().unwrap();
        let f2: Feedback = "🟩🟨🟩⬜⬜".parse().unwrap();
        let f3: Feedback = "gyg__".parse().unwrap();

        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(f1.verdicts(), &[Exact, Present, Exact, Absent, Absent]);
    }

    #[test]
    fn feedback_from_str_invalid() {
        assert!("GYGGYX".parse::<Feedback>().is_err()); // Too long
        assert!("GYG".parse::<Feedback>().is_err()); // Too short
        assert!("GXGGY".parse::<Feedback>().is_err()); // Invalid char
        assert!("".parse::<Feedback>().is_err());
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback: Feedback = "GY-GY".parse().unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn feedback_counts() {
        let feedback: Feedback = "YGGYY".parse().unwrap();
        assert_eq!(feedback.count(Exact), 2);
        assert_eq!(feedback.count(Present), 3);
        assert_eq!(feedback.count(Absent), 0);
    }
}
