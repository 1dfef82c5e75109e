//! Automated round command
//!
//! Lets a strategy play one full round against the referee and records every
//! step.

use crate::engine::{GuessEngine, GuessError};
use crate::solver::Strategy;

/// Parameters of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub length: i64,
    pub max_guesses: i64,
}

impl RoundConfig {
    #[must_use]
    pub const fn new(length: i64, max_guesses: i64) -> Self {
        Self {
            length,
            max_guesses,
        }
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(5, 10)
    }
}

/// A single guess in the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub letter: char,
    pub occurrences: usize,
    pub pool_before: usize,
    pub pool_after: usize,
    pub pattern: String,
    pub guesses_left: usize,
}

/// Result of an automated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    pub length: usize,
    pub won: bool,
    pub steps: Vec<GuessStep>,
    pub final_pattern: String,
    pub remaining_words: usize,
    /// A word that is consistent with the whole round, shown as "the answer"
    pub example_word: Option<String>,
}

impl SimulationResult {
    /// Number of guesses that revealed nothing
    #[must_use]
    pub fn wrong_guesses(&self) -> usize {
        self.steps.iter().filter(|s| s.occurrences == 0).count()
    }
}

/// Play one round with `strategy` choosing every letter
///
/// The round ends when the pattern is complete, the budget is spent, or the
/// strategy has no letter left to try.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or no dictionary word
/// has the requested length.
///
/// # Examples
/// ```
/// use evil_hangman::commands::{RoundConfig, simulate_round};
/// use evil_hangman::solver::FrequencyStrategy;
///
/// let words: Vec<String> = ["bold", "cold", "gold"].iter().map(|w| w.to_string()).collect();
/// let result = simulate_round(&words, RoundConfig::new(4, 10), &FrequencyStrategy).unwrap();
///
/// assert!(result.won);
/// assert_eq!(result.remaining_words, 1);
/// ```
pub fn simulate_round<S: Strategy>(
    dictionary: &[String],
    config: RoundConfig,
    strategy: &S,
) -> Result<SimulationResult, GuessError> {
    let mut engine = GuessEngine::new(dictionary, config.length, config.max_guesses)?;

    // Surfaces an empty pool before any guess is attempted
    engine.pattern()?;

    let mut steps = Vec::new();

    while !engine.is_solved() && engine.guesses_left() > 0 {
        let Some(letter) = strategy.select_letter(&engine) else {
            break;
        };

        let pool_before = engine.pool_size();
        let occurrences = engine.record(letter)?;

        steps.push(GuessStep {
            letter,
            occurrences,
            pool_before,
            pool_after: engine.pool_size(),
            pattern: engine.pattern()?,
            guesses_left: engine.guesses_left(),
        });
    }

    Ok(SimulationResult {
        length: engine.length(),
        won: engine.is_solved(),
        steps,
        final_pattern: engine.pattern()?,
        remaining_words: engine.pool_size(),
        example_word: engine.candidates().next().map(str::to_string),
    })
}
