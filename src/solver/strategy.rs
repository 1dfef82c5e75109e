//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations used to play
//! against the referee automatically.

use super::frequency::{candidate_letters, most_common_letter};
use super::minimax::select_best_letter;
use crate::engine::GuessEngine;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Pick the next letter given the current round
    ///
    /// Returns `None` when no unguessed letter occurs in any candidate.
    fn select_letter(&self, engine: &GuessEngine) -> Option<char>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most common letter among candidates (default)
    Frequency(FrequencyStrategy),
    /// Smallest worst-case pool
    Minimax(MinimaxStrategy),
    /// Uniform random choice
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, engine: &GuessEngine) -> Option<char> {
        match self {
            Self::Frequency(s) => s.select_letter(engine),
            Self::Minimax(s) => s.select_letter(engine),
            Self::Random(s) => s.select_letter(engine),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "minimax", "random". Defaults to
    /// frequency if name is unrecognized. `seed` only affects "random".
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        match name {
            "minimax" => Self::Minimax(MinimaxStrategy),
            "random" => Self::Random(RandomStrategy::new(seed)),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    /// Canonical name of the strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

/// Guess the letter contained in the most candidate words
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, engine: &GuessEngine) -> Option<char> {
        most_common_letter(engine)
    }
}

/// Guess the letter whose worst-case outcome leaves the fewest candidates
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_letter(&self, engine: &GuessEngine) -> Option<char> {
        select_best_letter(engine).map(|(letter, _)| letter)
    }
}

/// Guess a random letter that occurs in the pool
///
/// With a seed the sequence of choices is reproducible: the RNG for each turn
/// is derived from the seed and the number of letters guessed so far.
pub struct RandomStrategy {
    seed: Option<u64>,
}

impl RandomStrategy {
    #[must_use]
    pub const fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl Strategy for RandomStrategy {
    fn select_letter(&self, engine: &GuessEngine) -> Option<char> {
        let letters: Vec<char> = candidate_letters(engine).into_iter().collect();

        match self.seed {
            Some(seed) => {
                let turn = engine.guesses().len() as u64;
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(turn));
                letters.choose(&mut rng).copied()
            }
            None => letters.choose(&mut rand::rng()).copied(),
        }
    }
}
