//! Letter frequency over the candidate pool
//!
//! Counts, for every unguessed letter, how many candidate words contain it.

use crate::engine::GuessEngine;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;

/// Unguessed letters that appear in at least one candidate, sorted
///
/// # Examples
/// ```
/// use evil_hangman::engine::GuessEngine;
/// use evil_hangman::solver::frequency::candidate_letters;
///
/// let mut engine = GuessEngine::new(["bold", "cold"], 4, 3).unwrap();
/// engine.record('o').unwrap();
///
/// let letters: Vec<char> = candidate_letters(&engine).into_iter().collect();
/// assert_eq!(letters, vec!['b', 'c', 'd', 'l']);
/// ```
#[must_use]
pub fn candidate_letters(engine: &GuessEngine) -> BTreeSet<char> {
    let guessed = engine.guesses();

    engine
        .candidates()
        .flat_map(str::chars)
        .filter(|ch| !guessed.contains(ch))
        .collect()
}

/// Number of candidate words containing each unguessed letter
///
/// A letter repeated inside one word counts once for that word.
#[must_use]
pub fn letter_counts(engine: &GuessEngine) -> FxHashMap<char, usize> {
    let guessed = engine.guesses();
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();

    for word in engine.candidates() {
        let distinct: FxHashSet<char> = word.chars().filter(|ch| !guessed.contains(ch)).collect();
        for ch in distinct {
            *counts.entry(ch).or_insert(0) += 1;
        }
    }

    counts
}

/// Letter contained in the most candidates
///
/// Ties go to the alphabetically smallest letter. Returns `None` when every
/// candidate letter has been guessed.
#[must_use]
pub fn most_common_letter(engine: &GuessEngine) -> Option<char> {
    letter_counts(engine)
        .into_iter()
        .max_by(|(la, ca), (lb, cb)| ca.cmp(cb).then_with(|| lb.cmp(la)))
        .map(|(letter, _)| letter)
}
