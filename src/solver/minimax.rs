//! Minimax letter selection
//!
//! Against a referee that always keeps the largest family, the only thing a
//! guess controls is how large that family can be. This picks the letter that
//! minimizes it.

use super::frequency::candidate_letters;
use crate::engine::GuessEngine;
use rayon::prelude::*;

/// Score of a letter from the guesser's point of view
///
/// `(worst-case pool size, 1 if the referee can dodge the letter else 0)`.
/// Lower is better.
fn letter_score(engine: &GuessEngine, letter: char) -> (usize, usize) {
    let families = engine.preview(letter);

    families.first().map_or((0, 0), |kept| {
        let dodged = kept.key == *engine.current_pattern();
        (kept.words.len(), usize::from(dodged))
    })
}

/// Select the letter with the smallest worst-case remaining pool
///
/// Letters the referee cannot dodge win ties, then the alphabetically
/// smallest letter. Returns the letter and its worst-case pool size, or
/// `None` if no unguessed letter occurs in the pool.
///
/// # Examples
/// ```
/// use evil_hangman::engine::GuessEngine;
/// use evil_hangman::solver::minimax::select_best_letter;
///
/// let engine = GuessEngine::new(["bat", "cat", "hat", "bit"], 3, 5).unwrap();
/// let (letter, worst) = select_best_letter(&engine).unwrap();
///
/// // 'b' splits the pool two and two
/// assert_eq!(letter, 'b');
/// assert_eq!(worst, 2);
/// ```
#[must_use]
pub fn select_best_letter(engine: &GuessEngine) -> Option<(char, usize)> {
    let letters: Vec<char> = candidate_letters(engine).into_iter().collect();

    letters
        .par_iter()
        .map(|&letter| (letter, letter_score(engine, letter)))
        .min_by_key(|&(letter, score)| (score, letter))
        .map(|(letter, (worst, _))| (letter, worst))
}
