//! Word-family partitioning for a single guess
//!
//! Given the current pattern and a guessed letter, every candidate word
//! projects to a partition key (the pattern it would produce if it were the
//! answer). Words sharing a key form a family. The referee keeps the largest
//! family, which is the outcome that tells the guesser the least.

use crate::core::Pattern;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Group candidates by the key they produce for `guess`
///
/// Words inside each family keep the order they had in `candidates`.
pub fn partition<'a, I>(
    candidates: I,
    pattern: &Pattern,
    guess: char,
) -> FxHashMap<Pattern, Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut families: FxHashMap<Pattern, Vec<&'a str>> = FxHashMap::default();

    for word in candidates {
        families
            .entry(pattern.reveal(word, guess))
            .or_default()
            .push(word);
    }

    families
}

/// Order two families by how much the referee prefers them
///
/// Larger families come first. Among families of equal size the one whose
/// rendered key sorts lexicographically smallest comes first (see
/// [`Pattern`]'s `Ord`), so the choice never depends on hash map iteration
/// order.
#[must_use]
pub fn referee_order(a: (&Pattern, usize), b: (&Pattern, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Pick the worst-case family for the guesser
///
/// Returns `None` when there are no families (empty candidate pool).
///
/// # Examples
/// ```
/// use evil_hangman::core::Pattern;
/// use evil_hangman::engine::partition::{partition, select_worst_case};
///
/// let words = ["ally", "beta", "cool", "deal", "else", "flew", "good", "hope"];
/// let families = partition(words, &Pattern::blank(4), 'e');
///
/// let (key, members) = select_worst_case(families).unwrap();
/// assert_eq!(key.to_string(), "- - - -");
/// assert_eq!(members, vec!["ally", "cool", "good"]);
/// ```
#[must_use]
pub fn select_worst_case<'a>(
    families: FxHashMap<Pattern, Vec<&'a str>>,
) -> Option<(Pattern, Vec<&'a str>)> {
    families
        .into_iter()
        .min_by(|(ka, wa), (kb, wb)| referee_order((ka, wa.len()), (kb, wb.len())))
}
