//! Round state for the adversarial referee
//!
//! The referee never picks a secret word. It keeps every dictionary word that
//! is still consistent with the guesses so far and, on each guess, narrows the
//! pool to the largest family of words that agree on where the letter appears.

use super::error::GuessError;
use super::partition::{partition, referee_order, select_worst_case};
use crate::core::Pattern;
use std::collections::BTreeSet;

/// State of one guessing round
///
/// The candidate pool, guessed letters, pattern and guess budget always change
/// together. [`GuessEngine::advance`] computes the next state without touching
/// the current one; [`GuessEngine::record`] swaps it in on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEngine {
    pool: BTreeSet<String>,
    guessed: BTreeSet<char>,
    pattern: Pattern,
    guesses_left: usize,
}

/// Result of applying one guess to a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// State after the guess
    pub next: GuessEngine,
    /// Number of positions the guess revealed
    pub occurrences: usize,
}

/// A family of candidates that share a partition key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub key: Pattern,
    pub words: Vec<String>,
}

impl GuessEngine {
    /// Start a round from `dictionary`
    ///
    /// Only words with exactly `length` chars are kept and duplicates
    /// collapse. An empty resulting pool is allowed here; it is reported by
    /// [`pattern`](Self::pattern) and [`record`](Self::record) instead.
    ///
    /// # Errors
    /// - [`GuessError::InvalidLength`] if `length < 1`
    /// - [`GuessError::NegativeBudget`] if `max_guesses < 0`
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::engine::GuessEngine;
    ///
    /// let engine = GuessEngine::new(["bold", "cold", "ox"], 4, 6).unwrap();
    /// assert_eq!(engine.words().len(), 2);
    /// assert_eq!(engine.guesses_left(), 6);
    /// assert_eq!(engine.pattern().unwrap(), "- - - -");
    ///
    /// assert!(GuessEngine::new(["bold"], 0, 6).is_err());
    /// assert!(GuessEngine::new(["bold"], 4, -1).is_err());
    /// ```
    pub fn new<I, S>(dictionary: I, length: i64, max_guesses: i64) -> Result<Self, GuessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let length = usize::try_from(length)
            .ok()
            .filter(|&len| len >= 1)
            .ok_or(GuessError::InvalidLength(length))?;
        let guesses_left =
            usize::try_from(max_guesses).map_err(|_| GuessError::NegativeBudget(max_guesses))?;

        let pool = dictionary
            .into_iter()
            .filter_map(|word| {
                let text: &str = word.as_ref();
                (text.chars().count() == length).then(|| text.to_string())
            })
            .collect();

        Ok(Self {
            pool,
            guessed: BTreeSet::new(),
            pattern: Pattern::blank(length),
            guesses_left,
        })
    }

    /// Snapshot of the candidate pool, sorted ascending
    #[must_use]
    pub fn words(&self) -> BTreeSet<String> {
        self.pool.clone()
    }

    /// Remaining wrong guesses allowed
    #[inline]
    #[must_use]
    pub const fn guesses_left(&self) -> usize {
        self.guesses_left
    }

    /// Snapshot of the letters guessed so far, sorted ascending
    #[must_use]
    pub fn guesses(&self) -> BTreeSet<char> {
        self.guessed.clone()
    }

    /// Rendered pattern, e.g. `"- o l -"`
    ///
    /// # Errors
    /// [`GuessError::NoCandidates`] if no word is consistent with the round.
    pub fn pattern(&self) -> Result<String, GuessError> {
        if self.pool.is_empty() {
            return Err(GuessError::NoCandidates);
        }
        Ok(self.pattern.to_string())
    }

    /// Record a guess in place and return how many positions it revealed
    ///
    /// On error the round is left exactly as it was.
    ///
    /// # Errors
    /// See [`advance`](Self::advance).
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::engine::GuessEngine;
    ///
    /// let words = ["bold", "cold", "fold", "gold", "hold", "mold", "sold", "told"];
    /// let mut engine = GuessEngine::new(words, 4, 4).unwrap();
    ///
    /// assert_eq!(engine.record('o').unwrap(), 1);
    /// assert_eq!(engine.pattern().unwrap(), "- o - -");
    /// assert_eq!(engine.words().len(), 8);
    /// assert_eq!(engine.guesses_left(), 4);
    ///
    /// // Re-guessing is rejected
    /// assert!(engine.record('o').is_err());
    /// ```
    pub fn record(&mut self, guess: char) -> Result<usize, GuessError> {
        let Outcome { next, occurrences } = self.advance(guess)?;
        *self = next;
        Ok(occurrences)
    }

    /// Compute the round that follows `guess` without modifying `self`
    ///
    /// Every candidate is keyed by the pattern it would produce, the largest
    /// family survives (ties go to the lexicographically smallest rendered
    /// key), and the budget drops by one if the guess revealed nothing.
    ///
    /// # Errors
    /// See [`check_guess`](Self::check_guess).
    pub fn advance(&self, guess: char) -> Result<Outcome, GuessError> {
        self.check_guess(guess)?;

        let families = partition(self.pool.iter().map(String::as_str), &self.pattern, guess);
        let (key, survivors) =
            select_worst_case(families).ok_or(GuessError::NoCandidates)?;

        let occurrences = key.newly_revealed(&self.pattern);

        let mut guessed = self.guessed.clone();
        guessed.insert(guess);

        let guesses_left = if occurrences == 0 {
            self.guesses_left - 1
        } else {
            self.guesses_left
        };

        let next = Self {
            pool: survivors.into_iter().map(str::to_string).collect(),
            guessed,
            pattern: key,
            guesses_left,
        };

        Ok(Outcome { next, occurrences })
    }

    /// Check whether `guess` would be accepted right now
    ///
    /// # Errors
    /// Checked in this order:
    /// 1. [`GuessError::NoCandidates`] if the pool is empty
    /// 2. [`GuessError::NoGuessesLeft`] if the budget is exhausted
    /// 3. [`GuessError::AlreadyGuessed`] if `guess` was guessed before
    pub fn check_guess(&self, guess: char) -> Result<(), GuessError> {
        if self.pool.is_empty() {
            return Err(GuessError::NoCandidates);
        }
        if self.guesses_left < 1 {
            return Err(GuessError::NoGuessesLeft);
        }
        if self.guessed.contains(&guess) {
            return Err(GuessError::AlreadyGuessed(guess));
        }
        Ok(())
    }

    /// Every family `guess` would split the pool into, in the order the
    /// referee ranks them (the first is the one [`advance`](Self::advance)
    /// keeps)
    ///
    /// Words inside each family are sorted. The round is not changed and no
    /// guess preconditions are checked; an empty pool yields no families.
    #[must_use]
    pub fn preview(&self, guess: char) -> Vec<Family> {
        let mut families: Vec<Family> =
            partition(self.pool.iter().map(String::as_str), &self.pattern, guess)
                .into_iter()
                .map(|(key, words)| Family {
                    key,
                    words: words.into_iter().map(str::to_string).collect(),
                })
                .collect();

        families.sort_by(|a, b| referee_order((&a.key, a.words.len()), (&b.key, b.words.len())));
        families
    }

    /// Target word length
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.pattern.len()
    }

    /// Number of candidates still consistent with the round
    #[inline]
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Number of unrevealed positions
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.pattern.blanks()
    }

    /// True when the guesser has uncovered every position
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.pool.is_empty() && self.pattern.is_complete()
    }

    /// True when the budget is spent and blanks remain
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.guesses_left == 0 && !self.is_solved()
    }

    /// Borrow the candidate pool without copying
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.pool.iter().map(String::as_str)
    }

    /// Borrow the current pattern
    #[inline]
    #[must_use]
    pub const fn current_pattern(&self) -> &Pattern {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ErrorKind;

    const OLD_FAMILY: [&str; 8] = [
        "bold", "cold", "fold", "gold", "hold", "mold", "sold", "told",
    ];

    fn old_engine() -> GuessEngine {
        GuessEngine::new(OLD_FAMILY, 4, 4).unwrap()
    }

    #[test]
    fn new_engine_starts_blank() {
        let engine = GuessEngine::new(["apple", "berry", "fig"], 5, 7).unwrap();
        assert_eq!(engine.guesses_left(), 7);
        assert!(engine.guesses().is_empty());
        assert_eq!(engine.pattern().unwrap(), "- - - - -");
        assert_eq!(engine.length(), 5);
        assert_eq!(engine.blanks(), 5);
    }

    #[test]
    fn new_filters_by_length_and_dedups() {
        let engine = GuessEngine::new(["cold", "cold", "bold", "ox", "colder"], 4, 3).unwrap();
        let words: Vec<String> = engine.words().into_iter().collect();
        assert_eq!(words, vec!["bold", "cold"]);
        assert_eq!(engine.pool_size(), 2);
    }

    #[test]
    fn new_counts_chars_not_bytes() {
        let engine = GuessEngine::new(["café", "cafe", "cafés"], 4, 3).unwrap();
        assert_eq!(engine.pool_size(), 2);
    }

    #[test]
    fn new_rejects_bad_length() {
        for length in [-1, 0, i64::MIN] {
            let err = GuessEngine::new(OLD_FAMILY, length, 4).unwrap_err();
            assert_eq!(err, GuessError::InvalidLength(length));
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn new_rejects_negative_budget() {
        let err = GuessEngine::new(OLD_FAMILY, 4, -1).unwrap_err();
        assert_eq!(err, GuessError::NegativeBudget(-1));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn new_length_checked_before_budget() {
        let err = GuessEngine::new(OLD_FAMILY, 0, -1).unwrap_err();
        assert_eq!(err, GuessError::InvalidLength(0));
    }

    #[test]
    fn zero_budget_is_valid() {
        let engine = GuessEngine::new(Vec::<String>::new(), 5, 0).unwrap();
        assert_eq!(engine.guesses_left(), 0);
    }

    #[test]
    fn empty_pool_has_no_pattern() {
        let engine = GuessEngine::new(Vec::<String>::new(), 4, 4).unwrap();
        assert_eq!(engine.pattern(), Err(GuessError::NoCandidates));
        assert_eq!(engine.pattern().unwrap_err().kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn old_family_scenario() {
        let mut engine = old_engine();

        assert_eq!(engine.record('o'), Ok(1));
        assert_eq!(engine.pattern().unwrap(), "- o - -");
        assert_eq!(engine.pool_size(), 8);
        assert_eq!(engine.guesses_left(), 4);

        assert_eq!(engine.record('l'), Ok(1));
        assert_eq!(engine.pattern().unwrap(), "- o l -");
        assert_eq!(engine.pool_size(), 8);
        assert_eq!(engine.guesses_left(), 4);

        assert_eq!(engine.record('d'), Ok(1));
        assert_eq!(engine.pattern().unwrap(), "- o l d");
        assert_eq!(engine.pool_size(), 8);
        assert_eq!(engine.guesses_left(), 4);

        let guesses: Vec<char> = engine.guesses().into_iter().collect();
        assert_eq!(guesses, vec!['d', 'l', 'o']);
    }

    #[test]
    fn miss_costs_a_guess() {
        let mut engine = old_engine();
        assert_eq!(engine.record('z'), Ok(0));
        assert_eq!(engine.guesses_left(), 3);
        assert_eq!(engine.pattern().unwrap(), "- - - -");
        assert_eq!(engine.pool_size(), 8);
    }

    #[test]
    fn referee_dodges_first_letters() {
        // 'b' appears in one word only, so the referee keeps the other seven
        let mut engine = old_engine();
        assert_eq!(engine.record('b'), Ok(0));
        assert_eq!(engine.pool_size(), 7);
        assert!(!engine.words().contains("bold"));
        assert_eq!(engine.guesses_left(), 3);
    }

    #[test]
    fn referee_forced_to_reveal_when_family_is_largest() {
        let words = ["deed", "seed", "feed", "need", "dusk"];
        let mut engine = GuessEngine::new(words, 4, 5).unwrap();

        // "- e e -" holds four words, "- - - -" holds one
        assert_eq!(engine.record('e'), Ok(2));
        assert_eq!(engine.pattern().unwrap(), "- e e -");
        assert_eq!(engine.pool_size(), 4);
        assert_eq!(engine.guesses_left(), 5);
    }

    #[test]
    fn tie_resolved_to_smallest_key() {
        // "- - a" (ba, ca) against "a - -" (abc, acd), all size two.
        let words = ["xba", "xca", "abc", "acd"];
        let mut engine = GuessEngine::new(words, 3, 5).unwrap();
        assert_eq!(engine.record('a'), Ok(1));
        assert_eq!(engine.pattern().unwrap(), "- - a");

        let survivors: Vec<String> = engine.words().into_iter().collect();
        assert_eq!(survivors, vec!["xba", "xca"]);
    }

    #[test]
    fn repeated_guess_rejected() {
        let mut engine = old_engine();
        engine.record('q').unwrap();
        let before = engine.clone();

        let err = engine.record('q').unwrap_err();
        assert_eq!(err, GuessError::AlreadyGuessed('q'));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(engine, before);
    }

    #[test]
    fn exhausted_budget_rejected() {
        let mut engine = GuessEngine::new(OLD_FAMILY, 4, 2).unwrap();
        engine.record('q').unwrap();
        engine.record('w').unwrap();
        assert_eq!(engine.guesses_left(), 0);

        let before = engine.clone();
        let err = engine.record('e').unwrap_err();
        assert_eq!(err, GuessError::NoGuessesLeft);
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(engine, before);
        assert!(engine.is_lost());
    }

    #[test]
    fn empty_pool_checked_first() {
        let mut engine = GuessEngine::new(Vec::<String>::new(), 4, 0).unwrap();
        assert_eq!(engine.record('a'), Err(GuessError::NoCandidates));
    }

    #[test]
    fn budget_checked_before_repeat() {
        let mut engine = GuessEngine::new(OLD_FAMILY, 4, 1).unwrap();
        engine.record('x').unwrap();
        assert_eq!(engine.record('x'), Err(GuessError::NoGuessesLeft));
    }

    #[test]
    fn advance_leaves_engine_untouched() {
        let engine = old_engine();
        let outcome = engine.advance('o').unwrap();

        assert_eq!(outcome.occurrences, 1);
        assert_eq!(outcome.next.pattern().unwrap(), "- o - -");
        assert_eq!(engine.pattern().unwrap(), "- - - -");
        assert!(engine.guesses().is_empty());
    }

    #[test]
    fn solved_round_can_continue() {
        let mut engine = GuessEngine::new(["ab"], 2, 3).unwrap();
        engine.record('a').unwrap();
        engine.record('b').unwrap();
        assert!(engine.is_solved());
        assert!(!engine.is_lost());

        // No terminal guard: further guesses are accepted and simply miss
        assert_eq!(engine.record('c'), Ok(0));
        assert_eq!(engine.guesses_left(), 2);
    }

    #[test]
    fn preview_ranks_families() {
        let engine = GuessEngine::new(["deed", "seed", "feed", "need", "dusk"], 4, 5).unwrap();
        let families = engine.preview('e');

        assert_eq!(families.len(), 2);
        assert_eq!(families[0].key.to_string(), "- e e -");
        assert_eq!(families[0].words, vec!["deed", "feed", "need", "seed"]);
        assert_eq!(families[1].words, vec!["dusk"]);

        let outcome = engine.advance('e').unwrap();
        assert_eq!(outcome.next.current_pattern(), &families[0].key);
    }

    #[test]
    fn candidates_iterates_sorted() {
        let engine = GuessEngine::new(["told", "bold", "mold"], 4, 1).unwrap();
        let words: Vec<&str> = engine.candidates().collect();
        assert_eq!(words, vec!["bold", "mold", "told"]);
    }

    #[test]
    fn blank_token_guess_is_a_miss() {
        let mut engine = GuessEngine::new(["a-b", "ab-", "abc"], 3, 3).unwrap();

        assert_eq!(engine.record('-'), Ok(0));
        assert_eq!(engine.pattern().unwrap(), "- - -");
        assert_eq!(engine.guesses_left(), 2);
        assert_eq!(engine.pool_size(), 3);
        assert!(engine.guesses().contains(&'-'));
    }

    #[test]
    fn blank_token_never_solves() {
        let mut engine = GuessEngine::new(["---"], 3, 3).unwrap();

        assert_eq!(engine.record('-'), Ok(0));
        assert_eq!(engine.blanks(), 3);
        assert_eq!(engine.guesses_left(), 2);
        assert!(!engine.is_solved());
    }

    #[test]
    fn check_guess_matches_advance() {
        let mut engine = GuessEngine::new(OLD_FAMILY, 4, 1).unwrap();
        assert_eq!(engine.check_guess('o'), Ok(()));

        engine.record('o').unwrap();
        assert_eq!(engine.check_guess('o'), Err(GuessError::AlreadyGuessed('o')));

        engine.record('z').unwrap();
        assert_eq!(engine.check_guess('a'), Err(GuessError::NoGuessesLeft));
        assert_eq!(engine.advance('a').err(), engine.check_guess('a').err());
    }
}
