//! Hangman reveal pattern
//!
//! A pattern holds one slot per letter position of the hidden word. Each slot
//! is either blank or shows a revealed letter. Rendered for display, blanks
//! become `-` and slots are separated by single spaces, so a fresh pattern of
//! length 4 reads `"- - - -"`.

use std::cmp::Ordering;
use std::fmt;

/// Display token used for an unrevealed position
pub const BLANK: char = '-';

/// Positional reveal state shown to the guesser
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Option<char>>,
}

impl Pattern {
    /// Create a pattern of `length` blank slots
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let pattern = Pattern::blank(4);
    /// assert_eq!(pattern.to_string(), "- - - -");
    /// assert_eq!(pattern.blanks(), 4);
    /// ```
    #[must_use]
    pub fn blank(length: usize) -> Self {
        Self {
            slots: vec![None; length],
        }
    }

    /// Number of positions in the pattern
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for a zero-length pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Revealed letter at `position`, or `None` when blank or out of range
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.slots.get(position).copied().flatten()
    }

    /// Count of still-blank positions
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// True when every position has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Project what this pattern would become if `word` were the answer and
    /// `guess` were guessed
    ///
    /// Positions where `word` holds `guess` are revealed. Every other slot is
    /// copied unchanged, so previously revealed letters stay put and blanks
    /// stay blank. `self` is not modified. `word` is expected to have
    /// exactly `self.len()` chars.
    ///
    /// Guessing [`BLANK`] reveals nothing: a revealed `-` would render the
    /// same as an unrevealed slot.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let pattern = Pattern::blank(5);
    /// let key = pattern.reveal("apple", 'p');
    /// assert_eq!(key.to_string(), "- p p - -");
    ///
    /// // The receiver is untouched
    /// assert_eq!(pattern.to_string(), "- - - - -");
    /// ```
    #[must_use]
    pub fn reveal(&self, word: &str, guess: char) -> Self {
        let slots = self
            .slots
            .iter()
            .zip(word.chars())
            .map(|(&slot, ch)| {
                if ch == guess && guess != BLANK {
                    Some(guess)
                } else {
                    slot
                }
            })
            .collect();

        Self { slots }
    }

    /// Count the positions where `self` and `previous` differ
    ///
    /// Applied to a key derived from `previous`, this is the number of
    /// positions the guess newly revealed.
    #[must_use]
    pub fn newly_revealed(&self, previous: &Self) -> usize {
        self.slots
            .iter()
            .zip(&previous.slots)
            .filter(|(now, before)| now != before)
            .count()
    }
}

/// Patterns order the way their rendered forms do, with blank as `-`
impl Ord for Pattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.slots
            .iter()
            .map(|slot| slot.unwrap_or(BLANK))
            .cmp(other.slots.iter().map(|slot| slot.unwrap_or(BLANK)))
    }
}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", slot.unwrap_or(BLANK))?;
        }
        Ok(())
    }
}
