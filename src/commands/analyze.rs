//! Letter analysis command
//!
//! Shows how the referee would split the candidate pool for one letter and
//! which family it would keep.

use super::simulate::RoundConfig;
use crate::engine::{GuessEngine, GuessError};

/// One family in the analysis, in referee order
pub struct FamilySummary {
    pub key: String,
    pub size: usize,
    /// First few members, sorted
    pub sample: Vec<String>,
}

/// Result of analyzing a letter
pub struct AnalysisResult {
    pub letter: char,
    pub pattern_before: String,
    pub pool_before: usize,
    pub guesses_left: usize,
    /// Families ordered so the first is the one the referee keeps
    pub families: Vec<FamilySummary>,
    pub occurrences: usize,
}

/// Number of words kept in each family sample
const SAMPLE_SIZE: usize = 5;

/// Replay `prior` guesses, then break down what guessing `letter` would do
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a prior guess is
/// rejected, or `letter` itself would be rejected by the referee.
///
/// # Examples
/// ```
/// use evil_hangman::commands::{RoundConfig, analyze_letter};
///
/// let words: Vec<String> = ["deed", "feed", "dusk"].iter().map(|w| w.to_string()).collect();
/// let result = analyze_letter(&words, RoundConfig::new(4, 5), "", 'e').unwrap();
///
/// assert_eq!(result.families[0].key, "- e e -");
/// assert_eq!(result.occurrences, 2);
/// ```
pub fn analyze_letter(
    dictionary: &[String],
    config: RoundConfig,
    prior: &str,
    letter: char,
) -> Result<AnalysisResult, GuessError> {
    let mut engine = GuessEngine::new(dictionary, config.length, config.max_guesses)?;

    for guess in prior.chars().filter(|ch| !ch.is_whitespace()) {
        engine.record(guess)?;
    }

    engine.check_guess(letter)?;

    let preview = engine.preview(letter);
    let occurrences = preview
        .first()
        .map_or(0, |family| family.key.newly_revealed(engine.current_pattern()));

    let families = preview
        .into_iter()
        .map(|family| FamilySummary {
            key: family.key.to_string(),
            size: family.words.len(),
            sample: family.words.into_iter().take(SAMPLE_SIZE).collect(),
        })
        .collect();

    Ok(AnalysisResult {
        letter,
        pattern_before: engine.pattern()?,
        pool_before: engine.pool_size(),
        guesses_left: engine.guesses_left(),
        families,
        occurrences,
    })
}
