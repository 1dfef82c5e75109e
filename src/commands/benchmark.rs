//! Benchmark command
//!
//! Plays one automated round per word length and summarizes how the strategy
//! fares against the referee.

use super::simulate::{RoundConfig, simulate_round};
use crate::engine::GuessError;
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

/// Outcome of one round in the benchmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub length: usize,
    pub starting_pool: usize,
    pub won: bool,
    pub total_guesses: usize,
    pub wrong_guesses: usize,
    pub final_pattern: String,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub rounds: Vec<RoundSummary>,
    /// Lengths with no dictionary words
    pub skipped: Vec<usize>,
    pub wins: usize,
    pub losses: usize,
    pub average_wrong_guesses: f64,
    pub duration: Duration,
}

/// Run one round for every length in `lengths`
///
/// Lengths for which the dictionary has no words are skipped rather than
/// treated as failures.
///
/// # Errors
///
/// Returns an error if `max_guesses` is negative or a length is below 1.
pub fn run_benchmark<S: Strategy>(
    dictionary: &[String],
    lengths: RangeInclusive<usize>,
    max_guesses: i64,
    strategy: &S,
) -> Result<BenchmarkResult, GuessError> {
    let start = Instant::now();
    let total = lengths.clone().count();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut rounds = Vec::new();
    let mut skipped = Vec::new();

    for length in lengths {
        pb.set_message(format!("length {length}"));

        let config = RoundConfig::new(i64::try_from(length).unwrap_or(i64::MAX), max_guesses);
        match simulate_round(dictionary, config, strategy) {
            Ok(result) => rounds.push(RoundSummary {
                length,
                starting_pool: result
                    .steps
                    .first()
                    .map_or(result.remaining_words, |step| step.pool_before),
                won: result.won,
                total_guesses: result.steps.len(),
                wrong_guesses: result.wrong_guesses(),
                final_pattern: result.final_pattern,
            }),
            Err(GuessError::NoCandidates) => skipped.push(length),
            Err(err) => {
                pb.abandon();
                return Err(err);
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let wins = rounds.iter().filter(|r| r.won).count();
    let losses = rounds.len() - wins;
    let average_wrong_guesses = if rounds.is_empty() {
        0.0
    } else {
        rounds.iter().map(|r| r.wrong_guesses).sum::<usize>() as f64 / rounds.len() as f64
    };

    Ok(BenchmarkResult {
        rounds,
        skipped,
        wins,
        losses,
        average_wrong_guesses,
        duration: start.elapsed(),
    })
}
