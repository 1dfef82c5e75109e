//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod simulate;

pub use analyze::{AnalysisResult, FamilySummary, analyze_letter};
pub use benchmark::{BenchmarkResult, RoundSummary, run_benchmark};
pub use play::{PlayConfig, PlayOutcome, run_play};
pub use simulate::{GuessStep, RoundConfig, SimulationResult, simulate_round};
