//! Evil Hangman - CLI
//!
//! Play hangman against a referee that dodges every guess it can, or watch a
//! strategy try.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{PlayConfig, RoundConfig, analyze_letter, run_benchmark, run_play, simulate_round},
    output::{print_analysis_result, print_benchmark_result, print_simulation_result},
    solver::{Strategy, StrategyType},
    wordlists::{DICTIONARY, loader::words_from_slice},
};
use std::io;

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman against a referee that never commits to a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length
    #[arg(short, long, global = true, default_value = "5", allow_negative_numbers = true)]
    length: i64,

    /// Number of wrong guesses allowed
    #[arg(short, long, global = true, default_value = "10", allow_negative_numbers = true)]
    guesses: i64,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Strategy for automated play: frequency (default), minimax, random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Seed for the random strategy
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Show how many words are still possible
        #[arg(long)]
        show_pool: bool,
    },

    /// Let a strategy play one round
    Simulate {
        /// Show candidate counts for every turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how the referee would split the pool for a letter
    Analyze {
        /// Letter to analyze
        letter: char,

        /// Letters guessed before it, e.g. "eat"
        #[arg(short, long, default_value = "")]
        prior: String,
    },

    /// Play one automated round per word length
    Benchmark {
        /// Shortest length to test
        #[arg(long, default_value = "2")]
        min_length: usize,

        /// Longest length to test
        #[arg(long, default_value = "12")]
        max_length: usize,
    },
}

/// Load the dictionary selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<String>> {
    use evil_hangman::wordlists::loader::load_from_file;

    match wordlist {
        "embedded" => Ok(words_from_slice(DICTIONARY)),
        path => load_from_file(path).with_context(|| format!("Failed to read wordlist {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_wordlist(&cli.wordlist)?;
    let round = RoundConfig::new(cli.length, cli.guesses);
    let strategy = StrategyType::from_name(&cli.strategy, cli.seed);

    let command = cli.command.unwrap_or(Commands::Play { show_pool: false });

    match command {
        Commands::Play { show_pool } => run_play_command(&dictionary, round, show_pool),
        Commands::Simulate { verbose } => {
            run_simulate_command(&dictionary, round, &strategy, verbose)
        }
        Commands::Analyze { letter, prior } => {
            run_analyze_command(&dictionary, round, &prior, letter)
        }
        Commands::Benchmark {
            min_length,
            max_length,
        } => run_benchmark_command(&dictionary, min_length..=max_length, cli.guesses, &strategy),
    }
}

fn run_play_command(dictionary: &[String], round: RoundConfig, show_pool: bool) -> Result<()> {
    let config = PlayConfig { round, show_pool };
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    run_play(dictionary, config, &mut input, &mut output)?;
    Ok(())
}

fn run_simulate_command(
    dictionary: &[String],
    round: RoundConfig,
    strategy: &StrategyType,
    verbose: bool,
) -> Result<()> {
    let result = simulate_round(dictionary, round, strategy)?;
    print_simulation_result(&result, strategy.name(), verbose);
    Ok(())
}

fn run_analyze_command(
    dictionary: &[String],
    round: RoundConfig,
    prior: &str,
    letter: char,
) -> Result<()> {
    let result = analyze_letter(dictionary, round, prior, letter.to_ascii_lowercase())?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command<S: Strategy>(
    dictionary: &[String],
    lengths: std::ops::RangeInclusive<usize>,
    max_guesses: i64,
    strategy: &S,
) -> Result<()> {
    println!(
        "Running benchmark on lengths {}..={} with {max_guesses} guesses...",
        lengths.start(),
        lengths.end()
    );

    let result = run_benchmark(dictionary, lengths, max_guesses, strategy)?;
    print_benchmark_result(&result);
    Ok(())
}
