//! Display functions for command results

use super::formatters::{family_bar, highlight_pattern, occurrence_label};
use crate::commands::{AnalysisResult, BenchmarkResult, SimulationResult};
use colored::Colorize;

/// Print an automated round
pub fn print_simulation_result(result: &SimulationResult, strategy: &str, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Round: {} letters, strategy {}",
        result.length.to_string().bright_yellow().bold(),
        strategy.bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} → {}  ({})",
            i + 1,
            step.letter.to_string().to_uppercase().bold(),
            highlight_pattern(&step.pattern),
            occurrence_label(step.occurrences)
        );

        if verbose {
            println!(
                "  Candidates:   {} → {}",
                step.pool_before, step.pool_after
            );
            println!("  Guesses left: {}", step.guesses_left);
        }
    }

    println!();
    if result.won {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses ({} wrong)",
                result.steps.len(),
                result.wrong_guesses()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Out of guesses at {} ({} words still possible)",
                result.final_pattern, result.remaining_words
            )
            .red()
            .bold()
        );
    }

    if let Some(word) = &result.example_word {
        println!("   The word was: {}", word.bright_white().bold());
    }
}

/// Print the breakdown of a letter
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "FAMILY ANALYSIS:".bright_cyan().bold(),
        result.letter.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Pattern {} with {} candidates, {} guesses left",
        highlight_pattern(&result.pattern_before),
        result.pool_before,
        result.guesses_left
    );

    for (i, family) in result.families.iter().enumerate() {
        let marker = if i == 0 { "▶".bright_red().bold() } else { " ".normal() };
        let bar = family_bar(family.size, result.pool_before, 30);
        println!(
            " {marker} {}  [{}] {:5}  {}",
            highlight_pattern(&family.key),
            bar.green(),
            family.size,
            family.sample.join(", ").bright_black()
        );
    }

    println!(
        "\n   Referee keeps the first family: {}",
        occurrence_label(result.occurrences).bright_yellow()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds.len());
    println!("   Wins:             {}", result.wins.to_string().green());
    println!("   Losses:           {}", result.losses.to_string().red());
    println!(
        "   Avg wrong:        {}",
        format!("{:.2}", result.average_wrong_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if !result.skipped.is_empty() {
        let lengths: Vec<String> = result.skipped.iter().map(ToString::to_string).collect();
        println!("   Skipped lengths:  {}", lengths.join(", ").bright_black());
    }

    println!("\n📈 {}", "Per length:".bright_cyan().bold());
    for round in &result.rounds {
        let verdict = if round.won { "won ".green() } else { "lost".red() };
        println!(
            "   {:2}: {} {:5} words  {:2} guesses ({:2} wrong)  {}",
            round.length,
            verdict,
            round.starting_pool,
            round.total_guesses,
            round.wrong_guesses,
            highlight_pattern(&round.final_pattern)
        );
    }
}
