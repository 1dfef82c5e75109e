//! Formatting utilities for terminal output

use crate::core::BLANK;
use colored::Colorize;

/// Highlight revealed letters of a rendered pattern
///
/// Letters are shown bold green and blanks dimmed. Spacing is kept as-is.
#[must_use]
pub fn highlight_pattern(pattern: &str) -> String {
    pattern
        .chars()
        .map(|ch| match ch {
            ' ' => " ".to_string(),
            BLANK => BLANK.to_string().bright_black().to_string(),
            _ => ch.to_string().bright_green().bold().to_string(),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a family's share of the candidate pool
#[must_use]
pub fn family_bar(size: usize, pool: usize, width: usize) -> String {
    create_progress_bar(size as f64, pool as f64, width)
}

/// Short label for an occurrence count
#[must_use]
pub fn occurrence_label(occurrences: usize) -> String {
    match occurrences {
        0 => "miss".to_string(),
        1 => "1 hit".to_string(),
        n => format!("{n} hits"),
    }
}
