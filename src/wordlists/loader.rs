//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Lines are trimmed and lowercased; blank lines are
/// skipped. No other validation happens here, the engine filters by length.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Split text into words, one per line
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::words_from_slice;
/// use evil_hangman::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_trims_and_lowercases() {
        let words = parse_words("  Bold\ncold  \n\n\tGOLD\n");
        assert_eq!(words, vec!["bold", "cold", "gold"]);
    }

    #[test]
    fn parse_words_empty() {
        assert!(parse_words("").is_empty());
        assert!(parse_words("\n \n").is_empty());
    }

    #[test]
    fn words_from_slice_keeps_order() {
        let words = words_from_slice(&["told", "bold"]);
        assert_eq!(words, vec!["told", "bold"]);
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_temp_file() {
        let path = std::env::temp_dir().join("evil_hangman_loader_test.txt");
        fs::write(&path, "Mold\nsold\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words, vec!["mold", "sold"]);

        fs::remove_file(&path).unwrap();
    }
}
