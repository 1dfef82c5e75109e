//! Evil Hangman
//!
//! A hangman referee that never commits to a secret word. It keeps every
//! dictionary word still consistent with the guesses and answers each guess
//! with the outcome that leaves the most words in play.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::engine::GuessEngine;
//!
//! let words = ["bold", "cold", "fold", "gold", "hold", "mold", "sold", "told"];
//! let mut engine = GuessEngine::new(words, 4, 4).unwrap();
//!
//! assert_eq!(engine.record('o').unwrap(), 1);
//! assert_eq!(engine.pattern().unwrap(), "- o - -");
//! ```

// Core domain types
pub mod core;

// Adversarial referee
pub mod engine;

// Guessing strategies
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
