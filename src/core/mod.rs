//! Core domain types for hangman
//!
//! This module contains the reveal pattern and nothing else. It is pure and
//! has no dependency on the engine or the word lists.

mod pattern;

pub use pattern::{BLANK, Pattern};
