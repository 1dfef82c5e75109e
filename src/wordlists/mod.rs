//! Word lists for hangman rounds
//!
//! Provides an embedded dictionary compiled into the binary, plus file loading
//! for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
