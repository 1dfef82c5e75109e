//! Adversarial hangman referee
//!
//! The engine keeps the largest set of words consistent with every guess and
//! answers each new guess with the least helpful outcome for the guesser.

mod error;
pub mod partition;
mod state;

pub use error::{ErrorKind, GuessError};
pub use state::{Family, GuessEngine, Outcome};
