//! Errors returned by the guess engine.

use thiserror::Error;

/// Broad classification of a [`GuessError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a malformed value
    InvalidArgument,
    /// The round is in a state where the operation is not allowed
    InvalidState,
}

/// Contract violations reported by [`GuessEngine`](super::GuessEngine).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Word length must be 1 or more, got {0}")]
    InvalidLength(i64),

    #[error("Maximum wrong guesses must be 0 or more, got {0}")]
    NegativeBudget(i64),

    #[error("'{0}' has already been guessed")]
    AlreadyGuessed(char),

    #[error("No candidate words remain")]
    NoCandidates,

    #[error("No guesses remaining")]
    NoGuessesLeft,
}

impl GuessError {
    /// Classify the error as an argument or state violation
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLength(_) | Self::NegativeBudget(_) | Self::AlreadyGuessed(_) => {
                ErrorKind::InvalidArgument
            }
            Self::NoCandidates | Self::NoGuessesLeft => ErrorKind::InvalidState,
        }
    }
}
