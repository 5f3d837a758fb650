//! Construction-time errors for the game engine

use std::fmt;

/// Error returned when a game cannot be created
///
/// Per-guess conditions (repeated letters, bad input, finished games) are
/// never errors; they are reported through [`GuessOutcome`](super::GuessOutcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The secret word is empty or contains no letter at all
    EmptySecret,
    /// The secret word contains a character that is neither a letter nor a space
    InvalidCharacter(char),
    /// The mistake budget must be at least 1
    InvalidAttempts,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySecret => write!(f, "Secret word must contain at least one letter"),
            Self::InvalidCharacter(c) => {
                write!(f, "Secret word contains invalid character {c:?}")
            }
            Self::InvalidAttempts => write!(f, "Maximum attempts must be at least 1"),
        }
    }
}

impl std::error::Error for GameError {}
