//! Round status and per-guess outcomes

use std::fmt;

/// Lifecycle of a round
///
/// `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Status {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Why a guess did not advance the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The round already ended
    GameOver,
    /// Input was not a single alphabetic character
    InvalidInput,
    /// The letter was submitted before
    AlreadyGuessed,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The round is over"),
            Self::InvalidInput => write!(f, "Please enter a single letter"),
            Self::AlreadyGuessed => write!(f, "You already tried that letter"),
        }
    }
}

/// Result of submitting a guess
///
/// Ignored guesses are expected, recoverable inputs, so they are values rather
/// than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    /// The letter was recorded
    Accepted { letter: char, correct: bool },
    /// Nothing changed
    Ignored(IgnoreReason),
}

impl GuessOutcome {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted {
                letter,
                correct: true,
            } => write!(f, "{letter} is in the word"),
            Self::Accepted {
                letter,
                correct: false,
            } => write!(f, "{letter} is not in the word"),
            Self::Ignored(reason) => write!(f, "{reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_playing_is_live() {
        assert!(!Status::Playing.is_terminal());
        assert!(Status::Won.is_terminal());
        assert!(Status::Lost.is_terminal());
        assert_eq!(Status::default(), Status::Playing);
    }

    #[test]
    fn outcome_messages() {
        let hit = GuessOutcome::Accepted {
            letter: 'A',
            correct: true,
        };
        let miss = GuessOutcome::Accepted {
            letter: 'Z',
            correct: false,
        };
        assert_eq!(hit.to_string(), "A is in the word");
        assert_eq!(miss.to_string(), "Z is not in the word");
        assert_eq!(
            GuessOutcome::Ignored(IgnoreReason::AlreadyGuessed).to_string(),
            "You already tried that letter"
        );
        assert!(hit.is_accepted());
        assert!(!GuessOutcome::Ignored(IgnoreReason::GameOver).is_accepted());
    }
}
