//! Game configuration

use super::GameError;

/// Mistake budget used when none is configured
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;

/// Settings applied to every round created from them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of incorrect guesses allowed before the round is lost
    pub max_attempts: u32,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Check the configuration before a game is built from it
    ///
    /// # Errors
    /// Returns [`GameError::InvalidAttempts`] when `max_attempts` is zero.
    pub const fn validate(&self) -> Result<(), GameError> {
        if self.max_attempts == 0 {
            Err(GameError::InvalidAttempts)
        } else {
            Ok(())
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}
