//! Hangman game engine
//!
//! A pure state machine: construct with a secret, submit guesses, query state.

use super::observer::Observers;
use super::{
    GameConfig, GameError, GameEvent, GuessOutcome, IgnoreReason, Observer, PASS_THROUGH, Secret,
    Status, SubscriptionId, normalize_letter,
};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, trace};

/// Symbol shown for letters not yet revealed
pub const PLACEHOLDER: char = '_';

/// Immutable copy of the observable game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub masked: String,
    pub status: Status,
    pub remaining_attempts: u32,
    pub max_attempts: u32,
    /// Accepted letters in the order they were guessed
    pub guessed: Vec<char>,
    /// Accepted letters that are not in the secret, in guess order
    pub wrong: Vec<char>,
}

impl GameSnapshot {
    /// Incorrect guesses made so far
    #[must_use]
    pub const fn mistakes(&self) -> u32 {
        self.max_attempts.saturating_sub(self.remaining_attempts)
    }
}

/// One round of hangman
///
/// The game is the single writer of its state. Guesses never fail: every call
/// to [`Game::guess`] returns a [`GuessOutcome`] describing what happened.
///
/// # Examples
/// ```
/// use hangman::core::{Game, GuessOutcome, Status};
///
/// let mut game = Game::new("mouse").unwrap();
/// assert_eq!(game.guess("m"), GuessOutcome::Accepted { letter: 'M', correct: true });
/// game.guess("e");
/// assert_eq!(game.masked(), "M___E");
/// assert_eq!(game.status(), Status::Playing);
/// ```
#[derive(Debug)]
pub struct Game {
    secret: Secret,
    guessed: Vec<char>,
    remaining_attempts: u32,
    max_attempts: u32,
    status: Status,
    observers: Observers,
}

impl Game {
    /// Start a round with the default mistake budget
    ///
    /// # Errors
    /// Returns `GameError` if the word is empty or contains characters other
    /// than letters and spaces.
    pub fn new(word: &str) -> Result<Self, GameError> {
        Self::with_config(word, &GameConfig::default())
    }

    /// Start a round with a specific mistake budget
    ///
    /// # Errors
    /// Returns `GameError` if the word is invalid or `max_attempts` is zero.
    pub fn with_max_attempts(word: &str, max_attempts: u32) -> Result<Self, GameError> {
        Self::with_config(word, &GameConfig::new(max_attempts))
    }

    /// Start a round from a configuration
    ///
    /// # Errors
    /// Returns `GameError` if the word is invalid or the configuration is rejected.
    pub fn with_config(word: &str, config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let secret = Secret::new(word)?;

        debug!(
            length = secret.len(),
            max_attempts = config.max_attempts,
            "New round"
        );

        Ok(Self {
            secret,
            guessed: Vec::new(),
            remaining_attempts: config.max_attempts,
            max_attempts: config.max_attempts,
            status: Status::Playing,
            observers: Observers::default(),
        })
    }

    /// Submit a guess
    ///
    /// Input must be exactly one alphabetic character; case does not matter.
    /// Observers are notified once per call, whatever the outcome.
    #[instrument(level = "trace", skip(self))]
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        let outcome = self.apply(input);
        self.notify(outcome);
        outcome
    }

    /// Submit a single character as a guess
    pub fn guess_char(&mut self, letter: char) -> GuessOutcome {
        let mut buf = [0u8; 4];
        self.guess(letter.encode_utf8(&mut buf))
    }

    fn apply(&mut self, input: &str) -> GuessOutcome {
        if self.status.is_terminal() {
            trace!(status = %self.status, "Guess after round ended");
            return GuessOutcome::Ignored(IgnoreReason::GameOver);
        }

        let Some(letter) = parse_letter(input) else {
            trace!("Rejected guess input");
            return GuessOutcome::Ignored(IgnoreReason::InvalidInput);
        };

        if self.guessed.contains(&letter) {
            trace!(%letter, "Repeated guess");
            return GuessOutcome::Ignored(IgnoreReason::AlreadyGuessed);
        }

        self.guessed.push(letter);
        let correct = self.secret.has_letter(letter);
        if !correct {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
        }
        self.status = self.derive_status();

        debug!(
            %letter,
            correct,
            remaining = self.remaining_attempts,
            "Guess accepted"
        );
        if self.status.is_terminal() {
            info!(status = %self.status, guesses = self.guessed.len(), "Round finished");
        }

        GuessOutcome::Accepted { letter, correct }
    }

    /// Won is checked before Lost
    ///
    /// Every position is revealed exactly when every distinct letter of the
    /// secret has been guessed.
    fn derive_status(&self) -> Status {
        let found = self
            .guessed
            .iter()
            .filter(|&&c| self.secret.has_letter(c))
            .count();
        if found == self.secret.distinct_letters() {
            Status::Won
        } else if self.remaining_attempts == 0 {
            Status::Lost
        } else {
            Status::Playing
        }
    }

    fn notify(&mut self, outcome: GuessOutcome) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.observers.notify(&GameEvent {
            outcome,
            snapshot: &snapshot,
        });
    }

    /// Register an observer called after every guess
    pub fn subscribe(&mut self, observer: impl Observer + 'static) -> SubscriptionId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Remove an observer
    ///
    /// Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of registered observers
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// The word with unrevealed letters replaced by [`PLACEHOLDER`]
    #[must_use]
    pub fn masked(&self) -> String {
        let mut revealed: Vec<char> = self
            .secret
            .chars()
            .iter()
            .map(|&c| if c == PASS_THROUGH { c } else { PLACEHOLDER })
            .collect();
        for &letter in &self.guessed {
            for &i in self.secret.positions_of(letter) {
                revealed[i] = letter;
            }
        }
        revealed.into_iter().collect()
    }

    /// The full secret, regardless of what has been revealed
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        self.secret.text()
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn mistakes(&self) -> u32 {
        self.max_attempts.saturating_sub(self.remaining_attempts)
    }

    /// Set of guessed letters (a copy)
    #[must_use]
    pub fn guessed_letters(&self) -> BTreeSet<char> {
        self.guessed.iter().copied().collect()
    }

    /// Guessed letters in submission order
    #[must_use]
    pub fn guess_order(&self) -> &[char] {
        &self.guessed
    }

    /// Guessed letters absent from the secret
    #[must_use]
    pub fn wrong_letters(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|&c| !self.secret.has_letter(c))
            .collect()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            masked: self.masked(),
            status: self.status,
            remaining_attempts: self.remaining_attempts,
            max_attempts: self.max_attempts,
            guessed: self.guessed.clone(),
            wrong: self.wrong_letters(),
        }
    }
}

/// Accept exactly one alphabetic character, normalized to uppercase
fn parse_letter(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => normalize_letter(c),
        _ => None,
    }
}
