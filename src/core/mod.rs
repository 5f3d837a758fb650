//! Core domain types for hangman
//!
//! This module contains the game engine: the secret word, the guess rules,
//! status derivation and change notification. Nothing here performs I/O.

mod config;
mod error;
mod game;
mod observer;
mod outcome;
mod secret;

pub use config::{DEFAULT_MAX_ATTEMPTS, GameConfig};
pub use error::GameError;
pub use game::{Game, GameSnapshot, PLACEHOLDER};
pub use observer::{GameEvent, Observer, SubscriptionId};
pub use outcome::{GuessOutcome, IgnoreReason, Status};
pub use secret::{PASS_THROUGH, Secret, normalize_letter};
