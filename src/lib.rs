//! Hangman
//!
//! A word-guessing game built around a pure state-machine engine, with a
//! console front end and a full-screen TUI.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Game, Status};
//!
//! let mut game = Game::new("casas").unwrap();
//! for letter in ["c", "a", "s"] {
//!     game.guess(letter);
//! }
//!
//! assert_eq!(game.status(), Status::Won);
//! assert_eq!(game.masked(), "CASAS");
//! ```

// Core game engine
pub mod core;

// Word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output and the presentation boundary
pub mod output;

// Interactive TUI interface
pub mod interactive;
