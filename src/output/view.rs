//! Presentation boundary

use crate::core::{GameSnapshot, GuessOutcome};
use std::io;

/// A front end that can show a round and collect guesses
///
/// Views hold no game logic. Whatever input filtering they do is advisory;
/// the engine validates every guess itself.
pub trait View {
    /// Show the current state of the round
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn render(&mut self, snapshot: &GameSnapshot) -> io::Result<()>;

    /// Give feedback about the last guess
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn report(&mut self, outcome: GuessOutcome) -> io::Result<()>;

    /// Ask the player for a letter
    ///
    /// Returns `None` when the player quits or input is exhausted.
    ///
    /// # Errors
    /// Returns an error if input cannot be read.
    fn prompt_letter(&mut self) -> io::Result<Option<String>>;

    /// Announce the end of a round, revealing the secret
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn finish(&mut self, snapshot: &GameSnapshot, secret: &str) -> io::Result<()>;

    /// Ask whether to start another round
    ///
    /// # Errors
    /// Returns an error if input cannot be read.
    fn confirm_new_round(&mut self) -> io::Result<bool>;
}
