//! Word sources for hangman rounds
//!
//! Provides an embedded catalog compiled into the binary, file loading, and
//! the [`WordSource`] capability the game loops draw secrets from.

mod catalog;
mod embedded;
pub mod loader;

pub use catalog::{Catalog, CatalogError, WordSource};
pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Secret;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 15, "Expected 15 embedded words");
    }

    #[test]
    fn words_are_valid_secrets() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(Secret::new(word).is_ok());
        }
    }
}
