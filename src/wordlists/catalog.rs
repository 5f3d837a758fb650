//! Word source trait and the catalog implementation

use super::WORDS;
use super::loader::{load_from_file, parse_words, words_from_slice};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::fmt;
use std::io;
use std::path::Path;
use tracing::debug;

/// Anything that can hand out secret words
pub trait WordSource {
    /// Produce one word for a new round
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` if there is nothing to pick from.
    fn next_word(&mut self) -> Result<String, CatalogError>;
}

/// Error type for word sources
#[derive(Debug)]
pub enum CatalogError {
    Empty,
    Io(io::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word catalog is empty"),
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// A fixed list of words picked uniformly at random
#[derive(Debug, Clone)]
pub struct Catalog {
    words: Vec<String>,
    rng: StdRng,
}

impl Catalog {
    /// Build a catalog from words that are already normalized
    ///
    /// Use [`Catalog::parse`] for raw text.
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            words: words.into_iter().collect(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// The catalog compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(words_from_slice(WORDS))
    }

    /// Parse a catalog from one-word-per-line text
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self::from_words(parse_words(content))
    }

    /// Load a catalog from a file
    ///
    /// # Errors
    /// Returns `CatalogError::Io` if the file cannot be read and
    /// `CatalogError::Empty` if it holds no usable word.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let words = load_from_file(path.as_ref())?;
        if words.is_empty() {
            return Err(CatalogError::Empty);
        }
        debug!(path = %path.as_ref().display(), count = words.len(), "Loaded word list");
        Ok(Self::from_words(words))
    }

    /// Make picks reproducible
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for Catalog {
    fn next_word(&mut self) -> Result<String, CatalogError> {
        self.words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(CatalogError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_catalog_has_fifteen_words() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.len(), 15);
        assert!(catalog.words().iter().all(|w| w.len() == 5));
    }

    #[test]
    fn next_word_comes_from_catalog() {
        let mut catalog = Catalog::embedded().with_seed(7);
        let known: HashSet<String> = catalog.words().iter().cloned().collect();
        for _ in 0..50 {
            let word = catalog.next_word().unwrap();
            assert!(known.contains(&word));
        }
    }

    #[test]
    fn seeded_catalogs_agree() {
        let mut a = Catalog::embedded().with_seed(42);
        let mut b = Catalog::embedded().with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.next_word().unwrap(), b.next_word().unwrap());
        }
    }

    #[test]
    fn empty_catalog_fails() {
        let mut catalog = Catalog::from_words(Vec::new());
        assert!(catalog.is_empty());
        assert!(matches!(catalog.next_word(), Err(CatalogError::Empty)));
    }

    #[test]
    fn parse_normalizes_words() {
        let mut catalog = Catalog::parse("mouse\n");
        assert_eq!(catalog.next_word().unwrap(), "MOUSE");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Catalog::from_file("no/such/catalog.txt").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
