//! Word list loading utilities
//!
//! Provides functions to load word lists from files or embedded constants.

use crate::core::Secret;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Load words from a file
///
/// One word per line. Blank lines and lines starting with `#` are skipped, as
/// are lines that would not make a valid secret. Words are returned uppercase.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse a word list from text
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Secret::new(line) {
            Ok(secret) => Some(secret.text().to_string()),
            Err(e) => {
                warn!(word = line, error = %e, "Skipping invalid word");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to normalized words
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .filter_map(|&s| Secret::new(s).ok())
        .map(|secret| secret.text().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_normalizes() {
        let words = words_from_slice(&["casas", "Livro", "porta"]);
        assert_eq!(words, vec!["CASAS", "LIVRO", "PORTA"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["casas", "c4sas", "", "mouse"]);
        assert_eq!(words, vec!["CASAS", "MOUSE"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_words_skips_comments_and_blanks() {
        let content = "# catalog\ncasas\n\n  livro  \nbad-word\nice cream\n";
        assert_eq!(parse_words(content), vec!["CASAS", "LIVRO", "ICE CREAM"]);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
