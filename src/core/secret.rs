//! Secret word representation
//!
//! A Secret stores the case-normalized word along with letter position indices.

use super::GameError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Character treated as always revealed
pub const PASS_THROUGH: char = ' ';

/// Normalize a letter to its uppercase form
///
/// Returns `None` for non-alphabetic characters and for letters whose
/// uppercase form is more than one character (e.g. `ß`).
///
/// # Examples
/// ```
/// use hangman::core::normalize_letter;
///
/// assert_eq!(normalize_letter('c'), Some('C'));
/// assert_eq!(normalize_letter('7'), None);
/// ```
#[must_use]
pub fn normalize_letter(c: char) -> Option<char> {
    if !c.is_alphabetic() {
        return None;
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

/// The word to be guessed
///
/// Immutable after construction. Letters are uppercase, spaces are kept as
/// pass-through characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    text: String,
    chars: Vec<char>,
    letter_positions: FxHashMap<char, Vec<usize>>,
}

impl Secret {
    /// Create a new Secret from a string
    ///
    /// # Errors
    /// Returns `GameError` if:
    /// - The word is empty or only spaces
    /// - Contains a character that is neither a letter nor a space
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Secret;
    ///
    /// let secret = Secret::new("mouse").unwrap();
    /// assert_eq!(secret.text(), "MOUSE");
    ///
    /// assert!(Secret::new("").is_err());
    /// assert!(Secret::new("h0use").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, GameError> {
        let mut chars = Vec::new();
        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();

        for (i, c) in text.as_ref().chars().enumerate() {
            if c == PASS_THROUGH {
                chars.push(c);
                continue;
            }
            let letter = normalize_letter(c).ok_or(GameError::InvalidCharacter(c))?;
            letter_positions.entry(letter).or_default().push(i);
            chars.push(letter);
        }

        if letter_positions.is_empty() {
            return Err(GameError::EmptySecret);
        }

        Ok(Self {
            text: chars.iter().collect(),
            chars,
            letter_positions,
        })
    }

    /// Get the normalized word
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of positions, pass-through characters included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: a secret holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if the word contains a specific (normalized) letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letter_positions.len()
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_uppercase_normalized() {
        assert_eq!(Secret::new("casas").unwrap().text(), "CASAS");
        assert_eq!(Secret::new("CaSaS").unwrap().text(), "CASAS");
    }

    #[test]
    fn secret_keeps_spaces() {
        let secret = Secret::new("ice cream").unwrap();
        assert_eq!(secret.text(), "ICE CREAM");
        assert_eq!(secret.len(), 9);
        assert!(!secret.has_letter(' '));
    }

    #[test]
    fn secret_empty_rejected() {
        assert_eq!(Secret::new(""), Err(GameError::EmptySecret));
        assert_eq!(Secret::new("   "), Err(GameError::EmptySecret));
    }

    #[test]
    fn secret_invalid_characters() {
        assert_eq!(Secret::new("cas4s"), Err(GameError::InvalidCharacter('4')));
        assert_eq!(Secret::new("ca-sa"), Err(GameError::InvalidCharacter('-')));
        assert_eq!(Secret::new("stra\u{df}e"), Err(GameError::InvalidCharacter('\u{df}')));
    }

    #[test]
    fn secret_accented_letters() {
        let secret = Secret::new("ação").unwrap();
        assert_eq!(secret.text(), "AÇÃO");
        assert!(secret.has_letter('Ç'));
    }

    #[test]
    fn secret_positions_of_duplicates() {
        let secret = Secret::new("casas").unwrap();
        assert_eq!(secret.positions_of('A'), &[1, 3]);
        assert_eq!(secret.positions_of('S'), &[2, 4]);
        assert_eq!(secret.positions_of('C'), &[0]);
        assert_eq!(secret.positions_of('Z'), &[]);
        assert_eq!(secret.distinct_letters(), 3);
    }

    #[test]
    fn normalize_letter_rules() {
        assert_eq!(normalize_letter('a'), Some('A'));
        assert_eq!(normalize_letter('Z'), Some('Z'));
        assert_eq!(normalize_letter('é'), Some('É'));
        assert_eq!(normalize_letter(' '), None);
        assert_eq!(normalize_letter('!'), None);
        assert_eq!(normalize_letter('\u{df}'), None);
    }

    #[test]
    fn secret_display() {
        let secret = Secret::new("livro").unwrap();
        assert_eq!(format!("{secret}"), "LIVRO");
    }
}
