//! Word representation
//!
//! A `Word` is a trimmed, uppercased, non-empty sequence of letters. Its length is
//! counted in characters so that the grid arithmetic stays correct for any input.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A normalized word as it appears in the grid
///
/// Stores the uppercased text together with its characters so the search can index
/// letters by position without re-decoding UTF-8.
///
/// The alphabet is not validated: digits or punctuation survive normalization and are
/// treated as ordinary letters. Keeping word lists alphabetic is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: Box<[char]>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word is empty after trimming whitespace")]
    Empty,
}

impl Word {
    /// Create a new Word from raw text
    ///
    /// Surrounding whitespace is trimmed and the text is uppercased.
    ///
    /// # Errors
    /// Returns `WordError::Empty` if nothing is left after trimming.
    ///
    /// # Examples
    /// ```
    /// use four_down::core::Word;
    ///
    /// let word = Word::new("  card\r").unwrap();
    /// assert_eq!(word.text(), "CARD");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_uppercase();
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        Ok(Self::from_text(text))
    }

    /// Build a word from letters that are already normalized (e.g. a derived column).
    pub(crate) fn from_letters(letters: &[char]) -> Self {
        Self {
            text: letters.iter().collect(),
            letters: letters.into(),
        }
    }

    fn from_text(text: String) -> Self {
        let letters = text.chars().collect();
        Self { text, letters }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false` for words built through [`Word::new`]
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Count how many times a letter appears in the word
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
