//! Wordle word representation
//!
//! A Word is five validated letters. It is `Copy` so candidates can be yielded
//! by value straight out of the packed dictionary buffer.

use super::letter::{Letter, LetterSet};
use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word([Letter; WORD_LENGTH]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("'{0}' is not a letter a-z")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase ASCII is folded to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.to_string(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let count = text.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        let mut letters = [Letter::A; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            *slot = Letter::try_from(ch)?;
        }

        Ok(Self(letters))
    }

    /// Build a word from letters that are already validated
    #[inline]
    #[must_use]
    pub const fn from_letters(letters: [Letter; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    /// Build a word from five raw bytes, if all are lowercase letters
    #[must_use]
    pub fn from_bytes(bytes: [u8; WORD_LENGTH]) -> Option<Self> {
        let mut letters = [Letter::A; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(bytes) {
            *slot = Letter::from_byte(byte)?;
        }
        Some(Self(letters))
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.0
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.0[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(&letter)
    }

    /// The set of distinct letters in the word
    #[must_use]
    pub fn letter_set(&self) -> LetterSet {
        self.0.iter().copied().collect()
    }

    /// The word as lowercase ASCII bytes
    #[must_use]
    pub fn bytes(&self) -> [u8; WORD_LENGTH] {
        self.0.map(Letter::byte)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
