//! A guess row as the player enters it
//!
//! Slots start empty and blank; the editor fills letters and sets colors in
//! place. Only fully filled guesses feed the constraint builder.

use super::color::Color;
use super::letter::Letter;
use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;
use thiserror::Error;

/// Five letter slots, each with its feedback color
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guess {
    letters: [Option<Letter>; WORD_LENGTH],
    colors: [Color; WORD_LENGTH],
}

/// Error type for guess notation like `crane:--YGG`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessParseError {
    #[error("invalid guess word: {0}")]
    Word(#[from] WordError),
    #[error("feedback must be exactly {WORD_LENGTH} symbols, got {0}")]
    PatternLength(usize),
    #[error("invalid feedback symbol '{0}' (use G/Y/- or 🟩🟨⬜)")]
    PatternSymbol(char),
}

impl Guess {
    /// An empty guess: no letters, all blank
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A filled guess from a word and its feedback
    #[must_use]
    pub fn from_word(word: Word, colors: [Color; WORD_LENGTH]) -> Self {
        Self {
            letters: word.letters().map(Some),
            colors,
        }
    }

    #[must_use]
    pub const fn letters(&self) -> &[Option<Letter>; WORD_LENGTH] {
        &self.letters
    }

    #[must_use]
    pub const fn colors(&self) -> &[Color; WORD_LENGTH] {
        &self.colors
    }

    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Option<Letter> {
        self.letters[position]
    }

    #[must_use]
    pub const fn color_at(&self, position: usize) -> Color {
        self.colors[position]
    }

    /// A guess is filled when every slot holds a letter
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.letters.iter().all(Option::is_some)
    }

    /// The guess as a word, if filled
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let mut letters = [Letter::A; WORD_LENGTH];
        for (slot, letter) in letters.iter_mut().zip(self.letters) {
            *slot = letter?;
        }
        Some(Word::from_letters(letters))
    }

    pub fn set_letter(&mut self, position: usize, letter: Option<Letter>) {
        self.letters[position] = letter;
    }

    pub fn set_color(&mut self, position: usize, color: Color) {
        self.colors[position] = color;
    }

    /// Remove every letter, keeping the colors
    pub fn clear_letters(&mut self) {
        self.letters = [None; WORD_LENGTH];
    }

    /// Feedback rendered as `G`/`Y`/`-` symbols
    #[must_use]
    pub fn pattern(&self) -> String {
        self.colors.iter().map(|c| c.symbol()).collect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            match letter {
                Some(letter) => write!(f, "{letter}")?,
                None => write!(f, "_")?,
            }
        }
        write!(f, ":{}", self.pattern())
    }
}

impl std::str::FromStr for Guess {
    type Err = GuessParseError;

    /// Parse `word` (all blank) or `word:pattern`
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Color, Guess};
    ///
    /// let guess: Guess = "moved:Y--GG".parse().unwrap();
    /// assert_eq!(guess.color_at(0), Color::Yellow);
    /// assert_eq!(guess.color_at(4), Color::Green);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, pattern) = s.split_once(':').unwrap_or((s, "-----"));
        let word = Word::new(word.trim())?;

        let symbols: Vec<char> = pattern.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(GuessParseError::PatternLength(symbols.len()));
        }

        let mut colors = [Color::Blank; WORD_LENGTH];
        for (slot, ch) in colors.iter_mut().zip(symbols) {
            *slot = Color::from_symbol(ch).ok_or(GuessParseError::PatternSymbol(ch))?;
        }

        Ok(Self::from_word(word, colors))
    }
}
