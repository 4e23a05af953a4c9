//! Core domain types for Wordle feedback
//!
//! Letters, feedback colors, words and guess rows. All types here are plain
//! values with validated constructors and no I/O.

mod color;
mod guess;
mod letter;
mod word;

pub use color::Color;
pub use guess::{Guess, GuessParseError};
pub use letter::{ALPHABET_SIZE, Letter, LetterSet};
pub use word::{WORD_LENGTH, Word, WordError};
