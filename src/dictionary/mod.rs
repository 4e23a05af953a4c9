//! Dictionary of valid 5-letter words
//!
//! Words are stored packed, five bytes per entry, in the order they appear in
//! the source list. A dictionary is built once and then only read; share it by
//! reference (or `Arc`) between searches and threads.

mod embedded;
pub mod loader;

use crate::core::{Letter, WORD_LENGTH, Word};
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use embedded::EMBEDDED_WORD_LIST;

/// Why a word list line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// Non-empty line whose length (in characters) is not 5
    InvalidLength(usize),
    /// Character outside `a-z` (after ASCII case folding)
    InvalidCharacter(char),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(f, "word of length {len}"),
            Self::InvalidCharacter(ch) => write!(f, "invalid character {ch:?}"),
        }
    }
}

/// Errors produced while loading a word list
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("malformed word list at line {line}: {reason} in {content:?}")]
    MalformedWordList {
        line: usize,
        content: String,
        reason: MalformedReason,
    },

    #[error("parsed word data has length {len}, which is not a multiple of {WORD_LENGTH}")]
    Misaligned { len: usize },

    #[error("could not read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Immutable, ordered list of 5-letter words
pub struct Dictionary {
    bytes: Box<[u8]>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Parse a newline-delimited word list
    ///
    /// Lines may end in `\n`, `\r\n` or `\r`. Empty lines are skipped. Uppercase
    /// ASCII is folded to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::MalformedWordList` for the first line that
    /// contains a non-letter or is not exactly 5 letters long.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::parse("crane\r\nslate\n\nirate\n").unwrap();
    /// assert_eq!(dict.len(), 3);
    ///
    /// assert!(Dictionary::parse("crane\ncranes\n").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, DictionaryError> {
        let mut bytes = Vec::with_capacity(text.len());

        for (line_index, physical) in text.split('\n').enumerate() {
            for segment in physical.split('\r') {
                parse_line(segment, &mut bytes).map_err(|reason| {
                    DictionaryError::MalformedWordList {
                        line: line_index + 1,
                        content: segment.to_string(),
                        reason,
                    }
                })?;
            }
        }

        let dictionary = Self::from_packed(bytes)?;
        info!("Loaded dictionary with {} words", dictionary.len());
        Ok(dictionary)
    }

    /// Build a dictionary from already validated words, keeping their order
    #[must_use]
    pub fn from_words<I: IntoIterator<Item = Word>>(words: I) -> Self {
        let mut bytes = Vec::new();
        let mut index = FxHashSet::default();
        for word in words {
            bytes.extend_from_slice(&word.bytes());
            index.insert(word);
        }
        Self {
            bytes: bytes.into_boxed_slice(),
            index,
        }
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    ///
    /// Fails only if the embedded list itself is malformed.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::parse(EMBEDDED_WORD_LIST)
    }

    fn from_packed(bytes: Vec<u8>) -> Result<Self, DictionaryError> {
        if bytes.len() % WORD_LENGTH != 0 {
            return Err(DictionaryError::Misaligned { len: bytes.len() });
        }

        let mut dictionary = Self {
            bytes: bytes.into_boxed_slice(),
            index: FxHashSet::default(),
        };
        dictionary.index = dictionary.iter().collect();
        debug!(
            "Dictionary holds {} bytes, {} distinct words",
            dictionary.bytes.len(),
            dictionary.index.len()
        );
        Ok(dictionary)
    }

    /// Number of entries, duplicates included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len() / WORD_LENGTH
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The word at `index`, in source order
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Word> {
        let start = index.checked_mul(WORD_LENGTH)?;
        let chunk = self.bytes.get(start..start.checked_add(WORD_LENGTH)?)?;
        word_from_chunk(chunk)
    }

    /// Iterate all words in source order
    pub fn iter(&self) -> impl Iterator<Item = Word> + '_ {
        self.bytes.chunks_exact(WORD_LENGTH).filter_map(word_from_chunk)
    }

    /// Whether the word appears anywhere in the list
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Raw packed letters, five bytes per word
    ///
    /// Exposed for inspection and debugging.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Newline-joined words, one per line, in source order
    #[must_use]
    pub fn words_text(&self) -> String {
        let mut text = String::with_capacity(self.len() * (WORD_LENGTH + 1));
        for word in self.iter() {
            text.push_str(&word.to_string());
            text.push('\n');
        }
        text
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("words", &self.len())
            .field("distinct", &self.index.len())
            .field("first", &self.get(0).map(|w| w.to_string()))
            .finish()
    }
}

/// Validate one delimiter-free line and append its letters
///
/// Characters are checked as they are read, so a bad character is reported
/// even on a line that is also the wrong length.
fn parse_line(line: &str, out: &mut Vec<u8>) -> Result<(), MalformedReason> {
    let mut count = 0;
    for ch in line.chars() {
        let letter = Letter::from_char(ch).ok_or(MalformedReason::InvalidCharacter(ch))?;
        out.push(letter.byte());
        count += 1;
    }

    if count != 0 && count != WORD_LENGTH {
        return Err(MalformedReason::InvalidLength(count));
    }
    Ok(())
}

fn word_from_chunk(chunk: &[u8]) -> Option<Word> {
    <[u8; WORD_LENGTH]>::try_from(chunk)
        .ok()
        .and_then(Word::from_bytes)
}
