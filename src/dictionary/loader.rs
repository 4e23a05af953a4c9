//! Word list loading utilities
//!
//! Reading the raw text is the only I/O in the crate; parsing is delegated to
//! [`Dictionary::parse`].

use super::{Dictionary, DictionaryError};
use log::debug;
use std::fs;
use std::path::Path;

/// Load a dictionary from a newline-delimited file
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, or the parse error
/// for the first malformed line.
///
/// # Examples
/// ```no_run
/// use wordle_sieve::dictionary::loader::load_from_file;
///
/// let dict = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    debug!("Reading word list from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Dictionary::parse(&content)
}

/// Load from `path` if given, otherwise use the embedded list
///
/// # Errors
///
/// Same as [`load_from_file`] and [`Dictionary::embedded`].
pub fn load_or_embedded(path: Option<&Path>) -> Result<Dictionary, DictionaryError> {
    match path {
        Some(path) => load_from_file(path),
        None => Dictionary::embedded(),
    }
}
