//! Word list validation command
//!
//! Loads a word list file and reports what it contains.

use crate::dictionary::loader::load_from_file;
use anyhow::Result;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

/// Result of validating a word list
#[derive(Debug)]
pub struct ValidationResult {
    pub path: PathBuf,
    pub words: usize,
    pub distinct: usize,
    pub bytes: usize,
}

impl ValidationResult {
    #[must_use]
    pub const fn duplicates(&self) -> usize {
        self.words - self.distinct
    }
}

/// Validate the word list at `path`
///
/// # Errors
///
/// Returns an error if the file cannot be read or any line is malformed; the
/// error names the offending line.
pub fn validate_word_list(path: &Path) -> Result<ValidationResult> {
    let dictionary = load_from_file(path)?;
    let distinct: FxHashSet<_> = dictionary.iter().collect();

    Ok(ValidationResult {
        path: path.to_path_buf(),
        words: dictionary.len(),
        distinct: distinct.len(),
        bytes: dictionary.as_bytes().len(),
    })
}
