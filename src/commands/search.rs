//! One-shot search command
//!
//! Parses guesses from the command line and collects the first candidates.

use crate::core::{Guess, Word};
use crate::dictionary::Dictionary;
use crate::search::{Constraints, DEFAULT_DISPLAY_LIMIT, search};
use anyhow::{Context, Result};

/// Configuration for a search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub guesses: Vec<String>,
    pub limit: usize,
}

impl SearchConfig {
    #[must_use]
    pub const fn new(guesses: Vec<String>) -> Self {
        Self {
            guesses,
            limit: DEFAULT_DISPLAY_LIMIT,
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Result of a search
#[derive(Debug)]
pub struct SearchResult {
    pub guesses: Vec<Guess>,
    pub constraints: Constraints,
    pub candidates: Vec<Word>,
    /// More candidates exist beyond `limit`
    pub truncated: bool,
    /// Dictionary words examined to produce this result
    pub inspected: usize,
    pub dictionary_size: usize,
}

/// Run a search over `dictionary`
///
/// Stops scanning as soon as one candidate past the limit is found.
///
/// # Errors
///
/// Returns an error if any guess is not valid `word[:pattern]` notation.
pub fn run_search(config: &SearchConfig, dictionary: &Dictionary) -> Result<SearchResult> {
    let guesses = config
        .guesses
        .iter()
        .map(|text| {
            text.parse::<Guess>()
                .with_context(|| format!("Invalid guess '{text}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    let constraints = Constraints::from_guesses(&guesses);
    let mut candidates_iter = search(dictionary, &constraints);

    let candidates: Vec<Word> = candidates_iter.by_ref().take(config.limit).collect();
    let truncated = candidates_iter.next().is_some();
    let inspected = candidates_iter.inspected();

    Ok(SearchResult {
        guesses,
        constraints,
        candidates,
        truncated,
        inspected,
        dictionary_size: dictionary.len(),
    })
}
