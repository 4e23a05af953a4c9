//! Lazy dictionary filtering
//!
//! A search walks the dictionary in order and yields each word that satisfies
//! the constraints. Nothing is collected up front: stopping after `n` results
//! means only the words up to the `n`th match were inspected.

use super::constraints::Constraints;
use crate::core::{Guess, Word};
use crate::dictionary::Dictionary;
use log::debug;
use std::borrow::Cow;
use std::iter::FusedIterator;

/// Iterator over the candidates of one search
///
/// Each call to [`search`] or [`search_guesses`] starts a fresh scan from the
/// first dictionary word.
#[derive(Debug, Clone)]
pub struct Candidates<'d, 'c> {
    dictionary: &'d Dictionary,
    constraints: Cow<'c, Constraints>,
    next_index: usize,
}

impl<'d, 'c> Candidates<'d, 'c> {
    fn new(dictionary: &'d Dictionary, constraints: Cow<'c, Constraints>) -> Self {
        debug!(
            "Searching {} words with constraints [{}]",
            dictionary.len(),
            constraints
        );
        Self {
            dictionary,
            constraints,
            next_index: 0,
        }
    }

    /// The constraints this search filters by
    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// How many dictionary words have been examined so far
    #[must_use]
    pub const fn inspected(&self) -> usize {
        self.next_index
    }
}

impl Iterator for Candidates<'_, '_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        while let Some(word) = self.dictionary.get(self.next_index) {
            self.next_index += 1;
            if self.constraints.matches(&word) {
                return Some(word);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dictionary.len().saturating_sub(self.next_index);
        (0, Some(remaining))
    }
}

impl FusedIterator for Candidates<'_, '_> {}

/// Filter the dictionary by precomputed constraints
///
/// # Examples
/// ```
/// use wordle_sieve::core::Guess;
/// use wordle_sieve::dictionary::Dictionary;
/// use wordle_sieve::search::{Constraints, search};
///
/// let dict = Dictionary::parse("crane\nslate\nirate\n").unwrap();
/// let guess: Guess = "plate:--GGG".parse().unwrap();
/// let constraints = Constraints::from_guesses([&guess]);
///
/// let found: Vec<String> = search(&dict, &constraints).map(|w| w.to_string()).collect();
/// assert_eq!(found, ["irate"]);
/// ```
#[must_use]
pub fn search<'d, 'c>(
    dictionary: &'d Dictionary,
    constraints: &'c Constraints,
) -> Candidates<'d, 'c> {
    Candidates::new(dictionary, Cow::Borrowed(constraints))
}

/// Filter the dictionary by a list of guesses
///
/// Constraints are derived from scratch on every call; unfilled guesses are
/// ignored.
#[must_use]
pub fn search_guesses<'d>(
    dictionary: &'d Dictionary,
    guesses: &[Guess],
) -> Candidates<'d, 'static> {
    Candidates::new(dictionary, Cow::Owned(Constraints::from_guesses(guesses)))
}
