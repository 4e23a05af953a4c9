//! Positional constraints derived from guess feedback
//!
//! Constraints are rebuilt from the full guess list on every search; nothing
//! is updated incrementally.

use crate::core::{Color, Guess, Letter, LetterSet, WORD_LENGTH, Word};
use std::fmt;

/// Per-position rules accumulated from every filled guess
///
/// - `excluded[pos]`: letters marked blank at `pos`
/// - `elsewhere[pos]`: letters marked yellow at `pos` (in the word, not here)
/// - `exact[pos]`: letter marked green at `pos`
///
/// Contradictory feedback is kept as given. A letter marked both green and
/// blank at the same position filters everything out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    excluded: [LetterSet; WORD_LENGTH],
    elsewhere: [LetterSet; WORD_LENGTH],
    exact: [Option<Letter>; WORD_LENGTH],
}

impl Constraints {
    /// Derive constraints from a list of guesses
    ///
    /// Unfilled guesses contribute nothing. When two guesses mark different
    /// green letters at the same position, the later guess wins.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Guess, Letter};
    /// use wordle_sieve::search::Constraints;
    ///
    /// let guess: Guess = "crane:---GG".parse().unwrap();
    /// let constraints = Constraints::from_guesses([&guess]);
    ///
    /// assert!(constraints.excluded(0).contains(Letter::from_char('c').unwrap()));
    /// assert_eq!(constraints.exact(3), Letter::from_char('n'));
    /// ```
    pub fn from_guesses<'g, I>(guesses: I) -> Self
    where
        I: IntoIterator<Item = &'g Guess>,
    {
        let mut constraints = Self::default();
        for guess in guesses {
            constraints.add_guess(guess);
        }
        constraints
    }

    /// Fold one guess into the constraints
    pub fn add_guess(&mut self, guess: &Guess) {
        let Some(word) = guess.word() else {
            return;
        };

        for (pos, (&letter, &color)) in word.letters().iter().zip(guess.colors()).enumerate() {
            match color {
                Color::Blank => self.excluded[pos].insert(letter),
                Color::Yellow => self.elsewhere[pos].insert(letter),
                Color::Green => self.exact[pos] = Some(letter),
            }
        }
    }

    #[must_use]
    pub const fn excluded(&self, position: usize) -> LetterSet {
        self.excluded[position]
    }

    #[must_use]
    pub const fn elsewhere(&self, position: usize) -> LetterSet {
        self.elsewhere[position]
    }

    #[must_use]
    pub const fn exact(&self, position: usize) -> Option<Letter> {
        self.exact[position]
    }

    /// Every letter that must appear somewhere in the word
    #[must_use]
    pub fn required(&self) -> LetterSet {
        self.elsewhere
            .iter()
            .fold(LetterSet::EMPTY, |acc, &set| acc.union(set))
    }

    /// True when no guess has contributed anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.excluded.iter().all(|s| s.is_empty())
            && self.elsewhere.iter().all(|s| s.is_empty())
            && self.exact.iter().all(Option::is_none)
    }

    /// Check a word against all constraints
    ///
    /// Positional rules are checked first for every position, then the
    /// requirement that each yellow letter occurs somewhere in the word.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.matches_positions(word) && self.required().is_subset(word.letter_set())
    }

    fn matches_positions(&self, word: &Word) -> bool {
        word.letters().iter().enumerate().all(|(pos, &letter)| {
            !self.excluded[pos].contains(letter)
                && !self.elsewhere[pos].contains(letter)
                && self.exact[pos].is_none_or(|exact| exact == letter)
        })
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in 0..WORD_LENGTH {
            if pos > 0 {
                write!(f, " | ")?;
            }
            match self.exact[pos] {
                Some(letter) => write!(f, "{pos}:={letter}")?,
                None => write!(f, "{pos}:=?")?,
            }
            if !self.excluded[pos].is_empty() {
                write!(f, " !{}", self.excluded[pos])?;
            }
            if !self.elsewhere[pos].is_empty() {
                write!(f, " ~{}", self.elsewhere[pos])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    fn guesses(list: &[&str]) -> Vec<Guess> {
        list.iter().map(|g| g.parse().unwrap()).collect()
    }

    #[test]
    fn empty_guess_list_gives_empty_constraints() {
        let constraints = Constraints::from_guesses(std::iter::empty());
        assert!(constraints.is_empty());
        assert_eq!(constraints, Constraints::default());
    }

    #[test]
    fn unfilled_guesses_contribute_nothing() {
        let mut partial = Guess::new();
        partial.set_letter(0, Some(letter('c')));
        partial.set_color(0, Color::Green);

        let constraints = Constraints::from_guesses([&Guess::new(), &partial]);
        assert!(constraints.is_empty());
    }

    #[test]
    fn colors_map_to_sets() {
        let list = guesses(&["crane:---GG"]);
        let constraints = Constraints::from_guesses(&list);

        assert_eq!(constraints.excluded(0), [letter('c')].into_iter().collect());
        assert_eq!(constraints.excluded(1), [letter('r')].into_iter().collect());
        assert_eq!(constraints.excluded(2), [letter('a')].into_iter().collect());
        assert!(constraints.excluded(3).is_empty());
        assert_eq!(constraints.exact(3), Some(letter('n')));
        assert_eq!(constraints.exact(4), Some(letter('e')));
        assert_eq!(constraints.exact(0), None);
        assert!(constraints.required().is_empty());
    }

    #[test]
    fn accumulates_across_guesses() {
        let list = guesses(&["clued:---GG", "tamed:--YGG", "moved:Y--GG"]);
        let constraints = Constraints::from_guesses(&list);

        assert_eq!(
            constraints.excluded(0),
            [letter('c'), letter('t')].into_iter().collect()
        );
        assert_eq!(
            constraints.excluded(1),
            [letter('l'), letter('a'), letter('o')].into_iter().collect()
        );
        assert_eq!(
            constraints.excluded(2),
            [letter('u'), letter('v')].into_iter().collect()
        );
        assert_eq!(constraints.elsewhere(0), [letter('m')].into_iter().collect());
        assert_eq!(constraints.elsewhere(2), [letter('m')].into_iter().collect());
        assert_eq!(constraints.exact(3), Some(letter('e')));
        assert_eq!(constraints.exact(4), Some(letter('d')));
        assert_eq!(constraints.required(), [letter('m')].into_iter().collect());
    }

    #[test]
    fn accumulation_is_order_independent_without_green_conflicts() {
        let list = guesses(&["clued:---GG", "tamed:--YGG", "moved:Y--GG"]);
        let reversed: Vec<Guess> = list.iter().rev().cloned().collect();

        assert_eq!(
            Constraints::from_guesses(&list),
            Constraints::from_guesses(&reversed)
        );
    }

    #[test]
    fn conflicting_greens_last_wins() {
        let list = guesses(&["crane:G----", "slate:G----"]);
        let constraints = Constraints::from_guesses(&list);
        assert_eq!(constraints.exact(0), Some(letter('s')));

        let reversed = guesses(&["slate:G----", "crane:G----"]);
        assert_eq!(
            Constraints::from_guesses(&reversed).exact(0),
            Some(letter('c'))
        );
    }

    #[test]
    fn matches_checks_positions_and_presence() {
        let list = guesses(&["crane:-Y--G"]);
        let constraints = Constraints::from_guesses(&list);

        // r required somewhere but not at 1; e fixed at 4; c, a, n banned at 0, 2, 3
        for word in ["rouge", "rogue", "there", "rouse"] {
            assert!(constraints.matches(&Word::new(word).unwrap()), "{word}");
        }
        for word in ["bride", "crane", "stole", "outer"] {
            assert!(!constraints.matches(&Word::new(word).unwrap()), "{word}");
        }
    }

    #[test]
    fn display_summarizes_positions() {
        let list = guesses(&["tamed:--YGG"]);
        let text = Constraints::from_guesses(&list).to_string();
        assert_eq!(
            text,
            "0:=? !{t} | 1:=? !{a} | 2:=? ~{m} | 3:=e | 4:=d"
        );
    }
}
