//! Letters and letter sets
//!
//! A `Letter` is a lowercase ASCII byte in `b'a'..=b'z'`. Every constructor
//! validates, so a `Letter` in hand is always in range.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A single lowercase alphabetic letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// The first letter of the alphabet
    pub const A: Self = Self(b'a');

    /// Create a letter from a raw byte
    ///
    /// Only `b'a'..=b'z'` is accepted; uppercase bytes are rejected here; use
    /// [`Letter::from_char`] for case folding.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Letter;
    ///
    /// assert!(Letter::from_byte(b'q').is_some());
    /// assert!(Letter::from_byte(b'Q').is_none());
    /// assert!(Letter::from_byte(b'{').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_lowercase() {
            Some(Self(byte))
        } else {
            None
        }
    }

    /// Create a letter from a character, folding ASCII uppercase to lowercase
    #[inline]
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Self::from_byte(ch.to_ascii_lowercase() as u8)
        } else {
            None
        }
    }

    /// Create a letter from its alphabet index (0 = 'a')
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Self(b'a' + index as u8))
        } else {
            None
        }
    }

    /// The ASCII byte of this letter
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Position in the alphabet (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    /// The letter as a lowercase `char`
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = super::WordError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch).ok_or(super::WordError::InvalidCharacter(ch))
    }
}

/// A set of letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    #[inline]
    pub fn insert(&mut self, letter: Letter) {
        self.0 |= 1 << letter.index();
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        (0..ALPHABET_SIZE)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .filter_map(Letter::from_index)
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn letter_range_bounds() {
        assert_eq!(Letter::from_byte(b'a').unwrap().index(), 0);
        assert_eq!(Letter::from_byte(b'z').unwrap().index(), 25);
        assert!(Letter::from_byte(b'a' - 1).is_none());
        assert!(Letter::from_byte(b'z' + 1).is_none());
        assert!(Letter::from_byte(0).is_none());
    }

    #[test]
    fn letter_from_char_folds_case() {
        assert_eq!(letter('Q'), letter('q'));
        assert!(Letter::from_char('é').is_none());
        assert!(Letter::from_char('3').is_none());
        assert!(Letter::from_char(' ').is_none());
    }

    #[test]
    fn letter_try_from_reports_character() {
        let err = Letter::try_from('!').unwrap_err();
        assert_eq!(err, super::super::WordError::InvalidCharacter('!'));
    }

    #[test]
    fn letter_index_round_trip() {
        for i in 0..ALPHABET_SIZE {
            assert_eq!(Letter::from_index(i).unwrap().index(), i);
        }
        assert!(Letter::from_index(ALPHABET_SIZE).is_none());
    }

    #[test]
    fn set_insert_and_contains() {
        let mut set = LetterSet::new();
        assert!(set.is_empty());

        set.insert(letter('c'));
        set.insert(letter('c'));
        set.insert(letter('z'));

        assert!(set.contains(letter('c')));
        assert!(set.contains(letter('z')));
        assert!(!set.contains(letter('a')));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn set_subset() {
        let small: LetterSet = "ab".chars().map(letter).collect();
        let big: LetterSet = "abc".chars().map(letter).collect();

        assert!(small.is_subset(big));
        assert!(!big.is_subset(small));
        assert!(LetterSet::EMPTY.is_subset(small));
        assert_eq!(small.union(big), big);
    }

    #[test]
    fn set_display_is_alphabetical() {
        let set: LetterSet = "zca".chars().map(letter).collect();
        assert_eq!(set.to_string(), "{acz}");
        assert_eq!(set.iter().map(Letter::to_char).collect::<String>(), "acz");
    }
}
