//! Per-letter feedback colors
//!
//! - Blank: letter not in the target word (at least not here)
//! - Yellow: letter in the word, wrong position
//! - Green: letter in the correct position

/// Feedback tag for one guess slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Blank,
    Yellow,
    Green,
}

impl Color {
    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/'.'/⬜ for blank
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '.' | '⬜' => Some(Self::Blank),
            _ => None,
        }
    }

    /// The ASCII symbol used in guess notation
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Blank => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Blank => '⬜',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_blank() {
        assert_eq!(Color::default(), Color::Blank);
    }

    #[test]
    fn symbols_parse_back() {
        for color in [Color::Blank, Color::Yellow, Color::Green] {
            assert_eq!(Color::from_symbol(color.symbol()), Some(color));
            assert_eq!(Color::from_symbol(color.emoji()), Some(color));
        }
    }

    #[test]
    fn symbol_aliases() {
        assert_eq!(Color::from_symbol('g'), Some(Color::Green));
        assert_eq!(Color::from_symbol('y'), Some(Color::Yellow));
        assert_eq!(Color::from_symbol('_'), Some(Color::Blank));
        assert_eq!(Color::from_symbol('.'), Some(Color::Blank));
        assert_eq!(Color::from_symbol('x'), None);
    }
}
