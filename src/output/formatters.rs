//! Formatting utilities for terminal output

use crate::core::{Color, Guess, Word};
use colored::Colorize;

/// Format a guess's feedback as an emoji string
#[must_use]
pub fn guess_to_emoji(guess: &Guess) -> String {
    guess.colors().iter().map(|c| c.emoji()).collect()
}

/// Render a guess as colored letter tiles, e.g. ` C  R  A  N  E `
#[must_use]
pub fn guess_tiles(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .zip(guess.colors())
        .map(|(letter, &color)| {
            let text = format!(
                " {} ",
                letter.map_or('_', |l| l.to_char().to_ascii_uppercase())
            );
            match color {
                Color::Green => text.black().on_green().bold().to_string(),
                Color::Yellow => text.black().on_yellow().bold().to_string(),
                Color::Blank => text.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Lay words out in rows of `per_row`, uppercased and space separated
#[must_use]
pub fn word_columns(words: &[Word], per_row: usize) -> Vec<String> {
    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|w| w.to_string().to_uppercase())
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn emoji_for_mixed_feedback() {
        let guess: Guess = "tamed:--YGG".parse().unwrap();
        assert_eq!(guess_to_emoji(&guess), "⬜⬜🟨🟩🟩");
    }

    #[test]
    fn emoji_for_empty_guess() {
        assert_eq!(guess_to_emoji(&Guess::new()), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn tiles_contain_uppercase_letters() {
        colored::control::set_override(false);
        let guess: Guess = "crane:GY---".parse().unwrap();
        assert_eq!(guess_tiles(&guess), " C  R  A  N  E ");
        assert_eq!(guess_tiles(&Guess::new()), " _  _  _  _  _ ");
    }

    #[test]
    fn columns_wrap_rows() {
        let rows = word_columns(&words(&["crane", "slate", "irate"]), 2);
        assert_eq!(rows, vec!["CRANE  SLATE", "IRATE"]);
    }

    #[test]
    fn columns_of_nothing() {
        assert!(word_columns(&[], 8).is_empty());
    }
}
