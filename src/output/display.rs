//! Display functions for command results

use super::formatters::{guess_tiles, guess_to_emoji, word_columns};
use crate::commands::{SearchResult, ValidationResult};
use colored::Colorize;

const WORDS_PER_ROW: usize = 8;

/// Print the result of a search
pub fn print_search_result(result: &SearchResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    if result.guesses.is_empty() {
        println!("No guesses given, listing the dictionary");
    }
    for (i, guess) in result.guesses.iter().enumerate() {
        println!(
            "Guess {}: {}  {}",
            i + 1,
            guess_tiles(guess),
            guess_to_emoji(guess)
        );
    }
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!("  Constraints: {}", result.constraints);
        println!(
            "  Inspected:   {} of {} words",
            result.inspected, result.dictionary_size
        );
    }

    if !has_matches(result) {
        println!(
            "\n{}",
            "❌ No candidates match. Check the feedback for contradictions."
                .red()
                .bold()
        );
        return;
    }

    println!();
    for row in word_columns(&result.candidates, WORDS_PER_ROW) {
        println!("  {}", row.bright_white());
    }

    println!();
    let count = result.candidates.len();
    if result.truncated {
        println!(
            "{}",
            format!("Showing the first {count} candidates (more available)").yellow()
        );
    } else {
        println!(
            "{}",
            format!(
                "✅ {count} {}",
                if count == 1 { "candidate" } else { "candidates" }
            )
            .green()
            .bold()
        );
    }
}

/// Whether anything matched, shown or not
fn has_matches(result: &SearchResult) -> bool {
    !result.candidates.is_empty() || result.truncated
}

/// Print the result of validating a word list
pub fn print_validation_result(result: &ValidationResult) {
    println!(
        "{} {}",
        "✅ Valid word list:".green().bold(),
        result.path.display()
    );
    println!("   Words:      {}", result.words);
    println!("   Distinct:   {}", result.distinct);
    if result.duplicates() > 0 {
        println!(
            "   Duplicates: {}",
            result.duplicates().to_string().yellow()
        );
    }
    println!("   Bytes:      {}", result.bytes);
}
