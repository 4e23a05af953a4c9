//! Wordle Sieve
//!
//! Filters a dictionary of 5-letter words down to the candidates consistent
//! with the feedback from your guesses so far.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sieve::core::Guess;
//! use wordle_sieve::dictionary::Dictionary;
//! use wordle_sieve::search::search_guesses;
//!
//! let dict = Dictionary::parse("crane\nslate\nirate\n").unwrap();
//! let guesses: Vec<Guess> = vec!["crate:-GGGG".parse().unwrap()];
//!
//! let candidates: Vec<String> = search_guesses(&dict, &guesses)
//!     .take(50)
//!     .map(|w| w.to_string())
//!     .collect();
//! assert_eq!(candidates, ["irate"]);
//! ```

// Core domain types
pub mod core;

// Word list loading
pub mod dictionary;

// Constraint derivation and filtering
pub mod search;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI editor
pub mod interactive;
