//! Candidate search
//!
//! Guesses are turned into [`Constraints`], and the dictionary is streamed
//! through them by the lazy [`Candidates`] iterator.

mod constraints;
mod engine;

pub use constraints::Constraints;
pub use engine::{Candidates, search, search_guesses};

/// How many candidates the CLI and TUI show by default
pub const DEFAULT_DISPLAY_LIMIT: usize = 50;
