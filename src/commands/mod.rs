//! Command implementations

pub mod search;
pub mod validate;

pub use search::{SearchConfig, SearchResult, run_search};
pub use validate::{ValidationResult, validate_word_list};
