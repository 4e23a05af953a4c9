//! Embedded word list
//!
//! The default dictionary, compiled into the binary.

/// Default word list, one lowercase word per line
pub const EMBEDDED_WORD_LIST: &str = include_str!("../../data/words.txt");
