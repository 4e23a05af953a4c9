//! Interactive guess editor
//!
//! Keyboard-driven TUI: type guesses, mark feedback colors, and watch the
//! candidate list update.

mod app;
mod rendering;

pub use app::{App, Cursor, DEFAULT_ROWS, Message, MessageStyle, run_tui};
