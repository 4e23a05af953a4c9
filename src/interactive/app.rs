//! TUI application state and logic
//!
//! The editor owns the guess rows. Every edit re-runs the search from scratch
//! and keeps the first `limit` candidates for display.

use crate::core::{Color, Guess, Letter, WORD_LENGTH, Word};
use crate::dictionary::Dictionary;
use crate::search::search_guesses;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use unicode_normalization::UnicodeNormalization;

/// Number of guess rows when none is configured
pub const DEFAULT_ROWS: usize = 3;

/// Active row and slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub slot: usize,
}

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub guesses: Vec<Guess>,
    pub cursor: Cursor,
    pub limit: usize,
    pub candidates: Vec<Word>,
    pub truncated: bool,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, rows: usize, limit: usize) -> Self {
        let mut app = Self {
            dictionary,
            guesses: vec![Guess::new(); rows.max(1)],
            cursor: Cursor::default(),
            limit,
            candidates: Vec::new(),
            truncated: false,
            messages: vec![
                Message {
                    text: "Type your guesses; arrows move between boxes.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Space = gray, '-' = yellow, '=' = green".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Re-derive the candidate list from the current guesses
    pub fn refresh(&mut self) {
        let shown_before = self.candidates.len();
        let mut candidates = search_guesses(self.dictionary, &self.guesses);
        self.candidates = candidates.by_ref().take(self.limit).collect();
        self.truncated = candidates.next().is_some();
        debug!(
            "Refreshed: {} candidates shown, {} inspected",
            self.candidates.len(),
            candidates.inspected()
        );

        if let [only] = self.candidates.as_slice()
            && shown_before != 1
        {
            let text = format!("Only one candidate left: {}", only.to_string().to_uppercase());
            self.add_message(&text, MessageStyle::Success);
        }
    }

    /// Apply one key press; returns false if the key was ignored
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Up => self.move_row(-1),
            KeyCode::Down => self.move_row(1),
            KeyCode::Left => self.move_slot(-1),
            KeyCode::Right => self.move_slot(1),
            KeyCode::Delete => self.clear_row(),
            // Ctrl+Backspace arrives as Ctrl+H on many terminals
            KeyCode::Backspace | KeyCode::Char('h') if ctrl => self.clear_row(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(' ') => self.set_color(Color::Blank),
            KeyCode::Char('-') => self.set_color(Color::Yellow),
            KeyCode::Char('=') => self.set_color(Color::Green),
            KeyCode::Char(c) if !ctrl => match read_letter(c) {
                Some(letter) => self.type_letter(letter),
                None => return false,
            },
            _ => return false,
        }

        self.refresh();
        true
    }

    fn last_row(&self) -> usize {
        self.guesses.len() - 1
    }

    pub fn move_row(&mut self, offset: isize) {
        self.cursor.row = self
            .cursor
            .row
            .saturating_add_signed(offset)
            .min(self.last_row());
    }

    pub fn move_slot(&mut self, offset: isize) {
        self.cursor.slot = self
            .cursor
            .slot
            .saturating_add_signed(offset)
            .min(WORD_LENGTH - 1);
    }

    /// Clear every letter of the active row and return to its first slot
    pub fn clear_row(&mut self) {
        self.guesses[self.cursor.row].clear_letters();
        self.cursor.slot = 0;
    }

    /// Step back one slot (wrapping to the previous row) and clear it
    ///
    /// At the very last slot of the last row the cursor stays put, so the
    /// final letter can be erased in place.
    pub fn backspace(&mut self) {
        let at_end = self.cursor.row == self.last_row() && self.cursor.slot == WORD_LENGTH - 1;

        if !at_end {
            if self.cursor.slot > 0 {
                self.cursor.slot -= 1;
            } else if self.cursor.row > 0 {
                self.cursor.row -= 1;
                self.cursor.slot = WORD_LENGTH - 1;
            }
        }

        self.guesses[self.cursor.row].set_letter(self.cursor.slot, None);
    }

    pub fn set_color(&mut self, color: Color) {
        self.guesses[self.cursor.row].set_color(self.cursor.slot, color);
    }

    /// Write a letter into the active slot and advance the cursor
    ///
    /// A row that becomes filled moves the cursor to the start of the next
    /// row, unless it is the last row.
    pub fn type_letter(&mut self, letter: Letter) {
        let row = self.cursor.row;
        self.guesses[row].set_letter(self.cursor.slot, Some(letter));

        if let Some(word) = self.guesses[row].word()
            && !self.dictionary.contains(&word)
        {
            self.add_message(
                &format!("{} is not in the word list", word.to_string().to_uppercase()),
                MessageStyle::Error,
            );
        }

        if row < self.last_row() && self.guesses[row].is_filled() {
            self.cursor.row += 1;
            self.cursor.slot = 0;
        } else if self.cursor.slot != WORD_LENGTH - 1 {
            self.cursor.slot += 1;
        }
    }

    /// Filled rows whose word is missing from the dictionary
    #[must_use]
    pub fn unknown_rows(&self) -> Vec<usize> {
        self.guesses
            .iter()
            .enumerate()
            .filter_map(|(i, guess)| guess.word().map(|w| (i, w)))
            .filter(|(_, word)| !self.dictionary.contains(word))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// The letter a key types, with accents stripped (`é` types `e`)
///
/// Keys that do not compose to a single character are ignored.
fn read_letter(key: char) -> Option<Letter> {
    let key = key.to_string();
    if key.as_str().nfkc().count() != 1 {
        return None;
    }
    key.as_str().nfkd().find_map(Letter::from_char)
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
