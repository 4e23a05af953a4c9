//! TUI rendering with ratatui
//!
//! Guess rows are drawn as colored letter boxes; candidates fill the panel to
//! the right.

use super::app::{App, MessageStyle};
use crate::core::{Color as Feedback, Guess, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Guesses and messages
            Constraint::Percentage(55), // Candidates
        ])
        .split(chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(8)])
        .split(main_chunks[0]);

    render_guesses(f, app, left_chunks[0]);
    render_messages(f, app, left_chunks[1]);
    render_candidates(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔎 WORDLE SIEVE - Guess Editor")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(feedback: Feedback) -> Style {
    match feedback {
        Feedback::Green => Style::default().fg(Color::Black).bg(Color::Green),
        Feedback::Yellow => Style::default().fg(Color::Black).bg(Color::Yellow),
        Feedback::Blank => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn guess_line(guess: &Guess, active_slot: Option<usize>, unknown: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2 + 1);
    for slot in 0..WORD_LENGTH {
        let letter = guess
            .letter_at(slot)
            .map_or(' ', |l| l.to_char().to_ascii_uppercase());

        let mut style = tile_style(guess.color_at(slot)).add_modifier(Modifier::BOLD);
        if active_slot == Some(slot) {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
        }

        spans.push(Span::styled(format!(" {letter} "), style));
        spans.push(Span::raw(" "));
    }

    if unknown {
        spans.push(Span::styled(
            " not in list",
            Style::default().fg(Color::Red),
        ));
    }

    Line::from(spans)
}

fn render_guesses(f: &mut Frame, app: &App, area: Rect) {
    let unknown = app.unknown_rows();

    let mut lines = Vec::with_capacity(app.guesses.len() * 2);
    for (row, guess) in app.guesses.iter().enumerate() {
        let active = row == app.cursor.row;
        let marker = if active { "▶ " } else { "  " };

        let mut line = guess_line(
            guess,
            active.then_some(app.cursor.slot),
            unknown.contains(&row),
        );
        line.spans.insert(0, Span::raw(marker));
        lines.push(line);
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.truncated {
        format!(" Candidates (first {}) ", app.candidates.len())
    } else {
        format!(" Candidates ({}) ", app.candidates.len())
    };

    let content = if app.candidates.is_empty() && app.truncated {
        Line::from(Span::styled(
            "Words match, but the display limit is 0.",
            Style::default().fg(Color::Yellow),
        ))
    } else if app.candidates.is_empty() {
        Line::from(Span::styled(
            "No words match. Check the colors for contradictions.",
            Style::default().fg(Color::Red),
        ))
    } else {
        let text = app
            .candidates
            .iter()
            .map(|w| w.to_string().to_uppercase())
            .collect::<Vec<_>>()
            .join("  ");
        Line::from(text)
    };

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let filled = app.guesses.iter().filter(|g| g.is_filled()).count();
    let status = Paragraph::new(format!(
        "Rows used: {filled}/{} | Words: {}",
        app.guesses.len(),
        app.dictionary.len()
    ))
    .alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let help = Paragraph::new(
        "Esc: Quit | ←↑↓→: Move | Space/-/=: Gray/Yellow/Green | Del: Clear row",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn guess_line_shows_letters_and_flag() {
        let guess: Guess = "crane:GY---".parse().unwrap();
        let line = guess_line(&guess, Some(0), true);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(text.starts_with(" C   R   A   N   E "), "{text}");
        assert!(text.ends_with("not in list"), "{text}");
        assert_eq!(line.spans[0].style.bg, Some(Color::Green));
        assert_eq!(line.spans[2].style.bg, Some(Color::Yellow));
        assert!(line.spans[0].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn screen_lists_candidates() {
        let dict = Dictionary::parse("crane\nslate\n").unwrap();
        let app = App::new(&dict, 3, 50);
        let text = screen_text(&app);

        assert!(text.contains("CRANE  SLATE"), "{text}");
        assert!(text.contains("Candidates (2)"), "{text}");
    }

    #[test]
    fn screen_reports_no_matches() {
        let dict = Dictionary::parse("crane\n").unwrap();
        let mut app = App::new(&dict, 1, 50);
        app.guesses[0] = "crane:-----".parse().unwrap();
        app.refresh();

        let text = screen_text(&app);
        assert!(text.contains("No words match"), "{text}");
    }

    #[test]
    fn screen_with_zero_limit_is_not_a_contradiction() {
        let dict = Dictionary::parse("crane\nslate\n").unwrap();
        let app = App::new(&dict, 1, 0);

        let text = screen_text(&app);
        assert!(!text.contains("No words match"), "{text}");
        assert!(text.contains("display limit is 0"), "{text}");
        assert!(text.contains("Candidates (first 0)"), "{text}");
    }
}
