//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{GameSnapshot, Status};
use crate::output::formatters::{gallows, spaced};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<S>) {
    let snapshot = app.game.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Word and letters
        ])
        .split(chunks[1]);

    render_gallows(f, &snapshot, main_chunks[0]);
    render_board(f, app, &snapshot, main_chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, &snapshot, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 HANGMAN")
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

fn render_gallows(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let color = match snapshot.status {
        Status::Lost => Color::Red,
        Status::Won => Color::Green,
        Status::Playing => Color::White,
    };
    let lines: Vec<Line> = gallows(snapshot.mistakes(), snapshot.max_attempts)
        .iter()
        .map(|&line| Line::from(line))
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_board<S>(f: &mut Frame, app: &App<S>, snapshot: &GameSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(5),    // Letters
        ])
        .split(area);

    render_word(f, app, snapshot, chunks[0]);
    render_attempts(f, snapshot, chunks[1]);
    render_letters(f, app, chunks[2]);
}

fn render_word<S>(f: &mut Frame, app: &App<S>, snapshot: &GameSnapshot, area: Rect) {
    // Reveal the full secret once the round is over
    let (text, color) = match snapshot.status {
        Status::Playing => (spaced(&snapshot.masked), Color::Yellow),
        Status::Won => (spaced(app.game.secret()), Color::Green),
        Status::Lost => (spaced(app.game.secret()), Color::Red),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(paragraph, area);
}

fn render_attempts(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let remaining = u64::from(snapshot.remaining_attempts);
    let max_attempts = u64::from(snapshot.max_attempts);
    let percent = if max_attempts == 0 {
        0
    } else {
        (remaining * 100 / max_attempts).min(100) as u16
    };
    let color = if remaining * 3 <= max_attempts {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!(
            "{}/{} attempts left",
            snapshot.remaining_attempts, snapshot.max_attempts
        ));
    f.render_widget(gauge, area);
}

fn render_letters<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let guessed = app.game.guessed_letters();
    let secret = app.game.secret();

    let mut lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    let style = match (guessed.contains(&c), secret.contains(c)) {
                        (true, true) => Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                        (true, false) => Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                        (false, _) => Style::default().fg(Color::White),
                    };
                    Span::styled(format!(" {c} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    // Letters outside the keyboard layout (accented ones) still get listed
    let extra: String = app
        .game
        .guess_order()
        .iter()
        .filter(|c| !KEYBOARD_ROWS.iter().any(|row| row.contains(**c)))
        .map(|c| format!(" {c}"))
        .collect();
    if !extra.is_empty() {
        lines.push(Line::from(format!("Other:{extra}")));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages()
        .into_iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S>(f: &mut Frame, app: &App<S>, snapshot: &GameSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let status = Paragraph::new(format!("Status: {}", snapshot.status)).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let stats_text = format!(
        "Rounds: {} | Win Rate: {:.0}%",
        app.stats.rounds_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if snapshot.status.is_terminal() {
        "Enter: New Round | Esc: Quit"
    } else {
        "A-Z: Guess | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::wordlists::Catalog;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw<S>(app: &App<S>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_masked_word_and_attempts() {
        let mut app = App::new(Catalog::parse("mouse\n"), GameConfig::default()).unwrap();
        app.guess('m');
        app.guess('e');
        app.guess('z');

        let screen = draw(&app);
        assert!(screen.contains("M _ _ _ E"));
        assert!(screen.contains("5/6 attempts left"));
        assert!(screen.contains("Z is not in the word"));
        assert!(screen.contains("Status: playing"));
    }

    #[test]
    fn renders_huge_attempt_budget() {
        let mut app = App::new(Catalog::parse("mouse\n"), GameConfig::new(u32::MAX)).unwrap();
        app.guess('z');

        let screen = draw(&app);
        assert!(screen.contains(&format!("{}/{} attempts left", u32::MAX - 1, u32::MAX)));
    }

    #[test]
    fn reveals_secret_after_loss() {
        let mut app = App::new(Catalog::parse("livro\n"), GameConfig::new(1)).unwrap();
        app.guess('q');

        let screen = draw(&app);
        assert!(screen.contains("L I V R O"));
        assert!(screen.contains("Enter: New Round"));
        assert!(screen.contains("Rounds: 1"));
    }
}
