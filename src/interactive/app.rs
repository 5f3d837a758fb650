//! TUI application state and logic

use crate::commands::SessionStats;
use crate::core::{Game, GameConfig, GameEvent, GuessOutcome, IgnoreReason, Status};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

const MAX_MESSAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Message log shared with the engine observer
pub type MessageLog = Rc<RefCell<Vec<Message>>>;

/// Application state
pub struct App<S> {
    pub source: S,
    pub config: GameConfig,
    pub game: Game,
    pub messages: MessageLog,
    pub stats: SessionStats,
    pub should_quit: bool,
}

impl<S: WordSource> App<S> {
    /// Create the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if the word source cannot supply a valid word.
    pub fn new(mut source: S, config: GameConfig) -> Result<Self> {
        let messages: MessageLog = Rc::default();
        let game = start_round(&mut source, &config, &messages)?;

        push_message(
            &messages,
            "Welcome! Type letters to guess the word.",
            MessageStyle::Info,
        );

        Ok(Self {
            source,
            config,
            game,
            messages,
            stats: SessionStats::default(),
            should_quit: false,
        })
    }

    /// Replace the current round with a fresh one
    ///
    /// # Errors
    ///
    /// Returns an error if the word source cannot supply a valid word.
    pub fn new_round(&mut self) -> Result<()> {
        self.messages.borrow_mut().clear();
        self.game = start_round(&mut self.source, &self.config, &self.messages)?;
        self.add_message("New round started!", MessageStyle::Info);
        Ok(())
    }

    /// Forward a letter to the engine and record finished rounds
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let was_over = self.game.is_over();
        let outcome = self.game.guess_char(letter);
        if !was_over && self.game.is_over() {
            self.stats.record(self.game.status());
        }
        outcome
    }

    /// Apply a key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new round cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter if self.game.is_over() => self.new_round()?,
            KeyCode::Char(c) => {
                self.guess(c);
            }
            _ => {}
        }
        Ok(())
    }
}

impl<S> App<S> {
    pub fn add_message(&self, text: &str, style: MessageStyle) {
        push_message(&self.messages, text, style);
    }

    /// Copy of the current message log, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.messages.borrow().clone()
    }
}

fn start_round<S: WordSource + ?Sized>(
    source: &mut S,
    config: &GameConfig,
    messages: &MessageLog,
) -> Result<Game> {
    let word = source
        .next_word()
        .context("No word available for a new round")?;
    let mut game = Game::with_config(&word, config)
        .with_context(|| format!("Cannot start a round with {word:?}"))?;

    let log = Rc::clone(messages);
    game.subscribe(move |event: &GameEvent<'_>| announce(&log, event));
    Ok(game)
}

/// Engine observer: turn each guess outcome into a log line
fn announce(messages: &RefCell<Vec<Message>>, event: &GameEvent<'_>) {
    let style = match event.outcome {
        GuessOutcome::Accepted { correct: true, .. } => MessageStyle::Success,
        GuessOutcome::Accepted { correct: false, .. } => MessageStyle::Error,
        GuessOutcome::Ignored(_) => MessageStyle::Info,
    };
    push_message(messages, &event.outcome.to_string(), style);

    match (event.outcome, event.snapshot.status) {
        (GuessOutcome::Ignored(IgnoreReason::GameOver), _) | (_, Status::Playing) => {}
        (_, Status::Won) => push_message(
            messages,
            "🎉 You found the word! Enter for a new round, Esc to quit.",
            MessageStyle::Success,
        ),
        (_, Status::Lost) => push_message(
            messages,
            "💀 Out of attempts! Enter for a new round, Esc to quit.",
            MessageStyle::Error,
        ),
    }
}

fn push_message(messages: &RefCell<Vec<Message>>, text: &str, style: MessageStyle) {
    let mut messages = messages.borrow_mut();
    messages.push(Message {
        text: text.to_string(),
        style,
    });

    // Keep only the most recent messages
    if messages.len() > MAX_MESSAGES {
        messages.remove(0);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(app: App<S>) -> Result<SessionStats> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<SessionStats> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
