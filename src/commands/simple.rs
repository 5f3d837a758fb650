//! Simple interactive CLI mode
//!
//! Text-based game loop over any [`View`], without the TUI.

use crate::core::{Game, GameConfig, Status};
use crate::output::View;
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use tracing::info;

/// Rounds played during one session (in memory only)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

impl SessionStats {
    pub fn record(&mut self, status: Status) {
        if status.is_terminal() {
            self.rounds_played += 1;
        }
        if status == Status::Won {
            self.rounds_won += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

/// How a single round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Finished(Status),
    Quit,
}

/// Play one round to completion or until the player quits
///
/// # Errors
///
/// Returns an error if the view fails to read or write.
pub fn play_round<V: View + ?Sized>(game: &mut Game, view: &mut V) -> Result<RoundEnd> {
    view.render(&game.snapshot())?;

    while !game.is_over() {
        let Some(input) = view.prompt_letter()? else {
            view.finish(&game.snapshot(), game.secret())?;
            return Ok(RoundEnd::Quit);
        };

        let outcome = game.guess(&input);
        view.report(outcome)?;
        if outcome.is_accepted() {
            view.render(&game.snapshot())?;
        }
    }

    view.finish(&game.snapshot(), game.secret())?;
    Ok(RoundEnd::Finished(game.status()))
}

/// Run the simple interactive CLI mode
///
/// Draws a word for each round from `source` until the player declines
/// another round or quits.
///
/// # Errors
///
/// Returns an error if the word source cannot supply a valid word or the view
/// fails.
pub fn run_simple<S, V>(source: &mut S, view: &mut V, config: &GameConfig) -> Result<SessionStats>
where
    S: WordSource + ?Sized,
    V: View + ?Sized,
{
    let mut stats = SessionStats::default();

    loop {
        let word = source.next_word().context("No word available for a new round")?;
        let mut game = Game::with_config(&word, config)
            .with_context(|| format!("Cannot start a round with {word:?}"))?;

        match play_round(&mut game, view)? {
            RoundEnd::Quit => break,
            RoundEnd::Finished(status) => {
                stats.record(status);
                info!(%status, played = stats.rounds_played, "Round recorded");
                if !view.confirm_new_round()? {
                    break;
                }
            }
        }
    }

    Ok(stats)
}
