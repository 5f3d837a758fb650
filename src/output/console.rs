//! Console implementation of the presentation boundary

use super::View;
use super::formatters::{attempts_bar, gallows, letter_list, spaced};
use crate::core::{GameSnapshot, GuessOutcome, Status};
use colored::Colorize;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-oriented text view over any reader/writer pair
pub struct ConsoleView<R, W> {
    input: R,
    output: W,
}

impl ConsoleView<StdinLock<'static>, Stdout> {
    /// View bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> View for ConsoleView<R, W> {
    fn render(&mut self, snapshot: &GameSnapshot) -> io::Result<()> {
        writeln!(self.output)?;
        for line in gallows(snapshot.mistakes(), snapshot.max_attempts) {
            writeln!(self.output, "  {line}")?;
        }
        writeln!(self.output)?;
        writeln!(
            self.output,
            "  Word:     {}",
            spaced(&snapshot.masked).bright_white().bold()
        )?;
        writeln!(
            self.output,
            "  Attempts: [{}] {}/{}",
            attempts_bar(snapshot.remaining_attempts, snapshot.max_attempts, 12).cyan(),
            snapshot.remaining_attempts,
            snapshot.max_attempts
        )?;
        if !snapshot.wrong.is_empty() {
            writeln!(
                self.output,
                "  Misses:   {}",
                letter_list(&snapshot.wrong).red()
            )?;
        }
        writeln!(self.output)
    }

    fn report(&mut self, outcome: GuessOutcome) -> io::Result<()> {
        let message = outcome.to_string();
        let styled = match outcome {
            GuessOutcome::Accepted { correct: true, .. } => format!("✓ {message}").green(),
            GuessOutcome::Accepted { correct: false, .. } => format!("✗ {message}").red(),
            GuessOutcome::Ignored(_) => format!("• {message}").yellow(),
        };
        writeln!(self.output, "{styled}")
    }

    fn prompt_letter(&mut self) -> io::Result<Option<String>> {
        match self.read_line("Guess a letter ('quit' to exit)")? {
            Some(line) if matches!(line.to_lowercase().as_str(), "quit" | "exit") => Ok(None),
            other => Ok(other),
        }
    }

    fn finish(&mut self, snapshot: &GameSnapshot, secret: &str) -> io::Result<()> {
        writeln!(self.output, "{}", "═".repeat(50).bright_cyan())?;
        match snapshot.status {
            Status::Won => {
                writeln!(
                    self.output,
                    "{}",
                    "  🎉 You found the word! 🎉".bright_green().bold()
                )?;
                writeln!(
                    self.output,
                    "  {} with {} mistake(s)",
                    secret.bright_white().bold(),
                    snapshot.mistakes()
                )?;
            }
            Status::Lost => {
                for line in gallows(snapshot.mistakes(), snapshot.max_attempts) {
                    writeln!(self.output, "  {line}")?;
                }
                writeln!(self.output, "{}", "  💀 Out of attempts!".red().bold())?;
                writeln!(
                    self.output,
                    "  The word was {}",
                    secret.bright_white().bold()
                )?;
            }
            Status::Playing => {
                writeln!(
                    self.output,
                    "  Round abandoned. The word was {}",
                    secret.bright_white().bold()
                )?;
            }
        }
        writeln!(self.output, "{}", "═".repeat(50).bright_cyan())
    }

    fn confirm_new_round(&mut self) -> io::Result<bool> {
        Ok(self
            .read_line("Play again? (yes/no)")?
            .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "yes" | "y")))
    }
}
