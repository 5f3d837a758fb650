//! Hangman - CLI
//!
//! Word-guessing game with TUI and console modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use hangman::{
    commands::{SessionStats, run_simple, run_simulate},
    core::{DEFAULT_MAX_ATTEMPTS, GameConfig},
    output::{ConsoleView, print_simulation_result},
    wordlists::Catalog,
};
use std::io;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Incorrect guesses allowed per round
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: u32,

    /// Wordlist: 'embedded' (default, 15 words) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible word picks
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (line-by-line prompts, no TUI)
    Simple,

    /// Play many rounds with a random-letter guesser and report outcomes
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },

    /// List the words in the active catalog
    Words,
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

/// Load the catalog selected by the -w flag
fn load_catalog(wordlist: &str, seed: Option<u64>) -> Result<Catalog> {
    let catalog = match wordlist {
        "embedded" => Catalog::embedded(),
        path => Catalog::from_file(path).with_context(|| format!("Cannot load wordlist {path}"))?,
    };

    Ok(match seed {
        Some(seed) => catalog.with_seed(seed),
        None => catalog,
    })
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.attempts);
    config.validate()?;
    let catalog = load_catalog(&cli.wordlist, cli.seed)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(catalog, config),
        Commands::Simple => run_simple_command(catalog, &config),
        Commands::Simulate { count } => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            run_simulate_command(&catalog, &config, count, seed)
        }
        Commands::Words => {
            run_words_command(&catalog);
            Ok(())
        }
    }
}

fn run_play_command(catalog: Catalog, config: GameConfig) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(catalog, config)?;
    let stats = run_tui(app)?;
    print_session_summary(&stats);
    Ok(())
}

fn run_simple_command(mut catalog: Catalog, config: &GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Hangman - Console Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the word one letter at a time.");
    println!(
        "You may miss {} times before the gallows is complete.",
        config.max_attempts
    );

    let mut view = ConsoleView::stdio();
    let stats = run_simple(&mut catalog, &mut view, config)?;
    print_session_summary(&stats);
    Ok(())
}

fn run_simulate_command(
    catalog: &Catalog,
    config: &GameConfig,
    count: usize,
    seed: u64,
) -> Result<()> {
    println!(
        "Simulating {count} rounds with {} attempts (seed {seed})...",
        config.max_attempts
    );
    let result = run_simulate(catalog.words(), config, count, seed, true)?;
    print_simulation_result(&result);
    Ok(())
}

fn run_words_command(catalog: &Catalog) {
    println!("{} words:", catalog.len().to_string().bright_cyan().bold());
    for word in catalog.words() {
        println!("  • {word}");
    }
}

fn print_session_summary(stats: &SessionStats) {
    if stats.rounds_played == 0 {
        println!("\n👋 Thanks for playing!\n");
        return;
    }
    println!(
        "\n👋 Thanks for playing! Won {} of {} rounds ({:.0}%)\n",
        stats.rounds_won.to_string().bright_green().bold(),
        stats.rounds_played,
        stats.win_rate()
    );
}
