//! Simulation command
//!
//! Plays many rounds with a guesser that tries letters in random order.

use crate::core::{Game, GameConfig, Status};
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::{IndexedRandom, SliceRandom};
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Result from a single simulated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub word: String,
    pub status: Status,
    pub guesses: usize,
    pub mistakes: u32,
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub rounds: usize,
    pub won: usize,
    pub lost: usize,
    /// Rounds the guesser could not finish (secret uses letters outside A-Z)
    pub unfinished: usize,
    pub average_guesses: f64,
    /// Mistake count of won rounds
    pub mistake_distribution: BTreeMap<u32, usize>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.won as f64 / self.rounds as f64 * 100.0
        }
    }
}

/// Play one round, guessing shuffled A-Z letters until the round ends
///
/// # Errors
///
/// Returns an error if the word cannot start a round.
pub fn simulate_round(word: &str, config: &GameConfig, rng: &mut StdRng) -> Result<RoundResult> {
    let mut game = Game::with_config(word, config)?;
    let mut letters = ALPHABET;
    letters.shuffle(rng);

    for letter in letters {
        if game.is_over() {
            break;
        }
        game.guess_char(letter);
    }

    Ok(RoundResult {
        word: game.secret().to_string(),
        status: game.status(),
        guesses: game.guess_order().len(),
        mistakes: game.mistakes(),
    })
}

/// Run `rounds` independent rounds in parallel
///
/// Each round gets its own engine and an RNG derived from `seed`, so results
/// are reproducible for a given seed.
///
/// # Errors
///
/// Returns an error if `words` is empty or a word cannot start a round.
pub fn run_simulate(
    words: &[String],
    config: &GameConfig,
    rounds: usize,
    seed: u64,
    show_progress: bool,
) -> Result<SimulationResult> {
    if words.is_empty() {
        bail!("Cannot simulate with an empty word list");
    }

    let pb = if show_progress {
        let pb = ProgressBar::new(rounds as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let results: Vec<RoundResult> = (0..rounds)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let word = words
                .choose(&mut rng)
                .map_or("", String::as_str)
                .to_string();
            let result = simulate_round(&word, config, &mut rng);
            pb.inc(1);
            result
        })
        .collect::<Result<_>>()?;

    pb.finish_and_clear();

    Ok(summarize(&results, start.elapsed()))
}

fn summarize(results: &[RoundResult], duration: Duration) -> SimulationResult {
    let mut mistake_distribution = BTreeMap::new();
    let mut won = 0;
    let mut lost = 0;
    let mut unfinished = 0;

    for result in results {
        match result.status {
            Status::Won => {
                won += 1;
                *mistake_distribution.entry(result.mistakes).or_insert(0) += 1;
            }
            Status::Lost => lost += 1,
            Status::Playing => unfinished += 1,
        }
    }

    let total_guesses: usize = results.iter().map(|r| r.guesses).sum();
    let average_guesses = if results.is_empty() {
        0.0
    } else {
        total_guesses as f64 / results.len() as f64
    };

    SimulationResult {
        rounds: results.len(),
        won,
        lost,
        unfinished,
        average_guesses,
        mistake_distribution,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::WORDS;

    #[test]
    fn simulated_round_always_ends_for_ascii_words() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = simulate_round("casas", &GameConfig::default(), &mut rng).unwrap();
        assert!(result.status.is_terminal());
        assert!(result.mistakes <= 6);
        assert_eq!(result.word, "CASAS");
    }

    #[test]
    fn generous_budget_always_wins() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = simulate_round("livro", &GameConfig::new(26), &mut rng).unwrap();
        assert_eq!(result.status, Status::Won);
    }

    #[test]
    fn non_ascii_word_is_unfinished() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = simulate_round("ç", &GameConfig::new(30), &mut rng).unwrap();
        assert_eq!(result.status, Status::Playing);
        assert_eq!(result.guesses, 26);
    }

    #[test]
    fn simulation_counts_add_up() {
        let words = words_from_slice(WORDS);
        let result = run_simulate(&words, &GameConfig::default(), 40, 9, false).unwrap();

        assert_eq!(result.rounds, 40);
        assert_eq!(result.won + result.lost + result.unfinished, 40);
        assert_eq!(result.unfinished, 0);
        let distribution_sum: usize = result.mistake_distribution.values().sum();
        assert_eq!(distribution_sum, result.won);
        assert!(result.mistake_distribution.keys().all(|&m| m < 6));
    }

    #[test]
    fn simulation_is_reproducible() {
        let words = words_from_slice(WORDS);
        let a = run_simulate(&words, &GameConfig::default(), 20, 11, false).unwrap();
        let b = run_simulate(&words, &GameConfig::default(), 20, 11, false).unwrap();
        assert_eq!(a.won, b.won);
        assert_eq!(a.mistake_distribution, b.mistake_distribution);
    }

    #[test]
    fn simulation_rejects_empty_word_list() {
        assert!(run_simulate(&[], &GameConfig::default(), 5, 0, false).is_err());
    }
}
