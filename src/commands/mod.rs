//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{RoundEnd, SessionStats, play_round, run_simple};
pub use simulate::{RoundResult, SimulationResult, run_simulate, simulate_round};
