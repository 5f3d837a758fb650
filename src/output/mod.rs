//! Terminal output
//!
//! The [`View`] presentation boundary, its console implementation, and
//! display utilities for command results.

pub mod console;
pub mod display;
pub mod formatters;
mod view;

pub use console::ConsoleView;
pub use display::print_simulation_result;
pub use view::View;
