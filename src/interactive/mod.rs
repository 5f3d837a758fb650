//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageLog, MessageStyle, run_tui};
pub use rendering::ui;
