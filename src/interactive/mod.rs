//! Interactive TUI interface
//!
//! Full-screen game built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use rendering::{cell_style, hint_style, phase_label, ui};
