//! Interactive TUI interface
//!
//! Full-screen criteria editor with live results using ratatui.

mod app;
mod rendering;

pub use app::{App, Field, InputMode, Message, MessageStyle, run_tui};
