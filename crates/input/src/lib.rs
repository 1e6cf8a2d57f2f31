//! Terminal input module (shell-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` events into [`crate::types::ShellEvent`]: Ctrl+C quits, and
//! resize events trigger a redraw.

pub mod map;

pub use words_tui_types as types;

pub use map::{map_event, should_quit};
