//! Words TUI (workspace facade crate).
//!
//! This package exposes `words_tui::{core,input,term,types}` from the crates
//! under `crates/`, plus the application shell that ties them together.

pub mod config;
pub mod logging;
pub mod shell;

pub use words_tui_core as core;
pub use words_tui_input as input;
pub use words_tui_term as term;
pub use words_tui_types as types;

pub use config::ShellConfig;
pub use shell::{Shell, ShellState};
