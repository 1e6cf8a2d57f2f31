//! Shell configuration from environment variables.
//!
//! - `WORDS_TUI_BOARD`: path to a text board file (default: the standard 15×15 board)
//! - `WORDS_TUI_OVERFLOW`: `truncate` | `reject` | `widen` (default: `truncate`)
//! - `WORDS_TUI_POLL_MS`: input poll timeout in milliseconds (default: 250)
//! - `WORDS_TUI_LOG`: log file path (default: no logging)
//! - `WORDS_TUI_LOG_LEVEL`: tracing filter directive (default: `info`)

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::warn;

use crate::core::BoardSnapshot;
use crate::term::{BoardLayout, LayoutOptions, OverflowPolicy};
use crate::types::DEFAULT_POLL_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub board_path: Option<PathBuf>,
    pub overflow: OverflowPolicy,
    pub poll_ms: u64,
    pub log_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            board_path: None,
            overflow: OverflowPolicy::default(),
            poll_ms: DEFAULT_POLL_MS,
            log_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl ShellConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Log file and filter from the environment.
    ///
    /// Read on its own so the subscriber can be installed before the rest of
    /// the configuration is parsed and its fallback warnings are emitted.
    pub fn log_settings_from_env() -> (Option<PathBuf>, String) {
        Self::log_settings(|key| std::env::var(key).ok())
    }

    pub fn log_settings(lookup: impl Fn(&str) -> Option<String>) -> (Option<PathBuf>, String) {
        let get = |key: &str| trimmed(lookup(key));
        (
            get("WORDS_TUI_LOG").map(PathBuf::from),
            get("WORDS_TUI_LOG_LEVEL").unwrap_or_else(|| Self::default().log_level),
        )
    }

    /// Create from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| trimmed(lookup(key));
        let defaults = Self::default();
        let (log_path, log_level) = Self::log_settings(&lookup);

        let overflow = match get("WORDS_TUI_OVERFLOW") {
            Some(v) => v.parse().unwrap_or_else(|err: String| {
                warn!(%err, "falling back to {}", defaults.overflow.as_str());
                defaults.overflow
            }),
            None => defaults.overflow,
        };

        let poll_ms = match get("WORDS_TUI_POLL_MS") {
            Some(v) => match v.parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    warn!(value = %v, "invalid WORDS_TUI_POLL_MS, using {}", defaults.poll_ms);
                    defaults.poll_ms
                }
            },
            None => defaults.poll_ms,
        };

        Self {
            board_path: get("WORDS_TUI_BOARD").map(PathBuf::from),
            overflow,
            poll_ms,
            log_path,
            log_level,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }

    pub fn layout(&self) -> BoardLayout {
        BoardLayout::new(LayoutOptions::default().with_overflow(self.overflow))
    }

    /// Load the configured board, or the standard board when none is set.
    ///
    /// # Errors
    ///
    /// An unreadable file or a file that does not hold a square board.
    pub fn load_board(&self) -> Result<BoardSnapshot> {
        let Some(path) = &self.board_path else {
            return Ok(BoardSnapshot::standard());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read board file {}", path.display()))?;
        BoardSnapshot::parse(&text)
            .with_context(|| format!("invalid board in {}", path.display()))
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    fn config_from(pairs: &[(&str, &str)]) -> ShellConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ShellConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), ShellConfig::default());
    }

    #[test]
    fn values_are_read_and_trimmed() {
        let config = config_from(&[
            ("WORDS_TUI_BOARD", " boards/small.txt "),
            ("WORDS_TUI_OVERFLOW", "Widen"),
            ("WORDS_TUI_POLL_MS", "50"),
            ("WORDS_TUI_LOG", "/tmp/words.log"),
            ("WORDS_TUI_LOG_LEVEL", "debug"),
        ]);
        assert_eq!(config.board_path, Some(PathBuf::from("boards/small.txt")));
        assert_eq!(config.overflow, OverflowPolicy::Widen);
        assert_eq!(config.poll_interval(), Duration::from_millis(50));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/words.log")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            ("WORDS_TUI_OVERFLOW", "stretch"),
            ("WORDS_TUI_POLL_MS", "0"),
            ("WORDS_TUI_LOG", "   "),
        ]);
        assert_eq!(config.overflow, OverflowPolicy::Truncate);
        assert_eq!(config.poll_ms, DEFAULT_POLL_MS);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn log_settings_match_full_config() {
        let pairs = [("WORDS_TUI_LOG", " /tmp/w.log "), ("WORDS_TUI_POLL_MS", "abc")];
        let lookup = |k: &str| pairs.iter().find(|(key, _)| *key == k).map(|(_, v)| v.to_string());
        let (path, level) = ShellConfig::log_settings(lookup);
        let config = ShellConfig::from_lookup(lookup);
        assert_eq!(path, config.log_path);
        assert_eq!(level, config.log_level);
        assert_eq!(level, "info");
    }

    #[test]
    fn fallback_warning_reaches_installed_subscriber() {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let writer = {
            let sink = Arc::clone(&sink);
            move || SharedWriter(Arc::clone(&sink))
        };
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .finish();

        let config = tracing::subscriber::with_default(subscriber, || {
            config_from(&[("WORDS_TUI_POLL_MS", "abc")])
        });

        assert_eq!(config.poll_ms, DEFAULT_POLL_MS);
        let logged = String::from_utf8(sink.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("invalid WORDS_TUI_POLL_MS"));
    }

    struct SharedWriter(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for SharedWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn missing_board_file_is_an_error() {
        let config = ShellConfig {
            board_path: Some(PathBuf::from("/nonexistent/words-tui/board.txt")),
            ..ShellConfig::default()
        };
        let err = config.load_board().unwrap_err();
        assert!(err.to_string().contains("failed to read board file"));
    }

    #[test]
    fn board_file_is_parsed() {
        let path = std::env::temp_dir().join(format!("words-tui-board-{}.txt", std::process::id()));
        fs::write(&path, "AB\nCD\n").unwrap();
        let config = ShellConfig {
            board_path: Some(path.clone()),
            ..ShellConfig::default()
        };
        let board = config.load_board().unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(board.dimension(), 2);
    }

    #[test]
    fn no_board_path_loads_standard_board() {
        assert_eq!(ShellConfig::default().load_board().unwrap(), BoardSnapshot::standard());
    }
}
