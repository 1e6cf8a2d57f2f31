//! Terminal board viewer (default binary).
//!
//! Shows the word-game board in the terminal and redraws it on resize or when
//! the board changes. Ctrl+C quits.

use anyhow::{Context, Result};
use crossterm::event;
use tracing::{error, info};

use words_tui::core::{BoardSource, StaticBoard};
use words_tui::input::map_event;
use words_tui::logging::init_file_logging;
use words_tui::term::{FrameBuffer, Screen, Viewport};
use words_tui::types::ShellEvent;
use words_tui::{Shell, ShellConfig};

fn main() -> Result<()> {
    // Logging first so configuration fallbacks are recorded.
    let (log_path, log_level) = ShellConfig::log_settings_from_env();
    if let Some(path) = &log_path {
        init_file_logging(path, &log_level)?;
    }
    let config = ShellConfig::from_env();

    // Board problems are reported before the terminal is taken over.
    let board = config.load_board()?;
    info!(
        dimension = board.dimension(),
        overflow = config.overflow.as_str(),
        "starting words-tui"
    );

    let mut screen = Screen::acquire().context("cannot start the board view")?;
    let result = run(&mut screen, &config, StaticBoard::new(board));

    // Restore the terminal before anything is printed to it.
    let released = screen.release();
    settle(result, released)
}

/// The run error wins over a release error; both are logged.
fn settle(result: Result<()>, released: Result<()>) -> Result<()> {
    if let Err(err) = &result {
        error!(error = %err, "board view stopped");
    }
    if let Err(err) = &released {
        error!(error = %err, "failed to restore terminal");
    }
    result?;
    released
}

fn run<S: BoardSource>(screen: &mut Screen, config: &ShellConfig, source: S) -> Result<()> {
    let (w, h) = screen.size();
    let mut shell = Shell::new(source, config.layout(), Viewport::new(w, h));
    let mut fb = FrameBuffer::new(w, h);
    let poll = config.poll_interval();

    while shell.is_running() {
        if shell.needs_redraw() {
            shell.frame(&mut fb).context("board layout failed")?;
            screen.draw(&mut fb)?;
        }

        if event::poll(poll)? {
            let ev = event::read()?;
            if let Some(shell_event) = map_event(&ev) {
                if matches!(shell_event, ShellEvent::Resize(..)) {
                    screen.invalidate();
                }
                shell.handle(shell_event);
            }
        }
    }

    info!("quit");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn run_error_is_kept_when_release_also_fails() {
        let err = settle(Err(anyhow!("layout")), Err(anyhow!("release"))).unwrap_err();
        assert_eq!(err.to_string(), "layout");
    }

    #[test]
    fn release_error_is_reported_after_clean_run() {
        let err = settle(Ok(()), Err(anyhow!("release"))).unwrap_err();
        assert_eq!(err.to_string(), "release");
        assert!(settle(Ok(()), Ok(())).is_ok());
    }
}
