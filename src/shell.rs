//! Application shell: owns the redraw decision and the Running/Terminated state.
//!
//! The shell never touches the terminal itself. `main` feeds it events and asks
//! it for frames; the shell pulls a fresh snapshot from its [`BoardSource`] for
//! every frame and runs the pure layout and compose passes.

use tracing::{info, warn};

use crate::core::{BoardSource, LayoutError};
use crate::term::{BoardLayout, BoardView, FrameBuffer, LayoutTree, Viewport};
use crate::types::ShellEvent;

/// Lifecycle of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Terminated,
}

#[derive(Debug)]
pub struct Shell<S> {
    source: S,
    layout: BoardLayout,
    view: BoardView,
    state: ShellState,
    viewport: Viewport,
    drawn: Option<(u64, Viewport)>,
}

impl<S: BoardSource> Shell<S> {
    pub fn new(source: S, layout: BoardLayout, viewport: Viewport) -> Self {
        Self {
            source,
            layout,
            view: BoardView::default(),
            state: ShellState::Running,
            viewport,
            drawn: None,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ShellState::Running
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Apply one event. Events after termination are ignored.
    pub fn handle(&mut self, event: ShellEvent) -> ShellState {
        if self.state == ShellState::Terminated {
            return self.state;
        }
        match event {
            ShellEvent::Quit => {
                info!("quit requested");
                self.state = ShellState::Terminated;
            }
            ShellEvent::Resize(width, height) => {
                self.viewport = Viewport::new(width, height);
            }
        }
        self.state
    }

    /// True when running and the board revision or viewport changed since the last frame.
    pub fn needs_redraw(&self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.drawn != Some((self.source.revision(), self.viewport))
    }

    /// Lay out the current board without composing it.
    pub fn layout(&self) -> Result<LayoutTree, LayoutError> {
        self.layout.layout(&self.source.snapshot())
    }

    /// Produce the next frame into `fb`.
    ///
    /// Returns `Ok(false)` without touching `fb` once terminated.
    ///
    /// Content overflow under [`OverflowPolicy::Reject`] is drawn as a message
    /// in place of the board; the shell keeps running.
    ///
    /// # Errors
    ///
    /// Contract violations abort the pass; `fb` is left as it was.
    ///
    /// [`OverflowPolicy::Reject`]: crate::term::OverflowPolicy::Reject
    pub fn frame(&mut self, fb: &mut FrameBuffer) -> Result<bool, LayoutError> {
        if !self.is_running() {
            return Ok(false);
        }
        let revision = self.source.revision();
        match self.layout() {
            Ok(tree) => self.view.render_into(&tree, self.viewport, fb),
            Err(err) if !err.is_contract_violation() => {
                warn!(error = %err, "board not drawn");
                self.view.render_error_into(&err.to_string(), self.viewport, fb);
            }
            Err(err) => return Err(err),
        }
        self.drawn = Some((revision, self.viewport));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardSnapshot, StaticBoard};
    use crate::term::{LayoutOptions, OverflowPolicy};
    use crate::types::Cell;
    use std::cell::Cell as StdCell;

    struct Counting {
        board: BoardSnapshot,
        revision: StdCell<u64>,
    }

    impl BoardSource for Counting {
        fn snapshot(&self) -> BoardSnapshot {
            self.board.clone()
        }

        fn revision(&self) -> u64 {
            self.revision.get()
        }
    }

    fn shell() -> Shell<StaticBoard> {
        let board = BoardSnapshot::parse("ABCD").unwrap();
        Shell::new(StaticBoard::new(board), BoardLayout::default(), Viewport::new(12, 10))
    }

    #[test]
    fn quit_terminates_and_stops_redraws() {
        let mut shell = shell();
        assert_eq!(shell.state(), ShellState::Running);
        assert!(shell.needs_redraw());

        assert_eq!(shell.handle(ShellEvent::Quit), ShellState::Terminated);
        assert!(!shell.needs_redraw());

        let mut fb = FrameBuffer::new(1, 1);
        assert_eq!(shell.frame(&mut fb), Ok(false));
        assert_eq!(fb.width(), 1);

        // Nothing brings it back.
        assert_eq!(shell.handle(ShellEvent::Resize(80, 24)), ShellState::Terminated);
        assert_eq!(shell.viewport(), Viewport::new(12, 10));
    }

    #[test]
    fn redraw_only_after_change() {
        let mut shell = shell();
        let mut fb = FrameBuffer::new(1, 1);
        assert_eq!(shell.frame(&mut fb), Ok(true));
        assert!(!shell.needs_redraw());

        shell.handle(ShellEvent::Resize(40, 20));
        assert!(shell.needs_redraw());
        shell.frame(&mut fb).unwrap();
        assert_eq!((fb.width(), fb.height()), (40, 20));
        assert!(!shell.needs_redraw());
    }

    #[test]
    fn overflow_is_shown_and_shell_keeps_running() {
        let board = BoardSnapshot::new(vec![Cell::Score(100)], 1).unwrap();
        let layout = BoardLayout::new(LayoutOptions::default().with_overflow(OverflowPolicy::Reject));
        let mut shell = Shell::new(StaticBoard::new(board), layout, Viewport::new(60, 4));
        let mut fb = FrameBuffer::new(1, 1);

        assert_eq!(shell.frame(&mut fb), Ok(true));
        assert_eq!(shell.state(), ShellState::Running);
        assert!(!shell.needs_redraw());
        assert!(fb.row_text(0).contains("\"100\""));
    }

    #[test]
    fn board_revision_triggers_redraw() {
        let source = Counting {
            board: BoardSnapshot::standard(),
            revision: StdCell::new(0),
        };
        let mut shell = Shell::new(&source, BoardLayout::default(), Viewport::new(80, 50));
        let mut fb = FrameBuffer::new(1, 1);
        shell.frame(&mut fb).unwrap();
        assert!(!shell.needs_redraw());

        source.revision.set(1);
        assert!(shell.needs_redraw());
    }
}
