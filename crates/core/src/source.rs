//! The seam between the game engine and the layout engine.

use crate::board::BoardSnapshot;

/// Anything that can hand out board snapshots.
///
/// `revision` must change whenever the board changes; the shell redraws when
/// it sees a revision it has not drawn yet.
pub trait BoardSource {
    fn snapshot(&self) -> BoardSnapshot;

    fn revision(&self) -> u64;
}

/// A board that never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticBoard {
    board: BoardSnapshot,
}

impl StaticBoard {
    pub fn new(board: BoardSnapshot) -> Self {
        Self { board }
    }
}

impl Default for StaticBoard {
    fn default() -> Self {
        Self::new(BoardSnapshot::standard())
    }
}

impl BoardSource for StaticBoard {
    fn snapshot(&self) -> BoardSnapshot {
        self.board.clone()
    }

    fn revision(&self) -> u64 {
        0
    }
}

impl<S: BoardSource + ?Sized> BoardSource for &S {
    fn snapshot(&self) -> BoardSnapshot {
        (**self).snapshot()
    }

    fn revision(&self) -> u64 {
        (**self).revision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_board_is_stable() {
        let source = StaticBoard::default();
        assert_eq!(source.revision(), 0);
        assert_eq!(source.snapshot(), source.snapshot());
        assert_eq!(source.snapshot().dimension(), 15);
    }
}
