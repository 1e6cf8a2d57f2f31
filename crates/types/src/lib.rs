//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board model, layout, terminal rendering, input).
//!
//! # Tile Geometry
//!
//! Every tile is a bordered box of fixed size, measured in terminal cells:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_WIDTH` | 4 | Columns per tile, border included |
//! | `TILE_HEIGHT` | 3 | Rows per tile, border included |
//! | `TILE_BORDER` | 1 | Border thickness on each side |
//!
//! A tile at grid position `(row, column)` sits at
//! `(top, left) = (TILE_HEIGHT * row, TILE_WIDTH * column)`.
//!
//! # Board Symbols
//!
//! Boards can be written as text, one character per cell:
//!
//! | Symbol | Cell |
//! |--------|------|
//! | `.` | Empty |
//! | `2` | Double word |
//! | `3` | Triple word |
//! | `@` | Double letter |
//! | `#` | Triple letter |
//! | `+` | Start square |
//! | other | Letter |
//!
//! # Examples
//!
//! ```
//! use words_tui_types::{Cell, Premium, TILE_WIDTH, TILE_HEIGHT};
//!
//! assert_eq!(Cell::from_symbol('.'), Cell::Empty);
//! assert_eq!(Cell::from_symbol('3'), Cell::Premium(Premium::TripleWord));
//! assert_eq!(Cell::from_symbol('q'), Cell::Letter('Q'));
//!
//! assert_eq!(Cell::Score(42).display_text(), "42");
//! assert_eq!(Cell::Letter('A').display_text(), "A");
//!
//! assert_eq!(TILE_WIDTH, 4);
//! assert_eq!(TILE_HEIGHT, 3);
//! ```

use std::borrow::Cow;

/// Tile width in terminal columns, border included.
pub const TILE_WIDTH: usize = 4;

/// Tile height in terminal rows, border included.
pub const TILE_HEIGHT: usize = 3;

/// Border thickness on each side of a tile or panel.
pub const TILE_BORDER: usize = 1;

/// Label drawn in the top edge of the board panel.
pub const BOARD_LABEL: &str = "Board";

/// Side length of the standard board.
pub const DEFAULT_BOARD_DIMENSION: usize = 15;

/// Input poll timeout in milliseconds between board revision checks.
pub const DEFAULT_POLL_MS: u64 = 250;

/// Glyph shown for an empty cell.
pub const EMPTY_GLYPH: &str = "·";

/// Bonus squares of the standard board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Premium {
    DoubleWord,
    TripleWord,
    DoubleLetter,
    TripleLetter,
    /// Centre square; scores as a double word.
    Start,
}

impl Premium {
    /// Short label shown inside the tile.
    pub fn label(&self) -> &'static str {
        match self {
            Premium::DoubleWord => "DW",
            Premium::TripleWord => "TW",
            Premium::DoubleLetter => "DL",
            Premium::TripleLetter => "TL",
            Premium::Start => "*",
        }
    }

    /// Symbol used in the text board format.
    pub fn symbol(&self) -> char {
        match self {
            Premium::DoubleWord => '2',
            Premium::TripleWord => '3',
            Premium::DoubleLetter => '@',
            Premium::TripleLetter => '#',
            Premium::Start => '+',
        }
    }
}

/// One entry of the flat board buffer.
///
/// - `Empty`: nothing placed, no bonus
/// - `Letter(char)`: a played letter
/// - `Score(u32)`: a number shown in place of a letter
/// - `Premium(Premium)`: an unplayed bonus square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Letter(char),
    Score(u32),
    Premium(Premium),
}

impl Cell {
    /// Parse one symbol of the text board format.
    ///
    /// Letters are uppercased; anything that is not a reserved symbol is a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use words_tui_types::{Cell, Premium};
    ///
    /// assert_eq!(Cell::from_symbol('@'), Cell::Premium(Premium::DoubleLetter));
    /// assert_eq!(Cell::from_symbol('#'), Cell::Premium(Premium::TripleLetter));
    /// assert_eq!(Cell::from_symbol('+'), Cell::Premium(Premium::Start));
    /// assert_eq!(Cell::from_symbol('b'), Cell::Letter('B'));
    /// ```
    pub fn from_symbol(c: char) -> Self {
        match c {
            '.' => Cell::Empty,
            '2' => Cell::Premium(Premium::DoubleWord),
            '3' => Cell::Premium(Premium::TripleWord),
            '@' => Cell::Premium(Premium::DoubleLetter),
            '#' => Cell::Premium(Premium::TripleLetter),
            '+' => Cell::Premium(Premium::Start),
            c => Cell::Letter(c.to_uppercase().next().unwrap_or(c)),
        }
    }

    /// Symbol in the text board format.
    ///
    /// Scores have no symbol and are written as `?`.
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Letter(c) => *c,
            Cell::Score(_) => '?',
            Cell::Premium(p) => p.symbol(),
        }
    }

    /// Text drawn inside the tile. Numbers become their decimal form.
    pub fn display_text(&self) -> Cow<'static, str> {
        match self {
            Cell::Empty => Cow::Borrowed(EMPTY_GLYPH),
            Cell::Letter(c) => Cow::Owned(c.to_string()),
            Cell::Score(n) => Cow::Owned(n.to_string()),
            Cell::Premium(p) => Cow::Borrowed(p.label()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Events the application shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// The quit keybinding fired.
    Quit,
    /// The terminal was resized to `(width, height)`.
    Resize(u16, u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_for_board_cells() {
        for c in ['.', '2', '3', '@', '#', '+', 'A', 'Z'] {
            assert_eq!(Cell::from_symbol(c).symbol(), c);
        }
    }

    #[test]
    fn score_displays_decimal() {
        assert_eq!(Cell::Score(0).display_text(), "0");
        assert_eq!(Cell::Score(125).display_text(), "125");
    }

    #[test]
    fn premium_labels_fit_default_tile_interior() {
        let interior = TILE_WIDTH - 2 * TILE_BORDER;
        for p in [
            Premium::DoubleWord,
            Premium::TripleWord,
            Premium::DoubleLetter,
            Premium::TripleLetter,
            Premium::Start,
        ] {
            assert!(p.label().chars().count() <= interior);
        }
    }

    #[test]
    fn empty_is_default() {
        assert_eq!(Cell::default(), Cell::Empty);
        assert!(Cell::Empty.is_empty());
        assert!(!Cell::Letter('A').is_empty());
    }
}
