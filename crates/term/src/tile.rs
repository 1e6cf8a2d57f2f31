//! Tile renderer: one cell plus its grid position becomes a positioned box.
//!
//! This module is pure (no I/O). The compositor turns [`TileVisual`]s into
//! framebuffer writes; nothing here touches the terminal.

use std::str::FromStr;

use tracing::warn;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::{GridPosition, LayoutError};
use crate::types::{Cell, Premium, TILE_BORDER, TILE_HEIGHT, TILE_WIDTH};

/// Size of every tile on a board, border included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGeometry {
    pub width: usize,
    pub height: usize,
}

impl Default for TileGeometry {
    fn default() -> Self {
        Self {
            width: TILE_WIDTH,
            height: TILE_HEIGHT,
        }
    }
}

impl TileGeometry {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Columns available for content between the side borders.
    pub fn interior_width(&self) -> usize {
        self.width.saturating_sub(2 * TILE_BORDER)
    }

    /// Absolute `(top, left)` of the tile at `position`.
    pub fn offset(&self, position: GridPosition) -> (usize, usize) {
        (self.height * position.row, self.width * position.column)
    }
}

/// What to do when cell content is wider than the tile interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Cut at the last whole glyph that fits.
    #[default]
    Truncate,
    /// Fail the tile with [`LayoutError::ContentOverflow`].
    Reject,
    /// Widen every tile on the board to fit the widest content.
    Widen,
}

impl OverflowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Truncate => "truncate",
            OverflowPolicy::Reject => "reject",
            OverflowPolicy::Widen => "widen",
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "truncate" => Ok(OverflowPolicy::Truncate),
            "reject" => Ok(OverflowPolicy::Reject),
            "widen" => Ok(OverflowPolicy::Widen),
            other => Err(format!("unknown overflow policy: {}", other)),
        }
    }
}

/// Colour class of a tile, derived from its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Empty,
    Letter,
    Score,
    Premium(Premium),
}

impl From<Cell> for TileKind {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => TileKind::Empty,
            Cell::Letter(_) => TileKind::Letter,
            Cell::Score(_) => TileKind::Score,
            Cell::Premium(p) => TileKind::Premium(p),
        }
    }
}

/// The rendered unit for one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileVisual {
    pub position: GridPosition,
    pub content: String,
    pub kind: TileKind,
    pub width: usize,
    pub height: usize,
    pub top: usize,
    pub left: usize,
    pub bordered: bool,
}

/// Render one cell at `position`.
///
/// # Errors
///
/// [`LayoutError::ContentOverflow`] when the content does not fit and the
/// policy is not [`OverflowPolicy::Truncate`].
///
/// # Examples
///
/// ```
/// use words_tui_term::tile::{render_tile, OverflowPolicy, TileGeometry};
/// use words_tui_term::core::GridPosition;
/// use words_tui_term::types::Cell;
///
/// let tile = render_tile(
///     Cell::Letter('B'),
///     GridPosition::new(0, 1),
///     TileGeometry::default(),
///     OverflowPolicy::Truncate,
/// )
/// .unwrap();
/// assert_eq!((tile.top, tile.left), (0, 4));
/// assert_eq!((tile.width, tile.height), (4, 3));
/// assert_eq!(tile.content, "B");
/// ```
pub fn render_tile(
    cell: Cell,
    position: GridPosition,
    geometry: TileGeometry,
    overflow: OverflowPolicy,
) -> Result<TileVisual, LayoutError> {
    let text = cell.display_text();
    let max_width = geometry.interior_width();

    let content = if text.width() <= max_width {
        text.into_owned()
    } else {
        match overflow {
            OverflowPolicy::Truncate => {
                let cut = truncate_to_width(&text, max_width);
                warn!(
                    row = position.row,
                    column = position.column,
                    content = %text,
                    shown = cut,
                    "tile content truncated"
                );
                cut.to_string()
            }
            OverflowPolicy::Reject | OverflowPolicy::Widen => {
                return Err(LayoutError::ContentOverflow {
                    row: position.row,
                    column: position.column,
                    content: text.into_owned(),
                    max_width,
                });
            }
        }
    };

    let (top, left) = geometry.offset(position);
    Ok(TileVisual {
        position,
        content,
        kind: TileKind::from(cell),
        width: geometry.width,
        height: geometry.height,
        top,
        left,
        bordered: true,
    })
}

/// Longest prefix of `s` whose display width is at most `max_width`.
pub fn truncate_to_width(s: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (i, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            return &s[..i];
        }
        used += w;
    }
    s
}
