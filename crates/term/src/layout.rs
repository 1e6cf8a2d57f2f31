//! Board layout: a flat board buffer becomes a tree of positioned tiles.
//!
//! `layout_board` is a pure function of the snapshot and the options. It is
//! re-run on every redraw; diffing against the previous frame happens in the
//! screen, never here.

use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::core::{BoardSnapshot, LayoutError};
use crate::tile::{render_tile, OverflowPolicy, TileGeometry, TileVisual};
use crate::types::{BOARD_LABEL, TILE_BORDER};

/// Knobs for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutOptions {
    pub geometry: TileGeometry,
    pub overflow: OverflowPolicy,
}

impl LayoutOptions {
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}

/// The board panel: a labelled, bordered container of tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTree {
    pub label: &'static str,
    pub bordered: bool,
    pub dimension: usize,
    pub geometry: TileGeometry,
    /// Tiles in board index order.
    pub tiles: Vec<TileVisual>,
    /// `(width, height)` of the tile area, border excluded.
    pub extent: (usize, usize),
}

impl LayoutTree {
    /// `(width, height)` of the panel including its border.
    pub fn outer_extent(&self) -> (usize, usize) {
        let border = if self.bordered { 2 * TILE_BORDER } else { 0 };
        (self.extent.0 + border, self.extent.1 + border)
    }
}

/// Lay out `board` with `options`.
///
/// # Errors
///
/// - [`LayoutError::DimensionMismatch`] if the cell count is not `dimension²`;
///   no tile is produced.
/// - [`LayoutError::ContentOverflow`] under [`OverflowPolicy::Reject`].
///
/// # Examples
///
/// ```
/// use words_tui_term::layout::{layout_board, LayoutOptions};
/// use words_tui_term::core::BoardSnapshot;
///
/// let board = BoardSnapshot::parse("ABCD").unwrap();
/// let tree = layout_board(&board, &LayoutOptions::default()).unwrap();
///
/// let offsets: Vec<_> = tree.tiles.iter().map(|t| (t.top, t.left)).collect();
/// assert_eq!(offsets, vec![(0, 0), (0, 4), (3, 0), (3, 4)]);
/// assert_eq!(tree.extent, (8, 6));
/// assert_eq!(tree.label, "Board");
/// ```
pub fn layout_board(board: &BoardSnapshot, options: &LayoutOptions) -> Result<LayoutTree, LayoutError> {
    let dimension = board.dimension();
    let cells = board.cells();
    if dimension == 0 {
        return Err(LayoutError::ZeroDimension);
    }
    if dimension.checked_mul(dimension) != Some(cells.len()) {
        return Err(LayoutError::DimensionMismatch {
            dimension,
            len: cells.len(),
        });
    }

    let geometry = match options.overflow {
        OverflowPolicy::Widen => widened_geometry(board, options.geometry),
        OverflowPolicy::Truncate | OverflowPolicy::Reject => options.geometry,
    };

    let tiles = board
        .iter_positions()
        .map(|(position, cell)| render_tile(cell, position, geometry, options.overflow))
        .collect::<Result<Vec<_>, _>>()?;

    let extent = (dimension * geometry.width, dimension * geometry.height);
    debug!(
        dimension,
        tiles = tiles.len(),
        width = extent.0,
        height = extent.1,
        "board laid out"
    );

    Ok(LayoutTree {
        label: BOARD_LABEL,
        bordered: true,
        dimension,
        geometry,
        tiles,
        extent,
    })
}

/// Tile geometry wide enough for every cell on `board`, never narrower than `base`.
pub fn widened_geometry(board: &BoardSnapshot, base: TileGeometry) -> TileGeometry {
    let widest = board
        .cells()
        .iter()
        .map(|c| c.display_text().width())
        .max()
        .unwrap_or(0);
    TileGeometry {
        width: base.width.max(widest + 2 * TILE_BORDER),
        height: base.height,
    }
}

/// A reusable layout pass bound to fixed options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLayout {
    options: LayoutOptions,
}

impl BoardLayout {
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    pub fn layout(&self, board: &BoardSnapshot) -> Result<LayoutTree, LayoutError> {
        layout_board(board, &self.options)
    }
}
