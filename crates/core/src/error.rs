//! Layout errors.

use thiserror::Error;

/// Errors raised by the board model and the pure layout transforms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A board must have at least one row.
    #[error("board dimension must be positive")]
    ZeroDimension,

    /// The cell count does not match the declared dimension.
    #[error("board of dimension {dimension} needs {} cells, got {len}", expected_cells(.dimension))]
    DimensionMismatch { dimension: usize, len: usize },

    /// The cell count has no integer square root.
    #[error("{len} cells do not form a square board")]
    NotSquare { len: usize },

    /// Cell content is wider than the tile interior.
    #[error("content {content:?} at ({row}, {column}) exceeds tile width {max_width}")]
    ContentOverflow {
        row: usize,
        column: usize,
        content: String,
        max_width: usize,
    },
}

fn expected_cells(dimension: &usize) -> usize {
    dimension.saturating_mul(*dimension)
}

impl LayoutError {
    /// Contract violations abort the render pass; overflow does not.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, LayoutError::ContentOverflow { .. })
    }
}
