//! Grid positions derived from linear board indices.

/// Zero-based `(row, column)` of a cell on an N×N board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

impl GridPosition {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Derive the position of linear index `index` on a board of side `dimension`.
    ///
    /// `dimension` must be positive; callers get it from a validated snapshot.
    ///
    /// # Examples
    ///
    /// ```
    /// use words_tui_core::GridPosition;
    ///
    /// assert_eq!(GridPosition::from_index(0, 2), GridPosition::new(0, 0));
    /// assert_eq!(GridPosition::from_index(1, 2), GridPosition::new(0, 1));
    /// assert_eq!(GridPosition::from_index(2, 2), GridPosition::new(1, 0));
    /// assert_eq!(GridPosition::from_index(3, 2), GridPosition::new(1, 1));
    /// ```
    #[inline]
    pub fn from_index(index: usize, dimension: usize) -> Self {
        Self {
            row: index / dimension,
            column: index % dimension,
        }
    }

    /// Inverse of [`GridPosition::from_index`].
    #[inline]
    pub fn to_index(self, dimension: usize) -> usize {
        self.row * dimension + self.column
    }
}
