//! Board snapshot - an immutable N×N view of the game board
//!
//! The snapshot is the only thing the layout engine reads. It is built once per
//! render pass from whatever owns the game, and it can never be constructed with
//! a cell count that disagrees with its dimension.

use std::fmt;
use std::str::FromStr;

use crate::error::LayoutError;
use crate::position::GridPosition;
use crate::types::Cell;

/// The standard 15×15 board in text form.
///
/// `.` empty, `3` triple word, `2` double word, `@` double letter,
/// `#` triple letter, `+` start square.
pub const DEFAULT_BOARD: &str = "\
3..@...3...@..3
.2...#...#...2.
..2...@.@...2..
@..2...@...2..@
....2.....2....
.#...#...#...#.
..@...@.@...@..
3..@...+...@..3
..@...@.@...@..
.#...#...#...#.
....2.....2....
@..2...@...2..@
..2...@.@...2..
.2...#...#...2.
3..@...3...@..3";

/// Ordered N² cells plus the side length N.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    cells: Vec<Cell>,
    dimension: usize,
}

impl BoardSnapshot {
    /// Build a snapshot, checking that `cells.len() == dimension²`.
    pub fn new(cells: Vec<Cell>, dimension: usize) -> Result<Self, LayoutError> {
        if dimension == 0 {
            return Err(LayoutError::ZeroDimension);
        }
        let expected = dimension.checked_mul(dimension);
        if expected != Some(cells.len()) {
            return Err(LayoutError::DimensionMismatch {
                dimension,
                len: cells.len(),
            });
        }
        Ok(Self { cells, dimension })
    }

    /// Build a snapshot whose dimension is the exact square root of the cell count.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, LayoutError> {
        let len = cells.len();
        let dimension = exact_sqrt(len).ok_or(LayoutError::NotSquare { len })?;
        Self::new(cells, dimension)
    }

    /// Parse the text board format. Whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use words_tui_core::BoardSnapshot;
    /// use words_tui_core::types::{Cell, Premium};
    ///
    /// let board = BoardSnapshot::parse(".23@#+ABC").unwrap();
    /// assert_eq!(board.dimension(), 3);
    /// assert_eq!(board.cells()[1], Cell::Premium(Premium::DoubleWord));
    /// assert_eq!(board.cells()[7], Cell::Letter('B'));
    /// ```
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let cells: Vec<Cell> = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Cell::from_symbol)
            .collect();
        Self::from_cells(cells)
    }

    /// The standard empty 15×15 board with its bonus squares.
    pub fn standard() -> Self {
        let cells = DEFAULT_BOARD
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Cell::from_symbol)
            .collect();
        Self {
            cells,
            dimension: crate::types::DEFAULT_BOARD_DIMENSION,
        }
    }

    /// An N×N board of empty cells.
    pub fn empty(dimension: usize) -> Result<Self, LayoutError> {
        let len = dimension
            .checked_mul(dimension)
            .ok_or(LayoutError::DimensionMismatch { dimension, len: 0 })?;
        Self::new(vec![Cell::Empty; len], dimension)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `(row, column)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.dimension || column >= self.dimension {
            return None;
        }
        self.cells
            .get(GridPosition::new(row, column).to_index(self.dimension))
            .copied()
    }

    /// Cells paired with their grid position, in index order.
    pub fn iter_positions(&self) -> impl Iterator<Item = (GridPosition, Cell)> + '_ {
        let dimension = self.dimension;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (GridPosition::from_index(i, dimension), *c))
    }

    /// Return a copy with one cell replaced.
    ///
    /// Out-of-bounds positions leave the board unchanged.
    pub fn with_cell(&self, row: usize, column: usize, cell: Cell) -> Self {
        let mut next = self.clone();
        if row < self.dimension && column < self.dimension {
            next.cells[GridPosition::new(row, column).to_index(self.dimension)] = cell;
        }
        next
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for BoardSnapshot {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.dimension).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

fn exact_sqrt(n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    let mut root = (n as f64).sqrt() as usize;
    // Float rounding can land one off for large n.
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    (root * root == n).then_some(root)
}
