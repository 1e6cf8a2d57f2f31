//! Core board model - pure, deterministic, and testable
//!
//! This crate holds the read-only view of the game board that the layout engine
//! consumes. It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: A snapshot is immutable; the same snapshot always lays out the same way
//! - **Validated**: A snapshot cannot exist with a cell count that disagrees with its dimension
//! - **Portable**: Usable from any front end (terminal, tests, benchmarks)
//!
//! # Module Structure
//!
//! - [`board`]: N×N [`BoardSnapshot`] and the text board format
//! - [`position`]: [`GridPosition`] derivation from linear indices
//! - [`error`]: [`LayoutError`] taxonomy shared by the layout transforms
//! - [`source`]: [`BoardSource`] trait implemented by whatever owns the game
//!
//! # Example
//!
//! ```
//! use words_tui_core::{BoardSnapshot, GridPosition, LayoutError};
//! use words_tui_core::types::Cell;
//!
//! let board = BoardSnapshot::parse("ABCD").unwrap();
//! assert_eq!(board.dimension(), 2);
//!
//! let pos = GridPosition::from_index(3, board.dimension());
//! assert_eq!((pos.row, pos.column), (1, 1));
//!
//! // Five cells never make a 2×2 board.
//! let err = BoardSnapshot::new(vec![Cell::Empty; 5], 2).unwrap_err();
//! assert!(matches!(err, LayoutError::DimensionMismatch { .. }));
//! ```

pub mod board;
pub mod error;
pub mod position;
pub mod source;

pub use words_tui_types as types;

// Re-export commonly used types for convenience
pub use board::{BoardSnapshot, DEFAULT_BOARD};
pub use error::LayoutError;
pub use position::GridPosition;
pub use source::{BoardSource, StaticBoard};
