//! Terminal board renderer.
//!
//! This is a small layout-and-render layer for showing a word-game board in a
//! terminal. It renders into a simple framebuffer that is flushed to the
//! terminal by a diffing [`Screen`].
//!
//! Pipeline:
//! - [`layout`]: `BoardSnapshot` → [`LayoutTree`] (pure)
//! - [`tile`]: one cell → one positioned [`TileVisual`] (pure)
//! - [`compose`]: `LayoutTree` → [`FrameBuffer`] (pure)
//! - [`screen`]: `FrameBuffer` → terminal writes

pub mod compose;
pub mod fb;
pub mod layout;
pub mod screen;
pub mod tile;

pub use words_tui_core as core;
pub use words_tui_types as types;

pub use compose::{BoardView, Viewport};
pub use fb::{BorderGlyphs, Cell, CellStyle, FrameBuffer, Rgb};
pub use layout::{layout_board, BoardLayout, LayoutOptions, LayoutTree};
pub use screen::{encode_diff_into, encode_full_into, Screen, ScreenError};
pub use tile::{render_tile, OverflowPolicy, TileGeometry, TileKind, TileVisual};
