//! BoardView: composes a [`LayoutTree`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{BorderGlyphs, CellStyle, FrameBuffer, Rgb};
use crate::layout::LayoutTree;
use crate::tile::{TileKind, TileVisual};
use crate::types::{Premium, TILE_BORDER};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Draws the outer frame, the board panel, and every tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    frame_style: CellStyle,
    panel_style: CellStyle,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            frame_style: CellStyle {
                fg: Rgb::new(80, 120, 220),
                ..CellStyle::default()
            },
            panel_style: CellStyle {
                fg: Rgb::new(200, 200, 200),
                ..CellStyle::default()
            },
        }
    }
}

impl BoardView {
    /// Origin of the board panel inside the outer frame.
    pub const PANEL_ORIGIN: (u16, u16) = (TILE_BORDER as u16, TILE_BORDER as u16);

    /// `(width, height)` of the outer frame for `tree`, border included.
    pub fn frame_extent(tree: &LayoutTree) -> (usize, usize) {
        let (w, h) = tree.outer_extent();
        (w + 2 * TILE_BORDER, h + 2 * TILE_BORDER)
    }

    /// Screen `(x, y)` of a tile's top-left corner.
    pub fn tile_origin(tile: &TileVisual) -> (u16, u16) {
        let (px, py) = Self::PANEL_ORIGIN;
        let inset = TILE_BORDER as u16;
        (
            px.saturating_add(inset).saturating_add(clamp_u16(tile.left)),
            py.saturating_add(inset).saturating_add(clamp_u16(tile.top)),
        )
    }

    /// Compose `tree` into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport; anything outside it is clipped.
    pub fn render_into(&self, tree: &LayoutTree, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = Self::frame_extent(tree);
        fb.draw_box(
            0,
            0,
            clamp_u16(frame_w),
            clamp_u16(frame_h),
            BorderGlyphs::LINE,
            self.frame_style,
        );

        let (px, py) = Self::PANEL_ORIGIN;
        let (panel_w, panel_h) = tree.outer_extent();
        let (panel_w, panel_h) = (clamp_u16(panel_w), clamp_u16(panel_h));
        if tree.bordered {
            fb.draw_box(px, py, panel_w, panel_h, BorderGlyphs::LINE, self.panel_style);
        }
        self.draw_label(fb, px, py, panel_w, tree.label);

        for tile in &tree.tiles {
            self.draw_tile(fb, tile);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, tree: &LayoutTree, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(tree, viewport, &mut fb);
        fb
    }

    /// Draw a message in place of the board.
    pub fn render_error_into(&self, message: &str, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));
        let style = CellStyle {
            fg: Rgb::new(240, 90, 90),
            bold: true,
            ..CellStyle::default()
        };
        for (y, line) in message.lines().enumerate() {
            if y >= viewport.height as usize {
                break;
            }
            fb.put_str(0, y as u16, line, style);
        }
    }

    fn draw_label(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, label: &str) {
        // Label sits in the top edge, after the corner: ┌Board──┐
        if w < 3 {
            return;
        }
        let style = CellStyle {
            bold: true,
            ..self.panel_style
        };
        fb.put_str_clipped(x + 1, y, label, x.saturating_add(w - 1), style);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, tile: &TileVisual) {
        let (x, y) = Self::tile_origin(tile);
        let (w, h) = (clamp_u16(tile.width), clamp_u16(tile.height));
        let style = tile_style(tile.kind);

        if tile.bordered {
            fb.draw_box(x, y, w, h, BorderGlyphs::LINE, CellStyle { bold: false, ..style });
        }

        let inset = if tile.bordered { TILE_BORDER as u16 } else { 0 };
        let inner_w = w.saturating_sub(2 * inset);
        let inner_h = h.saturating_sub(2 * inset);
        if inner_w == 0 || inner_h == 0 {
            return;
        }
        fb.fill_rect(x + inset, y + inset, inner_w, inner_h, ' ', style);
        fb.put_str_clipped(
            x + inset,
            y + inset,
            &tile.content,
            x.saturating_add(inset).saturating_add(inner_w),
            style,
        );
    }
}

fn tile_style(kind: TileKind) -> CellStyle {
    let bg = Rgb::new(30, 30, 40);
    let (fg, bold, dim) = match kind {
        TileKind::Empty => (Rgb::new(90, 90, 100), false, true),
        TileKind::Letter => (Rgb::new(240, 220, 160), true, false),
        TileKind::Score => (Rgb::new(100, 220, 120), true, false),
        TileKind::Premium(Premium::TripleWord) => (Rgb::new(220, 80, 80), false, false),
        TileKind::Premium(Premium::DoubleWord) => (Rgb::new(230, 140, 170), false, false),
        TileKind::Premium(Premium::TripleLetter) => (Rgb::new(80, 120, 220), false, false),
        TileKind::Premium(Premium::DoubleLetter) => (Rgb::new(80, 220, 220), false, false),
        TileKind::Premium(Premium::Start) => (Rgb::new(255, 165, 0), true, false),
    };
    CellStyle { fg, bg, bold, dim }
}

fn clamp_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
