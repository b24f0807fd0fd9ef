//! Freehand brush and eraser
//!
//! Stamps the selected glyph (or a space in eraser mode) under every pointer
//! sample, growing the footprint with the brush size. Strokes go straight to
//! the draw layer inside a change opened at drag begin, so one undo removes
//! the whole stroke.

use tracing::debug;

use crate::core::{Layer, Pos};
use crate::tools::{Tool, ToolCtx};

/// Cell offsets stamped per sample, one set per brush size
const BRUSH_OFFSETS: [&[(i32, i32)]; 8] = [
    &[(0, 0)],
    &[(0, 0), (-1, 0), (1, 0)],
    &[(0, 0), (-1, 0), (1, 0), (0, 1), (0, -1)],
    &[(0, 0), (-1, 0), (1, 0), (0, 1), (0, -1), (-2, 0), (2, 0)],
    &[
        (0, 0),
        (-1, 0),
        (1, 0),
        (0, 1),
        (0, -1),
        (-2, 0),
        (2, 0),
        (1, 1),
        (-1, -1),
        (-1, 1),
        (1, -1),
    ],
    &[
        (0, 0),
        (-1, 0),
        (1, 0),
        (0, 1),
        (0, -1),
        (-2, 0),
        (2, 0),
        (1, 1),
        (-1, -1),
        (-1, 1),
        (1, -1),
        (-2, 1),
        (2, 1),
        (-2, -1),
        (2, -1),
    ],
    &[
        (0, 0),
        (-1, 0),
        (1, 0),
        (0, 1),
        (0, -1),
        (-2, 0),
        (2, 0),
        (1, 1),
        (-1, -1),
        (-1, 1),
        (1, -1),
        (-2, 1),
        (2, 1),
        (-2, -1),
        (2, -1),
        (0, 2),
        (0, -2),
        (-3, 0),
        (3, 0),
    ],
    &[
        (0, 0),
        (-1, 0),
        (1, 0),
        (0, 1),
        (0, -1),
        (-2, 0),
        (2, 0),
        (1, 1),
        (-1, -1),
        (-1, 1),
        (1, -1),
        (-2, 1),
        (2, 1),
        (-2, -1),
        (2, -1),
        (0, 2),
        (0, -2),
        (-3, 0),
        (3, 0),
        (1, 2),
        (1, -2),
        (-1, -2),
        (-1, 2),
    ],
];

/// Smallest and largest supported brush footprint
pub const MIN_BRUSH_SIZE: usize = 1;
pub const MAX_BRUSH_SIZE: usize = BRUSH_OFFSETS.len();

/// Freehand brush tool; doubles as the eraser
#[derive(Debug)]
pub struct FreehandTool {
    brush_size: usize,
    eraser: bool,
}

impl FreehandTool {
    pub fn new() -> Self {
        Self {
            brush_size: MIN_BRUSH_SIZE,
            eraser: false,
        }
    }

    pub fn brush_size(&self) -> usize {
        self.brush_size
    }

    /// Set the brush footprint, clamped to the supported range
    pub fn set_brush_size(&mut self, size: usize) {
        self.brush_size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }

    pub fn eraser(&self) -> bool {
        self.eraser
    }

    pub fn set_eraser(&mut self, eraser: bool) {
        self.eraser = eraser;
    }

    /// The change name shown in undo tooltips
    pub fn change_name(&self) -> &'static str {
        if self.eraser {
            "Eraser"
        } else {
            "Freehand"
        }
    }

    fn stamp(&self, ctx: &mut ToolCtx<'_>, pos: Pos) {
        let glyph = if self.eraser {
            ' '
        } else {
            ctx.canvas.selected_char()
        };
        for &(dx, dy) in BRUSH_OFFSETS[self.brush_size - 1] {
            let (x, y) = (pos.x + dx, pos.y + dy);
            // Cells already holding the brush glyph stay out of the change
            if ctx.canvas.get_char(x, y, Layer::Draw) == Some(glyph) {
                continue;
            }
            ctx.canvas.set_char(x, y, glyph, Layer::Draw);
        }
    }
}

impl Default for FreehandTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for FreehandTool {
    fn on_drag_begin(&mut self, ctx: &mut ToolCtx<'_>, pos: Pos) {
        debug!(brush = self.brush_size, eraser = self.eraser, "Starting stroke");
        ctx.canvas.begin_change(self.change_name());
        self.stamp(ctx, pos);
    }

    fn on_drag_update(&mut self, ctx: &mut ToolCtx<'_>, pos: Pos) {
        self.stamp(ctx, pos);
    }
}
