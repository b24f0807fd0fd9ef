//! Rectangle drawing tool
//!
//! Drags out a box between the anchor cell and the pointer, previewing the
//! normalized extent every sample and committing one "Rectangle" change on
//! release.

use tracing::debug;

use crate::core::{Layer, Pos};
use crate::tools::{Tool, ToolCtx};

/// How the dragged region is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RectMode {
    /// Box-drawing outline in the active style
    #[default]
    Outline,
    /// Solid block of the selected glyph
    Filled,
}

/// Drag-to-draw rectangle tool
#[derive(Debug, Default)]
pub struct RectangleTool {
    mode: RectMode,
    start: Pos,
}

impl RectangleTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> RectMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RectMode) {
        self.mode = mode;
    }

    fn draw(&self, ctx: &mut ToolCtx<'_>, pos: Pos, layer: Layer) {
        let (x, y, width, height) = normalized_extent(self.start, pos);
        match self.mode {
            RectMode::Outline => ctx.plotter.rectangle(ctx.canvas, layer, x, y, width, height),
            RectMode::Filled => {
                let glyph = ctx.canvas.selected_char();
                ctx.plotter
                    .filled_rectangle(ctx.canvas, layer, x, y, width, height, glyph);
            }
        }
    }
}

impl Tool for RectangleTool {
    fn on_drag_begin(&mut self, _ctx: &mut ToolCtx<'_>, pos: Pos) {
        self.start = pos;
    }

    fn on_drag_update(&mut self, ctx: &mut ToolCtx<'_>, pos: Pos) {
        ctx.canvas.clear_preview();
        self.draw(ctx, pos, Layer::Preview);
    }

    fn on_drag_end(&mut self, ctx: &mut ToolCtx<'_>, pos: Pos) {
        ctx.canvas.clear_preview();
        debug!(start = %self.start, end = %pos, mode = ?self.mode, "Committing rectangle");
        ctx.canvas.begin_change("Rectangle");
        self.draw(ctx, pos, Layer::Draw);
    }
}

/// Normalize a drag into a top-left anchor and positive, inclusive extent
fn normalized_extent(start: Pos, end: Pos) -> (i32, i32, i32, i32) {
    let (mut x, mut width) = (start.x, end.x - start.x);
    let (mut y, mut height) = (start.y, end.y - start.y);
    if width < 0 {
        width = -width;
        x -= width;
    }
    if height < 0 {
        height = -height;
        y -= height;
    }
    (x, y, width + 1, height + 1)
}
