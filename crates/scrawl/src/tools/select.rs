//! Rectangular select and move tool
//!
//! A first drag defines a rectangular selection. A drag that starts inside
//! the selection lifts its content off the draw layer, previews it
//! transparently while the pointer moves, and drops it at the release
//! position as a single "Move" change. Spaces in the lifted block are
//! transparent on drop, so moving a shape across existing content does not
//! punch a blank rectangle through it. A plain click discards the selection.

use tracing::debug;

use crate::core::{ClickButton, Delta, Layer, Pos};
use crate::tools::{Tool, ToolCtx};

/// A selection anchored where the defining drag began
///
/// The extent may be negative when the drag travelled up or left; bounds
/// normalization handles the flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: Pos,
    pub extent: Delta,
}

impl Selection {
    /// Selection rectangle inflated by one cell on every side
    ///
    /// The selected content cells are the strict interior of these bounds,
    /// which makes the hit test below a plain strict comparison.
    pub fn bounds(&self) -> (Pos, i32, i32) {
        let mut start = self.start;
        let mut width = self.extent.dx;
        let mut height = self.extent.dy;
        if width < 0 {
            width = -width;
            start.x -= width;
        }
        if height < 0 {
            height = -height;
            start.y -= height;
        }
        (Pos::new(start.x - 1, start.y - 1), width + 2, height + 2)
    }

    /// Whether `pos` is one of the selected content cells
    pub fn contains(&self, pos: Pos) -> bool {
        let (start, width, height) = self.bounds();
        pos.x > start.x && pos.x < start.x + width && pos.y > start.y && pos.y < start.y + height
    }
}

/// Selects a rectangle of cells and drags it elsewhere
#[derive(Debug, Clone, Default)]
pub struct SelectTool {
    selection: Option<Selection>,
    lifting: bool,
    moved: String,
    drag_origin: Pos,
    drag_offset: Delta,
}

impl SelectTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Read the selected cells into a newline-terminated block
    fn lift(&mut self, ctx: &mut ToolCtx<'_>, start: Pos, width: i32, height: i32) {
        self.moved.clear();
        for y in 1..height {
            for x in 1..width {
                self.moved.push(
                    ctx.canvas
                        .get_char(start.x + x, start.y + y, Layer::Draw)
                        .unwrap_or(' '),
                );
            }
            self.moved.push('\n');
        }
    }
}

impl Tool for SelectTool {
    fn on_drag_begin(&mut self, ctx: &mut ToolCtx<'_>, pos: Pos) {
        self.drag_origin = pos;
        self.drag_offset = Delta::default();

        let inside = self.selection.map_or(false, |sel| sel.contains(pos));
        if !inside {
            self.lifting = false;
            self.selection = Some(Selection {
                start: pos,
                extent: Delta::default(),
            });
            return;
        }

        let Some(sel) = self.selection else { return };
        let (start, width, height) = sel.bounds();
        debug!(at = %start, width, height, "Lifting selection");
        self.lifting = true;
        ctx.canvas.begin_change("Move");
        self.lift(ctx, start, width, height);
        for y in 1..height {
            for x in 1..width {
                ctx.canvas.set_char(start.x + x, start.y + y, ' ', Layer::Draw);
            }
        }
        ctx.canvas
            .draw_text(start.x + 1, start.y + 1, &self.moved, true, Layer::Preview);
    }

    fn on_drag_update(&mut self, ctx: &mut ToolCtx<'_>, pos: Pos) {
        if self.lifting {
            let offset = pos - self.drag_origin;
            if offset == self.drag_offset {
                return;
            }
            self.drag_offset = offset;
            let Some(sel) = self.selection else { return };
            let (start, _, _) = sel.bounds();
            ctx.canvas.clear_preview();
            ctx.canvas.draw_text(
                start.x + offset.dx + 1,
                start.y + offset.dy + 1,
                &self.moved,
                true,
                Layer::Preview,
            );
        } else if let Some(sel) = self.selection.as_mut() {
            sel.extent = pos - sel.start;
        }
    }

    fn on_drag_end(&mut self, ctx: &mut ToolCtx<'_>, _pos: Pos) {
        if !self.lifting {
            return;
        }
        self.lifting = false;
        let Some(sel) = self.selection.as_mut() else {
            return;
        };
        sel.start = sel.start + self.drag_offset;
        let sel = *sel;
        ctx.canvas.clear_preview();
        let (start, width, height) = sel.bounds();
        debug!(at = %start, width, height, "Dropping selection");
        ctx.canvas
            .draw_text(start.x + 1, start.y + 1, &self.moved, true, Layer::Draw);
        self.moved.clear();
        self.drag_offset = Delta::default();
    }

    fn on_click(&mut self, ctx: &mut ToolCtx<'_>, _pos: Pos, _button: ClickButton) {
        self.selection = None;
        self.lifting = false;
        self.moved.clear();
        self.drag_offset = Delta::default();
        ctx.canvas.clear_preview();
    }
}
