//! Flood fill tool
//!
//! Clicking replaces the connected region under the pointer with a glyph
//! slot: primary button fills with the active glyph, secondary with the
//! inactive one.

use tracing::debug;

use crate::core::{Canvas, ClickButton, Layer, Pos};
use crate::tools::{Tool, ToolCtx};

/// Click-to-fill tool
#[derive(Debug, Default)]
pub struct FillTool;

impl FillTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for FillTool {
    fn on_click(&mut self, ctx: &mut ToolCtx<'_>, pos: Pos, button: ClickButton) {
        let glyph = match button {
            ClickButton::Primary => ctx.canvas.selected_char(),
            ClickButton::Secondary => ctx.canvas.unselected_char(),
        };
        debug!(seed = %pos, glyph = %glyph, "Flood fill");
        ctx.canvas.begin_change("Fill");
        flood_fill(ctx.canvas, pos, glyph);
    }
}

/// Replace the 4-connected region of the seed's char with `replacement`
///
/// Runs with an explicit stack; deep regions never recurse. Out-of-bounds
/// seeds and fills into the replacement char itself are no-ops, and the grid
/// edge bounds every region because outside reads never match the target.
pub fn flood_fill(canvas: &mut Canvas, seed: Pos, replacement: char) {
    let Some(target) = canvas.get_char(seed.x, seed.y, Layer::Draw) else {
        return;
    };
    if target == replacement {
        return;
    }

    let mut stack = vec![seed];
    while let Some(pos) = stack.pop() {
        if canvas.get_char(pos.x, pos.y, Layer::Draw) == Some(target) {
            canvas.set_char(pos.x, pos.y, replacement, Layer::Draw);
            stack.push(Pos::new(pos.x - 1, pos.y));
            stack.push(Pos::new(pos.x + 1, pos.y));
            stack.push(Pos::new(pos.x, pos.y - 1));
            stack.push(Pos::new(pos.x, pos.y + 1));
        }
    }
}
