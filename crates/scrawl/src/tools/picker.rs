//! Glyph picker tool
//!
//! Clicking copies the draw-layer char under the pointer into the active
//! glyph slot. Reads only; nothing lands in the change log.

use tracing::debug;

use crate::core::{ClickButton, Layer, Pos};
use crate::tools::{Tool, ToolCtx};

/// Click-to-pick tool
#[derive(Debug, Default)]
pub struct PickerTool;

impl PickerTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for PickerTool {
    fn on_click(&mut self, ctx: &mut ToolCtx<'_>, pos: Pos, _button: ClickButton) {
        if let Some(c) = ctx.canvas.get_char(pos.x, pos.y, Layer::Draw) {
            debug!(at = %pos, glyph = %c, "Picked glyph");
            ctx.canvas.set_selected_char(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Canvas, Plotter, StyleSet};

    fn ctx<'a>(canvas: &'a mut Canvas, plotter: &'a Plotter) -> ToolCtx<'a> {
        ToolCtx { canvas, plotter }
    }

    #[test]
    fn test_click_copies_char_into_active_slot() {
        let mut canvas = Canvas::with_size(10, 10);
        canvas.begin_change("Seed");
        canvas.set_char(3, 3, '@', Layer::Draw);

        let plotter = Plotter::new(StyleSet::thin());
        let mut tool = PickerTool::new();
        let mut c = ctx(&mut canvas, &plotter);
        tool.on_click(&mut c, Pos::new(3, 3), ClickButton::Primary);

        assert_eq!(canvas.selected_char(), '@');
    }

    #[test]
    fn test_pick_respects_slot_selection() {
        let mut canvas = Canvas::with_size(10, 10);
        canvas.begin_change("Seed");
        canvas.set_char(1, 1, '*', Layer::Draw);
        canvas.select_primary(false);

        let plotter = Plotter::new(StyleSet::thin());
        let mut tool = PickerTool::new();
        let mut c = ctx(&mut canvas, &plotter);
        tool.on_click(&mut c, Pos::new(1, 1), ClickButton::Primary);

        assert_eq!(canvas.selected_char(), '*');
        canvas.select_primary(true);
        assert_eq!(canvas.selected_char(), '#');
    }

    #[test]
    fn test_out_of_bounds_click_keeps_slot() {
        let mut canvas = Canvas::with_size(5, 5);
        let plotter = Plotter::new(StyleSet::thin());
        let mut tool = PickerTool::new();
        let mut c = ctx(&mut canvas, &plotter);
        tool.on_click(&mut c, Pos::new(50, 50), ClickButton::Primary);

        assert_eq!(canvas.selected_char(), '#');
    }

    #[test]
    fn test_pick_leaves_history_alone() {
        let mut canvas = Canvas::with_size(5, 5);
        let plotter = Plotter::new(StyleSet::thin());
        let mut tool = PickerTool::new();
        let mut c = ctx(&mut canvas, &plotter);
        tool.on_click(&mut c, Pos::new(2, 2), ClickButton::Primary);

        assert!(!canvas.history().can_undo());
    }
}
