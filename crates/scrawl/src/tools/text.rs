//! Text placement tool
//!
//! A click anchors the text block, dragging slides it around, and the block
//! previews at its current position until [`TextTool::commit`] stamps it onto
//! the draw layer as one "Text" change. Transparent mode lets underlying
//! content show through the block's source spaces.

use tracing::debug;

use crate::core::{ClickButton, Delta, Layer, Pos};
use crate::tools::{Tool, ToolCtx};

/// Click-to-anchor text tool
#[derive(Debug, Default)]
pub struct TextTool {
    text: String,
    transparent: bool,
    anchor: Pos,
    drag: Delta,
    drag_start: Pos,
}

impl TextTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn transparent(&self) -> bool {
        self.transparent
    }

    pub fn set_transparent(&mut self, transparent: bool) {
        self.transparent = transparent;
    }

    /// Where the block currently sits, drag offset included
    pub fn position(&self) -> Pos {
        self.anchor + self.drag
    }

    /// Redraw the block on the preview layer at its current position
    pub fn preview(&self, ctx: &mut ToolCtx<'_>) {
        ctx.canvas.clear_preview();
        let pos = self.position();
        ctx.canvas
            .draw_text(pos.x, pos.y, &self.text, self.transparent, Layer::Preview);
    }

    /// Stamp the block onto the draw layer as a "Text" change
    pub fn commit(&mut self, ctx: &mut ToolCtx<'_>) {
        let pos = self.position();
        debug!(at = %pos, len = self.text.len(), "Committing text block");
        ctx.canvas.begin_change("Text");
        ctx.canvas.clear_preview();
        ctx.canvas
            .draw_text(pos.x, pos.y, &self.text, self.transparent, Layer::Draw);
    }
}

impl Tool for TextTool {
    fn on_drag_begin(&mut self, _ctx: &mut ToolCtx<'_>, pos: Pos) {
        self.drag_start = pos;
    }

    fn on_drag_update(&mut self, ctx: &mut ToolCtx<'_>, pos: Pos) {
        self.drag = pos - self.drag_start;
        self.preview(ctx);
    }

    fn on_drag_end(&mut self, _ctx: &mut ToolCtx<'_>, _pos: Pos) {
        self.anchor = self.anchor + self.drag;
        self.drag = Delta::default();
    }

    fn on_click(&mut self, ctx: &mut ToolCtx<'_>, pos: Pos, _button: ClickButton) {
        self.anchor = pos;
        self.preview(ctx);
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
    fn test_click_previews_at_anchor() {
        let mut canvas = Canvas::with_size(20, 10);
        let plotter = Plotter::new(StyleSet::thin());
        let mut tool = TextTool::new();
        tool.set_text("hi");

        let mut c = ctx(&mut canvas, &plotter);
        tool.on_click(&mut c, Pos::new(3, 2), ClickButton::Primary);

        assert_eq!(canvas.get_char(3, 2, Layer::Preview), Some('h'));
        assert_eq!(canvas.get_char(4, 2, Layer::Preview), Some('i'));
        assert_eq!(canvas.get_char(3, 2, Layer::Draw), Some(' '));
    }

    #[test]
    fn test_drag_slides_the_preview() {
        let mut canvas = Canvas::with_size(20, 10);
        let plotter = Plotter::new(StyleSet::thin());
        let mut tool = TextTool::new();
        tool.set_text("hi");

        let mut c = ctx(&mut canvas, &plotter);
        tool.on_click(&mut c, Pos::new(3, 2), ClickButton::Primary);
        tool.on_drag_begin(&mut c, Pos::new(3, 2));
        tool.on_drag_update(&mut c, Pos::new(6, 4));
        tool.on_drag_end(&mut c, Pos::new(6, 4));

        assert_eq!(canvas.get_char(6, 4, Layer::Preview), Some('h'));
        assert_eq!(canvas.get_char(3, 2, Layer::Preview), Some(' '));
        assert_eq!(tool.position(), Pos::new(6, 4));
    }

    #[test]
    fn test_commit_stamps_draw_layer() {
        let mut canvas = Canvas::with_size(20, 10);
        let plotter = Plotter::new(StyleSet::thin());
        let mut tool = TextTool::new();
        tool.set_text("ok");

        let mut c = ctx(&mut canvas, &plotter);
        tool.on_click(&mut c, Pos::new(1, 1), ClickButton::Primary);
        tool.commit(&mut c);

        assert_eq!(canvas.get_char(1, 1, Layer::Draw), Some('o'));
        assert_eq!(canvas.get_char(2, 1, Layer::Draw), Some('k'));
        assert_eq!(canvas.get_char(1, 1, Layer::Preview), Some(' '));
        assert_eq!(canvas.history().undo_label(), Some("Text"));
    }

    #[test]
    fn test_transparent_commit_preserves_background() {
        let mut canvas = Canvas::with_size(20, 10);
        let plotter = Plotter::new(StyleSet::thin());
        canvas.begin_change("Background");
        canvas.set_char(2, 1, '*', Layer::Draw);

        let mut tool = TextTool::new();
        tool.set_text("a c");
        tool.set_transparent(true);

        let mut c = ctx(&mut canvas, &plotter);
        tool.on_click(&mut c, Pos::new(1, 1), ClickButton::Primary);
        tool.commit(&mut c);

        assert_eq!(canvas.get_char(1, 1, Layer::Draw), Some('a'));
        assert_eq!(canvas.get_char(2, 1, Layer::Draw), Some('*'));
        assert_eq!(canvas.get_char(3, 1, Layer::Draw), Some('c'));
    }

    #[test]
    fn test_multiline_commit() {
        let mut canvas = Canvas::with_size(20, 10);
        let plotter = Plotter::new(StyleSet::thin());
        let mut tool = TextTool::new();
        tool.set_text("ab\ncd");

        let mut c = ctx(&mut canvas, &plotter);
        tool.on_click(&mut c, Pos::new(0, 0), ClickButton::Primary);
        tool.commit(&mut c);

        assert_eq!(canvas.content(), "ab\ncd\n");
    }

    #[test]
    fn test_undo_removes_committed_text() {
        let mut canvas = Canvas::with_size(20, 10);
        let plotter = Plotter::new(StyleSet::thin());
        let mut tool = TextTool::new();
        tool.set_text("gone");

        let mut c = ctx(&mut canvas, &plotter);
        tool.on_click(&mut c, Pos::new(2, 2), ClickButton::Primary);
        tool.commit(&mut c);
        canvas.undo();

        assert_eq!(canvas.grid(Layer::Draw).occupied_cells(), 0);
    }
}
