//! Editor facade that wires the canvas, styles, and tools together
//!
//! The editor owns the document canvas, the resolved drawing style, and one
//! instance of every tool. Callers feed it pointer gestures in cell
//! coordinates; it routes them to the active tool and exposes undo, redo,
//! and persistence so a UI or script runner never touches the pieces
//! individually.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use crate::core::{Canvas, ClickButton, Plotter, Pos, StyleTable};
use crate::tools::{
    FillTool, FreehandTool, LineTool, PickerTool, RectangleTool, SelectTool, Selection,
    TableTool, TextTool, Tool, ToolCtx, ToolKind, TreeTool,
};

/// One open document with its tool and style state
pub struct Editor {
    canvas: Canvas,
    styles: StyleTable,
    style_index: usize,
    flip: bool,
    plotter: Plotter,
    active: ToolKind,
    rectangle: RectangleTool,
    line: LineTool,
    freehand: FreehandTool,
    text: TextTool,
    table: TableTool,
    tree: TreeTool,
    fill: FillTool,
    picker: PickerTool,
    select: SelectTool,
}

impl Editor {
    /// Create an editor with the default canvas size
    pub fn new() -> Self {
        Self::with_canvas(Canvas::new())
    }

    /// Create an editor over a canvas of the given size
    pub fn with_size(width: usize, height: usize) -> Self {
        Self::with_canvas(Canvas::with_size(width, height))
    }

    fn with_canvas(canvas: Canvas) -> Self {
        let styles = StyleTable::builtin();
        let plotter = Plotter::new(styles.resolve(0, false));
        Self {
            canvas,
            styles,
            style_index: 0,
            flip: false,
            plotter,
            active: ToolKind::default(),
            rectangle: RectangleTool::new(),
            line: LineTool::new(),
            freehand: FreehandTool::new(),
            text: TextTool::new(),
            table: TableTool::new(),
            tree: TreeTool::new(),
            fill: FillTool::new(),
            picker: PickerTool::new(),
            select: SelectTool::new(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active
    }

    /// Switch the active tool, discarding any preview it left behind
    pub fn set_active_tool(&mut self, tool: ToolKind) {
        if tool != self.active {
            debug!(from = ?self.active, to = ?tool, "Switching tool");
            self.active = tool;
            self.canvas.clear_preview();
        }
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn style_index(&self) -> usize {
        self.style_index
    }

    pub fn flip(&self) -> bool {
        self.flip
    }

    /// Select the drawing style by table index
    pub fn set_style(&mut self, index: usize) {
        self.style_index = index;
        self.rebuild_plotter();
    }

    /// Select the drawing style by name
    pub fn set_style_by_name(&mut self, name: &str) -> Result<()> {
        let index = self.styles.index_of(name)?;
        self.set_style(index);
        Ok(())
    }

    /// Mirror left-for-right glyphs in the resolved style
    pub fn set_flip(&mut self, flip: bool) {
        self.flip = flip;
        self.rebuild_plotter();
    }

    fn rebuild_plotter(&mut self) {
        let style = self.styles.resolve(self.style_index, self.flip);
        debug!(
            style = self.styles.name(self.style_index),
            flip = self.flip,
            "Resolved drawing style"
        );
        self.plotter = Plotter::new(style);
    }

    pub fn plotter(&self) -> &Plotter {
        &self.plotter
    }

    /// Start a pointer drag at `pos`
    pub fn drag_begin(&mut self, pos: Pos) {
        let gesture_span = span!(Level::DEBUG, "drag_begin", tool = ?self.active, at = %pos);
        let _enter = gesture_span.enter();
        let mut ctx = ToolCtx {
            canvas: &mut self.canvas,
            plotter: &self.plotter,
        };
        match self.active {
            ToolKind::Freehand => self.freehand.on_drag_begin(&mut ctx, pos),
            ToolKind::Rectangle => self.rectangle.on_drag_begin(&mut ctx, pos),
            ToolKind::Line => self.line.on_drag_begin(&mut ctx, pos),
            ToolKind::Text => self.text.on_drag_begin(&mut ctx, pos),
            ToolKind::Table => self.table.on_drag_begin(&mut ctx, pos),
            ToolKind::Tree => self.tree.on_drag_begin(&mut ctx, pos),
            ToolKind::Fill => self.fill.on_drag_begin(&mut ctx, pos),
            ToolKind::Picker => self.picker.on_drag_begin(&mut ctx, pos),
            ToolKind::Select => self.select.on_drag_begin(&mut ctx, pos),
        }
    }

    /// Feed one pointer sample of an ongoing drag
    pub fn drag_update(&mut self, pos: Pos) {
        trace!(tool = ?self.active, at = %pos, "Drag sample");
        let mut ctx = ToolCtx {
            canvas: &mut self.canvas,
            plotter: &self.plotter,
        };
        match self.active {
            ToolKind::Freehand => self.freehand.on_drag_update(&mut ctx, pos),
            ToolKind::Rectangle => self.rectangle.on_drag_update(&mut ctx, pos),
            ToolKind::Line => self.line.on_drag_update(&mut ctx, pos),
            ToolKind::Text => self.text.on_drag_update(&mut ctx, pos),
            ToolKind::Table => self.table.on_drag_update(&mut ctx, pos),
            ToolKind::Tree => self.tree.on_drag_update(&mut ctx, pos),
            ToolKind::Fill => self.fill.on_drag_update(&mut ctx, pos),
            ToolKind::Picker => self.picker.on_drag_update(&mut ctx, pos),
            ToolKind::Select => self.select.on_drag_update(&mut ctx, pos),
        }
    }

    /// Finish a pointer drag at `pos`
    pub fn drag_end(&mut self, pos: Pos) {
        let gesture_span = span!(Level::DEBUG, "drag_end", tool = ?self.active, at = %pos);
        let _enter = gesture_span.enter();
        let mut ctx = ToolCtx {
            canvas: &mut self.canvas,
            plotter: &self.plotter,
        };
        match self.active {
            ToolKind::Freehand => self.freehand.on_drag_end(&mut ctx, pos),
            ToolKind::Rectangle => self.rectangle.on_drag_end(&mut ctx, pos),
            ToolKind::Line => self.line.on_drag_end(&mut ctx, pos),
            ToolKind::Text => self.text.on_drag_end(&mut ctx, pos),
            ToolKind::Table => self.table.on_drag_end(&mut ctx, pos),
            ToolKind::Tree => self.tree.on_drag_end(&mut ctx, pos),
            ToolKind::Fill => self.fill.on_drag_end(&mut ctx, pos),
            ToolKind::Picker => self.picker.on_drag_end(&mut ctx, pos),
            ToolKind::Select => self.select.on_drag_end(&mut ctx, pos),
        }
    }

    /// Deliver a click at `pos` with the given button
    pub fn click(&mut self, pos: Pos, button: ClickButton) {
        let gesture_span = span!(Level::DEBUG, "click", tool = ?self.active, at = %pos);
        let _enter = gesture_span.enter();
        let mut ctx = ToolCtx {
            canvas: &mut self.canvas,
            plotter: &self.plotter,
        };
        match self.active {
            ToolKind::Freehand => self.freehand.on_click(&mut ctx, pos, button),
            ToolKind::Rectangle => self.rectangle.on_click(&mut ctx, pos, button),
            ToolKind::Line => self.line.on_click(&mut ctx, pos, button),
            ToolKind::Text => self.text.on_click(&mut ctx, pos, button),
            ToolKind::Table => self.table.on_click(&mut ctx, pos, button),
            ToolKind::Tree => self.tree.on_click(&mut ctx, pos, button),
            ToolKind::Fill => self.fill.on_click(&mut ctx, pos, button),
            ToolKind::Picker => self.picker.on_click(&mut ctx, pos, button),
            ToolKind::Select => self.select.on_click(&mut ctx, pos, button),
        }
    }

    /// Commit the active anchor tool's pending block onto the draw layer
    ///
    /// Text, tree, and table place their content when the user confirms
    /// rather than on drag end; for every other tool this is a no-op.
    pub fn commit(&mut self) -> Result<()> {
        let mut ctx = ToolCtx {
            canvas: &mut self.canvas,
            plotter: &self.plotter,
        };
        match self.active {
            ToolKind::Text => self.text.commit(&mut ctx),
            ToolKind::Tree => self.tree.commit(&mut ctx),
            ToolKind::Table => self.table.commit(&mut ctx)?,
            _ => trace!(tool = ?self.active, "Commit is a no-op for this tool"),
        }
        Ok(())
    }

    pub fn undo(&mut self) -> Option<String> {
        self.canvas.undo()
    }

    pub fn redo(&mut self) -> Option<String> {
        self.canvas.redo()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.select.selection()
    }

    pub fn rectangle_mut(&mut self) -> &mut RectangleTool {
        &mut self.rectangle
    }

    pub fn line_mut(&mut self) -> &mut LineTool {
        &mut self.line
    }

    pub fn freehand_mut(&mut self) -> &mut FreehandTool {
        &mut self.freehand
    }

    pub fn text_mut(&mut self) -> &mut TextTool {
        &mut self.text
    }

    pub fn table_mut(&mut self) -> &mut TableTool {
        &mut self.table
    }

    pub fn tree_mut(&mut self) -> &mut TreeTool {
        &mut self.tree
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
