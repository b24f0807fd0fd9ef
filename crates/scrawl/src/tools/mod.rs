//! Interactive drawing tools and the editor facade
//!
//! Every tool implements the shared [`Tool`] gesture interface; the
//! [`Editor`] owns one instance of each and routes pointer gestures to
//! whichever tool is active. Tools draw through a [`ToolCtx`], which carries
//! the canvas and the plotter for the currently resolved style.

use crate::core::{Canvas, ClickButton, Plotter, Pos};

pub mod editor;
pub mod fill;
pub mod freehand;
pub mod line;
pub mod picker;
pub mod rectangle;
pub mod select;
pub mod table;
pub mod text;
pub mod tree;

pub use editor::*;
pub use fill::*;
pub use freehand::*;
pub use line::*;
pub use picker::*;
pub use rectangle::*;
pub use select::*;
pub use table::*;
pub use text::*;
pub use tree::*;

/// Everything a tool touches while handling one gesture event
pub struct ToolCtx<'a> {
    pub canvas: &'a mut Canvas,
    pub plotter: &'a Plotter,
}

/// Common gesture interface shared by every tool
///
/// Handlers default to doing nothing, so each tool implements only the
/// gestures it responds to. Drag handlers receive positions in cell
/// coordinates; clicks also carry the pointer button.
pub trait Tool {
    fn on_drag_begin(&mut self, _ctx: &mut ToolCtx<'_>, _pos: Pos) {}

    fn on_drag_update(&mut self, _ctx: &mut ToolCtx<'_>, _pos: Pos) {}

    fn on_drag_end(&mut self, _ctx: &mut ToolCtx<'_>, _pos: Pos) {}

    fn on_click(&mut self, _ctx: &mut ToolCtx<'_>, _pos: Pos, _button: ClickButton) {}
}

/// The closed set of tools the editor can activate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Freehand,
    Rectangle,
    Line,
    Text,
    Table,
    Tree,
    Fill,
    Picker,
    Select,
}
