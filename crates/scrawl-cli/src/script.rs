//! JSON drawing scripts
//!
//! A script is a JSON array of operations replayed against an editor in
//! order: shape drags, text stamps, style switches, history steps. Shapes
//! take endpoints rather than pointer samples, so every operation maps onto
//! one editor gesture.
//!
//! ```json
//! [
//!   {"op": "rect", "from": [2, 1], "to": [20, 6]},
//!   {"op": "text", "at": [4, 3], "text": "parser"},
//!   {"op": "line", "from": [20, 3], "to": [30, 3], "arrow": true}
//! ]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use scrawl::core::{ClickButton, Layer, Pos};
use scrawl::tools::{DividerMode, Editor, LineKind, RectMode, TableModel, ToolKind};

/// A parsed drawing script
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct Script {
    ops: Vec<Op>,
}

/// One drawing operation
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Outline or filled rectangle between two corners
    Rect {
        from: [i32; 2],
        to: [i32; 2],
        #[serde(default)]
        filled: bool,
    },
    /// Line between two endpoints
    Line {
        from: [i32; 2],
        to: [i32; 2],
        #[serde(default)]
        kind: LineChoice,
        #[serde(default)]
        arrow: bool,
    },
    /// Freehand stroke through the listed points
    Path {
        points: Vec<[i32; 2]>,
        #[serde(default)]
        erase: bool,
        #[serde(default)]
        brush: Option<usize>,
    },
    /// Write text with its top-left corner at a position
    Text {
        at: [i32; 2],
        text: String,
        #[serde(default)]
        transparent: bool,
    },
    /// Render an indented outline as a connector tree
    Tree { at: [i32; 2], text: String },
    /// Render rows of cells as a bordered table
    Table {
        at: [i32; 2],
        rows: Vec<Vec<String>>,
        columns: usize,
        #[serde(default)]
        divider: DividerChoice,
    },
    /// Flood fill the region under a seed cell
    Fill {
        at: [i32; 2],
        #[serde(default)]
        secondary: bool,
    },
    /// Select a region and drag its content elsewhere
    Move {
        from: [i32; 2],
        extent: [i32; 2],
        by: [i32; 2],
    },
    /// Switch the active box-drawing style
    Style {
        name: String,
        #[serde(default)]
        flip: bool,
    },
    /// Change the primary (or secondary) brush glyph
    Glyph {
        glyph: char,
        #[serde(default)]
        secondary: bool,
    },
    /// Resize the canvas, preserving overlapping content
    Resize { width: usize, height: usize },
    /// Wipe the drawing layer
    Clear,
    /// Revert the most recent change
    Undo,
    /// Reapply the change undone last
    Redo,
}

/// Line routing choices, mirroring the engine's line kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineChoice {
    #[default]
    Cartesian,
    Step,
    Freehand,
}

impl From<LineChoice> for LineKind {
    fn from(value: LineChoice) -> Self {
        match value {
            LineChoice::Cartesian => LineKind::Cartesian,
            LineChoice::Step => LineKind::Step,
            LineChoice::Freehand => LineKind::Freehand,
        }
    }
}

/// Table divider choices, mirroring the engine's divider modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DividerChoice {
    /// Divider under the first row only
    #[default]
    Header,
    /// Divider between every row
    All,
    /// Border only
    None,
}

impl From<DividerChoice> for DividerMode {
    fn from(value: DividerChoice) -> Self {
        match value {
            DividerChoice::Header => DividerMode::HeaderDivided,
            DividerChoice::All => DividerMode::AllDivided,
            DividerChoice::None => DividerMode::Undivided,
        }
    }
}

impl Script {
    /// Parse a script from JSON text
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse drawing script")
    }

    /// Number of operations in the script
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Replay every operation against the editor, in order
    pub fn apply(&self, editor: &mut Editor) -> Result<()> {
        for (index, op) in self.ops.iter().enumerate() {
            debug!(index = index + 1, total = self.ops.len(), "Applying operation");
            apply_op(editor, op).with_context(|| format!("operation {} failed", index + 1))?;
        }
        Ok(())
    }
}

fn apply_op(editor: &mut Editor, op: &Op) -> Result<()> {
    match op {
        Op::Rect { from, to, filled } => {
            let mode = if *filled {
                RectMode::Filled
            } else {
                RectMode::Outline
            };
            editor.rectangle_mut().set_mode(mode);
            editor.set_active_tool(ToolKind::Rectangle);
            drag(editor, pos(*from), pos(*to));
        }
        Op::Line {
            from,
            to,
            kind,
            arrow,
        } => {
            editor.line_mut().set_kind((*kind).into());
            editor.line_mut().set_arrow(*arrow);
            editor.set_active_tool(ToolKind::Line);
            drag(editor, pos(*from), pos(*to));
        }
        Op::Path {
            points,
            erase,
            brush,
        } => {
            let Some((first, rest)) = points.split_first() else {
                return Ok(());
            };
            editor.freehand_mut().set_eraser(*erase);
            if let Some(size) = brush {
                editor.freehand_mut().set_brush_size(*size);
            }
            editor.set_active_tool(ToolKind::Freehand);
            editor.drag_begin(pos(*first));
            for point in rest {
                editor.drag_update(pos(*point));
            }
            let last = rest.last().unwrap_or(first);
            editor.drag_end(pos(*last));
        }
        Op::Text {
            at,
            text,
            transparent,
        } => {
            editor.text_mut().set_text(text.clone());
            editor.text_mut().set_transparent(*transparent);
            editor.set_active_tool(ToolKind::Text);
            editor.click(pos(*at), ClickButton::Primary);
            editor.commit()?;
        }
        Op::Tree { at, text } => {
            editor.tree_mut().set_text(text.clone());
            editor.set_active_tool(ToolKind::Tree);
            editor.click(pos(*at), ClickButton::Primary);
            editor.commit()?;
        }
        Op::Table {
            at,
            rows,
            columns,
            divider,
        } => {
            editor
                .table_mut()
                .set_model(TableModel::new(rows.clone(), *columns, (*divider).into()));
            editor.set_active_tool(ToolKind::Table);
            editor.click(pos(*at), ClickButton::Primary);
            editor.commit()?;
        }
        Op::Fill { at, secondary } => {
            let button = if *secondary {
                ClickButton::Secondary
            } else {
                ClickButton::Primary
            };
            editor.set_active_tool(ToolKind::Fill);
            editor.click(pos(*at), button);
        }
        Op::Move { from, extent, by } => {
            editor.set_active_tool(ToolKind::Select);
            let start = pos(*from);
            let corner = Pos::new(from[0] + extent[0], from[1] + extent[1]);
            drag(editor, start, corner);
            // The region's own corner is always inside the selection frame,
            // so a second drag from there lifts the content
            let target = Pos::new(from[0] + by[0], from[1] + by[1]);
            drag(editor, start, target);
        }
        Op::Style { name, flip } => {
            editor.set_style_by_name(name)?;
            editor.set_flip(*flip);
        }
        Op::Glyph { glyph, secondary } => {
            if *secondary {
                editor.canvas_mut().set_secondary_char(*glyph);
            } else {
                editor.canvas_mut().set_primary_char(*glyph);
            }
        }
        Op::Resize { width, height } => {
            editor.canvas_mut().resize(*width, *height);
        }
        Op::Clear => {
            editor.canvas_mut().clear(Layer::Draw);
        }
        Op::Undo => {
            if editor.undo().is_none() {
                warn!("Nothing to undo");
            }
        }
        Op::Redo => {
            if editor.redo().is_none() {
                warn!("Nothing to redo");
            }
        }
    }
    Ok(())
}

fn pos(point: [i32; 2]) -> Pos {
    Pos::new(point[0], point[1])
}

/// One begin/update/end gesture between two points
fn drag(editor: &mut Editor, from: Pos, to: Pos) {
    editor.drag_begin(from);
    editor.drag_update(to);
    editor.drag_end(to);
}
