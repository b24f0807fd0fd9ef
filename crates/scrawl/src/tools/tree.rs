//! Tree diagram tool
//!
//! Turns an indented block of text into a box-drawing tree. Leading spaces
//! encode nesting relative to the neighbouring lines rather than a fixed tab
//! width, so two-space and four-space input resolve to the same shape. The
//! block is anchored by a click and can be dragged into place before it is
//! committed.

use tracing::debug;

use crate::core::{ClickButton, Delta, Layer, Pos};
use crate::tools::{Tool, ToolCtx};

/// Cells of horizontal space per nesting level
const LEVEL_WIDTH: i32 = 4;

/// One line of tree input with its resolved nesting depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub level: usize,
    pub text: String,
}

/// Resolve each line's nesting depth from its leading spaces
///
/// Depth is relative: a deeper indent than the previous line goes one level
/// down, an equal indent is a sibling, and a shallower indent walks back
/// through the already-resolved lines to find the enclosing ancestor. The
/// walk snaps to a recorded level whenever a deeper spacing reappears and
/// steps a level up at each strictly shallower spacing, so uneven indent
/// widths still nest consistently.
pub fn resolve_indents(text: &str) -> Vec<TreeNode> {
    let mut nodes: Vec<TreeNode> = Vec::new();
    let mut leading_spaces: Vec<usize> = Vec::new();
    let mut current_level: i32 = 0;

    for line in text.split('\n') {
        let stripped = line.trim_start_matches(' ');
        let spaces = line.len() - stripped.len();
        let mut level = current_level;
        if let Some(&last) = leading_spaces.last() {
            if spaces > last {
                level = current_level + 1;
            } else if spaces < last {
                let mut previous_spaces = 0;
                level = current_level - 1;
                // The walk only examines lines after the first, so a return
                // to the left margin resolves next to the first child rather
                // than next to the root line.
                for i in (1..leading_spaces.len()).rev() {
                    if leading_spaces[i] < spaces {
                        break;
                    }
                    if leading_spaces[i] < previous_spaces {
                        level -= 1;
                        previous_spaces = leading_spaces[i];
                    } else if leading_spaces[i] > previous_spaces {
                        level = nodes[i].level as i32;
                        previous_spaces = leading_spaces[i];
                    }
                }
            }
        }
        // A first line that is itself indented can drive the arithmetic
        // below zero; treat it as a root.
        let level = level.max(0);
        current_level = level;
        leading_spaces.push(spaces);
        nodes.push(TreeNode {
            level: level as usize,
            text: stripped.to_string(),
        });
    }
    nodes
}

/// Renders indented text as a connected tree diagram
#[derive(Debug, Clone, Default)]
pub struct TreeTool {
    text: String,
    anchor: Pos,
    drag: Delta,
    drag_start: Pos,
}

impl TreeTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Where the tree currently sits, drag offset included
    pub fn position(&self) -> Pos {
        self.anchor + self.drag
    }

    /// Redraw the tree on the preview layer at its current position
    pub fn preview(&self, ctx: &mut ToolCtx<'_>) {
        ctx.canvas.clear_preview();
        self.render(ctx, self.position(), Layer::Preview);
    }

    /// Stamp the tree onto the draw layer as a "Tree" change
    ///
    /// An empty block commits nothing and leaves the history untouched.
    pub fn commit(&mut self, ctx: &mut ToolCtx<'_>) {
        if self.text.is_empty() {
            return;
        }
        let pos = self.position();
        let nodes = resolve_indents(&self.text);
        debug!(at = %pos, lines = nodes.len(), "Committing tree");
        ctx.canvas.begin_change("Tree");
        ctx.canvas.clear_preview();
        self.render(ctx, pos, Layer::Draw);
    }

    fn render(&self, ctx: &mut ToolCtx<'_>, origin: Pos, layer: Layer) {
        let nodes = resolve_indents(&self.text);
        let style = *ctx.plotter.style();
        for (index, node) in nodes.iter().enumerate() {
            let x = origin.x + node.level as i32 * LEVEL_WIDTH;
            let y = origin.y + index as i32;
            ctx.canvas.draw_text(x, y, &node.text, false, layer);
            if node.level == 0 {
                continue;
            }

            ctx.canvas.set_char(x - 1, y, ' ', layer);
            ctx.canvas.set_char(x - 2, y, style.bottom_horizontal, layer);
            ctx.canvas.set_char(x - 3, y, style.bottom_horizontal, layer);
            ctx.canvas.set_char(x - 4, y, style.bottom_left, layer);

            // Extend the branch upward until the parent row, turning earlier
            // siblings into tee junctions and passing straight through rows
            // that belong to deeper subtrees.
            let mut prev = index as i32 - 1;
            while prev >= 0 && nodes[prev as usize].level != node.level - 1 {
                let glyph = if nodes[prev as usize].level == node.level {
                    style.right_intersect
                } else {
                    style.left_vertical
                };
                ctx.canvas
                    .set_char(x - 4, y - (index as i32 - prev), glyph, layer);
                prev -= 1;
            }
        }
    }
}

impl Tool for TreeTool {
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
