//! Table tool
//!
//! Lays out rows of cell text inside a bordered grid. Column widths follow
//! the widest cell in each column; dividers between rows are optional. The
//! table is anchored by a click, moved by drag, and committed explicitly, so
//! the model can be edited while the preview stays live.

use tracing::debug;

use crate::core::{CanvasError, ClickButton, Delta, Layer, Pos};
use crate::tools::{Tool, ToolCtx};

/// Which internal horizontal dividers a table draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DividerMode {
    /// One divider under the first row
    #[default]
    HeaderDivided,
    /// A divider under every row
    AllDivided,
    /// Border only
    Undivided,
}

/// Cell content and layout settings for one table
#[derive(Debug, Clone, Default)]
pub struct TableModel {
    pub rows: Vec<Vec<String>>,
    pub columns: usize,
    pub divider: DividerMode,
}

impl TableModel {
    pub fn new(rows: Vec<Vec<String>>, columns: usize, divider: DividerMode) -> Self {
        Self {
            rows,
            columns,
            divider,
        }
    }

    /// Widest cell per column; cells missing from short rows count zero
    pub fn column_widths(&self) -> Vec<usize> {
        (0..self.columns)
            .map(|c| {
                self.rows
                    .iter()
                    .map(|row| row.get(c).map_or(0, |cell| cell.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Total footprint of the rendered table in cells
    pub fn size(&self) -> (i32, i32) {
        let width = 1 + self
            .column_widths()
            .iter()
            .map(|w| *w as i32 + 1)
            .sum::<i32>();
        let rows = self.rows.len() as i32;
        let height = match self.divider {
            DividerMode::AllDivided => 1 + rows * 2,
            DividerMode::HeaderDivided if rows > 1 => 3 + rows,
            _ => 2 + rows,
        };
        (width, height)
    }

    /// A header divider needs a row below the header to separate
    fn draws_header_divider(&self) -> bool {
        self.divider == DividerMode::HeaderDivided && self.rows.len() > 1
    }

    fn validate(&self) -> Result<(), CanvasError> {
        if self.columns == 0 {
            return Err(CanvasError::layout_error(
                "table needs at least one column".to_string(),
            ));
        }
        if self.rows.is_empty() {
            return Err(CanvasError::layout_error(
                "table needs at least one row".to_string(),
            ));
        }
        Ok(())
    }
}

/// Renders an editable table model onto the canvas
#[derive(Debug, Clone, Default)]
pub struct TableTool {
    model: TableModel,
    anchor: Pos,
    drag: Delta,
    drag_start: Pos,
}

impl TableTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut TableModel {
        &mut self.model
    }

    pub fn set_model(&mut self, model: TableModel) {
        self.model = model;
    }

    /// Where the table currently sits, drag offset included
    pub fn position(&self) -> Pos {
        self.anchor + self.drag
    }

    /// Redraw the table on the preview layer at its current position
    ///
    /// A model that would not commit previews nothing.
    pub fn preview(&self, ctx: &mut ToolCtx<'_>) {
        ctx.canvas.clear_preview();
        if self.model.validate().is_ok() {
            self.render(ctx, self.position(), Layer::Preview);
        }
    }

    /// Stamp the table onto the draw layer as a "Table" change
    ///
    /// A model without rows or columns is rejected before anything is
    /// written, leaving both the grid and the history untouched.
    pub fn commit(&mut self, ctx: &mut ToolCtx<'_>) -> Result<(), CanvasError> {
        self.model.validate()?;
        let pos = self.position();
        let (width, height) = self.model.size();
        debug!(at = %pos, width, height, "Committing table");
        ctx.canvas.begin_change("Table");
        ctx.canvas.clear_preview();
        self.render(ctx, pos, Layer::Draw);
        Ok(())
    }

    fn render(&self, ctx: &mut ToolCtx<'_>, origin: Pos, layer: Layer) {
        let style = *ctx.plotter.style();
        let widths = self.model.column_widths();
        let (width, height) = self.model.size();

        for y in 0..height {
            for x in 0..width {
                ctx.canvas.set_char(origin.x + x, origin.y + y, ' ', layer);
            }
        }
        ctx.plotter
            .rectangle(ctx.canvas, layer, origin.x, origin.y, width, height);

        let mut x = origin.x;
        for &column_width in widths.iter().take(self.model.columns.saturating_sub(1)) {
            x += column_width as i32 + 1;
            ctx.plotter.vertical_line(
                ctx.canvas,
                layer,
                x,
                origin.y + 1,
                height - 2,
                style.right_vertical,
            );
            ctx.canvas
                .set_char(x, origin.y + height - 1, style.top_intersect, layer);
            ctx.canvas.set_char(x, origin.y, style.bottom_intersect, layer);
        }

        match self.model.divider {
            DividerMode::AllDivided => {
                let mut y = origin.y;
                for _ in 0..self.model.rows.len().saturating_sub(1) {
                    y += 2;
                    self.divider_row(ctx, layer, origin, width, y);
                }
            }
            DividerMode::HeaderDivided if self.model.draws_header_divider() => {
                self.divider_row(ctx, layer, origin, width, origin.y + 2);
            }
            _ => {}
        }

        let mut y = origin.y + 1;
        for (row_index, row) in self.model.rows.iter().enumerate() {
            let mut x = origin.x + 1;
            for (column, cell) in row.iter().take(self.model.columns).enumerate() {
                ctx.canvas.draw_text(x, y, cell, false, layer);
                x += widths[column] as i32 + 1;
            }
            y += match self.model.divider {
                DividerMode::AllDivided => 2,
                DividerMode::HeaderDivided if row_index == 0 && self.model.draws_header_divider() => 2,
                _ => 1,
            };
        }
    }

    /// Divider rows go through the line primitive so column verticals turn
    /// into crossings instead of being cut
    fn divider_row(&self, ctx: &mut ToolCtx<'_>, layer: Layer, origin: Pos, width: i32, y: i32) {
        let style = *ctx.plotter.style();
        ctx.plotter.horizontal_line(
            ctx.canvas,
            layer,
            y,
            origin.x + 1,
            width - 2,
            style.bottom_horizontal,
        );
        ctx.canvas.set_char(origin.x, y, style.right_intersect, layer);
        ctx.canvas
            .set_char(origin.x + width - 1, y, style.left_intersect, layer);
    }
}

impl Tool for TableTool {
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
