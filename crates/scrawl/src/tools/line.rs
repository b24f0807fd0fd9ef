//! Line drawing tool
//!
//! One tool covers the three line variants: a single-corner connector whose
//! elbow follows the dominant axis of recent pointer travel, a staircase line
//! along the Bresenham path, and a live freehand trace. The first two preview
//! during the drag and commit on release; the freehand variant writes to the
//! draw layer as the pointer moves, inside a change opened at drag begin.

use tracing::debug;

use crate::core::{Delta, FreehandTracer, Layer, Pos};
use crate::tools::{Tool, ToolCtx};

/// Which line variant the tool draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineKind {
    /// Two perpendicular segments joined by one corner
    #[default]
    Cartesian,
    /// Staircase along the straight path between the endpoints
    Step,
    /// Direct per-cell trace of the pointer path
    Freehand,
}

impl LineKind {
    /// The change name shown in undo tooltips
    pub fn change_name(self) -> &'static str {
        match self {
            LineKind::Cartesian => "Cartesian Line",
            LineKind::Step => "Step Line",
            LineKind::Freehand => "Freehand Line",
        }
    }
}

/// Drag-to-draw line tool
#[derive(Debug, Default)]
pub struct LineTool {
    kind: LineKind,
    arrow: bool,
    start: Pos,
    prev_sample: Pos,
    direction: Delta,
    tracer: FreehandTracer,
}

impl LineTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: LineKind) {
        self.kind = kind;
    }

    pub fn arrow(&self) -> bool {
        self.arrow
    }

    pub fn set_arrow(&mut self, arrow: bool) {
        self.arrow = arrow;
    }
}

impl Tool for LineTool {
    fn on_drag_begin(&mut self, ctx: &mut ToolCtx<'_>, pos: Pos) {
        self.start = pos;
        self.prev_sample = pos;
        self.direction = Delta::default();
        if self.kind == LineKind::Freehand {
            ctx.canvas.begin_change(LineKind::Freehand.change_name());
            self.tracer.begin(pos);
        }
    }

    fn on_drag_update(&mut self, ctx: &mut ToolCtx<'_>, pos: Pos) {
        let width = pos.x - self.start.x;
        let height = pos.y - self.start.y;

        // Remember which way the pointer last actually moved; repeated
        // samples in the same cell keep the previous heading
        let moved = (pos - self.prev_sample).normalized();
        if !moved.is_zero() {
            self.direction = moved;
        }
        self.prev_sample = pos;

        match self.kind {
            LineKind::Cartesian => {
                ctx.canvas.clear_preview();
                ctx.plotter.corner_line(
                    ctx.canvas,
                    Layer::Preview,
                    self.start.x,
                    self.start.y,
                    width,
                    height,
                    self.direction,
                    self.arrow,
                );
            }
            LineKind::Step => {
                ctx.canvas.clear_preview();
                ctx.plotter.step_line(
                    ctx.canvas,
                    Layer::Preview,
                    self.start.x,
                    self.start.y,
                    width,
                    height,
                    self.arrow,
                );
            }
            LineKind::Freehand => {
                self.tracer.advance(ctx.plotter, ctx.canvas, Layer::Draw, pos);
            }
        }
    }

    fn on_drag_end(&mut self, ctx: &mut ToolCtx<'_>, pos: Pos) {
        ctx.canvas.clear_preview();
        let width = pos.x - self.start.x;
        let height = pos.y - self.start.y;
        debug!(kind = ?self.kind, width, height, "Line drag finished");

        match self.kind {
            LineKind::Cartesian => {
                ctx.canvas.begin_change(LineKind::Cartesian.change_name());
                ctx.plotter.corner_line(
                    ctx.canvas,
                    Layer::Draw,
                    self.start.x,
                    self.start.y,
                    width,
                    height,
                    self.direction,
                    self.arrow,
                );
            }
            LineKind::Step => {
                ctx.canvas.begin_change(LineKind::Step.change_name());
                ctx.plotter.step_line(
                    ctx.canvas,
                    Layer::Draw,
                    self.start.x,
                    self.start.y,
                    width,
                    height,
                    self.arrow,
                );
            }
            LineKind::Freehand => {
                self.tracer.reset();
            }
        }
    }
}
