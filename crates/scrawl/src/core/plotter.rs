//! Line and shape plotting over a canvas layer
//!
//! The plotter owns one resolved [`StyleSet`] and writes through the canvas,
//! so clipping and undo recording always apply. Horizontal and vertical runs
//! substitute the style's crossing glyph where they meet an existing
//! perpendicular line, which is what keeps table dividers and overlapping
//! connectors readable.

use tracing::trace;

use crate::core::canvas::Canvas;
use crate::core::style::StyleSet;
use crate::core::types::{Delta, Layer, Pos};

/// Glyph plotting primitives for one resolved style
#[derive(Debug, Clone)]
pub struct Plotter {
    style: StyleSet,
}

impl Plotter {
    pub fn new(style: StyleSet) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &StyleSet {
        &self.style
    }

    /// Horizontal run of `glyph` starting at `(x, y)`
    ///
    /// A negative length walks backward, covering the cells left of `x`.
    /// Cells already holding this style's vertical glyphs become crossings,
    /// unless the style's crossing is blank.
    pub fn horizontal_line(
        &self,
        canvas: &mut Canvas,
        layer: Layer,
        y: i32,
        x: i32,
        length: i32,
        glyph: char,
    ) {
        let (start, len) = if length < 0 { (x + length, -length) } else { (x, length) };
        for i in 0..len {
            let cx = start + i;
            let prev = canvas.get_char(cx, y, layer);
            let c = if self.style.crossing != ' '
                && (prev == Some(self.style.left_vertical)
                    || prev == Some(self.style.right_vertical))
            {
                self.style.crossing
            } else {
                glyph
            };
            canvas.set_char(cx, y, c, layer);
        }
    }

    /// Vertical run of `glyph`; mirrors [`Self::horizontal_line`]
    pub fn vertical_line(
        &self,
        canvas: &mut Canvas,
        layer: Layer,
        x: i32,
        y: i32,
        length: i32,
        glyph: char,
    ) {
        let (start, len) = if length < 0 { (y + length, -length) } else { (y, length) };
        for i in 0..len {
            let cy = start + i;
            let prev = canvas.get_char(x, cy, layer);
            let c = if self.style.crossing != ' '
                && (prev == Some(self.style.top_horizontal)
                    || prev == Some(self.style.bottom_horizontal))
            {
                self.style.crossing
            } else {
                glyph
            };
            canvas.set_char(x, cy, c, layer);
        }
    }

    /// Outlined rectangle with `(x, y)` at the top-left corner
    ///
    /// Degenerate sizes (width or height of at most 1) draw nothing.
    pub fn rectangle(&self, canvas: &mut Canvas, layer: Layer, x: i32, y: i32, width: i32, height: i32) {
        if width <= 1 || height <= 1 {
            return;
        }
        trace!(x, y, width, height, "Plotting rectangle");
        self.horizontal_line(canvas, layer, y, x + 1, width - 2, self.style.top_horizontal);
        self.horizontal_line(
            canvas,
            layer,
            y + height - 1,
            x + 1,
            width - 2,
            self.style.bottom_horizontal,
        );
        self.vertical_line(canvas, layer, x, y + 1, height - 2, self.style.left_vertical);
        self.vertical_line(
            canvas,
            layer,
            x + width - 1,
            y + 1,
            height - 2,
            self.style.right_vertical,
        );
        canvas.set_char(x, y, self.style.top_left, layer);
        canvas.set_char(x + width - 1, y, self.style.top_right, layer);
        canvas.set_char(x + width - 1, y + height - 1, self.style.bottom_right, layer);
        canvas.set_char(x, y + height - 1, self.style.bottom_left, layer);
    }

    /// Fill every cell of the region with `glyph`
    pub fn filled_rectangle(
        &self,
        canvas: &mut Canvas,
        layer: Layer,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        glyph: char,
    ) {
        for dy in 0..height.max(0) {
            for dx in 0..width.max(0) {
                canvas.set_char(x + dx, y + dy, glyph, layer);
            }
        }
    }

    /// Single-corner connector from `(x, y)` to `(x + width, y + height)`
    ///
    /// `direction` is the dominant axis of recent pointer travel; it picks
    /// which of the two possible L-shapes is drawn. The optional arrowhead
    /// points along the final segment.
    pub fn corner_line(
        &self,
        canvas: &mut Canvas,
        layer: Layer,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        direction: Delta,
        arrow: bool,
    ) {
        trace!(x, y, width, height, "Plotting corner line");
        let s = &self.style;
        let horizontal_first = direction.dx.abs() == 1;

        if width > 0 && height > 0 {
            if horizontal_first {
                self.horizontal_line(canvas, layer, y + height, x + 1, width, s.bottom_horizontal);
                self.vertical_line(canvas, layer, x, y, height, s.left_vertical);
                canvas.set_char(x, y + height, s.bottom_left, layer);
                if arrow {
                    canvas.set_char(x + width, y + height, s.right_arrow, layer);
                }
            } else {
                self.horizontal_line(canvas, layer, y, x, width, s.top_horizontal);
                self.vertical_line(canvas, layer, x + width, y + 1, height, s.right_vertical);
                canvas.set_char(x + width, y, s.top_right, layer);
                if arrow {
                    canvas.set_char(x + width, y + height, s.down_arrow, layer);
                }
            }
        } else if width > 0 && height < 0 {
            if horizontal_first {
                self.horizontal_line(canvas, layer, y + height, x + 1, width, s.top_horizontal);
                self.vertical_line(canvas, layer, x, y + 1, height, s.left_vertical);
                canvas.set_char(x, y + height, s.top_left, layer);
                if arrow {
                    canvas.set_char(x + width, y + height, s.right_arrow, layer);
                }
            } else {
                self.horizontal_line(canvas, layer, y, x, width, s.bottom_horizontal);
                self.vertical_line(canvas, layer, x + width, y, height, s.right_vertical);
                canvas.set_char(x + width, y, s.bottom_right, layer);
                if arrow {
                    canvas.set_char(x + width, y + height, s.up_arrow, layer);
                }
            }
        } else if width < 0 && height > 0 {
            if horizontal_first {
                self.horizontal_line(canvas, layer, y + height, x, width, s.bottom_horizontal);
                self.vertical_line(canvas, layer, x, y, height, s.right_vertical);
                canvas.set_char(x, y + height, s.bottom_right, layer);
                if arrow {
                    canvas.set_char(x + width, y + height, s.left_arrow, layer);
                }
            } else {
                self.horizontal_line(canvas, layer, y, x + 1, width, s.top_horizontal);
                self.vertical_line(canvas, layer, x + width, y, height + 1, s.left_vertical);
                canvas.set_char(x + width, y, s.top_left, layer);
                if arrow {
                    canvas.set_char(x + width, y + height, s.down_arrow, layer);
                }
            }
        } else if width < 0 && height < 0 {
            if horizontal_first {
                self.horizontal_line(canvas, layer, y + height, x, width, s.top_horizontal);
                self.vertical_line(canvas, layer, x, y + 1, height, s.right_vertical);
                canvas.set_char(x, y + height, s.top_right, layer);
                if arrow {
                    canvas.set_char(x + width, y + height, s.left_arrow, layer);
                }
            } else {
                self.horizontal_line(canvas, layer, y, x + 1, width, s.bottom_horizontal);
                self.vertical_line(canvas, layer, x + width, y, height, s.left_vertical);
                canvas.set_char(x + width, y, s.bottom_left, layer);
                if arrow {
                    canvas.set_char(x + width, y + height, s.up_arrow, layer);
                }
            }
        }

        if width == 0 && height == 0 {
            if horizontal_first {
                canvas.set_char(x, y, s.top_horizontal, layer);
            } else {
                canvas.set_char(x, y, s.left_vertical, layer);
            }
        } else if width == 0 {
            if height < 0 {
                self.vertical_line(canvas, layer, x, y + 1, height - 1, s.left_vertical);
                if arrow {
                    canvas.set_char(x, y + height, s.up_arrow, layer);
                }
            } else {
                self.vertical_line(canvas, layer, x, y, height + 1, s.left_vertical);
                if arrow {
                    canvas.set_char(x, y + height, s.down_arrow, layer);
                }
            }
        } else if height == 0 {
            if width < 0 {
                self.horizontal_line(canvas, layer, y, x + 1, width - 1, s.bottom_horizontal);
                if arrow {
                    canvas.set_char(x + width, y, s.left_arrow, layer);
                }
            } else {
                self.horizontal_line(canvas, layer, y, x, width + 1, s.bottom_horizontal);
                if arrow {
                    canvas.set_char(x + width, y, s.right_arrow, layer);
                }
            }
        }
    }

    /// Staircase line from `(x, y)` to `(x + width, y + height)`
    ///
    /// Follows the Bresenham path with an explicit corner cell inserted at
    /// every diagonal step, each window of three cells rendered through
    /// [`Self::trace_step`] so corners pick the right glyphs.
    pub fn step_line(
        &self,
        canvas: &mut Canvas,
        layer: Layer,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arrow: bool,
    ) {
        trace!(x, y, width, height, "Plotting step line");
        let line = step_path(x, y, width, height);
        for i in 0..line.len().saturating_sub(2) {
            self.trace_step(canvas, layer, line[i + 2], line[i + 1], line[i]);
        }

        if arrow {
            let glyph = if width.abs() < height.abs() * 2 {
                if height > 0 {
                    self.style.down_arrow
                } else {
                    self.style.up_arrow
                }
            } else if width > 0 {
                self.style.right_arrow
            } else {
                self.style.left_arrow
            };
            if let Some(last) = line.last() {
                canvas.set_char(last.x, last.y, glyph, layer);
            }
        }
    }

    /// Render one freehand step given the two cells before it
    ///
    /// Places the body glyph at `new`, backfills skipped cells on fast
    /// horizontal travel, and rewrites `prev` with the corner glyph chosen
    /// from the turn between `prev_prev -> prev` and `prev -> new`.
    pub fn trace_step(&self, canvas: &mut Canvas, layer: Layer, new: Pos, prev: Pos, prev_prev: Pos) {
        if new == prev {
            return;
        }
        let s = &self.style;
        let delta = new - prev;
        let direction = delta.normalized();
        let prev_direction = prev - prev_prev;

        match (direction.dx, direction.dy) {
            (1, 0) | (-1, 0) => canvas.set_char(new.x, new.y, s.bottom_horizontal, layer),
            (0, 1) | (0, -1) => canvas.set_char(new.x, new.y, s.right_vertical, layer),
            _ => {}
        }

        match (direction.dx, direction.dy) {
            (1, 0) | (-1, 0) => {
                if delta.dx != direction.dx {
                    // Fast pointer travel skipped cells on this row
                    self.horizontal_line(
                        canvas,
                        layer,
                        new.y,
                        new.x - delta.dx,
                        delta.dx,
                        s.bottom_horizontal,
                    );
                }
                let corner = match (direction.dx, prev_direction.dx, prev_direction.dy) {
                    (1, 0, -1) => s.top_left,
                    (1, 0, 1) => s.bottom_left,
                    (-1, 0, -1) => s.top_right,
                    (-1, 0, 1) => s.bottom_right,
                    _ => s.bottom_horizontal,
                };
                canvas.set_char(prev.x, prev.y, corner, layer);
            }
            (0, -1) => {
                let corner = match (prev_direction.dx, prev_direction.dy) {
                    (1, 0) => s.bottom_right,
                    (-1, 0) => s.bottom_left,
                    _ => s.right_vertical,
                };
                canvas.set_char(prev.x, prev.y, corner, layer);
            }
            (0, 1) => {
                let corner = match (prev_direction.dx, prev_direction.dy) {
                    (1, 0) => s.top_right,
                    (-1, 0) => s.top_left,
                    _ => s.right_vertical,
                };
                canvas.set_char(prev.x, prev.y, corner, layer);
            }
            _ => {}
        }
    }
}

/// Bresenham path with corner cells inserted at diagonal steps
fn step_path(start_x: i32, start_y: i32, width: i32, height: i32) -> Vec<Pos> {
    let end_x = start_x + width;
    let end_y = start_y + height;
    let delta_x = (end_x - start_x).abs();
    let delta_y = (end_y - start_y).abs();
    let step_x = if start_x < end_x { 1 } else { -1 };
    let step_y = if start_y < end_y { 1 } else { -1 };
    let mut error = delta_x - delta_y;

    let (mut x, mut y) = (start_x, start_y);
    let mut coords = vec![Pos::new(x, y)];
    let mut index = 0;

    while !(x == end_x && y == end_y) {
        let error_2 = 2 * error;
        if error_2 > -delta_y {
            error -= delta_y;
            x += step_x;
        }
        if error_2 < delta_x {
            error += delta_x;
            y += step_y;
        }
        if (x - coords[index].x).abs() == 1 && (y - coords[index].y).abs() == 1 {
            coords.push(Pos::new(x, coords[index].y));
            index += 1;
        }
        coords.push(Pos::new(x, y));
        index += 1;
    }

    coords
}
