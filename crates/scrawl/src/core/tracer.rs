//! Freehand line tracing state
//!
//! A drag gesture arrives as one cell position per pointer sample. The
//! tracer keeps the last two distinct cells and feeds each new sample
//! through [`Plotter::trace_step`], which turns the travel direction and the
//! previous direction into body and corner glyphs.

use crate::core::canvas::Canvas;
use crate::core::plotter::Plotter;
use crate::core::types::{Layer, Pos};

/// Per-gesture state for freehand line drawing
#[derive(Debug, Default)]
pub struct FreehandTracer {
    prev: Option<Pos>,
    prev_char: Option<Pos>,
}

impl FreehandTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prime the tracer at the gesture's start cell
    pub fn begin(&mut self, pos: Pos) {
        self.prev = Some(pos);
        self.prev_char = Some(pos);
    }

    /// Feed one pointer sample
    ///
    /// Samples landing on the previous cell are ignored. The first sample of
    /// an un-begun gesture only primes state.
    pub fn advance(&mut self, plotter: &Plotter, canvas: &mut Canvas, layer: Layer, pos: Pos) {
        if self.prev == Some(pos) {
            return;
        }
        match self.prev {
            None => {
                self.prev = Some(pos);
                self.prev_char = Some(pos);
            }
            Some(prev) => {
                let prev_prev = self.prev_char.unwrap_or(prev);
                plotter.trace_step(canvas, layer, pos, prev, prev_prev);
                self.prev_char = Some(prev);
                self.prev = Some(pos);
            }
        }
    }

    /// Forget the gesture; the next sample starts fresh
    pub fn reset(&mut self) {
        self.prev = None;
        self.prev_char = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::style::StyleSet;

    fn setup() -> (Canvas, Plotter, FreehandTracer) {
        let mut canvas = Canvas::with_size(16, 16);
        canvas.begin_change("Freehand Line");
        (canvas, Plotter::new(StyleSet::thin()), FreehandTracer::new())
    }

    #[test]
    fn test_right_then_down_turn() {
        let (mut canvas, plotter, mut tracer) = setup();
        tracer.begin(Pos::new(0, 0));
        tracer.advance(&plotter, &mut canvas, Layer::Draw, Pos::new(1, 0));
        tracer.advance(&plotter, &mut canvas, Layer::Draw, Pos::new(1, 1));
        // The turn cell flips from a body glyph to the corner
        assert_eq!(canvas.get_char(1, 0, Layer::Draw), Some('┐'));
        assert_eq!(canvas.get_char(0, 0, Layer::Draw), Some('─'));
        assert_eq!(canvas.get_char(1, 1, Layer::Draw), Some('│'));
    }

    #[test]
    fn test_down_then_right_turn() {
        let (mut canvas, plotter, mut tracer) = setup();
        tracer.begin(Pos::new(3, 0));
        tracer.advance(&plotter, &mut canvas, Layer::Draw, Pos::new(3, 1));
        tracer.advance(&plotter, &mut canvas, Layer::Draw, Pos::new(4, 1));
        assert_eq!(canvas.get_char(3, 1, Layer::Draw), Some('└'));
        assert_eq!(canvas.get_char(4, 1, Layer::Draw), Some('─'));
    }

    #[test]
    fn test_left_then_up_turn() {
        let (mut canvas, plotter, mut tracer) = setup();
        tracer.begin(Pos::new(5, 5));
        tracer.advance(&plotter, &mut canvas, Layer::Draw, Pos::new(4, 5));
        tracer.advance(&plotter, &mut canvas, Layer::Draw, Pos::new(4, 4));
        // Up after left: the turn cell takes the bottom-left corner
        assert_eq!(canvas.get_char(4, 5, Layer::Draw), Some('└'));
        assert_eq!(canvas.get_char(4, 4, Layer::Draw), Some('│'));
    }

    #[test]
    fn test_straight_run_keeps_body_glyphs() {
        let (mut canvas, plotter, mut tracer) = setup();
        tracer.begin(Pos::new(0, 2));
        for x in 1..5 {
            tracer.advance(&plotter, &mut canvas, Layer::Draw, Pos::new(x, 2));
        }
        for x in 0..5 {
            assert_eq!(canvas.get_char(x, 2, Layer::Draw), Some('─'));
        }
    }

    #[test]
    fn test_repeated_sample_is_ignored() {
        let (mut canvas, plotter, mut tracer) = setup();
        tracer.begin(Pos::new(0, 0));
        tracer.advance(&plotter, &mut canvas, Layer::Draw, Pos::new(0, 0));
        assert_eq!(canvas.grid(Layer::Draw).occupied_cells(), 0);
    }

    #[test]
    fn test_unbegun_first_sample_only_primes() {
        let (mut canvas, plotter, mut tracer) = setup();
        tracer.advance(&plotter, &mut canvas, Layer::Draw, Pos::new(2, 2));
        assert_eq!(canvas.grid(Layer::Draw).occupied_cells(), 0);
        tracer.advance(&plotter, &mut canvas, Layer::Draw, Pos::new(3, 2));
        assert_eq!(canvas.get_char(3, 2, Layer::Draw), Some('─'));
    }

    #[test]
    fn test_reset_forgets_the_gesture() {
        let (mut canvas, plotter, mut tracer) = setup();
        tracer.begin(Pos::new(0, 0));
        tracer.advance(&plotter, &mut canvas, Layer::Draw, Pos::new(1, 0));
        tracer.reset();
        // After reset the next sample must not connect back to (1,0)
        tracer.advance(&plotter, &mut canvas, Layer::Draw, Pos::new(5, 5));
        assert_eq!(canvas.get_char(5, 5, Layer::Draw), Some(' '));
    }
}
