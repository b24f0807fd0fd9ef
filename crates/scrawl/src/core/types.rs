//! Shared geometry and layer types for the canvas engine

use std::fmt;
use std::ops::{Add, Sub};

/// A cell coordinate on the canvas
///
/// Coordinates are signed so pointer gestures can travel outside the grid;
/// reads and writes clip at the canvas boundary instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Sub for Pos {
    type Output = Delta;

    fn sub(self, rhs: Pos) -> Delta {
        Delta {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

impl Add<Delta> for Pos {
    type Output = Pos;

    fn add(self, rhs: Delta) -> Pos {
        Pos {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

/// Difference between two cell positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

impl Delta {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Per-axis rounded normalization onto the unit grid
    ///
    /// Each component is divided by the vector magnitude and rounded, so the
    /// dominant axis survives and the weaker one drops to zero unless the
    /// travel is close to diagonal.
    pub fn normalized(self) -> Delta {
        let magnitude = f64::from(self.dx * self.dx + self.dy * self.dy).sqrt();
        if magnitude == 0.0 {
            return Delta::default();
        }
        Delta {
            dx: (f64::from(self.dx) / magnitude).round() as i32,
            dy: (f64::from(self.dy) / magnitude).round() as i32,
        }
    }

    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Which canvas layer an operation targets
///
/// The draw layer is the document; writes there are recorded for undo. The
/// preview layer is transient feedback that is wiped between pointer samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layer {
    #[default]
    Draw,
    Preview,
}

/// Pointer button that triggered a click gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickButton {
    #[default]
    Primary,
    Secondary,
}
