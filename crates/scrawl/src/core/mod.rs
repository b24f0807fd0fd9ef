//! Core building blocks of the canvas engine
//!
//! This module holds the character grid, the two-layer canvas, the change log,
//! box-drawing styles, and the line plotting primitives that the tools build on.

mod canvas;
mod error;
mod grid;
mod history;
pub mod logging;
mod plotter;
mod style;
mod text;
mod tracer;
mod types;

pub use canvas::*;
pub use error::*;
pub use grid::*;
pub use history::*;
pub use logging::*;
pub use plotter::*;
pub use style::*;
pub use text::*;
pub use tracer::*;
pub use types::*;
