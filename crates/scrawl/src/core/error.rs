//! Core error types for canvas composition
//!
//! Drawing primitives are total over coordinates and never fail; errors are
//! reserved for malformed layout input, unknown style names, and IO.

use thiserror::Error;

/// Errors surfaced by layout and persistence operations
#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("Layout error: {message}")]
    LayoutError { message: String },

    #[error("Unknown style: {name}")]
    UnknownStyle { name: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl CanvasError {
    /// Create a new layout error
    pub fn layout_error(message: String) -> Self {
        Self::LayoutError { message }
    }

    /// Create a new unknown-style error
    pub fn unknown_style(name: String) -> Self {
        Self::UnknownStyle { name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error() {
        let error = CanvasError::layout_error("table needs at least one column".to_string());
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Layout error"));
        assert!(error_msg.contains("at least one column"));
    }

    #[test]
    fn test_unknown_style() {
        let error = CanvasError::unknown_style("wiggly".to_string());
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Unknown style"));
        assert!(error_msg.contains("wiggly"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: CanvasError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }
}
