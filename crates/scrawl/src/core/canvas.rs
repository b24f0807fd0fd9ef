//! Two-layer drawing canvas with undo recording
//!
//! The canvas pairs a draw layer (the document) with a preview layer
//! (transient gesture feedback). Both layers are always the same size. Draw
//! writes record the overwritten value into the open [`ChangeLog`] change;
//! preview writes are tracked as dirty cells so clearing between pointer
//! samples touches only what was painted.

use std::fmt;

use tracing::{debug, info, trace, warn};
use unicode_width::UnicodeWidthChar;

use crate::core::grid::CharGrid;
use crate::core::history::ChangeLog;
use crate::core::text::pad_block;
use crate::core::types::Layer;

/// Size of a freshly created canvas
pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_HEIGHT: usize = 25;

/// Hard canvas size limits; loads and resizes clamp to these
pub const MAX_WIDTH: usize = 100;
pub const MAX_HEIGHT: usize = 50;

/// Dirty-cell count beyond which preview clearing fans out to threads
#[cfg(feature = "parallel-preview")]
const PARALLEL_CLEAR_THRESHOLD: usize = 100;

/// Two-layer character canvas with undo history and glyph slots
#[derive(Debug)]
pub struct Canvas {
    draw: CharGrid,
    preview: CharGrid,
    history: ChangeLog,
    preview_dirty: Vec<(i32, i32)>,
    primary_char: char,
    secondary_char: char,
    primary_selected: bool,
}

impl Canvas {
    /// Create a canvas at the default document size
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a canvas with explicit dimensions, clamped to the hard limits
    pub fn with_size(width: usize, height: usize) -> Self {
        let width = width.clamp(1, MAX_WIDTH);
        let height = height.clamp(1, MAX_HEIGHT);
        Self {
            draw: CharGrid::new(width, height),
            preview: CharGrid::new(width, height),
            history: ChangeLog::new(),
            preview_dirty: Vec::new(),
            primary_char: '#',
            secondary_char: '+',
            primary_selected: true,
        }
    }

    pub fn width(&self) -> usize {
        self.draw.width()
    }

    pub fn height(&self) -> usize {
        self.draw.height()
    }

    /// Read access to one layer's grid
    pub fn grid(&self, layer: Layer) -> &CharGrid {
        match layer {
            Layer::Draw => &self.draw,
            Layer::Preview => &self.preview,
        }
    }

    /// Read one cell; `None` outside the canvas
    pub fn get_char(&self, x: i32, y: i32, layer: Layer) -> Option<char> {
        self.grid(layer).get(x, y)
    }

    /// Write one cell, silently clipped at the canvas edge
    ///
    /// Draw-layer writes record the overwritten value into the open change;
    /// preview writes mark the cell dirty for the next preview clear.
    pub fn set_char(&mut self, x: i32, y: i32, c: char, layer: Layer) {
        match layer {
            Layer::Draw => {
                if let Some(prev) = self.draw.get(x, y) {
                    self.history.record(x, y, prev);
                    self.draw.set(x, y, c);
                }
            }
            Layer::Preview => {
                if self.preview.set(x, y, c).is_some() {
                    self.preview_dirty.push((x, y));
                }
            }
        }
    }

    /// Place a multi-line text block with its top-left corner at `(x, y)`
    ///
    /// Lines are padded to the longest line, so an opaque stamp clears the
    /// block's whole bounding box. With `transparent` set, source spaces are
    /// skipped and underlying content shows through.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, transparent: bool, layer: Layer) {
        let block = pad_block(text);
        let wide = block
            .iter()
            .flatten()
            .filter(|&&c| UnicodeWidthChar::width(c).unwrap_or(1) != 1)
            .count();
        if wide > 0 {
            warn!(wide, "Text block contains glyphs wider than one column; rows may shear");
        }
        for (dy, row) in block.iter().enumerate() {
            for (dx, &c) in row.iter().enumerate() {
                if transparent && c == ' ' {
                    continue;
                }
                self.set_char(x + dx as i32, y + dy as i32, c, layer);
            }
        }
    }

    /// Wipe a layer
    ///
    /// Wiping the draw layer is a user action and lands in the change log as
    /// "Clear Screen"; wiping the preview only touches dirty cells.
    pub fn clear(&mut self, layer: Layer) {
        match layer {
            Layer::Draw => {
                self.history.begin("Clear Screen");
                for y in 0..self.draw.height() as i32 {
                    for x in 0..self.draw.width() as i32 {
                        if self.draw.get(x, y) != Some(' ') {
                            self.set_char(x, y, ' ', Layer::Draw);
                        }
                    }
                }
                info!("Cleared draw layer");
            }
            Layer::Preview => self.clear_preview(),
        }
    }

    /// Wipe every cell painted on the preview since the last clear
    pub fn clear_preview(&mut self) {
        let dirty = std::mem::take(&mut self.preview_dirty);
        if dirty.is_empty() {
            return;
        }
        trace!(cells = dirty.len(), "Clearing preview");
        #[cfg(feature = "parallel-preview")]
        if dirty.len() > PARALLEL_CLEAR_THRESHOLD {
            self.clear_preview_parallel(&dirty);
            return;
        }
        for (x, y) in dirty {
            self.preview.set(x, y, ' ');
        }
    }

    /// Fan a large preview clear out across scoped threads
    ///
    /// Dirty columns are bucketed per row first, then disjoint row spans go
    /// to one worker each; the scope joins before returning, so the result
    /// is indistinguishable from the sequential path.
    #[cfg(feature = "parallel-preview")]
    fn clear_preview_parallel(&mut self, dirty: &[(i32, i32)]) {
        let height = self.preview.height();
        let mut by_row: Vec<Vec<usize>> = vec![Vec::new(); height];
        for &(x, y) in dirty {
            if x < 0 || y < 0 {
                continue;
            }
            let (x, y) = (x as usize, y as usize);
            if y < height {
                by_row[y].push(x);
            }
        }

        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(height);
        let span = height.div_ceil(workers.max(1));
        let rows = self.preview.rows_mut();
        std::thread::scope(|scope| {
            for (row_span, dirty_span) in rows.chunks_mut(span).zip(by_row.chunks(span)) {
                scope.spawn(move || {
                    for (row, cols) in row_span.iter_mut().zip(dirty_span) {
                        for &x in cols {
                            if x < row.len() {
                                row[x] = ' ';
                            }
                        }
                    }
                });
            }
        });
    }

    /// Resize both layers together, preserving top-left-anchored content
    ///
    /// Dimensions clamp to the hard limits. Resizes are not user actions and
    /// leave the change log alone.
    pub fn resize(&mut self, width: usize, height: usize) {
        let width = width.clamp(1, MAX_WIDTH);
        let height = height.clamp(1, MAX_HEIGHT);
        self.draw.resize(width, height);
        self.preview.resize(width, height);
        debug!(width, height, "Resized canvas");
    }

    /// Start a named change; subsequent draw writes record into it
    pub fn begin_change(&mut self, name: &str) {
        self.history.begin(name);
    }

    /// Revert the newest change, returning its name
    pub fn undo(&mut self) -> Option<String> {
        let name = self.history.undo(&mut self.draw);
        if let Some(name) = &name {
            info!(action = %name, "Undo");
        }
        name
    }

    /// Reapply the newest undone change, returning its name
    pub fn redo(&mut self) -> Option<String> {
        let name = self.history.redo(&mut self.draw);
        if let Some(name) = &name {
            info!(action = %name, "Redo");
        }
        name
    }

    pub fn history(&self) -> &ChangeLog {
        &self.history
    }

    /// Document text: draw rows right-trimmed, trailing blank rows dropped,
    /// joined by newlines with a final newline
    pub fn content(&self) -> String {
        let body = self.to_string();
        if body.is_empty() {
            body
        } else {
            body + "\n"
        }
    }

    /// Replace the document with `text`
    ///
    /// The canvas resizes to fit the text (clamped to the hard limits, with
    /// overflow clipped), both layers are wiped, and the change log is
    /// cleared; a load is a fresh document.
    pub fn load(&mut self, text: &str) {
        let width = text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let height = text.lines().count();
        if width > MAX_WIDTH || height > MAX_HEIGHT {
            warn!(width, height, "Loaded content exceeds canvas limits; clipping");
        }
        self.resize(width.max(1), height.max(1));
        self.draw.fill(' ');
        self.preview.fill(' ');
        self.preview_dirty.clear();
        self.history.clear();
        for (dy, line) in text.lines().enumerate() {
            for (dx, c) in line.chars().enumerate() {
                self.draw.set(dx as i32, dy as i32, c);
            }
        }
        info!(
            width = self.width(),
            height = self.height(),
            "Loaded document"
        );
    }

    /// Glyph used by brush-style tools: the active slot
    pub fn selected_char(&self) -> char {
        if self.primary_selected {
            self.primary_char
        } else {
            self.secondary_char
        }
    }

    /// The inactive slot's glyph
    pub fn unselected_char(&self) -> char {
        if self.primary_selected {
            self.secondary_char
        } else {
            self.primary_char
        }
    }

    pub fn set_primary_char(&mut self, c: char) {
        if UnicodeWidthChar::width(c) != Some(1) {
            warn!(glyph = %c, "Selected glyph is not one column wide");
        }
        self.primary_char = c;
    }

    pub fn set_secondary_char(&mut self, c: char) {
        if UnicodeWidthChar::width(c) != Some(1) {
            warn!(glyph = %c, "Selected glyph is not one column wide");
        }
        self.secondary_char = c;
    }

    /// Choose which glyph slot is active
    pub fn select_primary(&mut self, primary: bool) {
        self.primary_selected = primary;
    }

    /// Replace the active slot's glyph
    pub fn set_selected_char(&mut self, c: char) {
        if self.primary_selected {
            self.set_primary_char(c);
        } else {
            self.set_secondary_char(c);
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows: Vec<String> = self
            .draw
            .rows()
            .map(|row| {
                let s: String = row.iter().collect();
                s.trim_end().to_string()
            })
            .collect();

        // Leading blank rows and indentation are document content; only the
        // trailing blank rows go
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        write!(f, "{}", rows.join("\n"))
    }
}
