//! Undo/redo change log
//!
//! Every draw-layer mutation between `begin` and the next begin/undo/redo is
//! recorded into one named [`Change`], keyed by the cell's value before the
//! action touched it. Undo pops the newest change, captures the inverse for
//! redo, and writes the recorded values back. History is linear: starting a
//! new change discards the redo stack.

use tracing::{debug, trace};

use crate::core::grid::CharGrid;

/// One recorded cell edit: the value a cell held before its change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellEdit {
    pub x: i32,
    pub y: i32,
    pub prev: char,
}

/// A named group of cell edits committed by one user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    name: String,
    edits: Vec<CellEdit>,
}

impl Change {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            edits: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Record a cell's pre-action value; only the first write per cell counts
    fn record(&mut self, x: i32, y: i32, prev: char) {
        if self.edits.iter().any(|e| e.x == x && e.y == y) {
            return;
        }
        self.edits.push(CellEdit { x, y, prev });
    }
}

/// Linear undo/redo history over a draw grid
#[derive(Debug, Default)]
pub struct ChangeLog {
    undo_stack: Vec<Change>,
    redo_stack: Vec<Change>,
    open: bool,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new named change and discard any redoable future
    pub fn begin(&mut self, name: &str) {
        trace!(action = name, "Beginning change");
        self.redo_stack.clear();
        self.undo_stack.push(Change::new(name));
        self.open = true;
    }

    /// Record one overwritten cell into the open change
    ///
    /// Writes that land outside any begun action still apply to the grid but
    /// are not undoable.
    pub(crate) fn record(&mut self, x: i32, y: i32, prev: char) {
        if !self.open {
            trace!(x, y, "Cell write outside an open change; not recorded");
            return;
        }
        if let Some(change) = self.undo_stack.last_mut() {
            change.record(x, y, prev);
        }
    }

    /// Revert the newest change, returning its name
    pub fn undo(&mut self, grid: &mut CharGrid) -> Option<String> {
        self.open = false;
        let change = self.undo_stack.pop()?;
        let mut inverse = Change::new(&change.name);
        for edit in &change.edits {
            // Cells dropped by a later shrink restore as clipped writes
            if let Some(current) = grid.get(edit.x, edit.y) {
                inverse.record(edit.x, edit.y, current);
            }
            grid.set(edit.x, edit.y, edit.prev);
        }
        debug!(action = %change.name, cells = change.len(), "Undid change");
        self.redo_stack.push(inverse);
        Some(change.name)
    }

    /// Reapply the newest undone change, returning its name
    pub fn redo(&mut self, grid: &mut CharGrid) -> Option<String> {
        self.open = false;
        let change = self.redo_stack.pop()?;
        let mut inverse = Change::new(&change.name);
        for edit in &change.edits {
            if let Some(current) = grid.get(edit.x, edit.y) {
                inverse.record(edit.x, edit.y, current);
            }
            grid.set(edit.x, edit.y, edit.prev);
        }
        debug!(action = %change.name, cells = change.len(), "Redid change");
        self.undo_stack.push(inverse);
        Some(change.name)
    }

    /// Name of the action `undo` would revert, for tooltip display
    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.name())
    }

    /// Name of the action `redo` would reapply
    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.name())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Forget all history, e.g. when a new document is loaded
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.open = false;
    }
}
