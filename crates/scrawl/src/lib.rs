//! Scrawl - Compose box-drawing diagrams on a character grid
//!
//! The engine behind an ASCII diagram editor: a two-layer character grid
//! (committed drawing plus transient preview), resolvable glyph styles,
//! shape and freehand plotting, named undo/redo, and an editor facade that
//! routes pointer gestures to interactive tools.
//!
//! # Quick Start
//!
//! ```rust
//! use scrawl::prelude::*;
//!
//! let mut editor = Editor::with_size(20, 6);
//! editor.set_active_tool(ToolKind::Rectangle);
//! editor.drag_begin(Pos::new(1, 1));
//! editor.drag_update(Pos::new(10, 4));
//! editor.drag_end(Pos::new(10, 4));
//!
//! let text = editor.canvas().content();
//! assert!(text.contains('┌'));
//! assert_eq!(editor.undo().as_deref(), Some("Rectangle"));
//! ```
//!
//! # Advanced Usage
//!
//! The pieces compose individually when a whole editor is too much:
//!
//! ```rust
//! use scrawl::prelude::*;
//!
//! let mut canvas = Canvas::with_size(12, 5);
//! let styles = StyleTable::builtin();
//! let plotter = Plotter::new(styles.resolve(0, false));
//!
//! canvas.begin_change("Rectangle");
//! plotter.rectangle(&mut canvas, Layer::Draw, 0, 0, 12, 5);
//! assert_eq!(canvas.get_char(0, 0, Layer::Draw), Some('┌'));
//!
//! canvas.undo();
//! assert_eq!(canvas.get_char(0, 0, Layer::Draw), Some(' '));
//! ```

pub mod core;
pub mod tools;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Canvas, CanvasError, ClickButton, Delta, Layer, Plotter, Pos, StyleSet, StyleTable,
    };
    pub use crate::tools::{
        DividerMode, Editor, LineKind, RectMode, TableModel, Tool, ToolCtx, ToolKind,
    };
}

/// Open an editor over an existing document
///
/// The canvas takes the size of the text and every cell of it, so a
/// round-trip through [`Canvas::content`] preserves the document.
///
/// # Example
/// ```rust
/// use scrawl::open;
///
/// let editor = open("┌──┐\n└──┘");
/// assert_eq!(editor.canvas().content(), "┌──┐\n└──┘\n");
/// ```
pub fn open(text: &str) -> tools::Editor {
    let mut editor = tools::Editor::new();
    editor.canvas_mut().load(text);
    editor
}

/// Render an indented outline as a box-drawing tree
///
/// Each line's leading spaces set its depth relative to the neighbouring
/// lines; connectors are drawn in the default style.
///
/// # Example
/// ```rust
/// use scrawl::render_tree;
///
/// let tree = render_tree("root\n  child\n  child2");
/// assert!(tree.contains("├── child"));
/// assert!(tree.contains("└── child2"));
/// ```
pub fn render_tree(text: &str) -> String {
    use crate::core::{ClickButton, Pos};
    use crate::tools::{resolve_indents, ToolKind};

    let nodes = resolve_indents(text);
    let width = nodes
        .iter()
        .map(|n| n.level * 4 + n.text.chars().count())
        .max()
        .unwrap_or(0);
    let mut editor = tools::Editor::with_size(width.max(1), nodes.len().max(1));
    editor.set_active_tool(ToolKind::Tree);
    editor.tree_mut().set_text(text);
    editor.click(Pos::new(0, 0), ClickButton::Primary);
    if editor.commit().is_ok() {
        editor.canvas().content()
    } else {
        String::new()
    }
}

/// Render rows of cells as a bordered table
///
/// Column widths follow the widest cell per column. Returns an error when
/// the model has no rows or no columns.
///
/// # Example
/// ```rust
/// use scrawl::render_table;
/// use scrawl::tools::DividerMode;
///
/// let rows = vec![vec!["a".to_string(), "b".to_string()]];
/// let table = render_table(rows, 2, DividerMode::Undivided).unwrap();
/// assert!(table.contains("│a│b│"));
/// ```
pub fn render_table(
    rows: Vec<Vec<String>>,
    columns: usize,
    divider: tools::DividerMode,
) -> anyhow::Result<String> {
    use crate::core::{ClickButton, Pos};
    use crate::tools::{TableModel, ToolKind};

    let model = TableModel::new(rows, columns, divider);
    let (width, height) = model.size();
    let mut editor = tools::Editor::with_size(width.max(1) as usize, height.max(1) as usize);
    editor.set_active_tool(ToolKind::Table);
    editor.table_mut().set_model(model);
    editor.click(Pos::new(0, 0), ClickButton::Primary);
    editor.commit()?;
    Ok(editor.canvas().content())
}
