//! Shared text-block utilities
//!
//! Multi-line payloads (text stamps, tree input, table cells) are handled as
//! rectangular blocks of cells: lines split on `\n` and padded with spaces to
//! the longest line.

use unicode_width::UnicodeWidthStr;

/// Split text into lines padded to the longest line
///
/// Returns rows of chars forming a rectangular block. Empty input gives an
/// empty block.
///
/// # Example
/// ```
/// use scrawl::core::pad_block;
///
/// let block = pad_block("ab\nc");
/// assert_eq!(block, vec![vec!['a', 'b'], vec!['c', ' ']]);
/// ```
pub fn pad_block(text: &str) -> Vec<Vec<char>> {
    let mut rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
    let widest = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(widest, ' ');
    }
    rows
}

/// Cell dimensions of a text block: (columns, rows)
pub fn block_size(text: &str) -> (usize, usize) {
    let widest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
    (widest, text.lines().count())
}

/// Widest display width over the block's lines
///
/// Differs from the cell width when a line carries wide glyphs; callers use
/// the gap to warn about content that will shear the grid.
pub fn display_width(text: &str) -> usize {
    text.lines()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}
