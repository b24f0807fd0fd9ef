//! Owned character grid storage
//!
//! One [`CharGrid`] backs each canvas layer: a plain row-major 2D array of
//! chars with bounds-checked access. Reads outside the grid return `None`,
//! which callers can tell apart from a stored space.

/// Rectangular character grid backing one canvas layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    width: usize,
    height: usize,
    cells: Vec<Vec<char>>,
}

impl CharGrid {
    /// Create a grid filled with spaces; dimensions are clamped to at least 1
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![vec![' '; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read one cell; `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y][x])
    }

    /// Write one cell, returning the overwritten value; out-of-bounds writes
    /// are dropped and return `None`
    pub fn set(&mut self, x: i32, y: i32, c: char) -> Option<char> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        let prev = self.cells[y][x];
        self.cells[y][x] = c;
        Some(prev)
    }

    /// Set every cell to `c`
    pub fn fill(&mut self, c: char) {
        for row in &mut self.cells {
            row.fill(c);
        }
    }

    /// Resize in place, keeping content anchored at the top-left corner
    ///
    /// New cells are spaces; cells outside the new bounds are dropped.
    pub fn resize(&mut self, width: usize, height: usize) {
        let width = width.max(1);
        let height = height.max(1);
        self.cells.resize(height, vec![' '; width]);
        for row in &mut self.cells {
            row.resize(width, ' ');
        }
        self.width = width;
        self.height = height;
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.iter().map(|row| row.as_slice())
    }

    /// Count of cells holding something other than a space
    pub fn occupied_cells(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c != ' ')
            .count()
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<char>] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_round_trip() {
        let mut grid = CharGrid::new(10, 5);
        assert_eq!(grid.set(3, 2, 'X'), Some(' '));
        assert_eq!(grid.get(3, 2), Some('X'));
    }

    #[test]
    fn test_out_of_bounds_reads_are_none() {
        let grid = CharGrid::new(4, 4);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 4), None);
        // In-bounds blank cells read as a space, not the sentinel
        assert_eq!(grid.get(0, 0), Some(' '));
    }

    #[test]
    fn test_out_of_bounds_writes_are_dropped() {
        let mut grid = CharGrid::new(4, 4);
        assert_eq!(grid.set(9, 9, 'X'), None);
        assert_eq!(grid.set(-2, 1, 'X'), None);
        assert_eq!(grid.occupied_cells(), 0);
    }

    #[test]
    fn test_set_returns_overwritten_value() {
        let mut grid = CharGrid::new(4, 4);
        grid.set(1, 1, 'a');
        assert_eq!(grid.set(1, 1, 'b'), Some('a'));
    }

    #[test]
    fn test_resize_grow_preserves_content() {
        let mut grid = CharGrid::new(3, 3);
        grid.set(2, 2, 'Z');
        grid.resize(6, 5);
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.get(2, 2), Some('Z'));
        assert_eq!(grid.get(5, 4), Some(' '));
    }

    #[test]
    fn test_resize_shrink_drops_outside_cells() {
        let mut grid = CharGrid::new(6, 6);
        grid.set(1, 1, 'K');
        grid.set(5, 5, 'D');
        grid.resize(3, 3);
        assert_eq!(grid.get(1, 1), Some('K'));
        assert_eq!(grid.get(5, 5), None);
    }

    #[test]
    fn test_zero_dimensions_clamp_to_one() {
        let grid = CharGrid::new(0, 0);
        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 1);
    }

    #[test]
    fn test_fill() {
        let mut grid = CharGrid::new(3, 2);
        grid.fill('.');
        assert!(grid.rows().all(|row| row.iter().all(|&c| c == '.')));
    }
}
