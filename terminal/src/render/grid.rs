use common::Vec2;

/// Character raster the game draws into: one `char` per terminal cell.
///
/// Logical coordinates are mapped through per-axis scales fixed at
/// construction. Terminal cells are roughly twice as tall as they are wide,
/// so the two axes normally carry different scales; the same mapping is run
/// in reverse to turn mouse cell coordinates back into logical points.
pub struct CellGrid {
    cells: Vec<Vec<char>>,
    cols: usize,
    rows: usize,
    scale_x: f32,
    scale_y: f32,
}

impl CellGrid {
    pub fn new(cols: usize, rows: usize, logical_width: f32, logical_height: f32) -> Self {
        CellGrid {
            cells: vec![vec![' '; cols]; rows],
            cols,
            rows,
            scale_x: cols as f32 / logical_width,
            scale_y: rows as f32 / logical_height,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Logical point to cell coordinates, clamped onto the grid.
    pub fn cell_at(&self, point: Vec2) -> (usize, usize) {
        let col = ((point.x * self.scale_x) as isize).clamp(0, self.cols as isize - 1);
        let row = ((point.y * self.scale_y) as isize).clamp(0, self.rows as isize - 1);
        (col as usize, row as usize)
    }

    /// Center of a cell in logical coordinates.
    pub fn logical_at(&self, col: usize, row: usize) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) / self.scale_x,
            (row as f32 + 0.5) / self.scale_y,
        )
    }

    pub fn set(&mut self, col: usize, row: usize, ch: char) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = ch;
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn lines(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.iter().collect()).collect()
    }
}
