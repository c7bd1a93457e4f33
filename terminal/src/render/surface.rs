use common::{Color, Surface, Vec2};

use super::grid::CellGrid;

/// Reduce a color to a shade character. Terminal cells have no alpha
/// channel, so a draw collapses to an "ink" level: the color's darkness
/// times its opacity, quantized onto a block-shade ramp. The near-white
/// background maps to a blank cell, which is what clears the frame.
fn cell_char(color: Color) -> char {
    let luminance =
        (0.299 * color.r as f32 + 0.587 * color.g as f32 + 0.114 * color.b as f32) / 255.0;
    let ink = (1.0 - luminance) * color.a.clamp(0.0, 1.0);

    if ink < 0.125 {
        ' '
    } else if ink < 0.375 {
        '░'
    } else if ink < 0.625 {
        '▒'
    } else if ink < 0.875 {
        '▓'
    } else {
        '█'
    }
}

/// Terminal implementation of the drawing-surface contract: rasterizes the
/// game's primitives into a [`CellGrid`] that the widget layer prints.
pub struct CellSurface {
    grid: CellGrid,
}

impl CellSurface {
    pub fn new(cols: usize, rows: usize, logical_width: f32, logical_height: f32) -> Self {
        CellSurface {
            grid: CellGrid::new(cols, rows, logical_width, logical_height),
        }
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Mouse mapping: the logical point under a cell.
    pub fn logical_at(&self, col: usize, row: usize) -> Vec2 {
        self.grid.logical_at(col, row)
    }

    pub fn lines(&self) -> Vec<String> {
        self.grid.lines()
    }
}

impl Surface for CellSurface {
    fn fill_rect(&mut self, origin: Vec2, width: f32, height: f32, color: Color) {
        let ch = cell_char(color);
        let (col0, row0) = self.grid.cell_at(origin);
        let (col1, row1) = self
            .grid
            .cell_at(Vec2::new(origin.x + width, origin.y + height));
        for row in row0..=row1 {
            for col in col0..=col1 {
                self.grid.set(col, row, ch);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let ch = cell_char(color);
        if ch == ' ' {
            // Invisible draw; leave the cells alone.
            return;
        }

        let (col0, row0) = self.grid.cell_at(center - Vec2::new(radius, radius));
        let (col1, row1) = self.grid.cell_at(center + Vec2::new(radius, radius));
        for row in row0..=row1 {
            for col in col0..=col1 {
                let cell_center = self.grid.logical_at(col, row);
                if (cell_center - center).length_squared() <= radius * radius {
                    self.grid.set(col, row, ch);
                }
            }
        }
    }

    fn draw_text(&mut self, origin: Vec2, text: &str, color: Color) {
        if cell_char(color) == ' ' {
            return;
        }
        let (col, row) = self.grid.cell_at(origin);
        for (offset, ch) in text.chars().enumerate() {
            if col + offset >= self.grid.cols() {
                break;
            }
            self.grid.set(col + offset, row, ch);
        }
    }
}
