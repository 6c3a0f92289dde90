use crate::error::ConfigError;
use crate::geometry::Point;
use crate::maze::MAX_CELLS;
use crate::path::Side;

/// Everything needed to build and lay out one maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// Cells per column.
    pub rows: u16,
    /// Cells per row.
    pub cols: u16,
    pub entrance: Side,
    pub exit: Side,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Blank border around the maze, in pixels.
    pub margin: u32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            entrance: Side::Bottom,
            exit: Side::Left,
            canvas_width: 320,
            canvas_height: 320,
            margin: 10,
        }
    }
}

/// Pixel geometry derived from a valid [`MazeConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Side length of one square cell, in pixels.
    pub cell_length: u32,
    pub margin: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Layout {
    /// Top left corner of the grid.
    pub fn origin(&self) -> Point {
        Point::new(self.margin as f64, self.margin as f64)
    }
}

impl MazeConfig {
    /// Checks the configuration and computes the cell size.
    pub fn validate(&self) -> Result<Layout, ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let cells = self.rows as usize * self.cols as usize;
        if cells > MAX_CELLS {
            return Err(ConfigError::TooManyCells {
                cells,
                max: MAX_CELLS,
            });
        }
        let border = self.margin.saturating_mul(2);
        if border >= self.canvas_width.min(self.canvas_height) {
            return Err(ConfigError::MarginTooLarge {
                margin: self.margin,
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        let cell_length = ((self.canvas_width - border) / self.rows as u32)
            .min((self.canvas_height - border) / self.cols as u32);
        if cell_length == 0 {
            return Err(ConfigError::ZeroCellLength);
        }

        tracing::debug!(
            "[config] {}x{} maze on {}x{} canvas, cell length {}",
            self.rows,
            self.cols,
            self.canvas_width,
            self.canvas_height,
            cell_length
        );
        Ok(Layout {
            cell_length,
            margin: self.margin,
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
        })
    }
}
