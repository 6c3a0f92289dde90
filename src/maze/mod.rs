pub mod cell;
pub mod grid;

pub use cell::{Link, Membership};
use grid::AdjacencyMatrix;

use crate::error::{ConfigError, MazeError};

/// Upper bound on `rows * cols`. The adjacency matrix holds one byte per pair of cells,
/// so this keeps it at or below 256 MiB.
pub const MAX_CELLS: usize = 16_384;

/// A rectangular maze stored as an adjacency matrix over its cells.
///
/// Cells are numbered column by column: `index = col * rows + row`, so
/// `index % rows` is the row and `index / rows` is the column.
pub struct Maze {
    grid: AdjacencyMatrix,
    rows: u16,
    cols: u16,
}

impl Maze {
    /// Creates a maze with every cell unlinked, not even to its grid neighbors.
    pub fn empty(rows: u16, cols: u16) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::ZeroDimension { rows, cols }.into());
        }
        let cells = rows as usize * cols as usize;
        if cells > MAX_CELLS {
            return Err(ConfigError::TooManyCells {
                cells,
                max: MAX_CELLS,
            }
            .into());
        }
        Ok(Maze {
            grid: AdjacencyMatrix::new(cells),
            rows,
            cols,
        })
    }

    /// Creates a maze where every pair of grid neighbors is separated by a wall.
    pub fn new(rows: u16, cols: u16) -> Result<Self, MazeError> {
        let mut maze = Maze::empty(rows, cols)?;
        maze.mark_neighbors();
        Ok(maze)
    }

    /// Returns a reference to the adjacency matrix.
    pub fn grid(&self) -> &AdjacencyMatrix {
        &self.grid
    }

    /// Number of cells in each column.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of cells in each row.
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Total number of cells.
    pub fn vertices(&self) -> usize {
        self.grid.size()
    }

    pub fn row_of(&self, cell: usize) -> usize {
        cell % self.rows as usize
    }

    pub fn col_of(&self, cell: usize) -> usize {
        cell / self.rows as usize
    }

    pub fn index_of(&self, row: usize, col: usize) -> usize {
        col * self.rows as usize + row
    }

    /// The link between two cells.
    pub fn link(&self, a: usize, b: usize) -> Link {
        self.grid[(a, b)]
    }

    /// Puts a wall between every cell and each of its (up to four) grid neighbors.
    pub fn mark_neighbors(&mut self) {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        for i in 0..self.vertices() {
            if i % rows >= 1 {
                // upper
                self.grid.set(i, i - 1, Link::Wall);
            }
            if i % rows < rows - 1 {
                // lower
                self.grid.set(i, i + 1, Link::Wall);
            }
            if i / rows >= 1 {
                // left
                self.grid.set(i, i - rows, Link::Wall);
            }
            if i / rows < cols - 1 {
                // right
                self.grid.set(i, i + rows, Link::Wall);
            }
        }
    }

    /// Removes the wall between two neighboring cells.
    ///
    /// The cells must be grid neighbors that are not yet connected.
    pub fn carve(&mut self, a: usize, b: usize) {
        debug_assert_eq!(
            self.grid[(a, b)],
            Link::Wall,
            "carving between cells {a} and {b} that are not separated by a wall"
        );
        self.grid.set_symmetric(a, b, Link::Passage);
    }

    /// Cells whose link with `cell` is `link`, in ascending order.
    pub fn neighbors_with(&self, cell: usize, link: Link) -> impl Iterator<Item = usize> + '_ {
        self.grid
            .row(cell)
            .iter()
            .enumerate()
            .filter(move |&(_, &l)| l == link)
            .map(|(j, _)| j)
    }

    /// Every carved passage as a pair `(a, b)` with `a < b`.
    pub fn passages(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.vertices()).flat_map(move |a| {
            self.neighbors_with(a, Link::Passage)
                .filter(move |&b| a < b)
                .map(move |b| (a, b))
        })
    }
}
