use std::fmt;

use crate::config::Layout;
use crate::geometry::{Direction, Point};
use crate::maze::{Link, Maze};

/// One side of the maze's outer boundary.
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Bottom,
    Right,
    Top,
}

impl Side {
    /// The order in which the boundary is traced.
    pub const ALL: [Side; 4] = [Side::Left, Side::Bottom, Side::Right, Side::Top];

    /// Number of cells along this side.
    fn cells(self, maze: &Maze) -> u32 {
        match self {
            Side::Left | Side::Right => maze.rows() as u32,
            Side::Bottom | Side::Top => maze.cols() as u32,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Bottom => write!(f, "bottom"),
            Side::Right => write!(f, "right"),
            Side::Top => write!(f, "top"),
        }
    }
}

/// A single drawing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Move the cursor without drawing.
    MoveTo(Point),
    /// Draw from the cursor `distance` pixels along `direction`, ending at `to`.
    LineTo {
        to: Point,
        direction: Direction,
        distance: f64,
    },
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::MoveTo(to) => write!(f, "M {} {}", to.x, to.y),
            Segment::LineTo { to, .. } => write!(f, "L {} {}", to.x, to.y),
        }
    }
}

/// The finished maze geometry handed to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeDrawing {
    pub segments: Vec<Segment>,
    pub layout: Layout,
}

impl MazeDrawing {
    pub fn cell_length(&self) -> u32 {
        self.layout.cell_length
    }

    pub fn origin(&self) -> Point {
        self.layout.origin()
    }

    /// Replays the segments and returns every drawn line as `(from, to)`.
    pub fn strokes(&self) -> Vec<(Point, Point)> {
        let mut cursor = Point::default();
        let mut strokes = Vec::new();
        for segment in &self.segments {
            match *segment {
                Segment::MoveTo(to) => cursor = to,
                Segment::LineTo { to, .. } => {
                    strokes.push((cursor, to));
                    cursor = to;
                }
            }
        }
        strokes
    }
}

/// Turns a carved [`Maze`] into wall segments, tracking a cursor and heading like a pen plotter.
pub struct PathEmitter<'a> {
    maze: &'a Maze,
    layout: Layout,
    cursor: Point,
    direction: Direction,
    segments: Vec<Segment>,
}

impl<'a> PathEmitter<'a> {
    pub fn new(maze: &'a Maze, layout: Layout) -> Self {
        PathEmitter {
            maze,
            layout,
            cursor: layout.origin(),
            direction: Direction::Down,
            segments: Vec::new(),
        }
    }

    fn cell_length(&self) -> f64 {
        self.layout.cell_length as f64
    }

    /// Draws along the current heading. Zero-length strokes only move the cursor.
    fn forward(&mut self, distance: f64) {
        self.cursor = self.cursor.forward(distance, self.direction);
        if distance != 0.0 {
            self.segments.push(Segment::LineTo {
                to: self.cursor,
                direction: self.direction,
                distance,
            });
        }
    }

    /// Moves along the current heading without drawing.
    fn skip(&mut self, distance: f64) {
        self.cursor = self.cursor.forward(distance, self.direction);
        self.segments.push(Segment::MoveTo(self.cursor));
    }

    fn goto(&mut self, point: Point) {
        self.cursor = point;
        self.segments.push(Segment::MoveTo(point));
    }

    /// Traces the outer rectangle anti-clockwise from the top left corner, heading down.
    ///
    /// The entrance and exit sides get a one cell gap at their midpoint. When both name
    /// the same side it gets a single gap.
    pub fn emit_boundary(&mut self, entrance: Side, exit: Side) {
        if entrance == exit {
            tracing::debug!(
                "[path] Entrance and exit share the {} side, leaving one gap",
                entrance
            );
        }
        let length = self.cell_length();
        self.goto(self.layout.origin());
        self.direction = Direction::Down;
        for side in Side::ALL {
            let cells = side.cells(self.maze);
            if side == entrance || side == exit {
                self.forward((cells / 2) as f64 * length);
                self.skip(length);
                self.forward(((cells - 1) / 2) as f64 * length);
            } else {
                self.forward(cells as f64 * length);
            }
            self.direction = self.direction.next();
        }
    }

    /// Draws one cell-length segment for every wall left between two neighboring cells.
    pub fn emit_inner_walls(&mut self) {
        let length = self.cell_length();
        let origin = self.layout.origin();
        let rows = self.maze.rows() as usize;
        let vertices = self.maze.vertices();
        let mut count = 0;

        // Vertical walls, between a cell and its right neighbor, drawn top to bottom
        self.direction = Direction::Down;
        for i in 0..vertices - rows {
            if self.maze.link(i, i + rows) == Link::Wall {
                let (row, col) = (self.maze.row_of(i), self.maze.col_of(i));
                self.goto(Point::new(
                    origin.x + length + col as f64 * length,
                    origin.y + row as f64 * length,
                ));
                self.forward(length);
                count += 1;
            }
        }

        // Horizontal walls, between a cell and its lower neighbor, drawn left to right
        self.direction = Direction::Right;
        for i in 0..vertices - 1 {
            if self.maze.link(i, i + 1) == Link::Wall {
                let (row, col) = (self.maze.row_of(i), self.maze.col_of(i));
                self.goto(Point::new(
                    origin.x + col as f64 * length,
                    origin.y + length + row as f64 * length,
                ));
                self.forward(length);
                count += 1;
            }
        }

        tracing::debug!("[path] Emitted {} inner walls", count);
    }

    pub fn finish(self) -> MazeDrawing {
        MazeDrawing {
            segments: self.segments,
            layout: self.layout,
        }
    }
}
