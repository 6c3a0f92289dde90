/// A point on the canvas. `y` grows downwards.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The point `distance` away along `direction`.
    pub fn forward(self, distance: f64, direction: Direction) -> Point {
        let (dx, dy) = direction.offset();
        Point {
            x: self.x + dx * distance,
            y: self.y + dy * distance,
        }
    }
}

/// A cardinal direction on the canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Unit offset in canvas coordinates.
    pub fn offset(self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }

    /// A quarter turn anti-clockwise, as seen on screen.
    pub fn next(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }
}
