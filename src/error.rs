use thiserror::Error;

/// Top-level error type for maze generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Rejected configuration. Nothing is generated when one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("maze dimensions must be positive, got {rows}x{cols}")]
    ZeroDimension { rows: u16, cols: u16 },

    #[error("maze has {cells} cells, at most {max} are supported")]
    TooManyCells { cells: usize, max: usize },

    #[error("margin {margin} leaves no room on a {width}x{height} canvas")]
    MarginTooLarge {
        margin: u32,
        width: u32,
        height: u32,
    },

    #[error("canvas is too small to give each cell a positive length")]
    ZeroCellLength,
}

/// Broken generator invariants. These point at a bug in graph construction, not at bad input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InternalError {
    #[error("frontier ran dry after visiting {visited} of {total} cells")]
    EmptyFrontier { visited: usize, total: usize },

    #[error("cell {cell} left the frontier without a neighbor already in the maze")]
    NoConnectedNeighbor { cell: usize },
}
