use rand::{SeedableRng, rngs::StdRng};

pub mod prim;

pub use prim::PrimCarver;

use crate::{error::MazeError, maze::Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carves `maze` into a perfect maze with randomized Prim's algorithm.
pub fn generate_maze(maze: &mut Maze, seed: Option<u64>) -> Result<(), MazeError> {
    PrimCarver::new(get_rng(seed)).carve(maze)
}
