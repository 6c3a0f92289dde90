use rand::Rng;

use crate::error::{InternalError, MazeError};
use crate::maze::{Link, Maze, Membership};

/// Randomized Prim's algorithm over the cell adjacency matrix.
///
/// Owns the two working sets of a run: the cells already carved into the maze
/// and the frontier of cells touching it.
pub struct PrimCarver<R> {
    rng: R,
    membership: Box<[Membership]>,
    in_maze: Vec<usize>,
    frontier: Vec<usize>,
}

impl<R: Rng> PrimCarver<R> {
    pub fn new(rng: R) -> Self {
        PrimCarver {
            rng,
            membership: Box::default(),
            in_maze: Vec::new(),
            frontier: Vec::new(),
        }
    }

    /// The center cell, where carving starts.
    pub fn start_cell(maze: &Maze) -> usize {
        maze.index_of(maze.rows() as usize / 2, maze.cols() as usize / 2)
    }

    /// Cells carved into the maze, in the order they joined.
    pub fn in_set(&self) -> &[usize] {
        &self.in_maze
    }

    /// Cells waiting to be carved, in no particular order.
    pub fn frontier(&self) -> &[usize] {
        &self.frontier
    }

    pub fn membership(&self, cell: usize) -> Membership {
        self.membership.get(cell).copied().unwrap_or_default()
    }

    /// Carves a spanning tree into `maze`, which must have its walls marked and no passages.
    ///
    /// Every iteration moves one cell from the frontier into the maze and opens exactly
    /// one passage, so a run of `n` cells opens `n - 1` passages.
    pub fn carve(&mut self, maze: &mut Maze) -> Result<(), MazeError> {
        let total = maze.vertices();
        self.membership = vec![Membership::Unvisited; total].into_boxed_slice();
        self.in_maze.clear();
        self.frontier.clear();

        let start = Self::start_cell(maze);
        tracing::debug!(
            "[prim] Carving {}x{} maze from center cell {}",
            maze.rows(),
            maze.cols(),
            start
        );
        self.membership[start] = Membership::InMaze;
        self.in_maze.push(start);
        // Nothing else is in the maze yet, so this only seeds the frontier
        self.scan_neighbors(maze, start);

        while self.in_maze.len() < total {
            if self.frontier.is_empty() {
                return Err(InternalError::EmptyFrontier {
                    visited: self.in_maze.len(),
                    total,
                }
                .into());
            }

            // Randomly select a cell from the frontier and move it into the maze
            let idx = self.rng.random_range(0..self.frontier.len());
            let cell = self.frontier.swap_remove(idx);
            self.membership[cell] = Membership::InMaze;
            self.in_maze.push(cell);

            let connectable = self.scan_neighbors(maze, cell);
            if connectable.is_empty() {
                return Err(InternalError::NoConnectedNeighbor { cell }.into());
            }

            // Attach it to one random neighbor that is already part of the maze
            let neighbor = connectable[self.rng.random_range(0..connectable.len())];
            maze.carve(cell, neighbor);
            tracing::trace!("[prim] Carved passage {} <-> {}", cell, neighbor);
        }

        tracing::info!(
            "[prim] Maze complete: {} cells, {} passages",
            total,
            total - 1
        );
        Ok(())
    }

    /// Looks at the walled neighbors of `cell`. Unvisited ones join the frontier;
    /// the ones already in the maze are returned.
    fn scan_neighbors(&mut self, maze: &Maze, cell: usize) -> Vec<usize> {
        let mut connectable = Vec::new();
        for neighbor in maze.neighbors_with(cell, Link::Wall) {
            match self.membership[neighbor] {
                Membership::InMaze => connectable.push(neighbor),
                Membership::Unvisited => {
                    self.membership[neighbor] = Membership::Frontier;
                    self.frontier.push(neighbor);
                }
                Membership::Frontier => {}
            }
        }
        connectable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    struct UnionFind {
        parent: Vec<usize>,
    }

    impl UnionFind {
        fn new(size: usize) -> Self {
            UnionFind {
                parent: (0..size).collect(),
            }
        }

        fn find(&mut self, x: usize) -> usize {
            if self.parent[x] != x {
                self.parent[x] = self.find(self.parent[x]);
            }
            self.parent[x]
        }

        /// Returns false if both were already in the same set.
        fn unite(&mut self, x: usize, y: usize) -> bool {
            let (root_x, root_y) = (self.find(x), self.find(y));
            if root_x == root_y {
                return false;
            }
            self.parent[root_y] = root_x;
            true
        }
    }

    fn carved(rows: u16, cols: u16, seed: u64) -> (Maze, PrimCarver<StdRng>) {
        let mut maze = Maze::new(rows, cols).unwrap();
        let mut carver = PrimCarver::new(get_rng(Some(seed)));
        carver.carve(&mut maze).unwrap();
        (maze, carver)
    }

    fn reachable_from(maze: &Maze, start: usize) -> usize {
        let mut seen = vec![false; maze.vertices()];
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        let mut count = 0;
        while let Some(cell) = queue.pop_front() {
            count += 1;
            for next in maze.neighbors_with(cell, Link::Passage) {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
        count
    }

    fn start(rows: u16, cols: u16) -> usize {
        PrimCarver::<StdRng>::start_cell(&Maze::new(rows, cols).unwrap())
    }

    #[test]
    fn test_start_cell_is_center() {
        assert_eq!(start(10, 10), 55);
        assert_eq!(start(2, 2), 3);
        assert_eq!(start(3, 5), 7);
        assert_eq!(start(1, 1), 0);
    }

    #[test]
    fn test_two_by_two() {
        let (maze, carver) = carved(2, 2, 1);
        assert_eq!(maze.passages().count(), 3);
        let mut in_set = carver.in_set().to_vec();
        in_set.sort();
        assert_eq!(in_set, vec![0, 1, 2, 3]);
        assert_eq!(carver.in_set()[0], 3);
        assert!(carver.frontier().is_empty());
        assert!((0..4).all(|cell| carver.membership(cell) == Membership::InMaze));
    }

    #[test]
    fn test_single_cell() {
        let (maze, carver) = carved(1, 1, 1);
        assert_eq!(maze.passages().count(), 0);
        assert_eq!(carver.in_set(), &[0]);
        assert!(carver.frontier().is_empty());
    }

    #[test]
    fn test_carved_maze_is_spanning_tree() {
        for (rows, cols) in [(1, 9), (9, 1), (2, 3), (5, 5), (7, 4), (10, 10), (12, 31)] {
            for seed in 0..5 {
                let (maze, _) = carved(rows, cols, seed);
                let n = maze.vertices();

                let passages = maze.passages().collect::<Vec<_>>();
                assert_eq!(passages.len(), n - 1, "{rows}x{cols} seed {seed}");

                let mut uf = UnionFind::new(n);
                for &(a, b) in &passages {
                    assert!(uf.unite(a, b), "cycle through {a} <-> {b}");
                }

                assert_eq!(reachable_from(&maze, 0), n);
            }
        }
    }

    #[test]
    fn test_carved_maze_keeps_matrix_shape() {
        let (maze, _) = carved(6, 8, 3);
        let n = maze.vertices();
        for a in 0..n {
            for b in 0..n {
                let link = maze.link(a, b);
                assert_eq!(link, maze.link(b, a));
                if link != Link::None {
                    let dr = maze.row_of(a).abs_diff(maze.row_of(b));
                    let dc = maze.col_of(a).abs_diff(maze.col_of(b));
                    assert_eq!(dr + dc, 1);
                }
            }
        }
        // Carving only relabels walls
        let walls = (0..n)
            .map(|a| maze.neighbors_with(a, Link::Wall).count())
            .sum::<usize>()
            / 2;
        assert_eq!(walls + n - 1, 6 * 7 + 8 * 5);
    }

    #[test]
    fn test_unmarked_grid_is_internal_error() {
        let mut maze = Maze::empty(2, 2).unwrap();
        let mut carver = PrimCarver::new(get_rng(Some(0)));
        assert_eq!(
            carver.carve(&mut maze),
            Err(MazeError::Internal(InternalError::EmptyFrontier {
                visited: 1,
                total: 4
            }))
        );
    }

    #[test]
    fn test_unmarked_single_cell_is_fine() {
        let mut maze = Maze::empty(1, 1).unwrap();
        let mut carver = PrimCarver::new(get_rng(Some(0)));
        assert_eq!(carver.carve(&mut maze), Ok(()));
    }
}
