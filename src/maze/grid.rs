use super::cell::Link;

/// Dense `size x size` matrix of cell links.
pub struct AdjacencyMatrix {
    pub data: Box<[Link]>,
    size: usize,
}

impl AdjacencyMatrix {
    pub fn new(size: usize) -> Self {
        let data = vec![Link::None; size * size].into_boxed_slice();
        AdjacencyMatrix { data, size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn ravel_index(&self, from: usize, to: usize) -> usize {
        from * self.size + to
    }

    /// Sets the link in one direction only.
    pub fn set(&mut self, from: usize, to: usize, link: Link) {
        let idx = self.ravel_index(from, to);
        self.data[idx] = link;
    }

    /// Sets the link in both directions, keeping the matrix symmetric.
    pub fn set_symmetric(&mut self, a: usize, b: usize, link: Link) {
        self.set(a, b, link);
        self.set(b, a, link);
    }

    /// One row of the matrix: the links from `from` to every cell.
    pub fn row(&self, from: usize) -> &[Link] {
        let start = self.ravel_index(from, 0);
        &self.data[start..start + self.size]
    }
}

impl std::ops::Index<(usize, usize)> for AdjacencyMatrix {
    type Output = Link;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}
