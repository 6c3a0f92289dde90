use std::fmt;

/// Relationship between two cells, as stored in the adjacency matrix.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    /// The cells do not touch.
    #[default]
    None,
    /// Grid neighbors with a wall between them.
    Wall,
    /// Grid neighbors with the wall carved away.
    Passage,
}

impl Link {
    /// Numeric label used when dumping the matrix: 0, 1 or 2.
    pub fn label(self) -> u8 {
        match self {
            Link::None => 0,
            Link::Wall => 1,
            Link::Passage => 2,
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where a cell stands while the maze is being carved.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// Not yet reached by the carver.
    #[default]
    Unvisited,
    /// Next to the maze, waiting to be picked.
    Frontier,
    /// Carved into the maze.
    InMaze,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_labels() {
        assert_eq!(Link::default(), Link::None);
        assert_eq!(Link::None.to_string(), "0");
        assert_eq!(Link::Wall.to_string(), "1");
        assert_eq!(Link::Passage.to_string(), "2");
    }
}
