/// One of the six faces of a cell, named from the walker's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Up,
    Down,
    Left,
    Right,
    Back,
    Front,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
        Face::Back,
        Face::Front,
    ];

    /// Stable index into a per-cell wall flag array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Grid step toward the neighbor across this face.
    /// The vertical axis is inverted: `Up` steps toward -y, `Down` toward +y.
    #[inline]
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Face::Up => (0, -1, 0),
            Face::Down => (0, 1, 0),
            Face::Left => (-1, 0, 0),
            Face::Right => (1, 0, 0),
            Face::Back => (0, 0, -1),
            Face::Front => (0, 0, 1),
        }
    }

    /// The face a neighboring cell presents back across the shared boundary.
    #[inline]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Back => Face::Front,
            Face::Front => Face::Back,
        }
    }
}

/// One grid unit: six wall flags plus the carve-time visited mark.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub visited: bool,
    walls: [bool; 6],
}

impl Cell {
    /// A fresh cell with every wall present and no visit recorded.
    #[inline]
    pub const fn sealed() -> Self {
        Self {
            visited: false,
            walls: [true; 6],
        }
    }

    #[inline]
    pub fn wall(&self, face: Face) -> bool {
        self.walls[face.index()]
    }

    #[inline]
    pub(crate) fn clear_wall(&mut self, face: Face) {
        self.walls[face.index()] = false;
    }

    /// Number of walls still standing on this cell.
    #[inline]
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|w| **w).count()
    }
}
