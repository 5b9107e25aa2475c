use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cell::{Cell, Face};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeError {
    InvalidDimensions {
        width: usize,
        height: usize,
        depth: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions {
                width,
                height,
                depth,
            } => write!(
                f,
                "maze dimensions must be positive, got {}x{}x{}",
                width, height, depth
            ),
        }
    }
}

impl std::error::Error for MazeError {}

/// Dense 3D grid of cells, carved once at construction and read-only after.
///
/// The carve is an iterative randomized depth-first backtracker: it leaves the
/// open edges forming a spanning tree over the cell graph, so any two cells
/// are connected by exactly one passage and no loops exist.
pub struct MazeGrid {
    width: usize,
    height: usize,
    depth: usize,
    cells: Vec<Cell>,
}

impl MazeGrid {
    /// Allocates the grid and carves it from the origin with the caller's RNG.
    pub fn generate<R: Rng>(
        width: usize,
        height: usize,
        depth: usize,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(MazeError::InvalidDimensions {
                width,
                height,
                depth,
            });
        }
        let mut grid = Self {
            width,
            height,
            depth,
            cells: vec![Cell::sealed(); width * height * depth],
        };
        grid.carve_from(0, 0, 0, rng);
        Ok(grid)
    }

    /// Reproducible construction: same seed, same maze.
    pub fn with_seed(
        width: usize,
        height: usize,
        depth: usize,
        seed: u64,
    ) -> Result<Self, MazeError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::generate(width, height, depth, &mut rng)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height * self.depth
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.depth + z) * self.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && (x as usize) < self.width
            && y >= 0
            && (y as usize) < self.height
            && z >= 0
            && (z as usize) < self.depth
    }

    #[inline]
    pub fn cell(&self, x: usize, y: usize, z: usize) -> &Cell {
        &self.cells[self.idx(x, y, z)]
    }

    /// Whether the wall on `face` of cell `(x, y, z)` is still standing.
    #[inline]
    pub fn is_wall(&self, x: usize, y: usize, z: usize, face: Face) -> bool {
        self.cell(x, y, z).wall(face)
    }

    fn carve_from<R: Rng>(&mut self, x: usize, y: usize, z: usize, rng: &mut R) {
        let mut stack = vec![(x, y, z)];
        let start = self.idx(x, y, z);
        self.cells[start].visited = true;

        // Peek, don't pop: the top cell stays current until it runs out of
        // unvisited neighbors, then backtracking finalizes it.
        while let Some(&(cx, cy, cz)) = stack.last() {
            let candidates = self.unvisited_neighbors(cx, cy, cz);
            if candidates.is_empty() {
                stack.pop();
                continue;
            }
            let (nx, ny, nz, face) = candidates[rng.gen_range(0..candidates.len())];
            self.clear_wall(cx, cy, cz, face);
            self.clear_wall(nx, ny, nz, face.opposite());
            let ni = self.idx(nx, ny, nz);
            self.cells[ni].visited = true;
            stack.push((nx, ny, nz));
        }
    }

    fn unvisited_neighbors(
        &self,
        x: usize,
        y: usize,
        z: usize,
    ) -> Vec<(usize, usize, usize, Face)> {
        let mut out = Vec::new();
        for face in Face::ALL {
            let (dx, dy, dz) = face.offset();
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            let nz = z as i32 + dz;
            if !self.in_bounds(nx, ny, nz) {
                continue;
            }
            let (nxu, nyu, nzu) = (nx as usize, ny as usize, nz as usize);
            if !self.cells[self.idx(nxu, nyu, nzu)].visited {
                out.push((nxu, nyu, nzu, face));
            }
        }
        out
    }

    #[inline]
    fn clear_wall(&mut self, x: usize, y: usize, z: usize, face: Face) {
        let i = self.idx(x, y, z);
        self.cells[i].clear_wall(face);
    }

    /// Count of adjacent cell pairs whose shared boundary is open on both
    /// sides. A carved grid has exactly `cell_count() - 1` of these.
    pub fn open_edge_count(&self) -> usize {
        let mut open = 0;
        for y in 0..self.height {
            for z in 0..self.depth {
                for x in 0..self.width {
                    // Count each pair once via the positive-offset faces.
                    for face in [Face::Right, Face::Down, Face::Front] {
                        let (dx, dy, dz) = face.offset();
                        let nx = x as i32 + dx;
                        let ny = y as i32 + dy;
                        let nz = z as i32 + dz;
                        if !self.in_bounds(nx, ny, nz) {
                            continue;
                        }
                        let open_here = !self.is_wall(x, y, z, face);
                        let open_there = !self.is_wall(
                            nx as usize,
                            ny as usize,
                            nz as usize,
                            face.opposite(),
                        );
                        if open_here && open_there {
                            open += 1;
                        }
                    }
                }
            }
        }
        open
    }

    /// True when the carve reached every cell.
    pub fn fully_carved(&self) -> bool {
        self.cells.iter().all(|c| c.visited)
    }
}
