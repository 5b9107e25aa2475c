use warren_geom::Vec3;
use warren_maze::{Face, MazeGrid};

use crate::ChunkCoord;

/// One wall rectangle: the anchor point collision tests against, plus the
/// face it seals (which fixes the panel's orientation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallInstance {
    pub center: Vec3,
    pub facing: Face,
}

/// Immutable wall geometry for one chunk. Built once, cached forever.
#[derive(Clone, Debug)]
pub struct ChunkWalls {
    pub coord: ChunkCoord,
    pub walls: Vec<WallInstance>,
}

impl ChunkWalls {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }
}

/// World-space displacement from a cell center to the panel anchor for a
/// standing wall. Not `face.offset()`: the vertical pair hangs on the
/// opposite side of the carve direction (Up panels sit at +y even though
/// the carve's Up neighbor is at -y).
#[inline]
fn panel_offset(face: Face, half: f32) -> Vec3 {
    match face {
        Face::Up => Vec3::new(0.0, half, 0.0),
        Face::Down => Vec3::new(0.0, -half, 0.0),
        Face::Left => Vec3::new(-half, 0.0, 0.0),
        Face::Right => Vec3::new(half, 0.0, 0.0),
        Face::Back => Vec3::new(0.0, 0.0, -half),
        Face::Front => Vec3::new(0.0, 0.0, half),
    }
}

/// Builds the wall descriptors for the `chunk_size`^3 cell region of `coord`.
/// Cell indices outside the grid are skipped, so chunks straddling or fully
/// beyond the grid simply come out with fewer (possibly zero) walls.
pub fn build_chunk_walls(
    grid: &MazeGrid,
    coord: ChunkCoord,
    chunk_size: usize,
    cell_size: f32,
) -> ChunkWalls {
    let base_x = coord.cx * chunk_size as i32;
    let base_y = coord.cy * chunk_size as i32;
    let base_z = coord.cz * chunk_size as i32;
    let half = cell_size * 0.5;
    let mut walls = Vec::new();
    for z in 0..chunk_size {
        for y in 0..chunk_size {
            for x in 0..chunk_size {
                let wx = base_x + x as i32;
                let wy = base_y + y as i32;
                let wz = base_z + z as i32;
                if !grid.in_bounds(wx, wy, wz) {
                    continue;
                }
                let (ux, uy, uz) = (wx as usize, wy as usize, wz as usize);
                let center = Vec3::new(
                    wx as f32 * cell_size,
                    wy as f32 * cell_size,
                    wz as f32 * cell_size,
                );
                for face in Face::ALL {
                    if grid.is_wall(ux, uy, uz, face) {
                        walls.push(WallInstance {
                            center: center + panel_offset(face, half),
                            facing: face,
                        });
                    }
                }
            }
        }
    }
    ChunkWalls { coord, walls }
}
