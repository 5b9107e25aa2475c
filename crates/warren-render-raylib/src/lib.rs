//! Raylib-side presentation: conversions and per-chunk renderable wall slabs.

use raylib::prelude::*;
use warren_chunk::{ChunkCoord, ChunkWalls};
use warren_maze::Face;

pub mod conv {
    use warren_geom::{Aabb, Vec3};

    pub fn vec3_to_rl(v: Vec3) -> raylib::prelude::Vector3 {
        raylib::prelude::Vector3::new(v.x, v.y, v.z)
    }

    pub fn vec3_from_rl(v: raylib::prelude::Vector3) -> Vec3 {
        Vec3 {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }

    pub fn aabb_to_rl(bb: Aabb) -> raylib::core::math::BoundingBox {
        raylib::core::math::BoundingBox::new(vec3_to_rl(bb.min), vec3_to_rl(bb.max))
    }
}

/// Panel thickness as a fraction of the cell edge.
const SLAB_THICKNESS: f32 = 0.1;

/// One renderable wall: an axis-aligned cuboid oriented by the face it seals.
#[derive(Clone, Copy, Debug)]
pub struct WallSlab {
    pub center: Vector3,
    pub size: Vector3,
}

/// Face-oriented slab extents: vertical-facing panels span x/z, side panels
/// span the two axes perpendicular to their normal.
fn slab_size(facing: Face, cell_size: f32) -> Vector3 {
    let t = cell_size * SLAB_THICKNESS;
    match facing {
        Face::Left | Face::Right => Vector3::new(t, cell_size, cell_size),
        Face::Up | Face::Down => Vector3::new(cell_size, t, cell_size),
        Face::Back | Face::Front => Vector3::new(cell_size, cell_size, t),
    }
}

/// Renderable geometry for one active chunk, rebuilt cheaply from the cached
/// wall descriptors whenever the chunk is activated.
pub struct ChunkRender {
    pub coord: ChunkCoord,
    pub slabs: Vec<WallSlab>,
}

impl ChunkRender {
    pub fn build(walls: &ChunkWalls, cell_size: f32) -> Self {
        let slabs = walls
            .walls
            .iter()
            .map(|w| WallSlab {
                center: conv::vec3_to_rl(w.center),
                size: slab_size(w.facing, cell_size),
            })
            .collect();
        Self {
            coord: walls.coord,
            slabs,
        }
    }

    pub fn draw<D: RaylibDraw3D>(&self, d3: &mut D, fill: Color, wire: Color) {
        for slab in &self.slabs {
            d3.draw_cube_v(slab.center, slab.size, fill);
            d3.draw_cube_wires_v(slab.center, slab.size, wire);
        }
    }
}

/// World-space bounds of a chunk's cell region, for debug wireframes. Cell
/// centers sit on multiples of the cell size, so the region extends half a
/// cell beyond the outermost centers.
pub fn chunk_bounds(coord: ChunkCoord, chunk_size: usize, cell_size: f32) -> BoundingBox {
    let span = chunk_size as f32 * cell_size;
    let half = cell_size * 0.5;
    let min = warren_geom::Vec3::new(
        coord.cx as f32 * span - half,
        coord.cy as f32 * span - half,
        coord.cz as f32 * span - half,
    );
    let max = min + warren_geom::Vec3::new(span, span, span);
    conv::aabb_to_rl(warren_geom::Aabb::new(min, max))
}
