use serde::{Deserialize, Serialize};
use warren_geom::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cy: self.cy + dy,
            cz: self.cz + dz,
        }
    }

    /// Chebyshev distance in chunk units; the active set is the inclusive
    /// cube of coords within the view distance under this metric.
    #[inline]
    pub fn chebyshev(self, other: ChunkCoord) -> i32 {
        (self.cx - other.cx)
            .abs()
            .max((self.cy - other.cy).abs())
            .max((self.cz - other.cz).abs())
    }

    /// Chunk containing a world position, given one chunk's world edge length.
    #[inline]
    pub fn from_world(pos: Vec3, chunk_world_size: f32) -> Self {
        Self {
            cx: (pos.x / chunk_world_size).floor() as i32,
            cy: (pos.y / chunk_world_size).floor() as i32,
            cz: (pos.z / chunk_world_size).floor() as i32,
        }
    }
}

impl From<(i32, i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<ChunkCoord> for (i32, i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.cx, value.cy, value.cz)
    }
}
