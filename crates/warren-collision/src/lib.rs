//! Point-proximity collision test against active chunk walls.
#![forbid(unsafe_code)]

use warren_chunk::ChunkWalls;
use warren_geom::Vec3;

/// Tests candidate observer positions against wall anchors.
///
/// A candidate collides when any anchor of any active chunk lies strictly
/// within `threshold` of it. This treats every wall as a blocking sphere
/// around its anchor, so it over-blocks near panel centers and under-blocks
/// near panel edges. The approximation is deliberate and part of the
/// movement contract; callers that want exact panel tests need a different
/// probe, not a different threshold.
#[derive(Clone, Copy, Debug)]
pub struct CollisionProbe {
    threshold: f32,
}

impl CollisionProbe {
    /// Probe with an explicit blocking radius.
    #[inline]
    pub const fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// The conventional radius: half a cell edge.
    #[inline]
    pub fn for_cell_size(cell_size: f32) -> Self {
        Self {
            threshold: cell_size * 0.5,
        }
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// True when `candidate` is within the blocking radius of any wall
    /// anchor in the given chunks. An empty iterator never collides.
    pub fn would_collide<'a, I>(&self, candidate: Vec3, chunks: I) -> bool
    where
        I: IntoIterator<Item = &'a ChunkWalls>,
    {
        for chunk in chunks {
            for wall in &chunk.walls {
                if wall.center.distance(candidate) < self.threshold {
                    return true;
                }
            }
        }
        false
    }
}
