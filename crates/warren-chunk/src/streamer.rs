use std::sync::Arc;

use hashbrown::{HashMap, HashSet};
use warren_geom::Vec3;
use warren_maze::MazeGrid;

use crate::ChunkCoord;
use crate::walls::{ChunkWalls, build_chunk_walls};

#[derive(Clone, Copy, Debug)]
pub struct StreamerParams {
    /// World units per cell edge.
    pub cell_size: f32,
    /// Cells per chunk edge.
    pub chunk_size: usize,
    /// Chebyshev radius of the active cube, in chunks.
    pub view_distance: i32,
}

/// Diff produced by one active-set recompute. Coords appear at most once
/// and never in both lists.
#[derive(Clone, Debug, Default)]
pub struct StreamUpdate {
    pub activated: Vec<ChunkCoord>,
    pub deactivated: Vec<ChunkCoord>,
}

impl StreamUpdate {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.activated.is_empty() && self.deactivated.is_empty()
    }
}

/// Streams chunk wall geometry around a moving observer.
///
/// Chunks are built synchronously on first demand and cached for the process
/// lifetime; deactivation only hides a chunk, it never evicts the geometry.
/// The cache therefore grows with the explored chunk-coordinate space.
pub struct ChunkStreamer {
    grid: Arc<MazeGrid>,
    params: StreamerParams,
    cache: HashMap<ChunkCoord, ChunkWalls>,
    active: HashSet<ChunkCoord>,
}

impl ChunkStreamer {
    pub fn new(grid: Arc<MazeGrid>, params: StreamerParams) -> Self {
        Self {
            grid,
            params,
            cache: HashMap::new(),
            active: HashSet::new(),
        }
    }

    #[inline]
    pub fn params(&self) -> StreamerParams {
        self.params
    }

    /// World-space edge length of one chunk.
    #[inline]
    pub fn chunk_world_size(&self) -> f32 {
        self.params.chunk_size as f32 * self.params.cell_size
    }

    /// Chunk coordinate containing a world position.
    #[inline]
    pub fn chunk_at(&self, pos: Vec3) -> ChunkCoord {
        ChunkCoord::from_world(pos, self.chunk_world_size())
    }

    /// Cached chunk geometry, building it synchronously on a miss. The build
    /// cost is bounded by `chunk_size`^3 cells.
    pub fn get_or_build(&mut self, coord: ChunkCoord) -> &ChunkWalls {
        self.cache.entry(coord).or_insert_with(|| {
            build_chunk_walls(&self.grid, coord, self.params.chunk_size, self.params.cell_size)
        })
    }

    /// Recomputes the active cube around the observer and replaces the
    /// active set wholesale, reporting which coords changed state.
    pub fn update_active_set(&mut self, observer: Vec3) -> StreamUpdate {
        let center = self.chunk_at(observer);
        let r = self.params.view_distance;
        let side = (2 * r + 1) as usize;
        let mut fresh: HashSet<ChunkCoord> = HashSet::with_capacity(side * side * side);
        for dx in -r..=r {
            for dy in -r..=r {
                for dz in -r..=r {
                    let coord = center.offset(dx, dy, dz);
                    self.get_or_build(coord);
                    fresh.insert(coord);
                }
            }
        }
        let activated: Vec<ChunkCoord> = fresh.difference(&self.active).copied().collect();
        let deactivated: Vec<ChunkCoord> = self.active.difference(&fresh).copied().collect();
        self.active = fresh;
        StreamUpdate {
            activated,
            deactivated,
        }
    }

    /// Geometry of the currently active chunks (the collision input).
    pub fn active_chunks(&self) -> impl Iterator<Item = &ChunkWalls> {
        self.active.iter().filter_map(|coord| self.cache.get(coord))
    }

    #[inline]
    pub fn is_active(&self, coord: ChunkCoord) -> bool {
        self.active.contains(&coord)
    }

    #[inline]
    pub fn chunk(&self, coord: ChunkCoord) -> Option<&ChunkWalls> {
        self.cache.get(&coord)
    }

    #[inline]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Lifetime cache size; grows monotonically as the observer explores.
    #[inline]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
