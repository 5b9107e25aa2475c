//! Chunk partitioning: lazily built wall geometry and the streaming active set.
#![forbid(unsafe_code)]

mod chunk_coord;
mod streamer;
mod walls;

pub use chunk_coord::ChunkCoord;
pub use streamer::{ChunkStreamer, StreamUpdate, StreamerParams};
pub use walls::{ChunkWalls, WallInstance, build_chunk_walls};
