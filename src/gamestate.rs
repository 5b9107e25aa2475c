use std::sync::Arc;

use warren_chunk::{ChunkCoord, ChunkStreamer};
use warren_maze::MazeGrid;

use crate::player::Walker;

pub struct GameState {
    pub tick: u64,

    // The carved grid: generated once, read-only from here on
    pub grid: Arc<MazeGrid>,

    // Streaming
    pub streamer: ChunkStreamer,
    pub center_chunk: ChunkCoord,

    // Walker
    pub walker: Walker,

    // UI/options
    pub show_grid: bool,
    pub show_chunk_bounds: bool,
    pub show_debug_overlay: bool,
}

impl GameState {
    pub fn new(grid: Arc<MazeGrid>, streamer: ChunkStreamer, walker: Walker) -> Self {
        Self {
            tick: 0,
            grid,
            streamer,
            // Sentinel forces the first real center to register as a change
            center_chunk: ChunkCoord::new(i32::MIN, i32::MIN, i32::MIN),
            walker,
            show_grid: false,
            show_chunk_bounds: false,
            show_debug_overlay: false,
        }
    }
}
