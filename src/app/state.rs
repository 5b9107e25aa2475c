use std::collections::HashMap;

use hashbrown::HashMap as FastHashMap;
use warren_chunk::ChunkCoord;
use warren_collision::CollisionProbe;
use warren_render_raylib::ChunkRender;

use crate::camera::FlyCamera;
use crate::event::EventQueue;
use crate::gamestate::GameState;

pub struct App {
    pub gs: GameState,
    pub queue: EventQueue,
    pub cam: FlyCamera,
    pub probe: CollisionProbe,
    // Touched every frame and on every activation diff
    pub renders: FastHashMap<ChunkCoord, ChunkRender>,
    pub debug_stats: DebugStats,
    pub(crate) evt_processed_total: usize,
    pub(crate) evt_processed_by: HashMap<String, usize>,
}

#[derive(Default)]
pub struct DebugStats {
    pub chunks_drawn: usize,
    pub slabs_drawn: usize,
    pub active_chunks: usize,
    pub cached_chunks: usize,
    pub queued_events_total: usize,
    pub queued_events_by: Vec<(String, usize)>,
}
