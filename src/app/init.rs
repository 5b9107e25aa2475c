use std::collections::HashMap;
use std::sync::Arc;

use hashbrown::HashMap as FastHashMap;
use raylib::prelude::*;
use warren_chunk::ChunkStreamer;
use warren_collision::CollisionProbe;
use warren_maze::MazeGrid;
use warren_render_raylib::conv::vec3_from_rl;

use super::{App, DebugStats};
use crate::camera::FlyCamera;
use crate::config::AppConfig;
use crate::event::{Event, EventQueue};
use crate::gamestate::GameState;
use crate::player::Walker;

impl App {
    pub fn new(grid: Arc<MazeGrid>, cfg: &AppConfig) -> Self {
        // Spawn at the origin cell's center: exactly at the probe threshold
        // from the cell's own anchors, so the walker starts clear.
        let spawn = Vector3::new(0.0, 0.0, 0.0);
        let walker = Walker::new(spawn, cfg.walker.speed, cfg.stream.cell_size * 0.4);
        let cam = FlyCamera::new(walker.eye_position(), cfg.walker.mouse_sensitivity);

        let streamer = ChunkStreamer::new(grid.clone(), cfg.streamer_params());
        let probe = CollisionProbe::new(cfg.collision_threshold());
        let gs = GameState::new(grid, streamer, walker);

        let mut queue = EventQueue::new();
        // Bootstrap initial streaming from the spawn position
        let c0 = gs.streamer.chunk_at(vec3_from_rl(gs.walker.pos));
        queue.emit_now(Event::ViewCenterChanged {
            ccx: c0.cx,
            ccy: c0.cy,
            ccz: c0.cz,
        });

        Self {
            gs,
            queue,
            cam,
            probe,
            renders: FastHashMap::new(),
            debug_stats: DebugStats::default(),
            evt_processed_total: 0,
            evt_processed_by: HashMap::new(),
        }
    }
}
