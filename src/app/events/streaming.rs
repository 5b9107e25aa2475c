use warren_chunk::ChunkCoord;
use warren_render_raylib::ChunkRender;
use warren_render_raylib::conv::vec3_from_rl;

use super::App;
use crate::event::Event;

impl App {
    pub(super) fn handle_view_center_changed(&mut self, ccx: i32, ccy: i32, ccz: i32) {
        self.gs.center_chunk = ChunkCoord::new(ccx, ccy, ccz);
        let update = self
            .gs
            .streamer
            .update_active_set(vec3_from_rl(self.gs.walker.pos));
        for coord in update.activated {
            self.queue.emit_now(Event::ChunkActivated {
                cx: coord.cx,
                cy: coord.cy,
                cz: coord.cz,
            });
        }
        for coord in update.deactivated {
            self.queue.emit_now(Event::ChunkDeactivated {
                cx: coord.cx,
                cy: coord.cy,
                cz: coord.cz,
            });
        }
    }

    pub(super) fn handle_chunk_activated(&mut self, coord: ChunkCoord) {
        // The active-set pass already built and cached the geometry; only
        // the renderable is created here.
        let cell_size = self.gs.streamer.params().cell_size;
        if let Some(walls) = self.gs.streamer.chunk(coord) {
            self.renders.insert(coord, ChunkRender::build(walls, cell_size));
        }
    }

    pub(super) fn handle_chunk_deactivated(&mut self, coord: ChunkCoord) {
        // Hide only: the streamer keeps the wall geometry cached.
        self.renders.remove(&coord);
    }
}
