use raylib::prelude::*;
use warren_render_raylib::conv::vec3_from_rl;

use super::App;
use crate::event::Event;

impl App {
    pub(super) fn handle_movement_requested(&mut self, rl: &mut RaylibHandle, dt_ms: u32, yaw: f32) {
        let dt_sec = dt_ms as f32 / 1000.0;
        self.gs
            .walker
            .update(rl, dt_sec, yaw, &self.probe, &self.gs.streamer);
        // Camera rides the walker whether or not the move committed
        self.cam.position = self.gs.walker.eye_position();
        self.emit_view_center_if_changed();
    }

    fn emit_view_center_if_changed(&mut self) {
        let center = self.gs.streamer.chunk_at(vec3_from_rl(self.gs.walker.pos));
        if center != self.gs.center_chunk {
            self.queue.emit_now(Event::ViewCenterChanged {
                ccx: center.cx,
                ccy: center.cy,
                ccz: center.cz,
            });
        }
    }
}
