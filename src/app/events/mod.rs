mod logging;
mod movement;
mod streaming;
mod toggles;

use raylib::prelude::*;
use warren_chunk::ChunkCoord;

use super::App;
use crate::event::{Event, EventEnvelope};

impl App {
    pub(super) fn handle_event(&mut self, rl: &mut RaylibHandle, env: EventEnvelope) {
        // Log a concise line for the processed event
        Self::log_event(self.gs.tick, &env.kind);
        match env.kind {
            Event::Tick => {}
            Event::MovementRequested { dt_ms, yaw } => {
                self.handle_movement_requested(rl, dt_ms, yaw);
            }
            Event::ViewCenterChanged { ccx, ccy, ccz } => {
                self.handle_view_center_changed(ccx, ccy, ccz);
            }
            Event::ChunkActivated { cx, cy, cz } => {
                self.handle_chunk_activated(ChunkCoord::new(cx, cy, cz));
            }
            Event::ChunkDeactivated { cx, cy, cz } => {
                self.handle_chunk_deactivated(ChunkCoord::new(cx, cy, cz));
            }
            Event::GridToggled => {
                self.handle_grid_toggle();
            }
            Event::ChunkBoundsToggled => {
                self.handle_chunk_bounds_toggle();
            }
            Event::DebugOverlayToggled => {
                self.handle_debug_overlay_toggle();
            }
        }
    }
}
