use raylib::prelude::*;
use warren_render_raylib::chunk_bounds;

use super::App;

impl App {
    pub fn render(&mut self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::new(18, 18, 24, 255));
        let camera3d = self.cam.to_camera3d();
        let params = self.gs.streamer.params();
        self.debug_stats.chunks_drawn = 0;
        self.debug_stats.slabs_drawn = 0;
        {
            let mut d3 = d.begin_mode3D(camera3d);
            if self.gs.show_grid {
                d3.draw_grid(64, params.cell_size);
            }
            for render in self.renders.values() {
                render.draw(&mut d3, Color::LIGHTGRAY, Color::DARKGRAY);
                self.debug_stats.chunks_drawn += 1;
                self.debug_stats.slabs_drawn += render.slabs.len();
            }
            if self.gs.show_chunk_bounds {
                for coord in self.renders.keys() {
                    d3.draw_bounding_box(
                        chunk_bounds(*coord, params.chunk_size, params.cell_size),
                        Color::LIME,
                    );
                }
            }
        }

        // HUD
        d.draw_fps(12, 12);
        let pos = self.gs.walker.pos;
        d.draw_text(
            &format!("pos ({:.1}, {:.1}, {:.1})", pos.x, pos.y, pos.z),
            12,
            36,
            20,
            Color::RAYWHITE,
        );
        d.draw_text(
            &format!(
                "chunks active {} / cached {}",
                self.debug_stats.active_chunks, self.debug_stats.cached_chunks
            ),
            12,
            60,
            20,
            Color::RAYWHITE,
        );
        d.draw_text(
            &format!(
                "maze {}x{}x{}",
                self.gs.grid.width(),
                self.gs.grid.height(),
                self.gs.grid.depth()
            ),
            12,
            84,
            20,
            Color::RAYWHITE,
        );
        d.draw_text(
            "WASD move | Shift run | Tab mouse | G grid | B bounds | F3 debug",
            12,
            108,
            10,
            Color::GRAY,
        );

        if self.gs.show_debug_overlay {
            let mut y = 132;
            d.draw_text(
                &format!(
                    "tick {}  processed {}  queued {}",
                    self.gs.tick, self.evt_processed_total, self.debug_stats.queued_events_total
                ),
                12,
                y,
                10,
                Color::SKYBLUE,
            );
            y += 14;
            d.draw_text(
                &format!(
                    "drawn: {} chunks, {} slabs",
                    self.debug_stats.chunks_drawn, self.debug_stats.slabs_drawn
                ),
                12,
                y,
                10,
                Color::SKYBLUE,
            );
            y += 14;
            for (label, n) in self.debug_stats.queued_events_by.iter().take(4) {
                d.draw_text(
                    &format!("queued {} {}", label, n),
                    12,
                    y,
                    10,
                    Color::SKYBLUE,
                );
                y += 14;
            }
            let mut processed: Vec<(String, usize)> = self
                .evt_processed_by
                .iter()
                .map(|(k, v)| (k.clone(), *v))
                .collect();
            processed.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
            for (label, n) in processed.iter().take(8) {
                d.draw_text(&format!("{} {}", label, n), 12, y, 10, Color::SKYBLUE);
                y += 14;
            }
        }
    }
}
