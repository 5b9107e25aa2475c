use raylib::prelude::*;

use super::App;
use crate::event::Event;

impl App {
    pub fn step(&mut self, rl: &mut RaylibHandle, dt: f32) {
        // Time housekeeping heartbeat
        self.queue.emit_now(Event::Tick);

        // Mouse look and capture toggle
        self.cam.update_look_only(rl);

        // UI toggles
        if rl.is_key_pressed(KeyboardKey::KEY_G) {
            self.queue.emit_now(Event::GridToggled);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_B) {
            self.queue.emit_now(Event::ChunkBoundsToggled);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F3) {
            self.queue.emit_now(Event::DebugOverlayToggled);
        }

        // Movement intent for this tick (dt→ms)
        let dt_ms = (dt.max(0.0) * 1000.0) as u32;
        self.queue.emit_now(Event::MovementRequested {
            dt_ms,
            yaw: self.cam.yaw,
        });

        // Snapshot queued events before processing (for the debug overlay)
        {
            let (total, by) = self.queue.queued_counts();
            self.debug_stats.queued_events_total = total;
            let mut pairs: Vec<(String, usize)> =
                by.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
            pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
            self.debug_stats.queued_events_by = pairs;
        }

        // Process events scheduled for this tick with a budget
        let mut processed = 0usize;
        let max_events = 20_000usize;
        while let Some(env) = self.queue.pop_ready() {
            let label = env.kind.label().to_string();
            self.evt_processed_total = self.evt_processed_total.saturating_add(1);
            *self.evt_processed_by.entry(label).or_insert(0) += 1;
            self.handle_event(rl, env);
            processed += 1;
            if processed >= max_events {
                break;
            }
        }

        self.debug_stats.active_chunks = self.gs.streamer.active_len();
        self.debug_stats.cached_chunks = self.gs.streamer.cached_len();

        self.gs.tick = self.gs.tick.wrapping_add(1);
        self.queue.advance_tick();
        // Events left in past buckets will never run; that is a logic bug
        let stale = self.queue.count_stale_events();
        if stale > 0 {
            let mut details = String::new();
            for (t, n) in self.queue.stale_summary() {
                use std::fmt::Write as _;
                let _ = write!(&mut details, "[t={} n={}] ", t, n);
            }
            log::error!(
                target: "events",
                "Detected {} stale event(s) in past tick buckets; details: {}",
                stale,
                details
            );
        }
    }
}
