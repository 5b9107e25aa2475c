use raylib::prelude::*;

use warren_chunk::ChunkStreamer;
use warren_collision::CollisionProbe;
use warren_render_raylib::conv::vec3_from_rl;

/// First-person walker. Horizontal-only movement: the displacement never has
/// a vertical component, and a blocked tick leaves the position untouched.
#[derive(Debug)]
pub struct Walker {
    pub pos: Vector3,
    pub yaw: f32,        // degrees (use camera yaw)
    pub speed: f32,      // walk speed (units/s)
    pub run_mult: f32,   // when LeftShift held
    pub eye_height: f32, // camera rides at pos.y + eye_height
}

impl Walker {
    pub fn new(spawn: Vector3, speed: f32, eye_height: f32) -> Self {
        Self {
            pos: spawn,
            yaw: -45.0,
            speed,
            run_mult: 1.6,
            eye_height,
        }
    }

    pub fn eye_position(&self) -> Vector3 {
        Vector3::new(self.pos.x, self.pos.y + self.eye_height, self.pos.z)
    }

    /// Polls WASD, resolves the displacement in the yaw frame, and commits
    /// the candidate position only when the probe reports it clear. Returns
    /// whether the walker actually moved this tick.
    pub fn update(
        &mut self,
        rl: &RaylibHandle,
        dt: f32,
        yaw: f32,
        probe: &CollisionProbe,
        streamer: &ChunkStreamer,
    ) -> bool {
        self.yaw = yaw;
        // Wish direction on the XZ plane based on yaw
        let yaw_rad = self.yaw.to_radians();
        let fwd = Vector3::new(yaw_rad.cos(), 0.0, yaw_rad.sin()).normalized();
        let right = fwd.cross(Vector3::up());
        let mut wish = Vector3::zero();
        if rl.is_key_down(KeyboardKey::KEY_W) {
            wish += fwd;
        }
        if rl.is_key_down(KeyboardKey::KEY_S) {
            wish -= fwd;
        }
        if rl.is_key_down(KeyboardKey::KEY_A) {
            wish -= right;
        }
        if rl.is_key_down(KeyboardKey::KEY_D) {
            wish += right;
        }
        if wish.length() == 0.0 {
            return false;
        }
        let run = if rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT) {
            self.run_mult
        } else {
            1.0
        };
        let displacement = wish.normalized() * self.speed * run * dt;
        self.try_move(displacement, probe, streamer)
    }

    /// Whole-displacement commit or reject: no sliding, no per-axis retry.
    pub fn try_move(
        &mut self,
        displacement: Vector3,
        probe: &CollisionProbe,
        streamer: &ChunkStreamer,
    ) -> bool {
        let candidate = self.pos + displacement;
        if probe.would_collide(vec3_from_rl(candidate), streamer.active_chunks()) {
            log::trace!(
                target: "walker",
                "blocked at ({:.2}, {:.2}, {:.2})",
                candidate.x,
                candidate.y,
                candidate.z
            );
            return false;
        }
        self.pos = candidate;
        true
    }
}
