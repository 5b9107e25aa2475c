use raylib::prelude::*;

/// First-person camera. Translation is owned by the walker; this only turns.
pub struct FlyCamera {
    pub position: Vector3,
    pub yaw: f32,   // degrees
    pub pitch: f32, // degrees
    pub mouse_sensitivity: f32,
    pub captured: bool,
}

impl FlyCamera {
    pub fn new(position: Vector3, mouse_sensitivity: f32) -> Self {
        Self {
            position,
            yaw: -45.0,
            pitch: -10.0,
            mouse_sensitivity,
            captured: true,
        }
    }

    pub fn to_camera3d(&self) -> Camera3D {
        let forward = self.forward();
        Camera3D::perspective(
            self.position,
            self.position + forward,
            Vector3::new(0.0, 1.0, 0.0),
            70.0,
        )
    }

    pub fn forward(&self) -> Vector3 {
        let yaw_rad = self.yaw.to_radians();
        let pitch_rad = self.pitch.to_radians();
        Vector3::new(
            yaw_rad.cos() * pitch_rad.cos(),
            pitch_rad.sin(),
            yaw_rad.sin() * pitch_rad.cos(),
        )
        .normalized()
    }

    /// Mouse-look and capture toggle only; the walker moves the camera.
    pub fn update_look_only(&mut self, rl: &mut RaylibHandle) {
        // Toggle mouse capture with Tab
        if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            self.captured = !self.captured;
            if self.captured {
                rl.disable_cursor();
            } else {
                rl.enable_cursor();
            }
        }
        if self.captured {
            let md = rl.get_mouse_delta();
            self.yaw += md.x * self.mouse_sensitivity;
            self.pitch -= md.y * self.mouse_sensitivity;
            self.pitch = self.pitch.clamp(-89.9, 89.9);
        }
    }
}
