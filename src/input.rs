use raylib::prelude::*;

use hospital_raycaster::core::player::{PITCH_LIMIT, Velocity};
use hospital_raycaster::core::simulation::Simulation;

/// WASD to move, arrows or mouse to look, F for the flashlight.
pub struct InputController {
    yaw: f32,
    pitch: f32,
    mouse_sens: f32,
    turn_speed: f32,
}

impl InputController {
    pub fn new(mouse_sens: f32, turn_speed: f32) -> Self {
        Self { yaw: 0.0, pitch: 0.0, mouse_sens, turn_speed }
    }

    pub fn reset(&mut self, sim: &Simulation) {
        self.yaw = sim.player().yaw;
        self.pitch = sim.player().pitch;
    }

    pub fn apply(&mut self, rl: &RaylibHandle, sim: &mut Simulation) {
        let dt = rl.get_frame_time();

        let mouse = rl.get_mouse_delta();
        self.yaw += mouse.x * self.mouse_sens;
        self.pitch = (self.pitch - mouse.y * self.mouse_sens).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        if rl.is_key_down(KeyboardKey::KEY_LEFT) {
            self.yaw -= self.turn_speed * dt;
        }
        if rl.is_key_down(KeyboardKey::KEY_RIGHT) {
            self.yaw += self.turn_speed * dt;
        }
        sim.set_orientation(self.yaw, self.pitch);

        let axis = |pos: KeyboardKey, neg: KeyboardKey| -> f32 {
            (rl.is_key_down(pos) as i32 - rl.is_key_down(neg) as i32) as f32
        };
        let forward = axis(KeyboardKey::KEY_W, KeyboardKey::KEY_S);
        let strafe = axis(KeyboardKey::KEY_D, KeyboardKey::KEY_A);
        sim.set_velocity(Velocity::from_stick(forward, strafe, self.yaw));

        if rl.is_key_pressed(KeyboardKey::KEY_F) {
            sim.toggle_flashlight();
        }
    }
}
