use crate::core::level::{PLAYER_SPAWN, Vector3};

/// 60°
pub const FOV: f32 = std::f32::consts::FRAC_PI_3;
/// World units per second at full stick deflection.
pub const MOVE_SPEED: f32 = 3.0;
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_3;

/// Movement on the floor plane, already rotated into world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub z: f32,
}

impl Velocity {
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Rotates stick input (forward, strafe right) into world space for a
    /// player facing `yaw`. Diagonals are normalised to unit length.
    pub fn from_stick(forward: f32, strafe: f32, yaw: f32) -> Self {
        let len = (forward * forward + strafe * strafe).sqrt();
        let (f, s) = if len > 1.0 { (forward / len, strafe / len) } else { (forward, strafe) };
        let (sin, cos) = yaw.sin_cos();
        Self::new(f * sin + s * cos, f * cos - s * sin)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Vector3,
    pub yaw: f32,   // 0 looks down +z
    pub pitch: f32,
    pub velocity: Velocity,
    pub fov: f32,
    pub move_speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_SPAWN, 0.0)
    }
}

impl Player {
    pub fn new(position: Vector3, yaw: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: 0.0,
            velocity: Velocity::default(),
            fov: FOV,
            move_speed: MOVE_SPEED,
        }
    }

    /// Unit view direction on the (x, z) plane.
    #[inline]
    pub fn forward(&self) -> (f32, f32) {
        (self.yaw.sin(), self.yaw.cos())
    }

    /// Unit direction toward the right edge of the screen.
    #[inline]
    pub fn right(&self) -> (f32, f32) {
        (self.yaw.cos(), -self.yaw.sin())
    }

    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}
