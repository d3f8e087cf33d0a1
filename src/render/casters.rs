//! Fixed-step ray marching against the corridor walls.
use crate::core::level::{Level, WallType};
use crate::core::player::Player;

pub const COLUMN_COUNT: usize = 120;
pub const MAX_RANGE: f32 = 20.0;
pub const RAY_STEP: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersect {
    pub distance: f32,
    pub impact: WallType,
    /// Angle the ray was cast at.
    pub angle: f32,
}

/// Angle of column `i` out of `columns`, sweeping left to right.
#[inline]
pub fn column_angle(player: &Player, i: usize, columns: usize) -> f32 {
    player.yaw - player.fov / 2.0 + player.fov * (i as f32) / (columns as f32)
}

/// Marches from the player along `a` until a wall is crossed or the range runs
/// out. A miss reports `MAX_RANGE` and `WallType::Open` so the column still
/// gets drawn.
pub fn cast_ray(level: &Level, player: &Player, a: f32) -> Intersect {
    let (dir_x, dir_z) = (a.sin(), a.cos());
    let steps = (MAX_RANGE / RAY_STEP).round() as u32;

    for step in 0..steps {
        let d = step as f32 * RAY_STEP;
        let x = player.position.x + dir_x * d;
        let z = player.position.z + dir_z * d;
        if let Some(impact) = level.wall_at(x, z) {
            return Intersect { distance: d, impact, angle: a };
        }
    }
    Intersect { distance: MAX_RANGE, impact: WallType::Open, angle: a }
}

/// One hit per column, left to right.
pub fn cast_columns(level: &Level, player: &Player, columns: usize) -> Vec<Intersect> {
    (0..columns)
        .map(|i| cast_ray(level, player, column_angle(player, i, columns)))
        .collect()
}
