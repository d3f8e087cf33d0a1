//! Velocity integration with per-axis hard stops.
use crate::core::level::Level;
use crate::core::player::Player;

/// Which axes were refused this step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub blocked_x: bool,
    pub blocked_z: bool,
}

/// Moves the player by `velocity * move_speed * dt`. An axis whose new value
/// would leave the walkable area keeps its old value; nothing is clamped to the
/// boundary.
pub fn integrate(player: &mut Player, level: &Level, dt: f32) -> MoveOutcome {
    try_move(player, dt, |axis, v| match axis {
        Axis::X => level.walkable_x(v),
        Axis::Z => level.walkable_z(v),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Z,
}

fn try_move<F: Fn(Axis, f32) -> bool>(player: &mut Player, dt: f32, is_free: F) -> MoveOutcome {
    let step = player.move_speed * dt;
    let nx = player.position.x + player.velocity.x * step;
    let nz = player.position.z + player.velocity.z * step;

    let mut out = MoveOutcome::default();
    if is_free(Axis::X, nx) {
        player.position.x = nx;
    } else {
        out.blocked_x = true;
    }
    if is_free(Axis::Z, nz) {
        player.position.z = nz;
    } else {
        out.blocked_z = true;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::Vector3;
    use crate::core::player::Velocity;

    fn player_at(x: f32, z: f32, vx: f32, vz: f32) -> Player {
        let mut p = Player::new(Vector3::new(x, 0.0, z), 0.0);
        p.velocity = Velocity::new(vx, vz);
        p
    }

    #[test]
    fn test_zero_velocity_keeps_position() {
        let level = Level::corridor();
        for &(x, z) in &[(0.0, 5.0), (7.4, -19.4), (-7.49, 9.49), (3.0, 0.0)] {
            let mut p = player_at(x, z, 0.0, 0.0);
            let out = integrate(&mut p, &level, 0.5);
            assert_eq!(p.position, Vector3::new(x, 0.0, z));
            assert_eq!(out, MoveOutcome::default());
        }
    }

    #[test]
    fn test_moves_by_speed_times_delta() {
        let level = Level::corridor();
        for &dt in &[0.001_f32, 0.016, 0.1, 0.5] {
            let mut p = player_at(0.0, 0.0, 1.0, 0.0);
            integrate(&mut p, &level, dt);
            assert!((p.position.x - 3.0 * dt).abs() < 1e-6);
            assert_eq!(p.position.z, 0.0);
        }
    }

    #[test]
    fn test_hard_stop_not_clamp() {
        let level = Level::corridor();
        let mut p = player_at(7.0, 0.0, 1.0, 0.0);
        // 7.0 + 3 * 0.5 = 8.5, past 7.5
        let out = integrate(&mut p, &level, 0.5);
        assert!(out.blocked_x);
        assert_eq!(p.position.x, 7.0);
    }

    #[test]
    fn test_axes_are_independent() {
        let level = Level::corridor();
        let mut p = player_at(0.0, 9.0, 1.0, 1.0);
        let out = integrate(&mut p, &level, 0.25);
        assert!(!out.blocked_x);
        assert!(out.blocked_z);
        assert!((p.position.x - 0.75).abs() < 1e-6);
        assert_eq!(p.position.z, 9.0);
    }

    #[test]
    fn test_huge_delta_is_rejected_not_tunnelled() {
        let level = Level::corridor();
        let mut p = player_at(0.0, 0.0, 0.0, -1.0);
        integrate(&mut p, &level, 100.0);
        assert_eq!(p.position.z, 0.0);
    }
}
