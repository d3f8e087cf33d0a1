//! Corridor geometry: one axis-aligned box, walls on every side.
use crate::core::items::{Item, ItemKind};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Distance on the floor plane (ignores `y`).
    #[inline]
    pub fn planar_distance(&self, other: &Vector3) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }
}

/// Which boundary a ray ran into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallType {
    /// Nothing within range.
    Open = 0,
    /// `|x|` past the side walls.
    Side = 1,
    /// Far or near end of the corridor.
    End = 2,
}

// Walls
pub const SIDE_WALL_X: f32 = 8.0;
pub const FAR_WALL_Z: f32 = -20.0;
pub const NEAR_WALL_Z: f32 = 10.0;

// Walkable area, half a unit inside the walls
pub const WALK_LIMIT_X: f32 = 7.5;
pub const WALK_MIN_Z: f32 = -19.5;
pub const WALK_MAX_Z: f32 = 9.5;

pub const PLAYER_SPAWN: Vector3 = Vector3::new(0.0, 0.0, 5.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Level {
    pub side_wall_x: f32,
    pub far_wall_z: f32,
    pub near_wall_z: f32,
    pub walk_limit_x: f32,
    pub walk_min_z: f32,
    pub walk_max_z: f32,
}

impl Default for Level {
    fn default() -> Self {
        Self::corridor()
    }
}

impl Level {
    pub const fn corridor() -> Self {
        Self {
            side_wall_x: SIDE_WALL_X,
            far_wall_z: FAR_WALL_Z,
            near_wall_z: NEAR_WALL_Z,
            walk_limit_x: WALK_LIMIT_X,
            walk_min_z: WALK_MIN_Z,
            walk_max_z: WALK_MAX_Z,
        }
    }

    /// Wall at a test point, side walls checked first.
    #[inline]
    pub fn wall_at(&self, x: f32, z: f32) -> Option<WallType> {
        if x.abs() > self.side_wall_x {
            return Some(WallType::Side);
        }
        if z < self.far_wall_z || z > self.near_wall_z {
            return Some(WallType::End);
        }
        None
    }

    #[inline]
    pub fn walkable_x(&self, x: f32) -> bool {
        x.abs() < self.walk_limit_x
    }

    #[inline]
    pub fn walkable_z(&self, z: f32) -> bool {
        z > self.walk_min_z && z < self.walk_max_z
    }

    /// The four pickups of the stock level.
    pub fn default_items() -> Vec<Item> {
        vec![
            Item::new(Vector3::new(-3.0, 0.0, -5.0), ItemKind::Battery),
            Item::new(Vector3::new(4.0, 0.0, -8.0), ItemKind::Health),
            Item::new(Vector3::new(-2.0, 0.0, -12.0), ItemKind::Battery),
            Item::new(Vector3::new(1.0, 0.0, -15.0), ItemKind::Health),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_wall_wins_in_corner() {
        let level = Level::corridor();
        assert_eq!(level.wall_at(8.5, 12.0), Some(WallType::Side));
        assert_eq!(level.wall_at(0.0, 10.5), Some(WallType::End));
        assert_eq!(level.wall_at(0.0, -20.5), Some(WallType::End));
        assert_eq!(level.wall_at(7.9, -19.9), None);
    }

    #[test]
    fn test_walkable_area_inside_walls() {
        let level = Level::corridor();
        assert!(level.walkable_x(7.4));
        assert!(!level.walkable_x(-7.5));
        assert!(level.walkable_z(9.4));
        assert!(!level.walkable_z(9.5));
        assert!(!level.walkable_z(-19.5));
        for x in [-7.49_f32, 0.0, 7.49] {
            assert_eq!(level.wall_at(x, 0.0), None);
        }
    }

    #[test]
    fn test_planar_distance_ignores_height() {
        let a = Vector3::new(0.0, 0.0, 5.0);
        let b = Vector3::new(3.0, 10.0, 1.0);
        assert!((a.planar_distance(&b) - 5.0).abs() < 1e-6);
    }
}
