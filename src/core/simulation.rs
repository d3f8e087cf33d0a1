//! Simulation context: everything that changes between frames, and the order
//! it changes in.
use serde::Serialize;

use crate::core::config::{GameConfig, Locale};
use crate::core::dust::DustField;
use crate::core::items::{Item, ItemKind, count_collected};
use crate::core::level::Level;
use crate::core::physics::{self, MoveOutcome};
use crate::core::player::{Player, Velocity};
use crate::core::resources::Resources;
use crate::render::casters::COLUMN_COUNT;
use crate::render::framebuffer::Framebuffer;
use crate::render::render3d::render_3d;
use crate::render::sprites::{Label, draw_dust, draw_items};

/// Read-only view handed to the UI each frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub health: f32,
    pub battery: f32,
    pub flashlight_on: bool,
    pub items_collected: usize,
    pub total_items: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    Playing,
    BatteryDepleted,
    Won,
}

impl Snapshot {
    /// Winning takes priority over an empty battery.
    pub fn status(&self) -> GameStatus {
        if self.total_items > 0 && self.items_collected == self.total_items {
            GameStatus::Won
        } else if self.battery == 0.0 {
            GameStatus::BatteryDepleted
        } else {
            GameStatus::Playing
        }
    }
}

/// What a frame produced besides pixels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutput {
    pub labels: Vec<Label>,
    pub picked_up: Vec<ItemKind>,
    pub movement: MoveOutcome,
    pub battery_emptied: bool,
}

pub struct Simulation {
    level: Level,
    player: Player,
    items: Vec<Item>,
    resources: Resources,
    dust: DustField,
    depth: Vec<f32>,
    locale: Locale,
    elapsed: f32,
}

impl Simulation {
    pub fn new(cfg: &GameConfig) -> Self {
        Self::with_items(cfg, Level::default_items())
    }

    pub fn with_items(cfg: &GameConfig, items: Vec<Item>) -> Self {
        Self {
            level: Level::corridor(),
            player: Player::default(),
            items,
            resources: Resources::new(),
            dust: DustField::new(cfg.dust_particles, cfg.dust_seed),
            depth: Vec::new(),
            locale: cfg.locale,
            elapsed: 0.0,
        }
    }

    /// One frame: walls, items (pickup before drawing), dust, then movement
    /// and battery drain.
    pub fn step(&mut self, dt: f32, fb: &mut Framebuffer) -> FrameOutput {
        self.elapsed += dt;

        render_3d(fb, &self.level, &self.player, &self.resources, COLUMN_COUNT, &mut self.depth);
        let (labels, picked_up) = draw_items(
            fb,
            &self.player,
            &mut self.items,
            &mut self.resources,
            self.locale,
            self.elapsed,
        );
        draw_dust(fb, &self.player, &self.resources, self.dust.motes(), &self.depth);

        let movement = physics::integrate(&mut self.player, &self.level, dt);
        let battery_emptied = self.resources.drain(dt);
        self.dust.update(dt);

        if !picked_up.is_empty() && self.is_won() {
            log::info!("all {} items collected", self.items.len());
        }
        FrameOutput { labels, picked_up, movement, battery_emptied }
    }

    // Input, applied between frames

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.player.velocity = velocity;
    }

    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.player.set_orientation(yaw, pitch);
    }

    pub fn toggle_flashlight(&mut self) {
        self.resources.toggle_flashlight();
    }

    // Reads

    pub fn player(&self) -> &Player { &self.player }
    pub fn items(&self) -> &[Item] { &self.items }
    pub fn resources(&self) -> &Resources { &self.resources }
    pub fn level(&self) -> &Level { &self.level }
    pub fn locale(&self) -> Locale { self.locale }
    pub fn elapsed(&self) -> f32 { self.elapsed }

    pub fn items_collected(&self) -> usize {
        count_collected(&self.items)
    }

    pub fn is_won(&self) -> bool {
        !self.items.is_empty() && self.items_collected() == self.items.len()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            health: self.resources.health(),
            battery: self.resources.battery(),
            flashlight_on: self.resources.flashlight_on(),
            items_collected: self.items_collected(),
            total_items: self.items.len(),
        }
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub(crate) fn resources_mut(&mut self) -> &mut Resources {
        &mut self.resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::Vector3;

    fn quiet_config() -> GameConfig {
        GameConfig { dust_particles: 16, dust_seed: Some(1), ..GameConfig::default() }
    }

    fn fb() -> Framebuffer {
        Framebuffer::new(160, 90).unwrap()
    }

    #[test]
    fn test_initial_snapshot() {
        let sim = Simulation::new(&quiet_config());
        let snap = sim.snapshot();
        assert_eq!(snap.health, 100.0);
        assert_eq!(snap.battery, 100.0);
        assert!(snap.flashlight_on);
        assert_eq!(snap.items_collected, 0);
        assert_eq!(snap.total_items, 4);
        assert_eq!(snap.status(), GameStatus::Playing);
    }

    #[test]
    fn test_step_moves_and_drains() {
        let mut sim = Simulation::new(&quiet_config());
        let mut fb = fb();
        sim.set_velocity(Velocity::new(1.0, 0.0));
        let out = sim.step(0.1, &mut fb);
        assert!(out.picked_up.is_empty());
        assert!((sim.player().position.x - 0.3).abs() < 1e-6);
        assert!((sim.resources().battery() - 99.8).abs() < 1e-4);
    }

    #[test]
    fn test_flashlight_off_stops_drain() {
        let mut sim = Simulation::new(&quiet_config());
        let mut fb = fb();
        sim.toggle_flashlight();
        sim.step(5.0, &mut fb);
        assert_eq!(sim.resources().battery(), 100.0);
    }

    #[test]
    fn test_pickup_uses_position_before_move() {
        let mut sim = Simulation::new(&quiet_config());
        let mut fb = fb();
        sim.player_mut().position = Vector3::new(-3.0, 0.0, -4.2);
        sim.resources_mut().set_battery(90.0);
        let out = sim.step(0.0, &mut fb);
        assert_eq!(out.picked_up, vec![ItemKind::Battery]);
        assert_eq!(sim.resources().battery(), 100.0);
        assert_eq!(sim.items_collected(), 1);
    }

    #[test]
    fn test_collect_all_in_any_order_wins() {
        for order in [[0usize, 1, 2, 3], [3, 1, 0, 2], [2, 3, 1, 0]] {
            let mut sim = Simulation::new(&quiet_config());
            let mut fb = fb();
            for &idx in &order {
                let pos = sim.items()[idx].position;
                sim.player_mut().position = Vector3::new(pos.x, 0.0, pos.z + 0.5);
                sim.step(0.016, &mut fb);
                // staying on the spot must not collect twice
                sim.step(0.016, &mut fb);
            }
            let snap = sim.snapshot();
            assert_eq!(snap.items_collected, 4);
            assert_eq!(snap.status(), GameStatus::Won);
            assert!(sim.is_won());
        }
    }

    #[test]
    fn test_depleted_status_surfaced_but_sim_continues() {
        let mut sim = Simulation::new(&quiet_config());
        let mut fb = fb();
        sim.resources_mut().set_battery(1.0);
        let out = sim.step(1.0, &mut fb);
        assert!(out.battery_emptied);
        assert_eq!(sim.snapshot().status(), GameStatus::BatteryDepleted);
        sim.set_velocity(Velocity::new(0.0, -1.0));
        sim.step(0.5, &mut fb);
        assert!((sim.player().position.z - 3.5).abs() < 1e-5);
        assert_eq!(sim.resources().battery(), 0.0);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut sim = Simulation::new(&quiet_config());
        sim.set_orientation(1.0, 5.0);
        assert_eq!(sim.player().yaw, 1.0);
        assert!((sim.player().pitch - std::f32::consts::FRAC_PI_3).abs() < 1e-6);
    }

    #[test]
    fn test_snapshot_serializes() {
        let sim = Simulation::new(&quiet_config());
        let json = serde_json::to_string(&sim.snapshot()).unwrap();
        assert!(json.contains("\"items_collected\":0"));
    }
}
