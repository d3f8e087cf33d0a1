//! Billboard sprites: pickup items and dust motes.
//!
//! Exposes:
//! - `project_item`: screen placement of one item (angle-gated, tangent projection)
//! - `draw_items`: pickup check + drawing for every uncollected item
//! - `draw_dust`: depth-tested dust dots
use std::f32::consts::{PI, TAU};

use crate::core::config::Locale;
use crate::core::items::{Item, ItemKind};
use crate::core::level::Vector3;
use crate::core::player::Player;
use crate::core::resources::Resources;
use crate::render::framebuffer::{Color, Framebuffer};

/// Empirical widening of the tangent projection.
pub const SCREEN_SPREAD: f32 = 1.5;
pub const SPRITE_BASE_SIZE: f32 = 30.0;
/// Size multiplier with the flashlight off.
pub const DIM_SIZE: f32 = 0.3;
pub const LABEL_DISTANCE: f32 = 5.0;
pub const LABEL_GAP: f32 = 10.0;

const BOB_AMPLITUDE: f32 = 0.1;
const BOB_RATE: f32 = 2.0;
/// Eye height; walls are centred on the horizon and 4 units tall.
const EYE_HEIGHT: f32 = 2.0;
const DUST_COLOR: Color = Color::rgb(136, 136, 136);
const DUST_ALPHA: f32 = 0.3;

#[inline]
fn normalize_angle(a: f32) -> f32 {
    let r = (a + PI).rem_euclid(TAU) - PI;
    if r <= -PI { r + TAU } else { r }
}

/// Bearing of `target` relative to the view direction, in (-π, π].
#[inline]
pub fn bearing(player: &Player, target: &Vector3) -> f32 {
    let dx = target.x - player.position.x;
    let dz = target.z - player.position.z;
    normalize_angle(dx.atan2(dz) - player.yaw)
}

/// Text drawn over the raster by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: &'static str,
    /// Horizontal centre.
    pub x: f32,
    /// Baseline.
    pub y: f32,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteProjection {
    pub distance: f32,
    pub angle_diff: f32,
    pub screen_x: f32,
    pub size: f32,
    pub brightness: f32,
    pub show_label: bool,
}

/// Where an item lands on screen, or `None` when it is culled. Culls outside
/// half the field of view and off-screen x. Callers run the pickup check
/// first, so `distance` is at least the pickup radius here.
pub fn project_item(
    player: &Player,
    res: &Resources,
    target: &Vector3,
    screen_w: f32,
) -> Option<SpriteProjection> {
    let distance = player.position.planar_distance(target);
    if distance <= 0.0 {
        return None;
    }
    let angle_diff = bearing(player, target);
    if angle_diff.abs() >= player.fov / 2.0 {
        return None;
    }

    let half_w = screen_w / 2.0;
    let screen_x = half_w + angle_diff.tan() * half_w * SCREEN_SPREAD;
    if !(0.0..=screen_w).contains(&screen_x) {
        return None;
    }

    let light = if res.flashlight_on() { res.battery_fraction() } else { DIM_SIZE };
    Some(SpriteProjection {
        distance,
        angle_diff,
        screen_x,
        size: (SPRITE_BASE_SIZE / distance) * light,
        brightness: (1.0 - distance / 10.0).max(0.2),
        show_label: distance < LABEL_DISTANCE,
    })
}

/// Vertical bob in pixels at time `t` for an item `distance` away.
#[inline]
fn bob_offset(t: f32, distance: f32, screen_h: f32) -> f32 {
    BOB_AMPLITUDE * (t * BOB_RATE).sin() * screen_h / (2.0 * distance)
}

/// Runs pickups, then draws the remaining visible items. Returns labels for
/// the host and the kinds picked up this frame.
pub fn draw_items(
    fb: &mut Framebuffer,
    player: &Player,
    items: &mut [Item],
    res: &mut Resources,
    locale: Locale,
    time_sec: f32,
) -> (Vec<Label>, Vec<ItemKind>) {
    let w = fb.width as f32;
    let h = fb.height as f32;
    let hh = h / 2.0;
    let mut labels = Vec::new();
    let mut picked = Vec::new();

    for item in items.iter_mut().filter(|it| !it.is_collected()) {
        if item.try_pickup(&player.position, res) {
            picked.push(item.kind);
            continue;
        }
        let Some(sp) = project_item(player, res, &item.position, w) else {
            continue;
        };

        let (r, g, b) = item.kind.tint();
        let cy = hh - bob_offset(time_sec, sp.distance, h);
        fb.fill_circle(sp.screen_x, cy, sp.size, Color::rgb(r, g, b), sp.brightness);

        if sp.show_label {
            labels.push(Label {
                text: item.kind.label(locale),
                x: sp.screen_x,
                y: hh - sp.size - LABEL_GAP,
                alpha: sp.brightness * 0.8,
            });
        }
    }
    (labels, picked)
}

/// Dust dots, hidden behind walls using the per-x `depth` buffer.
pub fn draw_dust(fb: &mut Framebuffer, player: &Player, res: &Resources, motes: &[Vector3], depth: &[f32]) {
    let w = fb.width as f32;
    let h = fb.height as f32;
    let half_w = w / 2.0;
    let hh = h / 2.0;
    let light = res.light_intensity(1.0).max(0.3);

    for m in motes {
        let dist = player.position.planar_distance(m);
        if dist < 0.5 {
            continue;
        }
        let diff = bearing(player, m);
        if diff.abs() >= player.fov / 2.0 {
            continue;
        }
        let sx = half_w + diff.tan() * half_w * SCREEN_SPREAD;
        if !(0.0..w).contains(&sx) {
            continue;
        }
        let xi = sx as usize;
        if depth.get(xi).is_some_and(|&d| dist >= d) {
            continue;
        }
        let perp = dist * diff.cos();
        let sy = hh + (EYE_HEIGHT - m.y) * h / (2.0 * perp);
        if !(0.0..h).contains(&sy) {
            continue;
        }
        let alpha = DUST_ALPHA * (1.0 - dist / 10.0).max(0.2) * light;
        fb.blend_pixel(xi as u32, sy as u32, DUST_COLOR, alpha);
    }
}
