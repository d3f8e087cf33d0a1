//! Column renderer: flat-shaded walls lit by the flashlight, plus the
//! ceiling and floor bands.
use crate::core::level::{Level, WallType};
use crate::core::player::Player;
use crate::core::resources::Resources;
use crate::render::casters::{Intersect, cast_columns};
use crate::render::framebuffer::{Color, Framebuffer};

pub const BACKGROUND: Color = Color::rgb(10, 10, 15);
pub const CEILING: Color = Color::rgb(15, 15, 20);
pub const FLOOR: Color = Color::rgb(8, 8, 12);

/// Distance at which walls fade to black.
pub const LIGHT_FALLOFF: f32 = 15.0;

const WALL_OPEN: (u8, u8, u8) = (20, 20, 25);
const WALL_SIDE: (u8, u8, u8) = (30, 25, 20);
const WALL_END: (u8, u8, u8) = (25, 20, 30);

/// A wall column ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    pub x: f32,
    pub width: f32,
    pub top: f32,
    pub height: f32,
    pub color: Color,
    pub perp_distance: f32,
}

#[inline]
fn base_color(kind: WallType) -> (u8, u8, u8) {
    match kind {
        WallType::Open => WALL_OPEN,
        WallType::Side => WALL_SIDE,
        WallType::End => WALL_END,
    }
}

/// Hit distance projected onto the view direction.
#[inline]
pub fn perpendicular_distance(hit: &Intersect, yaw: f32) -> f32 {
    hit.distance * (hit.angle - yaw).cos()
}

#[inline]
pub fn wall_brightness(perp: f32) -> f32 {
    (1.0 - perp / LIGHT_FALLOFF).max(0.0)
}

pub fn shade(kind: WallType, intensity: f32) -> Color {
    let k = intensity.clamp(0.0, 1.0);
    let (r, g, b) = base_color(kind);
    let mul = |v: u8| -> u8 { ((v as f32) * k).floor().min(255.0) as u8 };
    Color::rgb(mul(r), mul(g), mul(b))
}

/// Screen placement and shade of column `i` of `columns`.
pub fn project_column(
    hit: &Intersect,
    i: usize,
    columns: usize,
    player: &Player,
    res: &Resources,
    screen_w: f32,
    screen_h: f32,
) -> Column {
    // march steps start at 0; keep the height finite
    let perp = perpendicular_distance(hit, player.yaw).max(1e-3);
    let height = (screen_h / perp) * 2.0;
    let intensity = res.light_intensity(wall_brightness(perp));
    Column {
        x: (i as f32 / columns as f32) * screen_w,
        width: screen_w / columns as f32 + 1.0,
        top: screen_h / 2.0 - height / 2.0,
        height,
        color: shade(hit.impact, intensity),
        perp_distance: perp,
    }
}

/// Paints the scene (background, walls, bands) and fills `depth` with the
/// wall distance seen through every screen x.
pub fn render_3d(
    fb: &mut Framebuffer,
    level: &Level,
    player: &Player,
    res: &Resources,
    columns: usize,
    depth: &mut Vec<f32>,
) -> Vec<Intersect> {
    let w = fb.width as f32;
    let h = fb.height as f32;
    let hh = h / 2.0;

    fb.set_background_color(BACKGROUND);
    fb.clear();

    depth.clear();
    depth.resize(fb.width as usize, f32::INFINITY);

    let hits = cast_columns(level, player, columns);
    for (i, hit) in hits.iter().enumerate() {
        let col = project_column(hit, i, columns, player, res, w, h);
        fb.fill_rect(col.x, col.top, col.width, col.height, col.color);

        let x0 = col.x.round().max(0.0) as usize;
        let x1 = ((col.x + col.width).round() as usize).min(depth.len());
        for z in depth.iter_mut().take(x1).skip(x0) {
            *z = hit.distance;
        }
    }

    fb.fill_rect(0.0, 0.0, w, hh - h / 4.0, CEILING);
    fb.fill_rect(0.0, hh + h / 4.0, w, h, FLOOR);
    hits
}
