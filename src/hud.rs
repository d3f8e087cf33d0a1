//! Health/battery bars, item counter and end-of-game overlays.
use raylib::prelude::*;

use hospital_raycaster::core::config::Locale;
use hospital_raycaster::core::simulation::{GameStatus, Snapshot};

const PANEL_X: i32 = 32;
const PANEL_Y: i32 = 32;
const PANEL_W: i32 = 220;
const PANEL_H: i32 = 70;
const PANEL_GAP: i32 = 12;
const BAR_H: i32 = 12;

const PANEL_BG: Color = Color::new(0, 0, 0, 153);
const TEXT: Color = Color::new(255, 255, 255, 230);
const HEALTH_BAR: Color = Color::new(220, 38, 38, 255);
const BATTERY_BAR: Color = Color::new(59, 130, 246, 255);
const BATTERY_LOW: Color = Color::new(234, 88, 12, 255);

struct Strings {
    health: &'static str,
    battery: &'static str,
    items: &'static str,
    low_battery: &'static str,
    depleted: &'static str,
    depleted_hint: &'static str,
    survived: &'static str,
    survived_hint: &'static str,
    restart: &'static str,
}

fn strings(locale: Locale) -> Strings {
    match locale {
        Locale::En => Strings {
            health: "Health",
            battery: "Battery",
            items: "Items",
            low_battery: "Battery low!",
            depleted: "Battery depleted",
            depleted_hint: "Find a battery to continue",
            survived: "You survived!",
            survived_hint: "All items collected",
            restart: "Press R to play again",
        },
        Locale::Ru => Strings {
            health: "Здоровье",
            battery: "Батарея",
            items: "Предметы",
            low_battery: "Батарея разряжена!",
            depleted: "Батарея разряжена",
            depleted_hint: "Найдите батарею, чтобы продолжить",
            survived: "Вы выжили!",
            survived_hint: "Все предметы собраны",
            restart: "R - играть снова",
        },
    }
}

fn bar(d: &mut RaylibDrawHandle, y: i32, title: &str, value: f32, fill: Color, readout: &str) {
    d.draw_rectangle(PANEL_X, y, PANEL_W, PANEL_H, PANEL_BG);
    d.draw_text(title, PANEL_X + 12, y + 8, 20, TEXT);
    let inner = PANEL_W - 24;
    d.draw_rectangle(PANEL_X + 12, y + 34, inner, BAR_H, Color::new(0, 0, 0, 128));
    let filled = (inner as f32 * value.clamp(0.0, 100.0) / 100.0) as i32;
    d.draw_rectangle(PANEL_X + 12, y + 34, filled, BAR_H, fill);
    d.draw_text(readout, PANEL_X + 12, y + 50, 14, TEXT);
}

/// Draws `text` with its horizontal centre at `cx`.
pub fn centered(d: &mut RaylibDrawHandle, text: &str, cx: i32, y: i32, size: i32, color: Color) {
    let tw = d.measure_text(text, size);
    d.draw_text(text, cx - tw / 2, y, size, color);
}

fn overlay(d: &mut RaylibDrawHandle, title: &str, title_color: Color, hint: &str, footer: &str) {
    let w = d.get_screen_width();
    let h = d.get_screen_height();
    d.draw_rectangle(0, 0, w, h, Color::new(0, 0, 0, 230));
    centered(d, title, w / 2, h / 2 - 50, 40, title_color);
    centered(d, hint, w / 2, h / 2 + 4, 20, TEXT);
    centered(d, footer, w / 2, h / 2 + 40, 18, TEXT);
}

pub fn draw(d: &mut RaylibDrawHandle, snap: &Snapshot, locale: Locale) {
    let s = strings(locale);

    let mut y = PANEL_Y;
    bar(d, y, s.health, snap.health, HEALTH_BAR, &format!("{:.0}%", snap.health));
    y += PANEL_H + PANEL_GAP;

    let battery_fill = if snap.battery > 30.0 { BATTERY_BAR } else { BATTERY_LOW };
    bar(d, y, s.battery, snap.battery, battery_fill, &format!("{:.0}%", snap.battery));
    if snap.battery < 20.0 {
        d.draw_text(s.low_battery, PANEL_X + 100, y + 50, 14, Color::new(248, 113, 113, 255));
    }
    y += PANEL_H + PANEL_GAP;

    d.draw_rectangle(PANEL_X, y, PANEL_W, PANEL_H, PANEL_BG);
    d.draw_text(s.items, PANEL_X + 12, y + 8, 20, TEXT);
    d.draw_text(
        &format!("{} / {}", snap.items_collected, snap.total_items),
        PANEL_X + 12,
        y + 36,
        26,
        Color::new(255, 255, 255, 240),
    );

    match snap.status() {
        GameStatus::Playing => {}
        GameStatus::BatteryDepleted => {
            overlay(d, s.depleted, Color::new(239, 68, 68, 255), s.depleted_hint, s.restart);
        }
        GameStatus::Won => {
            overlay(d, s.survived, Color::new(34, 197, 94, 255), s.survived_hint, s.restart);
        }
    }
}
