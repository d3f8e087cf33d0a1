//! Runtime settings. Defaults reproduce the stock game; a JSON file may override
//! any subset of fields.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Language used for item labels and HUD text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,
    pub target_fps: u32,
    pub locale: Locale,
    /// Upper bound for a single frame's delta time in seconds. `None` keeps the
    /// raw wall-clock delta, so a long stall becomes one long step.
    pub max_frame_delta: Option<f32>,
    pub mouse_sensitivity: f32,
    /// Keyboard turn rate, rad/s.
    pub turn_speed: f32,
    pub dust_particles: usize,
    /// Fixed seed for the dust field; random when absent.
    pub dust_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            title: "Hospital".to_string(),
            target_fps: 60,
            locale: Locale::En,
            max_frame_delta: Some(1.0 / 15.0),
            mouse_sensitivity: 0.003,
            turn_speed: 2.0,
            dust_particles: 300,
            dust_seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: GameConfig = serde_json::from_str(text).context("invalid game config JSON")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads `path` if it exists, otherwise falls back to the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg = Self::from_json(&text).with_context(|| format!("loading config {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            bail!("window size must be non-zero, got {}x{}", self.window_width, self.window_height);
        }
        if let Some(max) = self.max_frame_delta {
            if !(max > 0.0) {
                bail!("max_frame_delta must be positive or null, got {max}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let cfg = GameConfig::from_json("{}").unwrap();
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let cfg = GameConfig::from_json(r#"{ "locale": "ru", "dust_particles": 10 }"#).unwrap();
        assert_eq!(cfg.locale, Locale::Ru);
        assert_eq!(cfg.dust_particles, 10);
        assert_eq!(cfg.window_width, 1280);
    }

    #[test]
    fn test_null_delta_clamp_disables_it() {
        let cfg = GameConfig::from_json(r#"{ "max_frame_delta": null }"#).unwrap();
        assert_eq!(cfg.max_frame_delta, None);
    }

    #[test]
    fn test_rejects_zero_window() {
        assert!(GameConfig::from_json(r#"{ "window_width": 0 }"#).is_err());
        assert!(GameConfig::from_json(r#"{ "max_frame_delta": -1.0 }"#).is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let cfg = GameConfig::load_or_default("definitely/not/here.json").unwrap();
        assert_eq!(cfg, GameConfig::default());
    }
}
