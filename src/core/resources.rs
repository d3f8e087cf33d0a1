//! Health, battery and the flashlight switch.

pub const MAX_LEVEL: f32 = 100.0;
/// Battery units per second while the flashlight is on.
pub const DRAIN_RATE: f32 = 2.0;
/// Light multiplier with the flashlight off.
pub const AMBIENT_LIGHT: f32 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct Resources {
    health: f32,
    battery: f32,
    flashlight_on: bool,
}

impl Default for Resources {
    fn default() -> Self {
        Self::new()
    }
}

impl Resources {
    pub fn new() -> Self {
        Self { health: MAX_LEVEL, battery: MAX_LEVEL, flashlight_on: true }
    }

    #[inline] pub fn health(&self) -> f32 { self.health }
    #[inline] pub fn battery(&self) -> f32 { self.battery }
    #[inline] pub fn flashlight_on(&self) -> bool { self.flashlight_on }
    #[inline] pub fn battery_fraction(&self) -> f32 { self.battery / MAX_LEVEL }

    pub fn set_health(&mut self, v: f32) { self.health = v.clamp(0.0, MAX_LEVEL); }
    pub fn set_battery(&mut self, v: f32) { self.battery = v.clamp(0.0, MAX_LEVEL); }

    pub fn add_health(&mut self, amount: f32) { self.set_health(self.health + amount); }
    pub fn add_battery(&mut self, amount: f32) { self.set_battery(self.battery + amount); }

    pub fn toggle_flashlight(&mut self) {
        self.flashlight_on = !self.flashlight_on;
    }

    /// Drains the battery for `dt` seconds of flashlight use. Returns true on
    /// the frame the battery runs dry.
    pub fn drain(&mut self, dt: f32) -> bool {
        if !self.flashlight_on || self.battery <= 0.0 {
            return false;
        }
        self.battery = (self.battery - dt * DRAIN_RATE).max(0.0);
        if self.battery == 0.0 {
            log::warn!("flashlight battery depleted");
            return true;
        }
        false
    }

    /// Scales a distance falloff by the light actually available.
    #[inline]
    pub fn light_intensity(&self, brightness: f32) -> f32 {
        if self.flashlight_on {
            brightness * self.battery_fraction()
        } else {
            brightness * AMBIENT_LIGHT
        }
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.battery == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_rate() {
        let mut r = Resources::new();
        r.drain(1.5);
        assert!((r.battery() - 97.0).abs() < 1e-5);
    }

    #[test]
    fn test_drain_monotonic_and_floors_at_zero() {
        let mut r = Resources::new();
        let mut last = r.battery();
        let mut emptied = 0;
        for _ in 0..200 {
            if r.drain(0.37) {
                emptied += 1;
            }
            assert!(r.battery() <= last);
            last = r.battery();
        }
        assert_eq!(emptied, 1);
        assert_eq!(r.battery(), 0.0);
        r.drain(1000.0);
        assert_eq!(r.battery(), 0.0);
    }

    #[test]
    fn test_no_drain_when_off() {
        let mut r = Resources::new();
        r.toggle_flashlight();
        r.drain(10.0);
        assert_eq!(r.battery(), 100.0);
    }

    #[test]
    fn test_clamped_mutations() {
        let mut r = Resources::new();
        r.add_health(50.0);
        assert_eq!(r.health(), 100.0);
        r.set_battery(-5.0);
        assert_eq!(r.battery(), 0.0);
        assert!(r.is_depleted());
    }

    #[test]
    fn test_light_intensity() {
        let mut r = Resources::new();
        r.set_battery(50.0);
        assert!((r.light_intensity(0.8) - 0.4).abs() < 1e-6);
        r.toggle_flashlight();
        assert!((r.light_intensity(0.8) - 0.08).abs() < 1e-6);
    }
}
