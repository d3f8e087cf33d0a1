//! Pickup items and their effects.
use crate::core::config::Locale;
use crate::core::level::Vector3;
use crate::core::resources::Resources;

/// Radius within which walking into an item collects it.
pub const PICKUP_RADIUS: f32 = 1.0;
pub const BATTERY_RESTORE: f32 = 30.0;
pub const HEALTH_RESTORE: f32 = 25.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Battery,
    Health,
}

impl ItemKind {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ItemKind::Battery, Locale::En) => "Battery",
            (ItemKind::Health, Locale::En) => "First aid kit",
            (ItemKind::Battery, Locale::Ru) => "Батарея",
            (ItemKind::Health, Locale::Ru) => "Аптечка",
        }
    }

    /// Sprite tint (RGB).
    pub fn tint(self) -> (u8, u8, u8) {
        match self {
            ItemKind::Battery => (100, 200, 255),
            ItemKind::Health => (255, 100, 100),
        }
    }

    pub fn apply(self, res: &mut Resources) {
        match self {
            ItemKind::Battery => res.add_battery(BATTERY_RESTORE),
            ItemKind::Health => res.add_health(HEALTH_RESTORE),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub position: Vector3,
    pub kind: ItemKind,
    collected: bool,
}

impl Item {
    pub fn new(position: Vector3, kind: ItemKind) -> Self {
        Self { position, kind, collected: false }
    }

    #[inline]
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Collects the item if `from` is inside the pickup radius. Returns true
    /// only on the frame the item flips to collected.
    pub fn try_pickup(&mut self, from: &Vector3, res: &mut Resources) -> bool {
        if self.collected || from.planar_distance(&self.position) >= PICKUP_RADIUS {
            return false;
        }
        self.collected = true;
        self.kind.apply(res);
        log::info!("picked up {:?} at ({:.1}, {:.1})", self.kind, self.position.x, self.position.z);
        true
    }
}

pub fn count_collected(items: &[Item]) -> usize {
    items.iter().filter(|it| it.is_collected()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickup_clamps_battery() {
        let mut res = Resources::new();
        res.set_battery(90.0);
        let mut item = Item::new(Vector3::new(0.0, 0.0, 0.0), ItemKind::Battery);
        assert!(item.try_pickup(&Vector3::new(0.5, 0.0, 0.0), &mut res));
        assert_eq!(res.battery(), 100.0);
    }

    #[test]
    fn test_pickup_health() {
        let mut res = Resources::new();
        res.set_health(50.0);
        let mut item = Item::new(Vector3::new(1.0, 0.0, 1.0), ItemKind::Health);
        assert!(item.try_pickup(&Vector3::new(1.0, 0.0, 1.0), &mut res));
        assert_eq!(res.health(), 75.0);
    }

    #[test]
    fn test_collected_exactly_once() {
        let mut res = Resources::new();
        res.set_health(10.0);
        let mut item = Item::new(Vector3::new(0.0, 0.0, 0.0), ItemKind::Health);
        let here = Vector3::new(0.2, 0.0, 0.2);
        let flips = (0..5).filter(|_| item.try_pickup(&here, &mut res)).count();
        assert_eq!(flips, 1);
        assert!(item.is_collected());
        assert_eq!(res.health(), 35.0);
    }

    #[test]
    fn test_out_of_radius_ignored() {
        let mut res = Resources::new();
        let mut item = Item::new(Vector3::new(0.0, 0.0, 0.0), ItemKind::Battery);
        assert!(!item.try_pickup(&Vector3::new(1.0, 0.0, 0.0), &mut res));
        assert!(!item.is_collected());
    }

    #[test]
    fn test_labels_localized() {
        assert_eq!(ItemKind::Battery.label(Locale::Ru), "Батарея");
        assert_eq!(ItemKind::Health.label(Locale::En), "First aid kit");
    }
}
