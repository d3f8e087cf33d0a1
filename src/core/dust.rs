//! Ambient dust motes drifting down through the corridor.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::level::Vector3;

pub const CEILING_Y: f32 = 4.0;
pub const FALL_SPEED: f32 = 0.3;
const SPREAD_X: f32 = 10.0;
const DEPTH_Z: f32 = 40.0;

pub struct DustField {
    motes: Vec<Vector3>,
}

impl DustField {
    pub fn new(count: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let motes = (0..count)
            .map(|_| {
                Vector3::new(
                    rng.gen_range(-SPREAD_X..SPREAD_X),
                    rng.gen_range(0.0..CEILING_Y),
                    rng.gen_range(-DEPTH_Z..0.0),
                )
            })
            .collect();
        Self { motes }
    }

    pub fn update(&mut self, dt: f32) {
        for m in &mut self.motes {
            m.y -= dt * FALL_SPEED;
            if m.y < 0.0 {
                m.y = CEILING_Y;
            }
        }
    }

    pub fn motes(&self) -> &[Vector3] {
        &self.motes
    }

    pub fn len(&self) -> usize {
        self.motes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motes.is_empty()
    }
}
