use std::f32::consts::TAU;

use glam::Vec3;

use crate::core::rng::Rng;

/// A background star. Position and twinkle parameters are fixed at creation.
#[derive(Debug, Clone)]
pub struct Star {
    pub position: Vec3,
    /// Base brightness in [0.5, 1.0].
    pub brightness: f32,
    pub twinkle_rate: f32,
    pub twinkle_offset: f32,
}

impl Star {
    /// Brightness at the given time, scaled by the day/night transition.
    /// Zero during the day; twinkles between 70% and 100% of base at night.
    pub fn twinkle(&self, elapsed: f32, transition: f32) -> f32 {
        let phase = ((elapsed * self.twinkle_rate + self.twinkle_offset).sin() + 1.0) * 0.5;
        self.brightness * (0.7 + 0.3 * phase) * transition
    }
}

/// The night-sky star field, seeded once at startup.
#[derive(Debug, Clone)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    pub const DEFAULT_COUNT: usize = 200;

    pub fn new(count: usize, rng: &mut Rng) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                position: Vec3::new(
                    rng.range(-20.0, 20.0),
                    rng.range(5.0, 20.0),
                    rng.range(-20.0, 20.0),
                ),
                brightness: rng.range(0.5, 1.0),
                twinkle_rate: rng.range(0.5, 3.0),
                twinkle_offset: rng.range(0.0, TAU),
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
