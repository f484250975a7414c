use std::f32::consts::TAU;

use glam::Vec3;

use crate::core::config::{GlobeConfig, DRIFT};
use crate::core::rng::Rng;

/// A single snowflake with physics and cosmetic state.
///
/// Flakes are created once at startup and never destroyed; the simulation
/// mutates position, velocity, and rotation in place each tick. The sparkle
/// fields are fixed at creation and only ever read by a renderer.
#[derive(Debug, Clone)]
pub struct Snowflake {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Visual half-size of the flake quad.
    pub size: f32,
    /// Individual fall-speed factor, scales gravity and idle spin.
    pub speed: f32,
    /// Accumulated spin in degrees. Wraps are cosmetic, not enforced.
    pub rotation_angle: f32,
    /// Night-mode sparkle oscillation rate (radians per second).
    pub sparkle_rate: f32,
    /// Phase offset for the sparkle oscillation.
    pub sparkle_phase: f32,
}

impl Snowflake {
    pub const MIN_SIZE: f32 = 0.02;
    pub const MAX_SIZE: f32 = 0.08;
    pub const MIN_SPEED: f32 = 0.3;
    pub const MAX_SPEED: f32 = 1.0;

    /// Seed a flake at a uniform random radius/angle/height inside the globe
    /// with a small random drift and an initial downward velocity.
    pub fn seeded(rng: &mut Rng, config: &GlobeConfig) -> Self {
        let radius = rng.range(0.0, config.globe_radius * 0.9);
        let angle = rng.range(0.0, TAU);
        let height = rng.range(-config.globe_radius * 0.8, config.globe_radius * 0.9);
        let speed = rng.range(Self::MIN_SPEED, Self::MAX_SPEED);
        Self {
            position: Vec3::new(radius * angle.cos(), height, radius * angle.sin()),
            velocity: Vec3::new(
                rng.bilateral(DRIFT),
                -speed * 0.01,
                rng.bilateral(DRIFT),
            ),
            size: rng.range(Self::MIN_SIZE, Self::MAX_SIZE),
            speed,
            rotation_angle: rng.range(0.0, TAU).to_degrees(),
            sparkle_rate: rng.range(2.0, 6.0),
            sparkle_phase: rng.range(0.0, TAU),
        }
    }

    /// Sparkle intensity in [0, 1] at the given elapsed time. Cosmetic only;
    /// renderers use it to modulate flake brightness in night mode.
    pub fn sparkle(&self, elapsed: f32) -> f32 {
        ((elapsed * self.sparkle_rate + self.sparkle_phase).sin() + 1.0) * 0.5
    }
}
