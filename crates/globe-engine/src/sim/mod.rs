//! The simulation core: owns the flake set and environment state and
//! advances them one tick at a time. The render shell only ever reads.

pub mod collision;
pub mod environment;
pub mod snowflake;

use crate::core::config::{
    GlobeConfig, DRAG, DRIFT, FRAME_RATE_SCALE, GENTLE_SPIN, GRAVITY, ROTATION_INERTIA,
    ROTATION_SPIN, SHAKE_IMPULSE, SHAKE_SPIN, TURBULENCE_SCALE,
};
use crate::core::rng::Rng;
use environment::Environment;
use snowflake::Snowflake;

/// The snow globe simulation.
///
/// Owns all mutable state: flakes, environment, and the random source.
/// Single-threaded by design — one `step` runs to completion before the
/// shell reads anything back.
pub struct SnowGlobe {
    config: GlobeConfig,
    flakes: Vec<Snowflake>,
    env: Environment,
    rng: Rng,
}

impl SnowGlobe {
    /// Create a globe and seed `config.particle_count` flakes inside it.
    pub fn new(config: GlobeConfig) -> Self {
        let mut rng = Rng::new(config.rng_seed);
        let flakes = (0..config.particle_count)
            .map(|_| Snowflake::seeded(&mut rng, &config))
            .collect();
        log::debug!(
            "snow globe seeded: {} flakes, radius {}, seed {}",
            config.particle_count,
            config.globe_radius,
            config.rng_seed
        );
        Self {
            config,
            flakes,
            env: Environment::new(),
            rng,
        }
    }

    /// Throw away all flakes and environment state and reseed from scratch.
    pub fn reseed(&mut self) {
        self.rng = Rng::new(self.config.rng_seed);
        self.flakes = (0..self.config.particle_count)
            .map(|_| Snowflake::seeded(&mut self.rng, &self.config))
            .collect();
        self.env = Environment::new();
        log::debug!("snow globe reseeded");
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// `dt` must be non-negative and bounded by the caller (see
    /// [`crate::FixedTimestep`]); within that contract this never fails.
    /// Order matters throughout: environment decay runs first, then each
    /// flake independently goes through forces, integration, and the
    /// floor → hut → boundary collision sequence. A flake can satisfy more
    /// than one collision condition in a single tick; the corrections apply
    /// sequentially in that fixed order, which is observable in the dynamics.
    pub fn step(&mut self, dt: f32) {
        self.env.elapsed += dt;
        self.env.decay_shake();
        let rotation_effect = self.env.decay_rotation();

        for flake in &mut self.flakes {
            // Gravity, scaled by the flake's individual fall speed.
            flake.velocity.y -= GRAVITY * flake.speed;

            // Environmental force, one mode at a time: shake wins over
            // rotation, rotation wins over idle drift.
            if self.env.shake_active {
                let m = self.env.shake_magnitude;
                flake.velocity.x += m * self.rng.bilateral(1.0) * SHAKE_IMPULSE;
                flake.velocity.y += m * self.rng.bilateral(1.0) * SHAKE_IMPULSE;
                flake.velocity.z += m * self.rng.bilateral(1.0) * SHAKE_IMPULSE;
                flake.rotation_angle += m * SHAKE_SPIN;
            } else if self.env.rotation_active {
                // Tangential pseudo-force: the globe turns under the snow and
                // drags it along.
                flake.velocity.x += -rotation_effect * flake.position.z * ROTATION_INERTIA;
                flake.velocity.z += rotation_effect * flake.position.x * ROTATION_INERTIA;
                flake.rotation_angle += rotation_effect * ROTATION_SPIN;
            } else {
                flake.rotation_angle += GENTLE_SPIN * flake.speed;
                flake.velocity.x += self.rng.bilateral(DRIFT) * TURBULENCE_SCALE;
                flake.velocity.z += self.rng.bilateral(DRIFT) * TURBULENCE_SCALE;
            }

            flake.velocity *= DRAG;
            flake.position += flake.velocity * dt * FRAME_RATE_SCALE;

            collision::floor(flake, &self.config, &self.env, &mut self.rng);
            collision::hut(flake, &self.config, self.env.orientation);
            collision::boundary(flake, &self.config);
        }
    }

    /// Kick off a shake at full magnitude. Decays on its own over ~90 ticks.
    pub fn trigger_shake(&mut self) {
        self.env.trigger_shake();
    }

    /// Set the globe's angular velocity from a pointer drag delta.
    pub fn apply_rotation_impulse(&mut self, delta: f32) {
        self.env.apply_rotation_impulse(delta);
    }

    /// Cosmetic flag for the renderer. Has zero effect on the physics.
    pub fn set_night_mode(&mut self, night: bool) {
        self.env.night_mode = night;
    }

    pub fn night_mode(&self) -> bool {
        self.env.night_mode
    }

    /// Read-only view of the flakes for a renderer. Valid for one draw call;
    /// the shell must not hold it across a `step`.
    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    /// Current globe orientation in degrees, always in [0, 360).
    pub fn orientation(&self) -> f32 {
        self.env.orientation
    }

    pub fn shake_active(&self) -> bool {
        self.env.shake_active
    }

    pub fn shake_magnitude(&self) -> f32 {
        self.env.shake_magnitude
    }

    pub fn rotation_active(&self) -> bool {
        self.env.rotation_active
    }

    /// Total simulated time in seconds. Phase input for cosmetic oscillations
    /// (sparkle, twinkle, blink); the core itself never reads it back.
    pub fn elapsed(&self) -> f32 {
        self.env.elapsed
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }
}
