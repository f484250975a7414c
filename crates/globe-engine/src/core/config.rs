use serde::{Deserialize, Serialize};

// -- Per-tick physics constants --

/// Downward acceleration applied each tick, scaled by the flake's fall speed.
pub const GRAVITY: f32 = 0.0005;
/// Uniform velocity damping per tick (air resistance).
pub const DRAG: f32 = 0.99;
/// Position integration is normalized to a 60 Hz frame so behavior stays
/// roughly frame-rate independent: `pos += vel * dt * FRAME_RATE_SCALE`.
pub const FRAME_RATE_SCALE: f32 = 60.0;

/// Half-range of the idle-mode turbulence kick applied to vx/vz.
pub const DRIFT: f32 = 0.01;
/// Scale factor applied on top of the turbulence kick.
pub const TURBULENCE_SCALE: f32 = 0.01;
/// Idle-mode spin rate, scaled by the flake's fall speed (degrees per tick).
pub const GENTLE_SPIN: f32 = 0.2;

// -- Shake mode --

/// Magnitude set by a shake trigger.
pub const SHAKE_MAX: f32 = 1.0;
/// Geometric decay applied to the shake magnitude each tick.
pub const SHAKE_DECAY: f32 = 0.95;
/// Below this magnitude the shake deactivates and snaps to zero.
pub const SHAKE_EPSILON: f32 = 0.01;
/// Scale of the random velocity impulses while shaking.
pub const SHAKE_IMPULSE: f32 = 0.05;
/// Extra spin per tick while shaking (degrees per unit magnitude).
pub const SHAKE_SPIN: f32 = 10.0;
/// Floor-contact relaunch only happens while the shake is stronger than this.
pub const SHAKE_RELAUNCH_GATE: f32 = 0.5;
/// Relaunch probability per floor contact is `magnitude * SHAKE_RELAUNCH_CHANCE`.
pub const SHAKE_RELAUNCH_CHANCE: f32 = 0.2;

// -- Rotation mode --

/// Geometric damping applied to the rotation velocity each tick.
pub const ROTATION_DAMPING: f32 = 0.98;
/// Impulses below this magnitude do not activate rotation.
pub const ROTATION_START: f32 = 0.1;
/// Rotation deactivates once the damped velocity drops under this.
pub const ROTATION_STOP: f32 = 0.05;
/// The inertial effect on flakes is the rotation velocity times this.
pub const ROTATION_EFFECT: f32 = 2.0;
/// Tangential pseudo-force coefficient derived from the flake's horizontal offset.
pub const ROTATION_INERTIA: f32 = 0.01;
/// Extra flake spin per tick while rotating, per unit of rotation effect.
pub const ROTATION_SPIN: f32 = 0.5;

// -- Collision response --

/// Velocity attenuation on floor bounce (inelastic).
pub const FLOOR_BOUNCE: f32 = 0.3;
/// Velocity attenuation on hut-face bounce.
pub const HUT_BOUNCE: f32 = 0.5;
/// Velocity attenuation on boundary reflection.
pub const BOUNDARY_BOUNCE: f32 = 0.8;
/// Flakes reflect off this fraction of the globe radius.
pub const BOUNDARY_FRACTION: f32 = 0.95;
/// Reflected flakes are clamped back to this fraction of the globe radius.
pub const BOUNDARY_RESET: f32 = 0.94;

/// Configuration for the snow globe, provided by the shell.
///
/// Defaults mirror the classic 800-flake, radius-5 globe. Can be parsed from
/// JSON for shells that load settings at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    /// Number of snowflakes. Fixed for the lifetime of the simulation.
    pub particle_count: usize,
    /// Physical radius of the glass sphere in world units.
    pub globe_radius: f32,
    /// Vertical level of the snow-covered base inside the globe.
    pub floor_height: f32,
    /// Half-width of the decorative hut's collision box on both horizontal axes.
    pub hut_half_width: f32,
    /// Local offset of the hut from the globe center (rotates with the globe).
    pub hut_offset_x: f32,
    pub hut_offset_z: f32,
    /// Height of the hut's collision band above the floor.
    pub hut_height: f32,
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Seed for the simulation's random source. Fixed seeds reproduce runs.
    pub rng_seed: u64,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        let globe_radius = 5.0;
        Self {
            particle_count: 800,
            globe_radius,
            floor_height: -globe_radius + 0.5,
            hut_half_width: 0.8,
            hut_offset_x: 0.0,
            hut_offset_z: 0.0,
            hut_height: 1.5,
            fixed_dt: 1.0 / 60.0,
            rng_seed: 42,
        }
    }
}

impl GlobeConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Radius at which flakes are reflected back inside.
    pub fn boundary_radius(&self) -> f32 {
        self.globe_radius * BOUNDARY_FRACTION
    }

    /// Top of the hut's vertical collision band.
    pub fn hut_band_top(&self) -> f32 {
        self.floor_height + self.hut_height
    }
}
