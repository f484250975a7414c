//! Globe-wide state: the shake and rotation impulse machines, the night-mode
//! flag, and the elapsed-time accumulator.

use crate::core::config::{
    ROTATION_DAMPING, ROTATION_EFFECT, ROTATION_START, ROTATION_STOP, SHAKE_DECAY, SHAKE_EPSILON,
    SHAKE_MAX,
};

/// Environment state, mutated only by the simulation and its input methods.
///
/// Shake and rotation are two independent two-state machines (Idle ⇄ Active).
/// Both activate on an external trigger and deactivate on their own once the
/// decayed magnitude falls under a threshold.
#[derive(Debug, Clone)]
pub struct Environment {
    pub shake_active: bool,
    /// Damped shake impulse in [0, SHAKE_MAX]. Never negative.
    pub shake_magnitude: f32,
    pub rotation_active: bool,
    /// Angular velocity of the globe in degrees per tick.
    pub rotation_velocity: f32,
    /// Globe orientation in degrees, always kept in [0, 360).
    pub orientation: f32,
    /// Cosmetic flag for the renderer. The physics never reads it.
    pub night_mode: bool,
    /// Accumulated simulated time in seconds.
    pub elapsed: f32,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            shake_active: false,
            shake_magnitude: 0.0,
            rotation_active: false,
            rotation_velocity: 0.0,
            orientation: 0.0,
            night_mode: false,
            elapsed: 0.0,
        }
    }

    /// Start a shake at full magnitude.
    pub fn trigger_shake(&mut self) {
        self.shake_active = true;
        self.shake_magnitude = SHAKE_MAX;
    }

    /// Set the rotation velocity from a drag delta. Only deltas above the
    /// start threshold activate the rotation machine.
    pub fn apply_rotation_impulse(&mut self, delta: f32) {
        self.rotation_velocity = delta;
        if delta.abs() > ROTATION_START {
            self.rotation_active = true;
        }
    }

    /// Decay the shake magnitude one tick; snap to idle under the epsilon.
    pub fn decay_shake(&mut self) {
        if self.shake_active {
            self.shake_magnitude *= SHAKE_DECAY;
            if self.shake_magnitude < SHAKE_EPSILON {
                self.shake_active = false;
                self.shake_magnitude = 0.0;
            }
        }
    }

    /// Decay the rotation velocity one tick and advance the orientation.
    ///
    /// Returns the inertial effect for this tick, computed from the velocity
    /// *before* damping. The orientation advances by the damped velocity, and
    /// only while the machine is still active.
    pub fn decay_rotation(&mut self) -> f32 {
        let mut effect = 0.0;
        if self.rotation_active {
            effect = self.rotation_velocity * ROTATION_EFFECT;
            self.rotation_velocity *= ROTATION_DAMPING;
            if self.rotation_velocity.abs() < ROTATION_STOP {
                self.rotation_active = false;
                self.rotation_velocity = 0.0;
            }
        }
        if self.rotation_active {
            self.orientation = (self.orientation + self.rotation_velocity).rem_euclid(360.0);
        }
        effect
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shake_decays_and_snaps_to_zero() {
        let mut env = Environment::new();
        env.trigger_shake();
        let mut ticks = 0;
        while env.shake_active {
            let before = env.shake_magnitude;
            env.decay_shake();
            assert!(env.shake_magnitude < before);
            ticks += 1;
            assert!(ticks < 200, "shake never settled");
        }
        assert_eq!(env.shake_magnitude, 0.0);
        // 0.95^n < 0.01 at n = 90
        assert_eq!(ticks, 90);
    }

    #[test]
    fn retrigger_resets_magnitude() {
        let mut env = Environment::new();
        env.trigger_shake();
        for _ in 0..30 {
            env.decay_shake();
        }
        assert!(env.shake_magnitude < 1.0);
        env.trigger_shake();
        assert_eq!(env.shake_magnitude, 1.0);
    }

    #[test]
    fn rotation_effect_uses_velocity_before_damping() {
        let mut env = Environment::new();
        env.apply_rotation_impulse(1.0);
        let effect = env.decay_rotation();
        assert_eq!(effect, 2.0);
        assert_eq!(env.rotation_velocity, 0.98);
    }

    #[test]
    fn rotation_stops_below_threshold() {
        let mut env = Environment::new();
        env.apply_rotation_impulse(0.2);
        let mut ticks = 0;
        while env.rotation_active {
            env.decay_rotation();
            ticks += 1;
            assert!(ticks < 200, "rotation never settled");
        }
        assert_eq!(env.rotation_velocity, 0.0);
    }

    #[test]
    fn subthreshold_impulse_stays_idle() {
        let mut env = Environment::new();
        env.apply_rotation_impulse(0.09);
        assert!(!env.rotation_active);
        assert_eq!(env.decay_rotation(), 0.0);
        assert_eq!(env.orientation, 0.0);
    }

    #[test]
    fn orientation_wraps_into_range() {
        let mut env = Environment::new();
        env.orientation = 359.5;
        env.apply_rotation_impulse(3.0);
        env.decay_rotation();
        assert!((0.0..360.0).contains(&env.orientation));

        let mut env = Environment::new();
        env.orientation = 0.5;
        env.apply_rotation_impulse(-3.0);
        env.decay_rotation();
        assert!((0.0..360.0).contains(&env.orientation));
    }
}
