//! The three collision responses, applied to each flake in a fixed order:
//! floor bounce, hut box, then spherical boundary. The order is part of the
//! observable dynamics; a flake touching two surfaces in one tick gets both
//! corrections sequentially.

use glam::Vec3;

use crate::core::config::{
    GlobeConfig, BOUNDARY_BOUNCE, BOUNDARY_RESET, DRIFT, FLOOR_BOUNCE, HUT_BOUNCE,
    SHAKE_RELAUNCH_CHANCE, SHAKE_RELAUNCH_GATE,
};
use crate::core::rng::Rng;
use crate::sim::environment::Environment;
use crate::sim::snowflake::Snowflake;

/// Rotate a point in the horizontal plane around the vertical axis.
pub fn rotate_about_y(x: f32, z: f32, degrees: f32) -> (f32, f32) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (x * cos - z * sin, x * sin + z * cos)
}

/// Floor bounce: clamp to the floor and invert the fall with energy loss.
/// While the shake is strong, grounded flakes sometimes get kicked back up
/// to a random height with a fresh small velocity.
pub(crate) fn floor(flake: &mut Snowflake, config: &GlobeConfig, env: &Environment, rng: &mut Rng) {
    if flake.position.y >= config.floor_height {
        return;
    }
    flake.position.y = config.floor_height;
    flake.velocity.y = -flake.velocity.y * FLOOR_BOUNCE;

    if env.shake_active
        && env.shake_magnitude > SHAKE_RELAUNCH_GATE
        && rng.next_f32() < env.shake_magnitude * SHAKE_RELAUNCH_CHANCE
    {
        flake.position.y = rng.range(-config.globe_radius * 0.5, config.globe_radius * 0.9);
        flake.velocity = Vec3::new(
            rng.bilateral(DRIFT) * 0.05,
            rng.bilateral(DRIFT) * 0.02,
            rng.bilateral(DRIFT) * 0.05,
        );
    }
}

/// Hut box collision. The hut's local offset is rotated by the current globe
/// orientation; flakes inside its vertical band and horizontal box are pushed
/// to the nearest face, resolved along the axis of larger offset.
pub(crate) fn hut(flake: &mut Snowflake, config: &GlobeConfig, orientation: f32) {
    if flake.position.y >= config.hut_band_top() || flake.position.y <= config.floor_height {
        return;
    }
    let (hut_x, hut_z) = rotate_about_y(config.hut_offset_x, config.hut_offset_z, orientation);
    let dx = (flake.position.x - hut_x).abs();
    let dz = (flake.position.z - hut_z).abs();
    let half = config.hut_half_width;
    if dx >= half || dz >= half {
        return;
    }
    if dx > dz {
        let side = if flake.position.x > hut_x { half } else { -half };
        flake.position.x = hut_x + side;
        flake.velocity.x = -flake.velocity.x * HUT_BOUNCE;
    } else {
        let side = if flake.position.z > hut_z { half } else { -half };
        flake.position.z = hut_z + side;
        flake.velocity.z = -flake.velocity.z * HUT_BOUNCE;
    }
}

/// Spherical boundary: reflect the velocity about the outward normal with
/// energy loss and clamp the flake back just inside the boundary.
pub(crate) fn boundary(flake: &mut Snowflake, config: &GlobeConfig) {
    let dist = flake.position.length();
    if dist <= config.boundary_radius() {
        return;
    }
    // A flake at the exact center has no outward normal; leave it alone.
    if dist <= f32::EPSILON {
        return;
    }
    let normal = flake.position / dist;
    let along = flake.velocity.dot(normal);
    flake.velocity = (flake.velocity - 2.0 * along * normal) * BOUNDARY_BOUNCE;
    flake.position = normal * config.globe_radius * BOUNDARY_RESET;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flake_at(position: Vec3, velocity: Vec3) -> Snowflake {
        let mut rng = Rng::new(1);
        let mut flake = Snowflake::seeded(&mut rng, &GlobeConfig::default());
        flake.position = position;
        flake.velocity = velocity;
        flake
    }

    #[test]
    fn rotate_about_y_quarter_turn() {
        let (x, z) = rotate_about_y(1.0, 0.0, 90.0);
        assert!(x.abs() < 1e-6, "x = {}", x);
        assert!((z - 1.0).abs() < 1e-6, "z = {}", z);
    }

    #[test]
    fn floor_clamps_and_attenuates() {
        let config = GlobeConfig::default();
        let env = Environment::new();
        let mut rng = Rng::new(1);
        let mut flake = flake_at(
            Vec3::new(2.0, config.floor_height - 0.1, 2.0),
            Vec3::new(0.0, -1.0, 0.0),
        );
        floor(&mut flake, &config, &env, &mut rng);
        assert_eq!(flake.position.y, config.floor_height);
        assert_eq!(flake.velocity.y, 0.3);
    }

    #[test]
    fn floor_relaunch_requires_strong_shake() {
        let config = GlobeConfig::default();
        let mut env = Environment::new();
        env.shake_active = true;
        env.shake_magnitude = 0.4; // below the relaunch gate
        let mut rng = Rng::new(1);
        for _ in 0..100 {
            let mut flake = flake_at(
                Vec3::new(0.0, config.floor_height - 0.1, 3.0),
                Vec3::new(0.0, -0.5, 0.0),
            );
            floor(&mut flake, &config, &env, &mut rng);
            assert_eq!(flake.position.y, config.floor_height);
        }
    }

    #[test]
    fn floor_relaunch_kicks_flakes_up_under_strong_shake() {
        let config = GlobeConfig::default();
        let mut env = Environment::new();
        env.shake_active = true;
        env.shake_magnitude = 1.0;
        let mut rng = Rng::new(1);
        let mut relaunched = 0;
        for _ in 0..200 {
            let mut flake = flake_at(
                Vec3::new(0.0, config.floor_height - 0.1, 3.0),
                Vec3::new(0.0, -0.5, 0.0),
            );
            floor(&mut flake, &config, &env, &mut rng);
            if flake.position.y > config.floor_height {
                relaunched += 1;
                assert!(flake.position.y <= config.globe_radius * 0.9);
                assert!(flake.velocity.length() < 0.01, "relaunch velocity is small");
            }
        }
        // p = 0.2 per contact, so roughly 40 of 200
        assert!(relaunched > 10 && relaunched < 80, "relaunched {}", relaunched);
    }

    #[test]
    fn hut_pushes_along_dominant_axis() {
        let config = GlobeConfig::default();
        let y = config.floor_height + 0.5;
        // Offset mostly along x: resolved on the x face
        let mut flake = flake_at(Vec3::new(0.5, y, 0.1), Vec3::new(0.3, 0.0, 0.2));
        hut(&mut flake, &config, 0.0);
        assert_eq!(flake.position.x, config.hut_half_width);
        assert_eq!(flake.position.z, 0.1);
        assert_eq!(flake.velocity.x, -0.15);
        assert_eq!(flake.velocity.z, 0.2);

        // Offset mostly along z: resolved on the z face
        let mut flake = flake_at(Vec3::new(0.1, y, -0.5), Vec3::new(0.3, 0.0, -0.2));
        hut(&mut flake, &config, 0.0);
        assert_eq!(flake.position.z, -config.hut_half_width);
        assert_eq!(flake.velocity.z, 0.1);
    }

    #[test]
    fn hut_ignores_flakes_outside_vertical_band() {
        let config = GlobeConfig::default();
        let mut flake = flake_at(Vec3::new(0.1, 0.0, 0.1), Vec3::new(0.3, 0.0, 0.2));
        let before = flake.position;
        hut(&mut flake, &config, 0.0);
        assert_eq!(flake.position, before);
    }

    #[test]
    fn hut_box_follows_globe_orientation() {
        let config = GlobeConfig {
            hut_offset_x: 2.0,
            ..GlobeConfig::default()
        };
        let y = config.floor_height + 0.5;
        // After a quarter turn the hut sits at z = +2; a flake there collides
        let mut flake = flake_at(Vec3::new(0.1, y, 2.3), Vec3::new(0.0, 0.0, 0.1));
        hut(&mut flake, &config, 90.0);
        assert!(
            (flake.position.z - (2.0 + config.hut_half_width)).abs() < 1e-4,
            "z = {}",
            flake.position.z
        );
        // At the unrotated position there is nothing to hit anymore
        let mut flake = flake_at(Vec3::new(2.1, y, 0.0), Vec3::new(0.0, 0.0, 0.1));
        let before = flake.position;
        hut(&mut flake, &config, 90.0);
        assert_eq!(flake.position, before);
    }

    #[test]
    fn boundary_reflects_and_clamps() {
        let config = GlobeConfig::default();
        let mut flake = flake_at(Vec3::new(4.9, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        boundary(&mut flake, &config);
        assert!((flake.velocity.x - -0.8).abs() < 1e-6, "vx = {}", flake.velocity.x);
        assert!(
            (flake.position.x - config.globe_radius * BOUNDARY_RESET).abs() < 1e-6,
            "x = {}",
            flake.position.x
        );
    }

    #[test]
    fn boundary_preserves_tangential_motion() {
        let config = GlobeConfig::default();
        let mut flake = flake_at(Vec3::new(4.9, 0.0, 0.0), Vec3::new(0.0, 0.5, 0.0));
        boundary(&mut flake, &config);
        // Velocity is tangential to the normal, so only the energy loss applies
        assert!((flake.velocity.y - 0.4).abs() < 1e-6, "vy = {}", flake.velocity.y);
        assert_eq!(flake.velocity.x, 0.0);
    }

    #[test]
    fn boundary_leaves_interior_flakes_alone() {
        let config = GlobeConfig::default();
        let mut flake = flake_at(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.5, 0.5, 0.5));
        let (pos, vel) = (flake.position, flake.velocity);
        boundary(&mut flake, &config);
        assert_eq!(flake.position, pos);
        assert_eq!(flake.velocity, vel);
    }

    #[test]
    fn boundary_skips_degenerate_center() {
        // With a zero-radius globe every flake is "outside", including one at
        // the exact center, where no outward normal exists.
        let config = GlobeConfig {
            globe_radius: 0.0,
            ..GlobeConfig::default()
        };
        let mut flake = flake_at(Vec3::ZERO, Vec3::new(0.1, 0.0, 0.0));
        boundary(&mut flake, &config);
        assert_eq!(flake.position, Vec3::ZERO);
        assert!(flake.position.x.is_finite());
    }
}
