use std::f32::consts::TAU;

use glam::Vec3;

/// A decorative light on the hut, in hut-local coordinates.
///
/// Steady lights hold full intensity; blinking ones oscillate between 40%
/// and 100%. Either way the result is scaled by the day/night transition,
/// so all hut lights fade out during the day.
#[derive(Debug, Clone)]
pub struct HutLight {
    /// Offset from the hut's position (rotates with the globe).
    pub offset: Vec3,
    pub color: [f32; 3],
    pub blink_rate: f32,
    pub blink_phase: f32,
    pub blinks: bool,
}

impl HutLight {
    /// Light intensity in [0, 1] at the given time and day/night transition.
    pub fn intensity(&self, elapsed: f32, transition: f32) -> f32 {
        let base = if self.blinks {
            let blink = ((elapsed * self.blink_rate + self.blink_phase).sin() + 1.0) * 0.5;
            0.4 + 0.6 * blink
        } else {
            1.0
        };
        base * transition
    }
}

/// The classic decoration: two steady door lights, two steady window lights,
/// eight blinking roof lights in alternating colors, and a blinking chimney
/// light.
pub fn hut_decorations() -> Vec<HutLight> {
    let mut lights = Vec::with_capacity(13);

    for side in [0.2f32, -0.2] {
        lights.push(HutLight {
            offset: Vec3::new(side, -0.1, 0.55),
            color: [1.0, 0.8, 0.0],
            blink_rate: 1.5,
            blink_phase: 0.0,
            blinks: false,
        });
    }

    for side in [0.4f32, -0.4] {
        lights.push(HutLight {
            offset: Vec3::new(side, 0.1, 0.55),
            color: [0.9, 0.9, 0.7],
            blink_rate: 0.0,
            blink_phase: 0.0,
            blinks: false,
        });
    }

    for i in 0..8 {
        let angle = i as f32 * (TAU / 8.0);
        let color = match i % 3 {
            0 => [1.0, 0.0, 0.0],
            1 => [0.0, 1.0, 0.0],
            _ => [0.0, 0.5, 1.0],
        };
        lights.push(HutLight {
            offset: Vec3::new(0.7 * angle.cos(), 0.3, 0.7 * angle.sin()),
            color,
            blink_rate: 0.5 + i as f32 * 0.2,
            blink_phase: i as f32 * 0.7,
            blinks: true,
        });
    }

    lights.push(HutLight {
        offset: Vec3::new(0.3, 1.1, 0.0),
        color: [1.0, 0.6, 0.2],
        blink_rate: 2.0,
        blink_phase: 0.0,
        blinks: true,
    });

    lights
}
