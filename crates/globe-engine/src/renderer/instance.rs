use bytemuck::{Pod, Zeroable};

use crate::sim::snowflake::Snowflake;
use crate::sim::SnowGlobe;

/// Per-flake render data, refreshed after the simulation steps.
/// 8 floats = 32 bytes stride, ready for a renderer's instance buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct FlakeInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Visual half-size of the flake quad.
    pub size: f32,
    /// Spin in degrees.
    pub rotation: f32,
    /// Night-mode sparkle oscillation rate.
    pub sparkle_rate: f32,
    /// Phase offset for the sparkle oscillation.
    pub sparkle_phase: f32,
    pub _pad: f32,
}

impl FlakeInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_flake(flake: &Snowflake) -> Self {
        Self {
            x: flake.position.x,
            y: flake.position.y,
            z: flake.position.z,
            size: flake.size,
            rotation: flake.rotation_angle,
            sparkle_rate: flake.sparkle_rate,
            sparkle_phase: flake.sparkle_phase,
            _pad: 0.0,
        }
    }
}

/// A full snapshot of flake state for the renderer.
///
/// The runner refreshes this after the last fixed step of a frame, so a
/// renderer on another thread can read a coherent copy instead of the live
/// particle array. Torn reads of live state are not permitted.
pub struct SnapshotBuffer {
    instances: Vec<FlakeInstance>,
}

impl SnapshotBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    /// Replace the snapshot contents with the globe's current flake state.
    pub fn capture(&mut self, globe: &SnowGlobe) {
        self.instances.clear();
        for flake in globe.flakes() {
            self.instances.push(FlakeInstance::from_flake(flake));
        }
    }

    pub fn instances(&self) -> &[FlakeInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for zero-copy renderer uploads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GlobeConfig;

    #[test]
    fn flake_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<FlakeInstance>(), 32);
        assert_eq!(FlakeInstance::FLOATS, 8);
    }

    #[test]
    fn capture_copies_every_flake() {
        let config = GlobeConfig {
            particle_count: 25,
            ..GlobeConfig::default()
        };
        let globe = SnowGlobe::new(config);
        let mut buf = SnapshotBuffer::with_capacity(25);
        buf.capture(&globe);
        assert_eq!(buf.instance_count(), 25);
        for (instance, flake) in buf.instances().iter().zip(globe.flakes()) {
            assert_eq!(instance.x, flake.position.x);
            assert_eq!(instance.size, flake.size);
            assert_eq!(instance.sparkle_phase, flake.sparkle_phase);
        }
    }

    #[test]
    fn capture_is_idempotent() {
        let globe = SnowGlobe::new(GlobeConfig {
            particle_count: 10,
            ..GlobeConfig::default()
        });
        let mut buf = SnapshotBuffer::with_capacity(10);
        buf.capture(&globe);
        buf.capture(&globe);
        assert_eq!(buf.instance_count(), 10);
    }
}
