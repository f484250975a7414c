//! Frame loop glue between a shell and the simulation.
//!
//! The shell forwards raw-ish input events into the queue and calls
//! [`GlobeRunner::frame`] once per display frame with the wall-clock delta.
//! The runner serializes everything: events are applied, fixed steps run to
//! completion, then the snapshot is refreshed for the renderer. No state is
//! mutated outside this sequence.

use crate::core::config::GlobeConfig;
use crate::core::rng::Rng;
use crate::core::time::FixedTimestep;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::instance::SnapshotBuffer;
use crate::scene::camera::OrbitCamera;
use crate::scene::lights::{hut_decorations, HutLight};
use crate::scene::sky::DayNightCycle;
use crate::scene::stars::StarField;
use crate::sim::SnowGlobe;

/// Scale from a pointer drag delta to a globe rotation velocity.
const GLOBE_DRAG_SENSITIVITY: f32 = 0.5;

/// Owns the simulation, the decorative scene state, and the input queue,
/// and drives them at a fixed timestep.
pub struct GlobeRunner {
    globe: SnowGlobe,
    camera: OrbitCamera,
    sky: DayNightCycle,
    stars: StarField,
    lights: Vec<HutLight>,
    input: InputQueue,
    timestep: FixedTimestep,
    snapshot: SnapshotBuffer,
}

impl GlobeRunner {
    pub fn new(config: GlobeConfig) -> Self {
        let timestep = FixedTimestep::new(config.fixed_dt);
        let snapshot = SnapshotBuffer::with_capacity(config.particle_count);
        // The star field gets its own stream so scene seeding never perturbs
        // the simulation's random sequence.
        let mut scene_rng = Rng::new(config.rng_seed.wrapping_mul(0x9e37_79b9).wrapping_add(1));
        let stars = StarField::new(StarField::DEFAULT_COUNT, &mut scene_rng);
        Self {
            globe: SnowGlobe::new(config),
            camera: OrbitCamera::new(),
            sky: DayNightCycle::new(),
            stars,
            lights: hut_decorations(),
            input: InputQueue::new(),
            timestep,
            snapshot,
        }
    }

    /// Push an input event for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply pending input, run the due fixed steps, refresh
    /// the render snapshot. `frame_dt` is the wall-clock delta in seconds;
    /// stalls are clamped by the timestep.
    pub fn frame(&mut self, frame_dt: f32) {
        for event in self.input.drain() {
            self.apply_event(event);
        }

        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.globe.step(self.timestep.dt());
            self.sky.advance(self.globe.night_mode());
        }

        self.snapshot.capture(&self.globe);
    }

    fn apply_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Shake => self.globe.trigger_shake(),
            InputEvent::GlobeDrag { dx } => {
                self.globe.apply_rotation_impulse(dx * GLOBE_DRAG_SENSITIVITY)
            }
            InputEvent::ToggleNight => {
                let night = !self.globe.night_mode();
                self.globe.set_night_mode(night);
            }
            InputEvent::Orbit { dx, dy } => self.camera.orbit(dx, dy),
            InputEvent::Zoom { steps } => self.camera.zoom(steps),
            InputEvent::ResetCamera => self.camera.reset(),
        }
    }

    // -- Read access for the shell's draw pass --

    pub fn globe(&self) -> &SnowGlobe {
        &self.globe
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn sky(&self) -> &DayNightCycle {
        &self.sky
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn lights(&self) -> &[HutLight] {
        &self.lights
    }

    pub fn snapshot(&self) -> &SnapshotBuffer {
        &self.snapshot
    }
}
