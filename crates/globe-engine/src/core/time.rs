/// Fixed timestep accumulator.
/// Ensures the simulation ticks at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    /// Longest frame delta accepted before clamping. Protects the simulation
    /// from pathological jumps (stalled frame, pause/resume, debugger break).
    pub const MAX_FRAME_DT: f32 = 1.0 / 20.0;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    ///
    /// Negative frame deltas are ignored; deltas above [`Self::MAX_FRAME_DT`]
    /// are clamped before accumulating.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, Self::MAX_FRAME_DT);
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
