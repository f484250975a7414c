/// Day/night visual transition.
///
/// Eases a scalar in [0, 1] toward whichever mode the simulation's night
/// flag selects; 0.0 is full day, 1.0 is full night. Purely cosmetic.
#[derive(Debug, Clone)]
pub struct DayNightCycle {
    transition: f32,
}

/// Daytime background color.
pub const DAY_COLOR: [f32; 3] = [0.5, 0.8, 0.98];
/// Nighttime background color.
pub const NIGHT_COLOR: [f32; 3] = [0.05, 0.05, 0.18];
/// Transition step per tick.
pub const TRANSITION_SPEED: f32 = 0.02;

impl DayNightCycle {
    pub fn new() -> Self {
        Self { transition: 0.0 }
    }

    /// Ease one tick toward night (true) or day (false).
    pub fn advance(&mut self, night_mode: bool) {
        let target = if night_mode { 1.0 } else { 0.0 };
        if self.transition < target {
            self.transition = (self.transition + TRANSITION_SPEED).min(target);
        } else if self.transition > target {
            self.transition = (self.transition - TRANSITION_SPEED).max(target);
        }
    }

    /// Current transition value: 0.0 = day, 1.0 = night.
    pub fn transition(&self) -> f32 {
        self.transition
    }

    /// Background clear color for the current transition.
    pub fn background_color(&self) -> [f32; 3] {
        let t = self.transition;
        [
            DAY_COLOR[0] * (1.0 - t) + NIGHT_COLOR[0] * t,
            DAY_COLOR[1] * (1.0 - t) + NIGHT_COLOR[1] * t,
            DAY_COLOR[2] * (1.0 - t) + NIGHT_COLOR[2] * t,
        ]
    }

    /// Daytime snow brightness, dimming slightly as night falls.
    pub fn snow_brightness(&self) -> f32 {
        1.0 - self.transition * 0.3
    }
}

impl Default for DayNightCycle {
    fn default() -> Self {
        Self::new()
    }
}
