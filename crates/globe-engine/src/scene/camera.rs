/// Orbit camera around the globe center.
///
/// Holds spherical view parameters (distance, pitch, yaw) with the classic
/// clamps; the renderer turns these into its own view transform. While the
/// globe shakes, [`OrbitCamera::shake_offset`] yields a small eye wobble.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Distance from the globe center, clamped to [MIN_DISTANCE, MAX_DISTANCE].
    pub distance: f32,
    /// Vertical view angle in degrees, clamped to ±PITCH_LIMIT.
    pub pitch: f32,
    /// Horizontal view angle in degrees, unclamped.
    pub yaw: f32,
}

impl OrbitCamera {
    pub const DEFAULT_DISTANCE: f32 = 10.0;
    pub const MIN_DISTANCE: f32 = 7.0;
    pub const MAX_DISTANCE: f32 = 20.0;
    pub const ZOOM_STEP: f32 = 0.5;
    pub const DEFAULT_PITCH: f32 = 15.0;
    pub const DEFAULT_YAW: f32 = 30.0;
    pub const PITCH_LIMIT: f32 = 89.0;
    pub const ORBIT_SENSITIVITY: f32 = 0.2;

    pub fn new() -> Self {
        Self {
            distance: Self::DEFAULT_DISTANCE,
            pitch: Self::DEFAULT_PITCH,
            yaw: Self::DEFAULT_YAW,
        }
    }

    /// Orbit from a pointer drag delta, in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * Self::ORBIT_SENSITIVITY;
        self.pitch =
            (self.pitch + dy * Self::ORBIT_SENSITIVITY).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    /// Zoom in (positive steps) or out (negative steps).
    pub fn zoom(&mut self, steps: f32) {
        self.distance =
            (self.distance - steps * Self::ZOOM_STEP).clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    /// Snap back to the default view.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Eye wobble while the globe shakes: (x, y) offsets to add to the view.
    pub fn shake_offset(elapsed: f32, shake_magnitude: f32) -> (f32, f32) {
        (
            (elapsed * 20.0).sin() * shake_magnitude * 0.1,
            (elapsed * 15.0).cos() * shake_magnitude * 0.1,
        )
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
