/// Input events the simulation understands, already translated from
/// whatever windowing layer the shell uses.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Shake the globe at full strength.
    Shake,
    /// Horizontal drag on the globe itself; `dx` is the pointer delta.
    GlobeDrag { dx: f32 },
    /// Flip between day and night mode.
    ToggleNight,
    /// Orbit the camera by a pointer delta.
    Orbit { dx: f32, dy: f32 },
    /// Zoom the camera; positive steps zoom in.
    Zoom { steps: f32 },
    /// Snap the camera back to its default view.
    ResetCamera,
}

/// A queue of input events.
/// The shell writes events between frames; the runner drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the shell's event callbacks).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
