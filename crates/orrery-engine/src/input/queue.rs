/// Input event types the engine understands.
/// Generic — no scene-specific semantics.
///
/// Pointer coordinates arrive twice: `x`/`y` in normalized device coordinates
/// of the render surface (for picking) and `client_x`/`client_y` in page
/// pixels (for placing DOM overlays next to the cursor).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The cursor moved over the render surface.
    PointerMove { x: f32, y: f32, client_x: f32, client_y: f32 },
    /// A click landed on the render surface.
    Click { x: f32, y: f32, client_x: f32, client_y: f32 },
    /// The render surface was resized to `width` × `height` pixels.
    Resize { width: f32, height: f32 },
    /// A custom event from the UI layer (sliders, buttons).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// DOM handlers push into the queue between frames; the runner drains it once per tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events in arrival order without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
