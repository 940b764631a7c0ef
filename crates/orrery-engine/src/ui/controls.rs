//! Declarative bindings between page controls and custom input events.
//!
//! A game lists its bindings once; the web bridge looks each element up by id
//! and forwards its events as `InputEvent::Custom { kind, a: index, b: value, c: 0 }`.

use crate::input::queue::InputEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// `<input type="range">`; fires on every `input` event with the parsed value.
    Slider,
    /// Fires on `click` with value 0.
    Button,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlBinding {
    pub element_id: String,
    pub kind: ControlKind,
    /// Custom event kind delivered to the game.
    pub event_kind: u32,
    /// Carried in the event's `a` slot (e.g. which planet a slider drives).
    pub index: u32,
}

impl ControlBinding {
    pub fn slider(element_id: impl Into<String>, event_kind: u32, index: u32) -> Self {
        Self {
            element_id: element_id.into(),
            kind: ControlKind::Slider,
            event_kind,
            index,
        }
    }

    pub fn button(element_id: impl Into<String>, event_kind: u32) -> Self {
        Self {
            element_id: element_id.into(),
            kind: ControlKind::Button,
            event_kind,
            index: 0,
        }
    }

    /// Event for a slider's raw string value. `None` if it does not parse.
    pub fn slider_event(&self, raw: &str) -> Option<InputEvent> {
        let value = parse_control_value(raw)?;
        Some(self.event(value))
    }

    pub fn event(&self, value: f32) -> InputEvent {
        InputEvent::Custom {
            kind: self.event_kind,
            a: self.index as f32,
            b: value,
            c: 0.0,
        }
    }
}

/// Parse a control's value attribute as a finite float.
pub fn parse_control_value(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}
