/// Page controls: element ids, custom event kinds, and outgoing game events.

use orrery_engine::ControlBinding;

// ── Element ids ──────────────────────────────────────────────────────

pub const CONTAINER_ID: &str = "solar-system-canvas";
pub const PAUSE_BUTTON_ID: &str = "pause-resume";
pub const THEME_BUTTON_ID: &str = "toggle-theme";
pub const STAR_SIZE_SLIDER_ID: &str = "star-size-slider";

// ── Custom event kinds from the page ─────────────────────────────────

/// a = slider index, b = new speed.
pub const CUSTOM_SET_SPEED: u32 = 1;
pub const CUSTOM_TOGGLE_PAUSE: u32 = 2;
pub const CUSTOM_TOGGLE_THEME: u32 = 3;
/// b = new star point size.
pub const CUSTOM_SET_STAR_SIZE: u32 = 4;

// ── Game events to the page ──────────────────────────────────────────

/// a = focused planet index, or -1 for the overview.
pub const EVENT_FOCUS: f32 = 1.0;
/// a = 1 while paused.
pub const EVENT_PAUSE: f32 = 2.0;
/// a = 1 for the light theme.
pub const EVENT_THEME: f32 = 3.0;

pub const PAUSE_TEXT: &str = "Pause";
pub const RESUME_TEXT: &str = "Resume";

/// Text of the pause button for the given state.
pub fn pause_button_text(paused: bool) -> &'static str {
    if paused {
        RESUME_TEXT
    } else {
        PAUSE_TEXT
    }
}

pub fn speed_slider_id(planet: &str) -> String {
    format!("speed-{}", planet.to_lowercase())
}

/// One speed slider per planet (indexed like `planets`), plus the global controls.
pub fn bindings<'a>(planets: impl IntoIterator<Item = &'a str>) -> Vec<ControlBinding> {
    let mut out: Vec<ControlBinding> = planets
        .into_iter()
        .enumerate()
        .map(|(i, name)| ControlBinding::slider(speed_slider_id(name), CUSTOM_SET_SPEED, i as u32))
        .collect();
    out.push(ControlBinding::button(PAUSE_BUTTON_ID, CUSTOM_TOGGLE_PAUSE));
    out.push(ControlBinding::button(THEME_BUTTON_ID, CUSTOM_TOGGLE_THEME));
    out.push(ControlBinding::slider(STAR_SIZE_SLIDER_ID, CUSTOM_SET_STAR_SIZE, 0));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::ControlKind;

    #[test]
    fn slider_ids_are_lowercase() {
        assert_eq!(speed_slider_id("Earth"), "speed-earth");
    }

    #[test]
    fn bindings_cover_every_control() {
        let bindings = bindings(["Mercury", "Venus"]);
        assert_eq!(bindings.len(), 5);
        assert_eq!(bindings[1].element_id, "speed-venus");
        assert_eq!(bindings[1].index, 1);
        assert_eq!(bindings[2].kind, ControlKind::Button);
        assert_eq!(bindings[4].element_id, STAR_SIZE_SLIDER_ID);
    }

    #[test]
    fn pause_text_swaps() {
        assert_eq!(pause_button_text(true), "Resume");
        assert_eq!(pause_button_text(false), "Pause");
    }
}
