/// Light/dark visual presets.

use orrery_engine::{Color, LabelStyle};

/// Body class present while the light theme is active.
pub const LIGHT_THEME_CLASS: &str = "light-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Everything a theme changes, resolved to concrete values.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemePreset {
    pub clear_color: Color,
    pub ring_color: Color,
    /// Half the radial width of each orbit ring.
    pub ring_half_width: f32,
    /// Multiplier on planet radii, label sizes and the sun.
    pub scale: f32,
    pub label_style: LabelStyle,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    pub fn preset(self) -> ThemePreset {
        match self {
            Theme::Dark => ThemePreset {
                clear_color: Color::from_hex(0x000000),
                ring_color: Color::WHITE,
                ring_half_width: 0.4,
                scale: 1.7,
                label_style: LabelStyle::new("rgba(30,30,40,0.95)", "#fff", "none"),
            },
            Theme::Light => ThemePreset {
                clear_color: Color::from_hex(0xe0e7ef),
                ring_color: Color::BLACK,
                ring_half_width: 0.1,
                scale: 1.0,
                label_style: LabelStyle::new("rgba(255,255,255,0.95)", "#222", "1px solid #ccc"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_eq!(theme.toggled().toggled().preset(), theme.preset());
        }
    }

    #[test]
    fn presets_differ_where_expected() {
        let dark = Theme::Dark.preset();
        let light = Theme::Light.preset();
        assert_eq!(dark.scale, 1.7);
        assert_eq!(light.scale, 1.0);
        assert_eq!(light.ring_half_width, 0.1);
        assert_eq!(light.clear_color, Color::from_hex(0xe0e7ef));
        assert_eq!(light.label_style.border, "1px solid #ccc");
        assert_ne!(dark.label_style, light.label_style);
    }
}
