use glam::Vec2;

/// Billboard label — a camera-facing quad showing a text string.
///
/// The text is rasterized by the host (see `get_labels_json`); the engine only
/// tracks where the billboard sits and how large it is.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelComponent {
    pub text: String,
    /// Billboard size in world units (width, height).
    pub size: Vec2,
    /// When false the label is drawn on top of everything.
    pub depth_test: bool,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl LabelComponent {
    pub fn new(text: impl Into<String>, size: Vec2) -> Self {
        Self {
            text: text.into(),
            size,
            depth_test: true,
            alpha: 1.0,
        }
    }

    pub fn always_on_top(mut self) -> Self {
        self.depth_test = false;
        self
    }
}
