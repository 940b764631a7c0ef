//! DOM overlay state: the hover label, element texts, and body classes.
//!
//! The game writes here; the web bridge applies the state to the page when
//! `revision` changes. Setters only bump the revision on a real change so the
//! bridge can skip untouched frames.

use std::collections::BTreeMap;

use glam::Vec2;

/// Visual style of the hover label, as CSS values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelStyle {
    pub background: String,
    pub color: String,
    pub border: String,
}

impl LabelStyle {
    pub fn new(background: impl Into<String>, color: impl Into<String>, border: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            color: color.into(),
            border: border.into(),
        }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self::new("rgba(30,30,40,0.95)", "#fff", "none")
    }
}

/// The floating label that follows the pointer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HoverLabel {
    #[default]
    Hidden,
    /// Shown with `text` at page position `at` (CSS left/top in pixels).
    Visible { text: String, at: Vec2 },
}

#[derive(Debug, Clone, Default)]
pub struct Overlay {
    hover: HoverLabel,
    label_style: LabelStyle,
    texts: BTreeMap<String, String>,
    body_classes: BTreeMap<String, bool>,
    revision: u64,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_hover(&mut self, text: &str, at: Vec2) {
        let same = matches!(&self.hover, HoverLabel::Visible { text: t, at: a } if t == text && *a == at);
        if !same {
            self.hover = HoverLabel::Visible { text: text.to_owned(), at };
            self.revision += 1;
        }
    }

    pub fn hide_hover(&mut self) {
        if self.hover != HoverLabel::Hidden {
            self.hover = HoverLabel::Hidden;
            self.revision += 1;
        }
    }

    pub fn set_label_style(&mut self, style: LabelStyle) {
        if self.label_style != style {
            self.label_style = style;
            self.revision += 1;
        }
    }

    /// Set the text content of the element with `element_id`.
    pub fn set_text(&mut self, element_id: &str, text: &str) {
        if self.texts.get(element_id).map(String::as_str) != Some(text) {
            self.texts.insert(element_id.to_owned(), text.to_owned());
            self.revision += 1;
        }
    }

    /// Add or remove `class` on the document body.
    pub fn set_body_class(&mut self, class: &str, enabled: bool) {
        if self.body_classes.get(class) != Some(&enabled) {
            self.body_classes.insert(class.to_owned(), enabled);
            self.revision += 1;
        }
    }

    pub fn hover(&self) -> &HoverLabel {
        &self.hover
    }

    pub fn label_style(&self) -> &LabelStyle {
        &self.label_style
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.texts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn text(&self, element_id: &str) -> Option<&str> {
        self.texts.get(element_id).map(String::as_str)
    }

    pub fn body_classes(&self) -> impl Iterator<Item = (&str, bool)> {
        self.body_classes.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.get(class).copied().unwrap_or(false)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
