use glam::Vec3;

use super::mesh::Color;

/// A cloud of screen-sized points (the starfield).
#[derive(Debug, Clone, PartialEq)]
pub struct PointsComponent {
    /// Point positions relative to the owning entity.
    pub positions: Vec<Vec3>,
    pub color: Color,
    /// Point size in pixels.
    pub size: f32,
}

impl PointsComponent {
    pub fn new(positions: Vec<Vec3>, color: Color, size: f32) -> Self {
        Self {
            positions,
            color,
            size,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
