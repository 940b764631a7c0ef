use serde::{Deserialize, Serialize};

use crate::assets::registry::GeometryId;

/// Linear RGB color, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Shading model the host renderer should use for a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shading {
    /// Flat color, ignores lights (the sun, orbit rings).
    #[default]
    Unlit,
    /// Lit by ambient + point lights.
    Standard,
}

impl Shading {
    pub fn wire_id(self) -> f32 {
        match self {
            Shading::Unlit => 0.0,
            Shading::Standard => 1.0,
        }
    }
}

/// Surface description for a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub shading: Shading,
    /// Opacity (1.0 = opaque). Values below 1.0 imply alpha blending.
    pub opacity: f32,
    /// Render both faces (needed for flat rings seen from below).
    pub double_sided: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            shading: Shading::Unlit,
            opacity: 1.0,
            double_sided: false,
        }
    }
}

impl Material {
    pub fn unlit(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn standard(color: Color) -> Self {
        Self {
            color,
            shading: Shading::Standard,
            ..Default::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }
}

/// Component for triangle meshes. The geometry lives in the
/// `GeometryRegistry`; the component only holds its handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub geometry: GeometryId,
    pub material: Material,
    /// Whether the pointer picker may hit this mesh.
    pub pickable: bool,
}

impl MeshComponent {
    pub fn new(geometry: GeometryId, material: Material) -> Self {
        Self {
            geometry,
            material,
            pickable: false,
        }
    }

    pub fn pickable(mut self) -> Self {
        self.pickable = true;
        self
    }
}
