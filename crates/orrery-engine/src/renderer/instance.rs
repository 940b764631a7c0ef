use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::components::mesh::Color;

/// Per-mesh render data written to the frame buffer for the host renderer.
/// 16 floats = 64 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Euler rotation in radians (X, Y, Z).
    pub rx: f32,
    pub ry: f32,
    pub rz: f32,
    pub sx: f32,
    pub sy: f32,
    pub sz: f32,
    /// Geometry id from `take_geometry_changes`.
    pub geometry: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub opacity: f32,
    /// 0 = unlit, 1 = standard.
    pub shading: f32,
    /// 0 = front faces only, 1 = both.
    pub double_sided: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-label billboard data. 8 floats = 32 bytes stride.
///
/// `index` refers to the entry of the same index in `get_labels_json`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LabelInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub width: f32,
    pub height: f32,
    pub index: f32,
    /// 0 = always on top.
    pub depth_test: f32,
    pub alpha: f32,
}

impl LabelInstance {
    pub const FLOATS: usize = 8;
}

/// A single point of the point cloud, world space.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PointVertex {
    pub const FLOATS: usize = 3;

    pub fn from_vec3(v: Vec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

/// Everything the host draws this frame, collected from the scene.
#[derive(Debug, Clone)]
pub struct RenderBuffer {
    pub meshes: Vec<MeshInstance>,
    pub labels: Vec<LabelInstance>,
    pub points: Vec<PointVertex>,
    /// Point size in pixels, shared by all points.
    pub point_size: f32,
    pub point_color: Color,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            meshes: Vec::with_capacity(64),
            labels: Vec::with_capacity(16),
            points: Vec::with_capacity(512),
            point_size: 1.0,
            point_color: Color::WHITE,
        }
    }

    pub fn clear(&mut self) {
        self.meshes.clear();
        self.labels.clear();
        self.points.clear();
        self.point_size = 1.0;
        self.point_color = Color::WHITE;
    }

    pub fn mesh_count(&self) -> u32 {
        self.meshes.len() as u32
    }

    pub fn label_count(&self) -> u32 {
        self.labels.len() as u32
    }

    pub fn point_count(&self) -> u32 {
        self.points.len() as u32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
