use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

use crate::systems::picking::Ray;

/// Perspective camera aimed at a look-at point.
///
/// Uses OpenGL clip conventions (NDC z in [-1, 1]) so the host renderer can
/// consume the matrices unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera is aimed at.
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// GPU-side uniform data for the camera (36 floats).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 36;
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new(45.0, 1.0, 0.1, 1000.0)
    }
}

impl Camera3D {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: fov_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    /// Aim the camera at `target` without moving it.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Update the aspect ratio after a viewport resize. Zero-sized viewports are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Unit vector from the eye towards the target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            view: self.view_matrix().to_cols_array_2d(),
            eye: self.position.extend(1.0).to_array(),
        }
    }

    /// Build a pick ray from the eye through a point in normalized device
    /// coordinates (x right, y up, both in [-1, 1]).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let on_ray = inv * ndc.extend(0.5).extend(1.0);
        let on_ray = on_ray.xyz() / on_ray.w;
        Ray::new(self.position, on_ray - self.position)
    }

    /// Project a world point to NDC. Returns `None` for points behind the eye.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.xy() / clip.w)
    }
}

/// Convert client-space pixel coordinates to NDC given the viewport rect.
pub fn client_to_ndc(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Vec2 {
    Vec2::new(
        (client.x - rect_origin.x) / rect_size.x * 2.0 - 1.0,
        -((client.y - rect_origin.y) / rect_size.y) * 2.0 + 1.0,
    )
}
