//! Procedural geometry for the primitives an orrery needs.
//!
//! Geometry is tessellated on the Rust side and shipped to the host renderer
//! once per geometry id, so the host never has to know how a sphere or a ring
//! is built.

mod ring;
mod sphere;

use serde::Serialize;

pub use ring::generate_ring_mesh;
pub use sphere::generate_sphere_mesh;

/// Triangle mesh ready for upload: positions, normals and a triangle list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Parametric description of a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    /// UV sphere centred on the origin, poles on the Y axis.
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    /// Flat annulus in the XY plane, facing +Z.
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        theta_segments: u32,
    },
}

impl Geometry {
    pub fn sphere(radius: f32, segments: u32) -> Self {
        Geometry::Sphere {
            radius,
            width_segments: segments,
            height_segments: segments,
        }
    }

    pub fn ring(inner_radius: f32, outer_radius: f32, theta_segments: u32) -> Self {
        Geometry::Ring {
            inner_radius,
            outer_radius,
            theta_segments,
        }
    }

    /// Radius of the smallest origin-centred sphere enclosing the geometry.
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Geometry::Sphere { radius, .. } => radius,
            Geometry::Ring { outer_radius, .. } => outer_radius,
        }
    }

    pub fn tessellate(&self) -> MeshData {
        match *self {
            Geometry::Sphere {
                radius,
                width_segments,
                height_segments,
            } => generate_sphere_mesh(radius, width_segments, height_segments),
            Geometry::Ring {
                inner_radius,
                outer_radius,
                theta_segments,
            } => generate_ring_mesh(inner_radius, outer_radius, theta_segments),
        }
    }
}
