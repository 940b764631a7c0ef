//! Flat annulus tessellation (orbit rings).

use std::f32::consts::TAU;

use super::MeshData;

/// Generate an annulus in the XY plane with normals along +Z.
/// The strip has one band between `inner_radius` and `outer_radius`.
pub fn generate_ring_mesh(inner_radius: f32, outer_radius: f32, theta_segments: u32) -> MeshData {
    let theta_segments = theta_segments.max(3);
    let row = theta_segments + 1;

    let mut mesh = MeshData::default();
    for radius in [inner_radius, outer_radius] {
        for i in 0..=theta_segments {
            let (sin, cos) = (i as f32 / theta_segments as f32 * TAU).sin_cos();
            mesh.positions.push([radius * cos, radius * sin, 0.0]);
            mesh.normals.push([0.0, 0.0, 1.0]);
        }
    }

    for i in 0..theta_segments {
        let a = i;
        let b = i + row;
        let c = i + row + 1;
        let d = i + 1;
        mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_and_triangle_counts() {
        let mesh = generate_ring_mesh(17.6, 18.4, 128);
        assert_eq!(mesh.vertex_count(), 2 * 129);
        assert_eq!(mesh.triangle_count(), 2 * 128);
    }

    #[test]
    fn vertices_sit_on_inner_or_outer_edge() {
        let (inner, outer) = (9.95, 10.05);
        let mesh = generate_ring_mesh(inner, outer, 32);
        for p in &mesh.positions {
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            assert!((r - inner).abs() < 1e-4 || (r - outer).abs() < 1e-4);
            assert_eq!(p[2], 0.0);
        }
    }
}
