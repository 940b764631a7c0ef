//! Pointer picking: cast a ray through the camera and find the nearest
//! pickable mesh under it.

use glam::Vec3;

use crate::assets::registry::GeometryRegistry;
use crate::components::entity::Entity;
use crate::core::scene::Scene;

/// A half-line with a unit-length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray; `direction` is normalized (degenerate directions fall back to -Z).
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.try_normalize().unwrap_or(Vec3::NEG_Z),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Distance along `ray` to the first surface point of the sphere, if any.
/// A ray starting inside the sphere reports the exit point.
pub fn ray_sphere_intersection(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let near = -b - sqrt_d;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + sqrt_d;
    (far >= 0.0).then_some(far)
}

/// A successful pick.
#[derive(Debug, Clone, Copy)]
pub struct PickHit<'a> {
    pub entity: &'a Entity,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
    pub point: Vec3,
}

/// Find the nearest pickable mesh hit by `ray`.
///
/// Meshes are tested against their bounding sphere: the geometry's bounding
/// radius times the entity's largest scale axis. That is exact for the
/// sphere bodies this picker is used with.
pub fn pick_nearest<'a>(
    scene: &'a Scene,
    geometries: &GeometryRegistry,
    ray: &Ray,
) -> Option<PickHit<'a>> {
    let mut best: Option<PickHit<'a>> = None;
    for entity in scene.pickable() {
        let Some(mesh) = entity.mesh else { continue };
        let Some(geometry) = geometries.get(mesh.geometry) else {
            continue;
        };
        let radius = geometry.bounding_radius() * entity.scale.max_element();
        let Some(distance) = ray_sphere_intersection(ray, entity.pos, radius) else {
            continue;
        };
        if matches!(best, Some(b) if b.distance <= distance) {
            continue;
        }
        best = Some(PickHit {
            entity,
            distance,
            point: ray.at(distance),
        });
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::mesh::{Material, MeshComponent};
    use crate::geometry::Geometry;

    fn body(
        scene: &mut Scene,
        reg: &mut GeometryRegistry,
        id: u32,
        name: &str,
        pos: Vec3,
        radius: f32,
    ) {
        let geometry = reg.create(Geometry::sphere(radius, 8));
        scene.spawn(
            Entity::new(EntityId(id))
                .with_tag(name)
                .with_pos(pos)
                .with_mesh(MeshComponent::new(geometry, Material::default()).pickable()),
        );
    }

    #[test]
    fn ray_hits_sphere_front_face() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let t = ray_sphere_intersection(&ray, Vec3::ZERO, 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_and_points_away() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 10.0), Vec3::NEG_Z);
        assert!(ray_sphere_intersection(&ray, Vec3::ZERO, 2.0).is_none());
        let away = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        assert!(ray_sphere_intersection(&away, Vec3::ZERO, 2.0).is_none());
    }

    #[test]
    fn ray_from_inside_reports_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray_sphere_intersection(&ray, Vec3::ZERO, 3.0).unwrap();
        assert!((t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn picks_nearest_of_overlapping_bodies() {
        let mut scene = Scene::new();
        let mut reg = GeometryRegistry::new();
        body(&mut scene, &mut reg, 1, "Far", Vec3::new(0.0, 0.0, -20.0), 3.0);
        body(&mut scene, &mut reg, 2, "Near", Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let hit = pick_nearest(&scene, &reg, &ray).unwrap();
        assert_eq!(hit.entity.tag, "Near");
        assert!((hit.point.z + 4.0).abs() < 1e-4);
    }

    #[test]
    fn empty_space_is_no_hit() {
        let mut scene = Scene::new();
        let mut reg = GeometryRegistry::new();
        body(&mut scene, &mut reg, 1, "Earth", Vec3::new(18.0, 0.0, 0.0), 1.3);
        let ray = Ray::new(Vec3::new(0.0, 60.0, 120.0), Vec3::Y);
        assert!(pick_nearest(&scene, &reg, &ray).is_none());
        assert!(pick_nearest(&Scene::new(), &reg, &ray).is_none());
    }

    #[test]
    fn entity_scale_grows_hit_radius() {
        let mut scene = Scene::new();
        let mut reg = GeometryRegistry::new();
        body(&mut scene, &mut reg, 1, "Sun", Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(1.5, 0.0, 10.0), Vec3::NEG_Z);
        assert!(pick_nearest(&scene, &reg, &ray).is_none());
        scene.get_mut(EntityId(1)).unwrap().scale = Vec3::splat(2.0);
        assert!(pick_nearest(&scene, &reg, &ray).is_some());
    }

    #[test]
    fn disposed_geometry_is_not_pickable() {
        let mut scene = Scene::new();
        let mut reg = GeometryRegistry::new();
        body(&mut scene, &mut reg, 1, "Mars", Vec3::ZERO, 1.0);
        let geometry = scene.get(EntityId(1)).unwrap().mesh.unwrap().geometry;
        reg.dispose(geometry);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        assert!(pick_nearest(&scene, &reg, &ray).is_none());
    }
}
