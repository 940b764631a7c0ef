use serde::Serialize;

use crate::components::entity::Entity;
use crate::renderer::instance::{LabelInstance, MeshInstance, PointVertex, RenderBuffer};

/// Text metadata for one label billboard, indexed like `LabelInstance::index`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelEntry {
    pub index: u32,
    pub text: String,
}

/// Build the render buffer from a set of entities.
///
/// Meshes and labels are emitted in entity order. Point clouds are flattened
/// into one batch in world space; the last cloud's size and color win.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }

        if let Some(mesh) = &entity.mesh {
            let m = &mesh.material;
            buffer.meshes.push(MeshInstance {
                x: entity.pos.x,
                y: entity.pos.y,
                z: entity.pos.z,
                rx: entity.rotation.x,
                ry: entity.rotation.y,
                rz: entity.rotation.z,
                sx: entity.scale.x,
                sy: entity.scale.y,
                sz: entity.scale.z,
                geometry: mesh.geometry.wire_id(),
                r: m.color.r,
                g: m.color.g,
                b: m.color.b,
                opacity: m.opacity,
                shading: m.shading.wire_id(),
                double_sided: if m.double_sided { 1.0 } else { 0.0 },
            });
        }

        if let Some(label) = &entity.label {
            let index = buffer.labels.len() as f32;
            buffer.labels.push(LabelInstance {
                x: entity.pos.x,
                y: entity.pos.y,
                z: entity.pos.z,
                width: label.size.x,
                height: label.size.y,
                index,
                depth_test: if label.depth_test { 1.0 } else { 0.0 },
                alpha: label.alpha,
            });
        }

        if let Some(points) = &entity.points {
            buffer
                .points
                .extend(points.positions.iter().map(|p| PointVertex::from_vec3(*p + entity.pos)));
            buffer.point_size = points.size;
            buffer.point_color = points.color;
        }
    }
}

/// Label texts in the same order `build_render_buffer` assigns label indices.
pub fn label_entries<'a>(entities: impl Iterator<Item = &'a Entity>) -> Vec<LabelEntry> {
    entities
        .filter(|e| e.active)
        .filter_map(|e| e.label.as_ref())
        .enumerate()
        .map(|(i, label)| LabelEntry {
            index: i as u32,
            text: label.text.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::assets::registry::GeometryId;
    use crate::components::label::LabelComponent;
    use crate::components::mesh::{Color, Material, MeshComponent};
    use crate::components::points::PointsComponent;
    use glam::{Vec2, Vec3};

    fn scene() -> Vec<Entity> {
        vec![
            Entity::new(EntityId(1))
                .with_pos(Vec3::new(10.0, 0.0, 0.0))
                .with_mesh(MeshComponent::new(GeometryId(3), Material::standard(Color::WHITE))),
            Entity::new(EntityId(2))
                .with_pos(Vec3::new(0.0, 2.0, 0.0))
                .with_label(LabelComponent::new("Mercury", Vec2::new(2.0, 1.0)).always_on_top()),
            Entity::new(EntityId(3))
                .with_pos(Vec3::new(1.0, 0.0, 0.0))
                .with_points(PointsComponent::new(vec![Vec3::ZERO, Vec3::Y], Color::WHITE, 2.0)),
            Entity::new(EntityId(4)).with_label(LabelComponent::new("Venus", Vec2::ONE)),
        ]
    }

    #[test]
    fn packs_meshes_labels_and_points() {
        let entities = scene();
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.mesh_count(), 1);
        let mesh = buffer.meshes[0];
        assert_eq!((mesh.x, mesh.geometry, mesh.shading), (10.0, 3.0, 1.0));

        assert_eq!(buffer.label_count(), 2);
        assert_eq!(buffer.labels[0].depth_test, 0.0);
        assert_eq!(buffer.labels[1].index, 1.0);

        assert_eq!(buffer.point_count(), 2);
        assert_eq!(buffer.points[1], PointVertex { x: 1.0, y: 1.0, z: 0.0 });
        assert_eq!(buffer.point_size, 2.0);
    }

    #[test]
    fn label_entries_follow_buffer_order() {
        let entities = scene();
        let entries = label_entries(entities.iter());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], LabelEntry { index: 0, text: "Mercury".into() });
        assert_eq!(entries[1].text, "Venus");
    }

    #[test]
    fn inactive_entities_are_skipped() {
        let mut entities = scene();
        for e in &mut entities {
            e.active = false;
        }
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.mesh_count() + buffer.label_count() + buffer.point_count(), 0);
        assert!(label_entries(entities.iter()).is_empty());
    }
}
