use glam::Vec3;
use crate::api::types::EntityId;
use crate::components::label::LabelComponent;
use crate::components::mesh::MeshComponent;
use crate::components::points::PointsComponent;

/// Fat Entity — a single struct with optional components.
/// Designed for simplicity over ECS purity; the solar system has a few dozen of these.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Euler rotation in radians (applied X, then Y, then Z).
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
    pub mesh: Option<MeshComponent>,
    pub label: Option<LabelComponent>,
    pub points: Option<PointsComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            mesh: None,
            label: None,
            points: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_label(mut self, label: LabelComponent) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_points(mut self, points: PointsComponent) -> Self {
        self.points = Some(points);
        self
    }
}
