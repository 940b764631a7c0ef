use std::collections::HashMap;

use serde::Serialize;

use crate::geometry::{Geometry, MeshData};

/// Handle to a geometry owned by the `GeometryRegistry`.
///
/// Ids are handed out in increasing order and never reused, so a stale handle
/// to a disposed geometry can never alias a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GeometryId(pub u32);

impl GeometryId {
    pub fn wire_id(self) -> f32 {
        self.0 as f32
    }
}

/// A geometry the host has not uploaded yet.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedGeometry {
    pub id: GeometryId,
    pub geometry: Geometry,
    pub mesh: MeshData,
}

/// Geometry lifecycle changes since the host last asked.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GeometryChanges {
    pub created: Vec<CreatedGeometry>,
    pub disposed: Vec<GeometryId>,
}

impl GeometryChanges {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.disposed.is_empty()
    }
}

/// Owns every live geometry and records create/dispose events for the host.
#[derive(Debug, Default)]
pub struct GeometryRegistry {
    geometries: HashMap<GeometryId, Geometry>,
    next_id: u32,
    pending_created: Vec<GeometryId>,
    pending_disposed: Vec<GeometryId>,
}

impl GeometryRegistry {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Register a new geometry and return its handle.
    pub fn create(&mut self, geometry: Geometry) -> GeometryId {
        let id = GeometryId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        self.geometries.insert(id, geometry);
        self.pending_created.push(id);
        id
    }

    /// Release a geometry. Returns false if the id was unknown or already disposed.
    pub fn dispose(&mut self, id: GeometryId) -> bool {
        if self.geometries.remove(&id).is_none() {
            return false;
        }
        if let Some(idx) = self.pending_created.iter().position(|&c| c == id) {
            // The host never saw it; nothing to free on that side.
            self.pending_created.remove(idx);
        } else {
            self.pending_disposed.push(id);
        }
        true
    }

    /// Dispose `old` and register `geometry` in its place.
    pub fn replace(&mut self, old: GeometryId, geometry: Geometry) -> GeometryId {
        self.dispose(old);
        self.create(geometry)
    }

    pub fn get(&self, id: GeometryId) -> Option<&Geometry> {
        self.geometries.get(&id)
    }

    pub fn contains(&self, id: GeometryId) -> bool {
        self.geometries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.pending_created.is_empty() || !self.pending_disposed.is_empty()
    }

    /// Drain pending lifecycle changes, tessellating newly created geometry.
    pub fn take_changes(&mut self) -> GeometryChanges {
        let created = std::mem::take(&mut self.pending_created)
            .into_iter()
            .filter_map(|id| {
                self.geometries.get(&id).map(|geometry| CreatedGeometry {
                    id,
                    geometry: *geometry,
                    mesh: geometry.tessellate(),
                })
            })
            .collect();
        GeometryChanges {
            created,
            disposed: std::mem::take(&mut self.pending_disposed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_never_reused() {
        let mut reg = GeometryRegistry::new();
        let a = reg.create(Geometry::sphere(1.0, 8));
        assert!(reg.dispose(a));
        let b = reg.create(Geometry::sphere(1.0, 8));
        assert_ne!(a, b);
        assert!(b > a);
        assert!(reg.get(a).is_none());
    }

    #[test]
    fn double_dispose_is_rejected() {
        let mut reg = GeometryRegistry::new();
        let a = reg.create(Geometry::sphere(1.0, 8));
        assert!(reg.dispose(a));
        assert!(!reg.dispose(a));
    }

    #[test]
    fn replace_swaps_geometry() {
        let mut reg = GeometryRegistry::new();
        let old = reg.create(Geometry::ring(9.95, 10.05, 16));
        let new = reg.replace(old, Geometry::ring(9.6, 10.4, 16));
        assert!(!reg.contains(old));
        assert_eq!(reg.get(new), Some(&Geometry::ring(9.6, 10.4, 16)));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn changes_report_creates_then_disposals() {
        let mut reg = GeometryRegistry::new();
        let a = reg.create(Geometry::sphere(1.0, 8));
        let changes = reg.take_changes();
        assert_eq!(changes.created.len(), 1);
        assert_eq!(changes.created[0].id, a);
        assert!(!changes.created[0].mesh.positions.is_empty());
        assert!(changes.disposed.is_empty());

        reg.dispose(a);
        let changes = reg.take_changes();
        assert!(changes.created.is_empty());
        assert_eq!(changes.disposed, vec![a]);
        assert!(reg.take_changes().is_empty());
    }

    #[test]
    fn unseen_geometry_disposal_is_silent() {
        let mut reg = GeometryRegistry::new();
        let a = reg.create(Geometry::sphere(1.0, 8));
        reg.dispose(a);
        assert!(reg.take_changes().is_empty());
    }
}
