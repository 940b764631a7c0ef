use glam::Vec2;

use crate::api::types::{EntityId, GameEvent};
use crate::assets::manifest::{ManifestLimits, SceneManifest};
use crate::assets::registry::GeometryRegistry;
use crate::bridge::protocol::DEFAULT_MAX_LIGHTS;
use crate::components::entity::Entity;
use crate::components::mesh::Color;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::systems::lighting::LightState;
use crate::ui::controls::ControlBinding;
use crate::ui::overlay::Overlay;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Id of the DOM element that hosts the render surface and receives pointer events.
    pub container_id: String,
    /// Vertical field of view in degrees (default: 45).
    pub fov_degrees: f32,
    /// Near clip plane (default: 0.1).
    pub near: f32,
    /// Far clip plane (default: 1000).
    pub far: f32,
    /// Viewport size before the first resize event arrives.
    pub viewport: Vec2,
    /// Longest frame delta in seconds passed to `Game::update`. Longer gaps
    /// (a backgrounded tab) are clamped to this.
    pub max_frame_dt: f32,
    /// Maximum number of mesh instances per frame (default: 64).
    pub max_meshes: usize,
    /// Maximum number of label billboards per frame (default: 32).
    pub max_labels: usize,
    /// Maximum number of point lights (default: 8).
    pub max_lights: usize,
    /// Maximum number of point-cloud vertices (default: 1024).
    pub max_points: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            container_id: "canvas".to_owned(),
            fov_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
            viewport: Vec2::new(800.0, 600.0),
            max_frame_dt: 1.0,
            max_meshes: 64,
            max_labels: 32,
            max_lights: DEFAULT_MAX_LIGHTS,
            max_points: 1024,
            max_events: 32,
        }
    }
}

/// The core contract every scene must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure camera and lights.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Per-frame tick. `dt` is the clamped wall-clock delta in seconds.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32);

    /// Page controls to wire up. Called once after init.
    fn controls(&self) -> Vec<ControlBinding> {
        Vec::new()
    }

    /// Largest manifest this scene can draw with `config`'s capacities.
    /// Defaults to one mesh and one label per body.
    fn manifest_limits(&self, config: &GameConfig) -> ManifestLimits {
        ManifestLimits::for_scene(config, 0, 1, 1)
    }

    /// Replace scene content from a validated manifest.
    fn load_manifest(&mut self, _ctx: &mut EngineContext, _manifest: SceneManifest) {
        log::warn!("load_manifest: scene does not accept manifests");
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub lights: LightState,
    pub geometries: GeometryRegistry,
    pub overlay: Overlay,
    pub events: Vec<GameEvent>,
    /// Background color the host clears to.
    pub clear_color: Color,
    /// Render surface size in pixels.
    pub viewport: Vec2,
    next_id: u32,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        let mut camera = Camera3D::new(config.fov_degrees, 1.0, config.near, config.far);
        camera.resize(config.viewport.x, config.viewport.y);
        Self {
            scene: Scene::new(),
            camera,
            lights: LightState::with_capacity(config.max_lights),
            geometries: GeometryRegistry::new(),
            overlay: Overlay::new(),
            events: Vec::new(),
            clear_color: Color::BLACK,
            viewport: config.viewport,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        self.scene.spawn(entity)
    }

    /// Despawn an entity and dispose the geometry its mesh owns.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let entity = self.scene.despawn(id)?;
        if let Some(mesh) = &entity.mesh {
            self.geometries.dispose(mesh.geometry);
        }
        Some(entity)
    }

    /// Track a new render surface size. Zero sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.viewport = Vec2::new(width, height);
        self.camera.resize(width, height);
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::{Material, MeshComponent};
    use crate::geometry::Geometry;

    #[test]
    fn camera_follows_config() {
        let config = GameConfig {
            viewport: Vec2::new(1200.0, 600.0),
            ..Default::default()
        };
        let ctx = EngineContext::new(&config);
        assert!((ctx.camera.fov_y - 45f32.to_radians()).abs() < 1e-6);
        assert_eq!(ctx.camera.aspect, 2.0);
        assert_eq!(ctx.camera.far, 1000.0);
    }

    #[test]
    fn resize_updates_aspect_and_ignores_zero() {
        let mut ctx = EngineContext::default();
        ctx.resize(1000.0, 500.0);
        assert_eq!(ctx.viewport, Vec2::new(1000.0, 500.0));
        assert_eq!(ctx.camera.aspect, 2.0);
        ctx.resize(0.0, 500.0);
        assert_eq!(ctx.viewport, Vec2::new(1000.0, 500.0));
    }

    #[test]
    fn despawn_disposes_owned_geometry() {
        let mut ctx = EngineContext::default();
        let geometry = ctx.geometries.create(Geometry::sphere(1.0, 8));
        let id = ctx.next_id();
        ctx.spawn(Entity::new(id).with_mesh(MeshComponent::new(geometry, Material::default())));

        assert!(ctx.despawn(id).is_some());
        assert!(!ctx.geometries.contains(geometry));
        assert!(ctx.despawn(id).is_none());
    }

    #[test]
    fn ids_are_sequential() {
        let mut ctx = EngineContext::default();
        assert_eq!(ctx.next_id(), EntityId(1));
        assert_eq!(ctx.next_id(), EntityId(2));
    }
}
