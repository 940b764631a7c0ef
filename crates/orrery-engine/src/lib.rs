pub mod api;
pub mod core;
pub mod components;
pub mod geometry;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;
pub mod ui;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::label::LabelComponent;
pub use components::mesh::{Color, Material, MeshComponent, Shading};
pub use components::points::PointsComponent;
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use geometry::{Geometry, MeshData};
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::instance::{MeshInstance, LabelInstance, PointVertex, RenderBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{SceneManifest, BodyDescriptor, StarfieldDescriptor, ManifestError, ManifestLimits};
pub use assets::registry::{GeometryId, GeometryRegistry, GeometryChanges};
pub use bridge::protocol::{ProtocolLayout, FrameBuffer, FrameSource};
pub use systems::lighting::{PointLight, LightState};
pub use systems::picking::{Ray, PickHit, pick_nearest};
pub use systems::render::{build_render_buffer, label_entries, LabelEntry};
pub use systems::rng::Rng;
pub use ui::controls::{ControlBinding, ControlKind};
pub use ui::overlay::{HoverLabel, LabelStyle, Overlay};

// Extensions — decoupled optional systems
pub use extensions::{lerp, lerp_vec3, CameraTween, TweenPhase, TweenStep};
