pub mod instance;
pub mod camera;

pub use camera::{Camera3D, CameraUniform};
pub use instance::{LabelInstance, MeshInstance, PointVertex, RenderBuffer};
