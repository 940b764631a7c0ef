// extensions/mod.rs
//
// Optional extension modules.
// These are decoupled from core Entity/Scene — games opt-in by owning them.

pub mod tween;

pub use tween::{lerp, lerp_vec3, CameraTween, TweenPhase, TweenStep, DEFAULT_TWEEN_FRAMES};
