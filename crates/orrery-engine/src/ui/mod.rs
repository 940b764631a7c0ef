pub mod controls;
pub mod overlay;

pub use controls::{ControlBinding, ControlKind};
pub use overlay::{HoverLabel, LabelStyle, Overlay};
