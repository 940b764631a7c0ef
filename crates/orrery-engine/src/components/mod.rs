pub mod entity;
pub mod label;
pub mod mesh;
pub mod points;
