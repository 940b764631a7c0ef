/// Scene lights: one ambient term plus any number of point lights.
///
/// Lights are persistent; they stay until explicitly removed. Each frame the
/// runner serializes them into the frame buffer for the host's lighting pass.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::components::mesh::Color;

/// An omnidirectional light with linear falloff to zero at `range`.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, range]`
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Distance at which the light's contribution reaches zero (0 = infinite).
    pub range: f32,
}

impl PointLight {
    pub const FLOATS: usize = 8;

    pub fn new(pos: Vec3, color: Color, intensity: f32, range: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color.r,
            g: color.g,
            b: color.b,
            intensity,
            range,
        }
    }

    pub fn pos(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Active lights and ambient term for the scene.
///
/// The ambient term defaults to white at full intensity, which renders lit
/// materials unshaded when no point lights are present.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: Color,
    ambient_intensity: f32,
}

impl LightState {
    pub fn new() -> Self {
        Self::with_capacity(4)
    }

    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
            ambient: Color::WHITE,
            ambient_intensity: 1.0,
        }
    }

    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    pub fn as_slice(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn count(&self) -> usize {
        self.lights.len()
    }

    pub fn set_ambient(&mut self, color: Color, intensity: f32) {
        self.ambient = color;
        self.ambient_intensity = intensity;
    }

    /// Ambient color premultiplied by its intensity.
    pub fn ambient(&self) -> [f32; 3] {
        let c = self.ambient;
        let i = self.ambient_intensity;
        [c.r * i, c.g * i, c.b * i]
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_light_new() {
        let light = PointLight::new(Vec3::new(1.0, 2.0, 3.0), Color::new(1.0, 0.5, 0.0), 2.0, 1000.0);
        assert_eq!(light.pos(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!([light.r, light.g, light.b], [1.0, 0.5, 0.0]);
        assert_eq!(light.intensity, 2.0);
        assert_eq!(light.range, 1000.0);
    }

    #[test]
    fn light_state_add_and_clear() {
        let mut state = LightState::new();
        state.add(PointLight::new(Vec3::ZERO, Color::WHITE, 2.0, 1000.0));
        assert_eq!(state.count(), 1);
        state.clear();
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn ambient_defaults_to_white_and_premultiplies() {
        let mut state = LightState::new();
        assert_eq!(state.ambient(), [1.0, 1.0, 1.0]);
        state.set_ambient(Color::WHITE, 0.2);
        assert_eq!(state.ambient(), [0.2, 0.2, 0.2]);
    }

    #[test]
    fn point_light_is_8_floats() {
        assert_eq!(std::mem::size_of::<PointLight>(), PointLight::FLOATS * 4);
    }
}
