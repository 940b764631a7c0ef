/// Frame buffer layout shared with the host renderer.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 32 floats]
/// [Camera: 36 floats (view_proj, view, eye)]
/// [Meshes: max_meshes × 16 floats]
/// [Labels: max_labels × 8 floats]
/// [Lights: max_lights × 8 floats]
/// [Points: max_points × 3 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header on every frame.
/// The host reads them from the header to compute offsets dynamically.

use glam::Vec2;

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::components::mesh::Color;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::{LabelInstance, MeshInstance, PointVertex, RenderBuffer};
use crate::systems::lighting::{LightState, PointLight};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 32;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_VIEWPORT_WIDTH: usize = 3;
pub const HEADER_VIEWPORT_HEIGHT: usize = 4;
pub const HEADER_CLEAR_R: usize = 5;
pub const HEADER_CLEAR_G: usize = 6;
pub const HEADER_CLEAR_B: usize = 7;
pub const HEADER_MAX_MESHES: usize = 8;
pub const HEADER_MESH_COUNT: usize = 9;
pub const HEADER_MAX_LABELS: usize = 10;
pub const HEADER_LABEL_COUNT: usize = 11;
pub const HEADER_MAX_LIGHTS: usize = 12;
pub const HEADER_LIGHT_COUNT: usize = 13;
pub const HEADER_MAX_POINTS: usize = 14;
pub const HEADER_POINT_COUNT: usize = 15;
pub const HEADER_POINT_SIZE: usize = 16;
pub const HEADER_POINT_R: usize = 17;
pub const HEADER_POINT_G: usize = 18;
pub const HEADER_POINT_B: usize = 19;
pub const HEADER_MAX_EVENTS: usize = 20;
pub const HEADER_EVENT_COUNT: usize = 21;
pub const HEADER_AMBIENT_R: usize = 22;
pub const HEADER_AMBIENT_G: usize = 23;
pub const HEADER_AMBIENT_B: usize = 24;
/// Bumped whenever `take_geometry_changes` has something new.
pub const HEADER_GEOMETRY_REVISION: usize = 25;
/// Bumped whenever the label texts from `get_labels_json` change.
pub const HEADER_LABEL_REVISION: usize = 26;
pub const HEADER_ELAPSED: usize = 27;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera section.
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;
/// Floats per mesh instance (wire format — never changes).
pub const MESH_FLOATS: usize = MeshInstance::FLOATS;
/// Floats per label billboard.
pub const LABEL_FLOATS: usize = LabelInstance::FLOATS;
/// Floats per point light: x, y, z, r, g, b, intensity, range.
pub const LIGHT_FLOATS: usize = PointLight::FLOATS;
/// Floats per point vertex: x, y, z.
pub const POINT_FLOATS: usize = PointVertex::FLOATS;
/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// Default maximum number of point lights.
pub const DEFAULT_MAX_LIGHTS: usize = 8;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_meshes: usize,
    pub max_labels: usize,
    pub max_lights: usize,
    pub max_points: usize,
    pub max_events: usize,

    /// Offset (in floats) where the camera uniform begins.
    pub camera_offset: usize,
    /// Offset (in floats) where mesh data begins.
    pub mesh_data_offset: usize,
    /// Offset (in floats) where label data begins.
    pub label_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where point data begins.
    pub point_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_meshes: usize,
        max_labels: usize,
        max_lights: usize,
        max_points: usize,
        max_events: usize,
    ) -> Self {
        let camera_offset = HEADER_FLOATS;
        let mesh_data_offset = camera_offset + CAMERA_FLOATS;
        let label_data_offset = mesh_data_offset + max_meshes * MESH_FLOATS;
        let light_data_offset = label_data_offset + max_labels * LABEL_FLOATS;
        let point_data_offset = light_data_offset + max_lights * LIGHT_FLOATS;
        let event_data_offset = point_data_offset + max_points * POINT_FLOATS;
        let buffer_total_floats = event_data_offset + max_events * EVENT_FLOATS;

        Self {
            max_meshes,
            max_labels,
            max_lights,
            max_points,
            max_events,
            camera_offset,
            mesh_data_offset,
            label_data_offset,
            light_data_offset,
            point_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_meshes,
            config.max_labels,
            config.max_lights,
            config.max_points,
            config.max_events,
        )
    }
}

/// Everything that goes into one frame.
pub struct FrameSource<'a> {
    pub viewport: Vec2,
    pub clear_color: Color,
    pub elapsed: f32,
    pub geometry_revision: u32,
    pub label_revision: u32,
    pub camera: &'a CameraUniform,
    pub render: &'a RenderBuffer,
    pub lights: &'a LightState,
    pub events: &'a [GameEvent],
}

/// Owns the flat frame buffer the host reads through `get_frame_ptr`.
pub struct FrameBuffer {
    layout: ProtocolLayout,
    data: Vec<f32>,
    frame_counter: u32,
}

impl FrameBuffer {
    pub fn new(layout: ProtocolLayout) -> Self {
        let data = vec![0.0; layout.buffer_total_floats];
        Self {
            layout,
            data,
            frame_counter: 0,
        }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    /// Pack one frame. Sections beyond their capacity are truncated and the
    /// header reports the truncated counts.
    pub fn write(&mut self, frame: &FrameSource<'_>) {
        let layout = &self.layout;
        let data = &mut self.data;

        data[HEADER_LOCK] = 1.0;

        data[layout.camera_offset..layout.camera_offset + CAMERA_FLOATS]
            .copy_from_slice(bytemuck::cast_slice(std::slice::from_ref(frame.camera)));

        let meshes = write_section(data, layout.mesh_data_offset, layout.max_meshes, &frame.render.meshes);
        let labels = write_section(data, layout.label_data_offset, layout.max_labels, &frame.render.labels);
        let lights = write_section(data, layout.light_data_offset, layout.max_lights, frame.lights.as_slice());
        let points = write_section(data, layout.point_data_offset, layout.max_points, &frame.render.points);
        let events = write_section(data, layout.event_data_offset, layout.max_events, frame.events);

        self.frame_counter = self.frame_counter.wrapping_add(1);
        let ambient = frame.lights.ambient();
        let header = &mut data[..HEADER_FLOATS];
        header[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_VIEWPORT_WIDTH] = frame.viewport.x;
        header[HEADER_VIEWPORT_HEIGHT] = frame.viewport.y;
        header[HEADER_CLEAR_R] = frame.clear_color.r;
        header[HEADER_CLEAR_G] = frame.clear_color.g;
        header[HEADER_CLEAR_B] = frame.clear_color.b;
        header[HEADER_MAX_MESHES] = layout.max_meshes as f32;
        header[HEADER_MESH_COUNT] = meshes as f32;
        header[HEADER_MAX_LABELS] = layout.max_labels as f32;
        header[HEADER_LABEL_COUNT] = labels as f32;
        header[HEADER_MAX_LIGHTS] = layout.max_lights as f32;
        header[HEADER_LIGHT_COUNT] = lights as f32;
        header[HEADER_MAX_POINTS] = layout.max_points as f32;
        header[HEADER_POINT_COUNT] = points as f32;
        header[HEADER_POINT_SIZE] = frame.render.point_size;
        header[HEADER_POINT_R] = frame.render.point_color.r;
        header[HEADER_POINT_G] = frame.render.point_color.g;
        header[HEADER_POINT_B] = frame.render.point_color.b;
        header[HEADER_MAX_EVENTS] = layout.max_events as f32;
        header[HEADER_EVENT_COUNT] = events as f32;
        header[HEADER_AMBIENT_R] = ambient[0];
        header[HEADER_AMBIENT_G] = ambient[1];
        header[HEADER_AMBIENT_B] = ambient[2];
        header[HEADER_GEOMETRY_REVISION] = frame.geometry_revision as f32;
        header[HEADER_LABEL_REVISION] = frame.label_revision as f32;
        header[HEADER_ELAPSED] = frame.elapsed;
        header[HEADER_LOCK] = 0.0;
    }
}

/// Copy up to `max` records into the buffer at `offset`. Returns the count written.
fn write_section<T: bytemuck::Pod>(data: &mut [f32], offset: usize, max: usize, items: &[T]) -> usize {
    let count = items.len().min(max);
    if count == 0 {
        return 0;
    }
    let floats: &[f32] = bytemuck::cast_slice(&items[..count]);
    data[offset..offset + floats.len()].copy_from_slice(floats);
    count
}
