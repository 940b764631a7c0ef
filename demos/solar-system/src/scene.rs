/// Scene construction — lights, sun, starfield and the three entities each
/// planet owns (body, orbit ring, name label).

use glam::{Vec2, Vec3};
use orrery_engine::{
    BodyDescriptor, Color, EngineContext, Entity, EntityId, Geometry, GeometryId,
    GeometryRegistry, LabelComponent, LightState, Material, MeshComponent, PointLight,
    PointsComponent, Rng, StarfieldDescriptor,
};

use crate::bodies::{
    AMBIENT_INTENSITY, LABEL_HEIGHT_PER_RADIUS, LABEL_LIFT, LABEL_WIDTH_PER_RADIUS, ORBIT_HEIGHT,
    RING_OPACITY, RING_SEGMENTS, SPHERE_SEGMENTS, SUN_COLOR, SUN_LIGHT_INTENSITY, SUN_LIGHT_RANGE,
    SUN_RADIUS,
};
use crate::orbit;
use crate::theme::ThemePreset;

pub const SUN_TAG: &str = "sun";
pub const STARS_TAG: &str = "stars";

/// Entities spawned for one planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetEntities {
    pub body: EntityId,
    pub ring: EntityId,
    pub label: EntityId,
}

/// Ambient fill plus a point light at the sun.
pub fn add_lights(lights: &mut LightState) {
    lights.clear();
    lights.set_ambient(Color::WHITE, AMBIENT_INTENSITY);
    lights.add(PointLight::new(Vec3::ZERO, Color::WHITE, SUN_LIGHT_INTENSITY, SUN_LIGHT_RANGE));
}

pub fn spawn_sun(ctx: &mut EngineContext) -> EntityId {
    let geometry = ctx.geometries.create(Geometry::sphere(SUN_RADIUS, SPHERE_SEGMENTS));
    let id = ctx.next_id();
    ctx.spawn(
        Entity::new(id)
            .with_tag(SUN_TAG)
            .with_mesh(MeshComponent::new(geometry, Material::unlit(Color::from_hex(SUN_COLOR)))),
    )
}

pub fn spawn_starfield(ctx: &mut EngineContext, desc: &StarfieldDescriptor, rng: &mut Rng) -> EntityId {
    let positions = (0..desc.count).map(|_| rng.in_cube(desc.spread)).collect();
    let id = ctx.next_id();
    ctx.spawn(
        Entity::new(id)
            .with_tag(STARS_TAG)
            .with_points(PointsComponent::new(positions, Color::WHITE, desc.size)),
    )
}

pub fn planet_geometry(size: f32, scale: f32) -> Geometry {
    Geometry::sphere(size * scale, SPHERE_SEGMENTS)
}

pub fn ring_geometry(distance: f32, half_width: f32) -> Geometry {
    Geometry::ring(distance - half_width, distance + half_width, RING_SEGMENTS)
}

pub fn label_size(size: f32, scale: f32) -> Vec2 {
    Vec2::new(size * scale * LABEL_WIDTH_PER_RADIUS, size * scale * LABEL_HEIGHT_PER_RADIUS)
}

/// Label anchor just above a planet of `radius` centred at `body`.
pub fn label_position(body: Vec3, radius: f32) -> Vec3 {
    body + Vec3::Y * (radius + LABEL_LIFT)
}

/// Keep `current` if it already describes `wanted`, otherwise replace it.
pub fn ensure_geometry(registry: &mut GeometryRegistry, current: GeometryId, wanted: Geometry) -> GeometryId {
    if registry.get(current) == Some(&wanted) {
        current
    } else {
        registry.replace(current, wanted)
    }
}

pub fn spawn_planet(
    ctx: &mut EngineContext,
    body: &BodyDescriptor,
    angle: f64,
    preset: &ThemePreset,
) -> PlanetEntities {
    let ring_geometry = ctx.geometries.create(ring_geometry(body.distance, preset.ring_half_width));
    let ring = ctx.next_id();
    ctx.spawn(
        Entity::new(ring)
            .with_tag(format!("{}-ring", body.name))
            // Rings tessellate in XY; tip them into the orbital plane.
            .with_rotation(Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0))
            .with_mesh(MeshComponent::new(
                ring_geometry,
                Material::unlit(preset.ring_color)
                    .with_opacity(RING_OPACITY)
                    .double_sided(),
            )),
    );

    let pos = orbit::orbit_position(body.distance, angle, ORBIT_HEIGHT);
    let sphere = ctx.geometries.create(planet_geometry(body.size, preset.scale));
    let planet = ctx.next_id();
    ctx.spawn(
        Entity::new(planet)
            .with_tag(body.name.as_str())
            .with_pos(pos)
            .with_mesh(MeshComponent::new(sphere, Material::standard(body.color.to_color())).pickable()),
    );

    let label = ctx.next_id();
    ctx.spawn(
        Entity::new(label)
            .with_tag(format!("{}-label", body.name))
            .with_pos(label_position(pos, body.size * preset.scale))
            .with_label(
                LabelComponent::new(body.name.as_str(), label_size(body.size, preset.scale)).always_on_top(),
            ),
    );

    PlanetEntities { body: planet, ring, label }
}
