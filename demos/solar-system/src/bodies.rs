/// Planet catalog and fixed scene parameters.
///
/// Sizes and distances are scene units, not astronomical ones; speeds are
/// radians of orbit per second.

use glam::Vec3;
use orrery_engine::assets::manifest::HexColor;
use orrery_engine::{BodyDescriptor, SceneManifest, StarfieldDescriptor};

/// One entry of the built-in catalog.
#[derive(Debug, Clone, Copy)]
pub struct PlanetSpec {
    pub name: &'static str,
    pub color: u32,
    pub size: f32,
    pub distance: f32,
    pub speed: f32,
}

pub const PLANET_COUNT: usize = 8;

pub const PLANETS: [PlanetSpec; PLANET_COUNT] = [
    PlanetSpec { name: "Mercury", color: 0xb1b1b1, size: 0.7, distance: 10.0, speed: 1.0 },
    PlanetSpec { name: "Venus",   color: 0xeccc9a, size: 1.2, distance: 14.0, speed: 0.8 },
    PlanetSpec { name: "Earth",   color: 0x2a5cdd, size: 1.3, distance: 18.0, speed: 0.6 },
    PlanetSpec { name: "Mars",    color: 0xb55327, size: 1.1, distance: 22.0, speed: 0.5 },
    PlanetSpec { name: "Jupiter", color: 0xd2b48c, size: 2.8, distance: 28.0, speed: 0.3 },
    PlanetSpec { name: "Saturn",  color: 0xf7e7b6, size: 2.4, distance: 34.0, speed: 0.25 },
    PlanetSpec { name: "Uranus",  color: 0x7fffd4, size: 2.0, distance: 40.0, speed: 0.18 },
    PlanetSpec { name: "Neptune", color: 0x4166f5, size: 1.9, distance: 46.0, speed: 0.15 },
];

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 6.0;
pub const SUN_COLOR: u32 = 0xfdb813;

// ── Planets ──────────────────────────────────────────────────────────

/// Width and height segments of every sphere.
pub const SPHERE_SEGMENTS: u32 = 32;
/// Height of the orbital plane.
pub const ORBIT_HEIGHT: f32 = 0.0;

// ── Orbit rings ──────────────────────────────────────────────────────

pub const RING_SEGMENTS: u32 = 128;
pub const RING_OPACITY: f32 = 0.7;

// ── Labels ───────────────────────────────────────────────────────────

/// Gap between a planet's surface and its label.
pub const LABEL_LIFT: f32 = 1.2;
/// Label billboard size per unit of planet radius.
pub const LABEL_WIDTH_PER_RADIUS: f32 = 3.5;
pub const LABEL_HEIGHT_PER_RADIUS: f32 = 1.1;

// ── Lights ───────────────────────────────────────────────────────────

pub const AMBIENT_INTENSITY: f32 = 0.2;
pub const SUN_LIGHT_INTENSITY: f32 = 2.0;
pub const SUN_LIGHT_RANGE: f32 = 1000.0;

// ── Camera ───────────────────────────────────────────────────────────

pub const OVERVIEW_POSITION: Vec3 = Vec3::new(0.0, 60.0, 120.0);
pub const OVERVIEW_TARGET: Vec3 = Vec3::ZERO;
/// Where the camera parks relative to a focused planet.
pub const FOCUS_OFFSET: Vec3 = Vec3::new(0.0, 4.0, 8.0);

/// Seed for initial orbital angles and star placement.
pub const SCENE_SEED: u64 = 0x5eed_0b17;

/// The built-in catalog as a manifest, so startup and runtime loads share one path.
pub fn default_manifest() -> SceneManifest {
    SceneManifest {
        bodies: PLANETS
            .iter()
            .map(|p| BodyDescriptor {
                name: p.name.to_owned(),
                color: HexColor(p.color),
                size: p.size,
                distance: p.distance,
                speed: p.speed,
            })
            .collect(),
        starfield: StarfieldDescriptor::default(),
    }
}
