use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::game::GameConfig;
use crate::components::mesh::Color;

/// Errors raised while loading a scene manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("manifest lists no bodies")]
    Empty,
    #[error("body name {0:?} appears more than once")]
    DuplicateName(String),
    #[error("body {name:?} has non-positive orbit distance {distance}")]
    InvalidDistance { name: String, distance: f32 },
    #[error("body {name:?} has non-positive size {size}")]
    InvalidSize { name: String, size: f32 },
    #[error("{0:?} is not a #rrggbb color")]
    InvalidColor(String),
    #[error("manifest lists {count} bodies, the frame holds at most {max}")]
    TooManyBodies { count: usize, max: usize },
    #[error("starfield asks for {count} stars, the frame holds at most {max}")]
    TooManyStars { count: u32, max: usize },
}

/// `#rrggbb` color as written in manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub u32);

impl HexColor {
    pub fn to_color(self) -> Color {
        Color::from_hex(self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ManifestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let digits = value
            .strip_prefix('#')
            .filter(|d| d.len() == 6)
            .ok_or_else(|| ManifestError::InvalidColor(value.clone()))?;
        u32::from_str_radix(digits, 16)
            .map(HexColor)
            .map_err(|_| ManifestError::InvalidColor(value))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        format!("#{:06x}", color.0)
    }
}

/// One orbiting body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Unique display name; also the hover-label text.
    pub name: String,
    pub color: HexColor,
    /// Base sphere radius before theme scaling.
    pub size: f32,
    /// Orbit radius around the origin.
    pub distance: f32,
    /// Angular speed in radians per second.
    pub speed: f32,
}

/// Background starfield parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarfieldDescriptor {
    #[serde(default = "default_star_count")]
    pub count: u32,
    /// Edge length of the cube the stars are scattered in.
    #[serde(default = "default_star_spread")]
    pub spread: f32,
    /// Initial point size in pixels.
    #[serde(default = "default_star_size")]
    pub size: f32,
}

fn default_star_count() -> u32 {
    400
}

fn default_star_spread() -> f32 {
    800.0
}

fn default_star_size() -> f32 {
    2.0
}

impl Default for StarfieldDescriptor {
    fn default() -> Self {
        Self {
            count: default_star_count(),
            spread: default_star_spread(),
            size: default_star_size(),
        }
    }
}

/// Scene description loaded from JSON at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneManifest {
    pub bodies: Vec<BodyDescriptor>,
    #[serde(default)]
    pub starfield: StarfieldDescriptor,
}

impl SceneManifest {
    /// Parse and validate a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: SceneManifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.bodies.is_empty() {
            return Err(ManifestError::Empty);
        }
        // Slider ids are derived from lowercased names.
        let mut seen = HashSet::with_capacity(self.bodies.len());
        for body in &self.bodies {
            if !seen.insert(body.name.to_lowercase()) {
                return Err(ManifestError::DuplicateName(body.name.clone()));
            }
            if !(body.distance > 0.0) {
                return Err(ManifestError::InvalidDistance {
                    name: body.name.clone(),
                    distance: body.distance,
                });
            }
            if !(body.size > 0.0) {
                return Err(ManifestError::InvalidSize {
                    name: body.name.clone(),
                    size: body.size,
                });
            }
        }
        Ok(())
    }

    /// `validate`, then check the manifest fits within `limits`.
    pub fn validate_for(&self, limits: &ManifestLimits) -> Result<(), ManifestError> {
        self.validate()?;
        if self.bodies.len() > limits.max_bodies {
            return Err(ManifestError::TooManyBodies {
                count: self.bodies.len(),
                max: limits.max_bodies,
            });
        }
        if self.starfield.count as usize > limits.max_stars {
            return Err(ManifestError::TooManyStars {
                count: self.starfield.count,
                max: limits.max_stars,
            });
        }
        Ok(())
    }
}

/// How many bodies and stars a scene can draw without the frame buffer
/// truncating them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestLimits {
    pub max_bodies: usize,
    pub max_stars: usize,
}

impl ManifestLimits {
    /// Limits for a scene that draws `reserved_meshes` fixed meshes plus
    /// `meshes_per_body` meshes and `labels_per_body` labels for every body.
    pub fn for_scene(
        config: &GameConfig,
        reserved_meshes: usize,
        meshes_per_body: usize,
        labels_per_body: usize,
    ) -> Self {
        let by_meshes = config.max_meshes.saturating_sub(reserved_meshes) / meshes_per_body.max(1);
        let by_labels = config
            .max_labels
            .checked_div(labels_per_body)
            .unwrap_or(usize::MAX);
        Self {
            max_bodies: by_meshes.min(by_labels),
            max_stars: config.max_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BODIES: &str = r##"{
        "bodies": [
            { "name": "Mercury", "color": "#b1b1b1", "size": 0.7, "distance": 10, "speed": 1.0 },
            { "name": "Venus", "color": "#eccc9a", "size": 1.2, "distance": 14, "speed": 0.8 }
        ]
    }"##;

    #[test]
    fn parse_manifest_with_default_starfield() {
        let manifest = SceneManifest::from_json(TWO_BODIES).unwrap();
        assert_eq!(manifest.bodies.len(), 2);
        assert_eq!(manifest.bodies[0].color, HexColor(0xb1b1b1));
        assert_eq!(manifest.starfield, StarfieldDescriptor::default());
    }

    #[test]
    fn partial_starfield_fills_defaults() {
        let json = r##"{
            "bodies": [{ "name": "Earth", "color": "#2a5cdd", "size": 1.3, "distance": 18, "speed": 0.6 }],
            "starfield": { "count": 50 }
        }"##;
        let manifest = SceneManifest::from_json(json).unwrap();
        assert_eq!(manifest.starfield.count, 50);
        assert_eq!(manifest.starfield.size, 2.0);
    }

    #[test]
    fn rejects_duplicate_names() {
        let json = TWO_BODIES.replace("Venus", "Mercury");
        let err = SceneManifest::from_json(&json).unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateName(ref n) if n == "Mercury"));
    }

    #[test]
    fn duplicate_names_ignore_case() {
        let json = TWO_BODIES.replace("Venus", "mercury");
        let err = SceneManifest::from_json(&json).unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateName(ref n) if n == "mercury"));
    }

    #[test]
    fn limits_follow_frame_capacity() {
        let config = GameConfig {
            max_meshes: 128,
            max_labels: 64,
            max_points: 4096,
            ..GameConfig::default()
        };
        let limits = ManifestLimits::for_scene(&config, 1, 2, 1);
        assert_eq!(limits, ManifestLimits { max_bodies: 63, max_stars: 4096 });
        // No labels per body: only meshes bound the count.
        assert_eq!(ManifestLimits::for_scene(&config, 0, 1, 0).max_bodies, 128);
    }

    #[test]
    fn oversized_manifest_is_rejected() {
        let manifest = SceneManifest::from_json(TWO_BODIES).unwrap();
        let roomy = ManifestLimits { max_bodies: 2, max_stars: 400 };
        assert!(manifest.validate_for(&roomy).is_ok());

        let one_body = ManifestLimits { max_bodies: 1, max_stars: 400 };
        assert!(matches!(
            manifest.validate_for(&one_body),
            Err(ManifestError::TooManyBodies { count: 2, max: 1 })
        ));

        let few_stars = ManifestLimits { max_bodies: 2, max_stars: 10 };
        assert!(matches!(
            manifest.validate_for(&few_stars),
            Err(ManifestError::TooManyStars { count: 400, max: 10 })
        ));
    }

    #[test]
    fn rejects_bad_color() {
        let json = TWO_BODIES.replace("#eccc9a", "beige");
        assert!(matches!(
            SceneManifest::from_json(&json),
            Err(ManifestError::Json(_))
        ));
    }

    #[test]
    fn rejects_zero_distance_and_empty() {
        let json = TWO_BODIES.replace("\"distance\": 14", "\"distance\": 0");
        assert!(matches!(
            SceneManifest::from_json(&json),
            Err(ManifestError::InvalidDistance { .. })
        ));
        assert!(matches!(
            SceneManifest::from_json(r#"{ "bodies": [] }"#),
            Err(ManifestError::Empty)
        ));
    }

    #[test]
    fn hex_color_round_trips_through_string() {
        let s: String = HexColor(0x2a5cdd).into();
        assert_eq!(s, "#2a5cdd");
        assert_eq!(HexColor::try_from(s).unwrap(), HexColor(0x2a5cdd));
    }
}
