//! Material kinds and their fixed shading parameters

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use surfacelab_core::Error;

/// A selectable surface material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    Wood,
    Metal,
    Glass,
    Plastic,
}

/// Physically-based shading parameters attached to a synthesized texture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadingParams {
    pub roughness: f32,
    pub metalness: f32,
    pub opacity: f32,
    pub transparent: bool,
    pub double_sided: bool,
}

impl MaterialKind {
    /// All kinds, in the order a UI lists them
    pub const ALL: [MaterialKind; 4] = [
        MaterialKind::Wood,
        MaterialKind::Metal,
        MaterialKind::Glass,
        MaterialKind::Plastic,
    ];

    /// Lowercase name used in configs and on the command line
    pub fn name(self) -> &'static str {
        match self {
            MaterialKind::Wood => "wood",
            MaterialKind::Metal => "metal",
            MaterialKind::Glass => "glass",
            MaterialKind::Plastic => "plastic",
        }
    }

    /// Fixed shading parameters for this kind
    pub const fn shading(self) -> ShadingParams {
        match self {
            MaterialKind::Wood => ShadingParams {
                roughness: 0.85,
                metalness: 0.0,
                opacity: 1.0,
                transparent: false,
                double_sided: true,
            },
            MaterialKind::Metal => ShadingParams {
                roughness: 0.2,
                metalness: 0.9,
                opacity: 1.0,
                transparent: false,
                double_sided: true,
            },
            MaterialKind::Glass => ShadingParams {
                roughness: 0.05,
                metalness: 0.1,
                opacity: 0.45,
                transparent: true,
                double_sided: true,
            },
            MaterialKind::Plastic => ShadingParams {
                roughness: 0.3,
                metalness: 0.05,
                opacity: 1.0,
                transparent: false,
                double_sided: true,
            },
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaterialKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MaterialKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}
