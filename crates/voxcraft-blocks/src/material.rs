use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Substance of a placed block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Grass,
    Dirt,
    Stone,
    Wood,
    Leaves,
    Sand,
    Water,
    Cobblestone,
    Planks,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 9] = [
        MaterialKind::Grass,
        MaterialKind::Dirt,
        MaterialKind::Stone,
        MaterialKind::Wood,
        MaterialKind::Leaves,
        MaterialKind::Sand,
        MaterialKind::Water,
        MaterialKind::Cobblestone,
        MaterialKind::Planks,
    ];

    /// Lowercase key used in config files and logs.
    pub fn name(self) -> &'static str {
        match self {
            MaterialKind::Grass => "grass",
            MaterialKind::Dirt => "dirt",
            MaterialKind::Stone => "stone",
            MaterialKind::Wood => "wood",
            MaterialKind::Leaves => "leaves",
            MaterialKind::Sand => "sand",
            MaterialKind::Water => "water",
            MaterialKind::Cobblestone => "cobblestone",
            MaterialKind::Planks => "planks",
        }
    }

    pub fn from_name(name: &str) -> Option<MaterialKind> {
        MaterialKind::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMaterial(pub String);

impl fmt::Display for UnknownMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown material '{}'", self.0)
    }
}

impl Error for UnknownMaterial {}

impl FromStr for MaterialKind {
    type Err = UnknownMaterial;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialKind::from_name(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| UnknownMaterial(s.to_string()))
    }
}
