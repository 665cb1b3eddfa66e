use std::error::Error;
use std::fs;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;
use voxcraft_blocks::{BlockPos, MaterialKind};

use crate::store::WorldStore;

#[derive(Clone, Debug, Deserialize)]
pub struct WorldGenConfig {
    /// Ground covers `x, z` in `[-half_extent, half_extent)`.
    #[serde(default = "default_half_extent")]
    pub half_extent: i32,
    #[serde(default)]
    pub ground_y: i32,
    #[serde(default = "default_dirt_chance")]
    pub dirt_chance: f64,
    #[serde(default = "default_scatter_count")]
    pub scatter_count: u32,
    #[serde(default = "default_scatter_min_y")]
    pub scatter_min_y: i32,
    #[serde(default = "default_scatter_max_y")]
    pub scatter_max_y: i32,
    #[serde(default = "default_decorative")]
    pub decorative: Vec<MaterialKind>,
}

fn default_half_extent() -> i32 {
    10
}
fn default_dirt_chance() -> f64 {
    0.3
}
fn default_scatter_count() -> u32 {
    30
}
fn default_scatter_min_y() -> i32 {
    1
}
fn default_scatter_max_y() -> i32 {
    3
}
fn default_decorative() -> Vec<MaterialKind> {
    vec![MaterialKind::Stone, MaterialKind::Wood, MaterialKind::Cobblestone]
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            half_extent: default_half_extent(),
            ground_y: 0,
            dirt_chance: default_dirt_chance(),
            scatter_count: default_scatter_count(),
            scatter_min_y: default_scatter_min_y(),
            scatter_max_y: default_scatter_max_y(),
            decorative: default_decorative(),
        }
    }
}

impl WorldGenConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: WorldGenConfig = toml::from_str(toml_str)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.half_extent <= 0 {
            return Err(format!("worldgen.half_extent must be positive, got {}", self.half_extent).into());
        }
        if !(0.0..=1.0).contains(&self.dirt_chance) {
            return Err(format!("worldgen.dirt_chance must be within [0, 1], got {}", self.dirt_chance).into());
        }
        if self.scatter_min_y > self.scatter_max_y {
            return Err(format!(
                "worldgen scatter range is inverted: {}..={}",
                self.scatter_min_y, self.scatter_max_y
            )
            .into());
        }
        if self.scatter_count > 0 && self.decorative.is_empty() {
            return Err("worldgen.decorative must list at least one material".into());
        }
        Ok(())
    }
}

/// Build the session world: a grass/dirt floor plus scattered decorative blocks.
/// Deterministic for a given config and random source.
pub fn generate<R: Rng>(cfg: &WorldGenConfig, rng: &mut R) -> WorldStore {
    let mut world = WorldStore::new();
    let r = cfg.half_extent;
    let dirt_chance = cfg.dirt_chance.clamp(0.0, 1.0);
    for x in -r..r {
        for z in -r..r {
            let material = if rng.gen_bool(dirt_chance) {
                MaterialKind::Dirt
            } else {
                MaterialKind::Grass
            };
            // Fresh store and distinct (x, z): cannot collide.
            let _ = world.add(BlockPos::new(x, cfg.ground_y, z), material);
        }
    }
    let ground = world.len();

    let mut skipped = 0u32;
    let can_scatter =
        r > 0 && cfg.scatter_min_y <= cfg.scatter_max_y && !cfg.decorative.is_empty();
    if can_scatter {
        for _ in 0..cfg.scatter_count {
            let x = rng.gen_range(-r..r);
            let z = rng.gen_range(-r..r);
            let y = rng.gen_range(cfg.scatter_min_y..=cfg.scatter_max_y);
            let material = cfg.decorative[rng.gen_range(0..cfg.decorative.len())];
            let pos = BlockPos::new(x, y, z);
            if let Err(e) = world.add(pos, material) {
                log::debug!(target: "worldgen", "scatter skipped: {}", e);
                skipped += 1;
            }
        }
    }
    log::info!(
        target: "worldgen",
        "generated {} blocks ({} ground, {} scattered, {} skipped)",
        world.len(),
        ground,
        world.len() - ground,
        skipped
    );
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg = WorldGenConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.half_extent, 10);
        assert_eq!(cfg.scatter_count, 30);
        assert_eq!(cfg.decorative.len(), 3);
    }

    #[test]
    fn overrides_are_read() {
        let cfg = WorldGenConfig::from_toml_str(
            r#"
            half_extent = 4
            scatter_count = 2
            decorative = ["sand", "leaves"]
        "#,
        )
        .unwrap();
        assert_eq!(cfg.half_extent, 4);
        assert_eq!(cfg.decorative, vec![MaterialKind::Sand, MaterialKind::Leaves]);
        assert_eq!(cfg.scatter_max_y, 3);
    }

    #[test]
    fn bad_configs_are_rejected() {
        assert!(WorldGenConfig::from_toml_str("half_extent = 0").is_err());
        assert!(WorldGenConfig::from_toml_str("dirt_chance = 1.5").is_err());
        assert!(WorldGenConfig::from_toml_str("scatter_min_y = 4\nscatter_max_y = 2").is_err());
        assert!(WorldGenConfig::from_toml_str("decorative = []").is_err());
        assert!(WorldGenConfig::from_toml_str(r#"decorative = ["bedrock"]"#).is_err());
    }
}
