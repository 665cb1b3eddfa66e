use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use voxcraft_craft::recipe::RecipeDef;
use voxcraft_craft::{RecipeBook, RecipeError};
use voxcraft_player::MovementParams;
use voxcraft_world::WorldGenConfig;

use crate::input::{Action, KeyBindings};

pub const SENSITIVITY_RANGE: (f32, f32) = (0.1, 2.0);
pub const UI_SCALE_RANGE: (f32, f32) = (0.5, 2.0);
pub const RENDER_DISTANCE_RANGE: (u32, u32) = (50, 200);

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    UnboundAction(Action),
    DuplicateKey(String),
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    Movement(String),
    Recipe(RecipeError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnboundAction(a) => write!(f, "no key bound for {:?}", a),
            ConfigError::DuplicateKey(k) => write!(f, "key '{}' is bound to more than one action", k),
            ConfigError::OutOfRange {
                name,
                value,
                min,
                max,
            } => write!(f, "{} = {} is outside {}..={}", name, value, min, max),
            ConfigError::Movement(msg) => f.write_str(msg),
            ConfigError::Recipe(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ConfigError {}

impl From<RecipeError> for ConfigError {
    fn from(e: RecipeError) -> Self {
        ConfigError::Recipe(e)
    }
}

fn check_range(name: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), ConfigError> {
    // NaN fails both comparisons, so test containment rather than exclusion.
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

/// User-tunable settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Settings {
    /// Multiplier on pointer motion before the integrator's look scale.
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f32,
    #[serde(default = "default_ui_scale")]
    pub ui_scale: f32,
    #[serde(default = "default_render_distance")]
    pub render_distance: u32,
}

fn default_sensitivity() -> f32 {
    0.5
}
fn default_ui_scale() -> f32 {
    1.0
}
fn default_render_distance() -> u32 {
    100
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sensitivity: default_sensitivity(),
            ui_scale: default_ui_scale(),
            render_distance: default_render_distance(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = |(a, b): (f32, f32)| (a as f64, b as f64);
        check_range("sensitivity", self.sensitivity as f64, f(SENSITIVITY_RANGE))?;
        check_range("ui_scale", self.ui_scale as f64, f(UI_SCALE_RANGE))?;
        let (lo, hi) = RENDER_DISTANCE_RANGE;
        check_range(
            "render_distance",
            self.render_distance as f64,
            (lo as f64, hi as f64),
        )
    }

    /// Apply `patch` only if the result is valid; otherwise leave `self` untouched.
    pub fn apply(&mut self, patch: &SettingsPatch) -> Result<(), ConfigError> {
        let mut next = self.clone();
        if let Some(v) = patch.sensitivity {
            next.sensitivity = v;
        }
        if let Some(v) = patch.ui_scale {
            next.ui_scale = v;
        }
        if let Some(v) = patch.render_distance {
            next.render_distance = v;
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// Partial settings update. Fields left `None` keep their value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SettingsPatch {
    #[serde(default)]
    pub sensitivity: Option<f32>,
    #[serde(default)]
    pub ui_scale: Option<f32>,
    #[serde(default)]
    pub render_distance: Option<u32>,
    #[serde(default)]
    pub keybindings: Option<KeyBindings>,
}

/// Everything read from the session config file. Every table is optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub movement: MovementParams,
    #[serde(default)]
    pub worldgen: WorldGenConfig,
    /// `None` means the builtin recipe book.
    #[serde(default)]
    pub recipes: Option<Vec<RecipeDef>>,
}

impl AppConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: AppConfig = toml::from_str(toml_str)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        self.settings.validate()?;
        self.keybindings.validate()?;
        self.movement.validate().map_err(ConfigError::Movement)?;
        self.worldgen.validate()?;
        self.recipe_book()?;
        Ok(())
    }

    pub fn recipe_book(&self) -> Result<RecipeBook, ConfigError> {
        match &self.recipes {
            None => Ok(RecipeBook::builtin()),
            Some(defs) => Ok(RecipeBook::from_defs(defs.clone())?),
        }
    }
}
