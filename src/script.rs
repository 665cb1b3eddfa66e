//! Scripted input sessions for the headless driver.
//!
//! ```toml
//! [[input]]
//! tick = 0
//! kind = "primary_click"
//!
//! [[input]]
//! tick = 1
//! kind = "key_down"
//! key = "w"
//! ```

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use voxcraft_blocks::MaterialKind;

use crate::config::SettingsPatch;
use crate::event::{Event, EventQueue};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptInput {
    KeyDown {
        key: String,
    },
    KeyUp {
        key: String,
    },
    PointerMoved {
        dx: f32,
        dy: f32,
    },
    Capture {
        captured: bool,
    },
    PrimaryClick,
    SecondaryClick,
    SelectSlot {
        slot: usize,
    },
    CraftingCell {
        row: usize,
        col: usize,
        #[serde(default)]
        material: Option<MaterialKind>,
    },
    Pause,
    ToggleCrafting,
    Settings(SettingsPatch),
}

impl ScriptInput {
    pub fn into_event(self) -> Event {
        match self {
            ScriptInput::KeyDown { key } => Event::KeyDown { key },
            ScriptInput::KeyUp { key } => Event::KeyUp { key },
            ScriptInput::PointerMoved { dx, dy } => Event::PointerMoved { dx, dy },
            ScriptInput::Capture { captured } => Event::PointerCaptureChanged { captured },
            ScriptInput::PrimaryClick => Event::PrimaryClick,
            ScriptInput::SecondaryClick => Event::SecondaryClick,
            ScriptInput::SelectSlot { slot } => Event::SlotSelected { slot },
            ScriptInput::CraftingCell { row, col, material } => {
                Event::CraftingCellSet { row, col, material }
            }
            ScriptInput::Pause => Event::PauseToggled,
            ScriptInput::ToggleCrafting => Event::CraftingToggled,
            ScriptInput::Settings(patch) => Event::SettingsUpdated { patch },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ScriptEntry {
    pub tick: u64,
    #[serde(flatten)]
    pub input: ScriptInput,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub input: Vec<ScriptEntry>,
}

impl Script {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let script: Script = toml::from_str(toml_str)?;
        Ok(script)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Last tick any entry fires on.
    pub fn last_tick(&self) -> Option<u64> {
        self.input.iter().map(|e| e.tick).max()
    }

    /// Queue every entry on its tick. Entries on the same tick keep file order.
    pub fn schedule(self, queue: &mut EventQueue) -> usize {
        let n = self.input.len();
        let mut entries = self.input;
        entries.sort_by_key(|e| e.tick);
        for entry in entries {
            queue.emit_at(entry.tick, entry.input.into_event());
        }
        n
    }
}
