use voxcraft_blocks::{Block, MaterialKind};
use voxcraft_craft::{CraftingGrid, RecipeBook};
use voxcraft_edit::{EditAction, EditOutcome, EditRejected};
use voxcraft_player::{CameraPose, Walker};
use voxcraft_world::WorldStore;

use crate::config::{ConfigError, Settings, SettingsPatch};
use crate::hotbar::Hotbar;
use crate::input::{InputState, KeyBindings};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerStats {
    pub health: u32,
    pub max_health: u32,
    pub hunger: u32,
    pub max_hunger: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            health: 20,
            max_health: 20,
            hunger: 20,
            max_hunger: 20,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionFlags {
    pub paused: bool,
    pub crafting_open: bool,
    /// The pointer lock as last reported by the presentation layer.
    pub pointer_locked: bool,
}

impl SessionFlags {
    /// Look and movement input only apply while this holds.
    pub fn captured(&self) -> bool {
        self.pointer_locked && !self.paused && !self.crafting_open
    }

    /// Whether a click may ask for the pointer.
    pub fn capture_allowed(&self) -> bool {
        !self.paused && !self.crafting_open
    }
}

/// Read side handed to the renderer and HUD.
pub trait GameView {
    fn blocks(&self) -> Box<dyn Iterator<Item = Block> + '_>;
    fn world_revision(&self) -> u64;
    fn pose(&self) -> CameraPose;
    fn hotbar(&self) -> &Hotbar;
    fn settings(&self) -> &Settings;
    fn stats(&self) -> PlayerStats;
    fn crafting_grid(&self) -> &CraftingGrid;
    /// Result and yield of the current grid, if any recipe matches.
    fn crafting_result(&self) -> Option<(MaterialKind, u32)>;
    fn flags(&self) -> SessionFlags;
}

/// Write side the presentation layer may call directly.
pub trait GameControl {
    fn primary_action(&mut self) -> Result<EditOutcome, EditRejected>;
    fn secondary_action(&mut self) -> Result<EditOutcome, EditRejected>;
    fn select_slot(&mut self, slot: usize) -> bool;
    fn set_crafting_cell(&mut self, row: usize, col: usize, material: Option<MaterialKind>) -> bool;
    fn update_settings(&mut self, patch: &SettingsPatch) -> Result<(), ConfigError>;
}

pub struct GameState {
    pub tick: u64,
    pub world: WorldStore,

    // Player
    pub pose: CameraPose,
    pub walker: Walker,
    pub input: InputState,
    pub stats: PlayerStats,

    // UI/options
    pub hotbar: Hotbar,
    pub settings: Settings,
    pub keybindings: KeyBindings,
    pub flags: SessionFlags,

    // Crafting
    pub recipes: RecipeBook,
    pub grid: CraftingGrid,
}

impl GameState {
    pub fn new(
        world: WorldStore,
        walker: Walker,
        settings: Settings,
        keybindings: KeyBindings,
        recipes: RecipeBook,
    ) -> Self {
        Self {
            tick: 0,
            world,
            pose: CameraPose::default(),
            walker,
            input: InputState::default(),
            stats: PlayerStats::default(),
            hotbar: Hotbar::default(),
            settings,
            keybindings,
            flags: SessionFlags::default(),
            recipes,
            grid: CraftingGrid::new(),
        }
    }

    pub fn edit(&mut self, action: EditAction) -> Result<EditOutcome, EditRejected> {
        voxcraft_edit::apply(&mut self.world, &self.pose.view_ray(), action)
    }
}

impl GameView for GameState {
    fn blocks(&self) -> Box<dyn Iterator<Item = Block> + '_> {
        Box::new(self.world.blocks())
    }

    fn world_revision(&self) -> u64 {
        self.world.revision()
    }

    fn pose(&self) -> CameraPose {
        self.pose
    }

    fn hotbar(&self) -> &Hotbar {
        &self.hotbar
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn stats(&self) -> PlayerStats {
        self.stats
    }

    fn crafting_grid(&self) -> &CraftingGrid {
        &self.grid
    }

    fn crafting_result(&self) -> Option<(MaterialKind, u32)> {
        self.recipes
            .find_match(&self.grid)
            .map(|r| (r.result, r.count))
    }

    fn flags(&self) -> SessionFlags {
        self.flags
    }
}

impl GameControl for GameState {
    fn primary_action(&mut self) -> Result<EditOutcome, EditRejected> {
        self.edit(EditAction::Remove)
    }

    fn secondary_action(&mut self) -> Result<EditOutcome, EditRejected> {
        self.edit(EditAction::Place(self.hotbar.selected_material()))
    }

    fn select_slot(&mut self, slot: usize) -> bool {
        self.hotbar.select(slot)
    }

    fn set_crafting_cell(&mut self, row: usize, col: usize, material: Option<MaterialKind>) -> bool {
        self.grid.set(row, col, material)
    }

    /// Keybindings and numeric settings are validated together before either changes.
    fn update_settings(&mut self, patch: &SettingsPatch) -> Result<(), ConfigError> {
        if let Some(kb) = &patch.keybindings {
            kb.validate()?;
        }
        self.settings.apply(patch)?;
        if let Some(kb) = &patch.keybindings {
            self.keybindings = kb.clone();
            // Held actions were recorded under the old table.
            self.input.release_all();
        }
        Ok(())
    }
}
