mod crafting;
mod editing;
mod input;
mod logging;
mod movement;
mod toggles;

use super::App;
use crate::event::{Event, EventEnvelope};

impl App {
    pub(super) fn handle_event(&mut self, env: EventEnvelope) {
        // Log a concise line for the processed event
        Self::log_event(self.gs.tick, &env.kind);
        match env.kind {
            Event::Tick => {}
            Event::KeyDown { key } => self.handle_key_down(&key),
            Event::KeyUp { key } => self.handle_key_up(&key),
            Event::PointerMoved { dx, dy } => self.handle_pointer_moved(dx, dy),
            Event::PointerCaptureChanged { captured } => {
                self.handle_pointer_capture_changed(captured)
            }
            Event::PrimaryClick => self.handle_click(true),
            Event::SecondaryClick => self.handle_click(false),
            Event::PauseToggled => self.handle_pause_toggled(),
            Event::CraftingToggled => self.handle_crafting_toggled(),
            Event::SlotSelected { slot } => self.handle_slot_selected(slot),
            Event::MovementRequested { dt_ms } => self.handle_movement_requested(dt_ms),
            Event::RaycastEditRequested { place } => self.handle_raycast_edit_requested(place),
            Event::CraftingCellSet { row, col, material } => {
                self.handle_crafting_cell_set(row, col, material)
            }
            Event::SettingsUpdated { patch } => self.handle_settings_updated(&patch),
            Event::BlockRemoved { .. } => self.debug_stats.blocks_removed += 1,
            Event::BlockPlaced { .. } => self.debug_stats.blocks_placed += 1,
            Event::EditDeclined { .. } => self.debug_stats.edits_declined += 1,
            Event::CraftingResultChanged { .. } => {}
        }
    }
}
