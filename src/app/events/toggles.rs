use super::App;
use crate::config::SettingsPatch;
use crate::gamestate::GameControl;

impl App {
    pub(super) fn handle_pause_toggled(&mut self) {
        self.gs.flags.paused = !self.gs.flags.paused;
        self.release_capture();
    }

    /// The crafting screen cannot be toggled while paused. Closing it clears the grid.
    pub(super) fn handle_crafting_toggled(&mut self) {
        if self.gs.flags.paused {
            return;
        }
        let open = !self.gs.flags.crafting_open;
        self.gs.flags.crafting_open = open;
        self.release_capture();
        if !open && !self.gs.grid.is_empty() {
            self.gs.grid.clear();
            self.announce_craft_result();
        }
    }

    pub(super) fn handle_slot_selected(&mut self, slot: usize) {
        if !self.gs.select_slot(slot) {
            log::debug!(target: "events", "slot {} out of range", slot);
        }
    }

    pub(super) fn handle_settings_updated(&mut self, patch: &SettingsPatch) {
        if let Err(e) = self.gs.update_settings(patch) {
            log::warn!(target: "events", "settings update rejected: {}", e);
        }
    }

    fn release_capture(&mut self) {
        self.gs.flags.pointer_locked = false;
        self.gs.input.discard_look();
    }
}
