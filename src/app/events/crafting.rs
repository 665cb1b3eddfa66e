use super::App;
use crate::event::Event;
use crate::gamestate::{GameControl, GameView};
use voxcraft_blocks::MaterialKind;

impl App {
    pub(super) fn handle_crafting_cell_set(
        &mut self,
        row: usize,
        col: usize,
        material: Option<MaterialKind>,
    ) {
        if !self.gs.set_crafting_cell(row, col, material) {
            log::debug!(target: "events", "crafting cell ({}, {}) out of range", row, col);
            return;
        }
        self.announce_craft_result();
    }

    /// Re-run the matcher and emit a result event when it changed.
    pub(super) fn announce_craft_result(&mut self) {
        let result = self.gs.crafting_result();
        if result != self.last_craft {
            self.last_craft = result;
            self.queue.emit_now(Event::CraftingResultChanged { result });
        }
    }
}
