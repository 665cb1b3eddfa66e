use super::App;
use crate::event::Event;
use voxcraft_edit::{EditAction, EditOutcome};

impl App {
    pub(super) fn handle_raycast_edit_requested(&mut self, place: bool) {
        // Resolved here so a slot key earlier in the same tick applies.
        let action = if place {
            EditAction::Place(self.gs.hotbar.selected_material())
        } else {
            EditAction::Remove
        };
        match self.gs.edit(action) {
            Ok(EditOutcome::Removed(block)) => {
                self.queue.emit_now(Event::BlockRemoved { block });
            }
            Ok(EditOutcome::Placed(block)) => {
                self.queue.emit_now(Event::BlockPlaced { block });
            }
            Err(reason) => {
                self.queue.emit_now(Event::EditDeclined { reason });
            }
        }
    }
}
