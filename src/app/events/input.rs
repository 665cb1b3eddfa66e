use super::App;
use crate::event::Event;
use crate::input::Action;

impl App {
    pub(super) fn handle_key_down(&mut self, key: &str) {
        let Some(action) = self.gs.keybindings.action_for(key) else {
            log::trace!(target: "input", "unbound key {:?}", key);
            return;
        };
        // Auto-repeat arrives as repeated key-downs; toggles fire on the first only.
        if !self.gs.input.press(action) {
            return;
        }
        let intent = match action {
            Action::Pause => Event::PauseToggled,
            Action::Inventory => Event::CraftingToggled,
            Action::Slot(n) => Event::SlotSelected { slot: n as usize },
            _ => return,
        };
        self.queue.emit_now(intent);
    }

    pub(super) fn handle_key_up(&mut self, key: &str) {
        if let Some(action) = self.gs.keybindings.action_for(key) {
            self.gs.input.release(action);
        }
    }

    pub(super) fn handle_pointer_moved(&mut self, dx: f32, dy: f32) {
        if self.gs.flags.captured() {
            self.gs.input.add_look(dx, dy);
        }
    }

    pub(super) fn handle_pointer_capture_changed(&mut self, captured: bool) {
        if captured && !self.gs.flags.capture_allowed() {
            log::debug!(target: "input", "capture refused while an overlay is open");
            return;
        }
        self.gs.flags.pointer_locked = captured;
        if !captured {
            self.gs.input.discard_look();
        }
    }

    /// A click without capture asks for the pointer; with capture it edits.
    pub(super) fn handle_click(&mut self, primary: bool) {
        if !self.gs.flags.captured() {
            if primary && self.gs.flags.capture_allowed() {
                self.queue
                    .emit_now(Event::PointerCaptureChanged { captured: true });
            }
            return;
        }
        self.queue
            .emit_now(Event::RaycastEditRequested { place: !primary });
    }
}
