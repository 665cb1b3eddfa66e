use super::App;
use crate::event::Event;

impl App {
    /// Queue a presentation-layer event for the current tick.
    pub fn submit(&mut self, kind: Event) -> u64 {
        self.queue.emit_now(kind)
    }

    /// Advance one frame of `dt_ms` milliseconds.
    ///
    /// Input queued for this tick is handled first, so a key pressed this
    /// frame already moves the camera this frame. Movement is only requested
    /// while the pointer is captured.
    pub fn step(&mut self, dt_ms: u32) {
        self.queue.emit_now(Event::Tick);
        self.drain_ready();
        if self.gs.flags.captured() {
            self.queue.emit_now(Event::MovementRequested { dt_ms });
            self.drain_ready();
        } else {
            self.gs.input.discard_look();
        }
        self.gs.tick = self.gs.tick.wrapping_add(1);
        self.debug_stats.ticks_run += 1;
        self.queue.advance_tick();
    }

    fn drain_ready(&mut self) {
        while let Some(env) = self.queue.pop_ready() {
            self.debug_stats.events_processed += 1;
            self.handle_event(env);
        }
    }
}
