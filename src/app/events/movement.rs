use super::App;

impl App {
    pub(super) fn handle_movement_requested(&mut self, dt_ms: u32) {
        if !self.gs.flags.captured() {
            return;
        }
        let input = self.gs.input.snapshot();
        let dt = dt_ms as f32 / 1000.0;
        self.gs
            .walker
            .tick(&mut self.gs.pose, &input, self.gs.settings.sensitivity, dt);
        self.debug_stats.ticks_moved += 1;
    }
}
