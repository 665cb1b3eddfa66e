use super::App;
use crate::event::Event;

impl App {
    pub(super) fn log_event(tick: u64, ev: &Event) {
        use crate::event::Event as E;
        match ev {
            E::Tick => {
                log::trace!(target: "events", "[tick {}] Tick", tick);
            }
            E::KeyDown { key } => {
                log::trace!(target: "events", "[tick {}] KeyDown {:?}", tick, key);
            }
            E::KeyUp { key } => {
                log::trace!(target: "events", "[tick {}] KeyUp {:?}", tick, key);
            }
            E::PointerMoved { dx, dy } => {
                log::trace!(target: "events", "[tick {}] PointerMoved dx={:.1} dy={:.1}", tick, dx, dy);
            }
            E::PointerCaptureChanged { captured } => {
                log::info!(
                    target: "events",
                    "[tick {}] PointerCaptureChanged {}",
                    tick,
                    if *captured { "locked" } else { "released" }
                );
            }
            E::PrimaryClick => {
                log::debug!(target: "events", "[tick {}] PrimaryClick", tick);
            }
            E::SecondaryClick => {
                log::debug!(target: "events", "[tick {}] SecondaryClick", tick);
            }
            E::PauseToggled => {
                log::info!(target: "events", "[tick {}] PauseToggled", tick);
            }
            E::CraftingToggled => {
                log::info!(target: "events", "[tick {}] CraftingToggled", tick);
            }
            E::SlotSelected { slot } => {
                log::info!(target: "events", "[tick {}] SlotSelected slot={}", tick, slot);
            }
            E::MovementRequested { dt_ms } => {
                log::trace!(target: "events", "[tick {}] MovementRequested dt_ms={}", tick, dt_ms);
            }
            E::RaycastEditRequested { place } => {
                log::info!(
                    target: "events",
                    "[tick {}] RaycastEditRequested {}",
                    tick,
                    if *place { "place" } else { "remove" }
                );
            }
            E::CraftingCellSet { row, col, material } => {
                log::info!(
                    target: "events",
                    "[tick {}] CraftingCellSet ({}, {}) -> {}",
                    tick,
                    row,
                    col,
                    material.map_or("empty", |m| m.name())
                );
            }
            E::SettingsUpdated { patch } => {
                log::info!(target: "events", "[tick {}] SettingsUpdated {:?}", tick, patch);
            }
            E::BlockRemoved { block } => {
                log::info!(
                    target: "events",
                    "[tick {}] BlockRemoved {} at {}",
                    tick,
                    block.material,
                    block.pos
                );
            }
            E::BlockPlaced { block } => {
                log::info!(
                    target: "events",
                    "[tick {}] BlockPlaced {} at {}",
                    tick,
                    block.material,
                    block.pos
                );
            }
            E::EditDeclined { reason } => {
                log::debug!(target: "events", "[tick {}] EditDeclined: {}", tick, reason);
            }
            E::CraftingResultChanged { result } => match result {
                Some((m, n)) => {
                    log::info!(target: "events", "[tick {}] CraftingResultChanged {} x{}", tick, m, n);
                }
                None => {
                    log::info!(target: "events", "[tick {}] CraftingResultChanged none", tick);
                }
            },
        }
    }
}
