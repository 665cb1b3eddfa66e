use std::collections::{BTreeMap, VecDeque};

use voxcraft_blocks::{Block, MaterialKind};
use voxcraft_edit::EditRejected;

use crate::config::SettingsPatch;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    // Time housekeeping
    Tick,

    // Raw input from the presentation layer
    KeyDown { key: String },
    KeyUp { key: String },
    PointerMoved { dx: f32, dy: f32 },
    PointerCaptureChanged { captured: bool },
    PrimaryClick,
    SecondaryClick,

    // Input-derived intents
    PauseToggled,
    CraftingToggled,
    SlotSelected { slot: usize },
    MovementRequested { dt_ms: u32 },
    /// `place` puts the selected hotbar material; otherwise the target is removed.
    RaycastEditRequested { place: bool },
    CraftingCellSet { row: usize, col: usize, material: Option<MaterialKind> },
    SettingsUpdated { patch: SettingsPatch },

    // Results
    BlockRemoved { block: Block },
    BlockPlaced { block: Block },
    EditDeclined { reason: EditRejected },
    CraftingResultChanged { result: Option<(MaterialKind, u32)> },
}

pub struct EventEnvelope {
    pub id: u64,
    pub tick: u64,
    pub kind: Event,
}

pub struct EventQueue {
    // map of tick -> FIFO queue of events
    by_tick: BTreeMap<u64, VecDeque<EventEnvelope>>,
    pub now: u64,
    next_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            by_tick: BTreeMap::new(),
            now: 0,
            next_id: 1,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit_now(&mut self, kind: Event) -> u64 {
        self.emit_at(self.now, kind)
    }

    /// Ticks already in the past are delivered on the current tick.
    pub fn emit_at(&mut self, tick: u64, kind: Event) -> u64 {
        let tick = tick.max(self.now);
        let id = self.alloc_id();
        let env = EventEnvelope { id, tick, kind };
        self.by_tick.entry(tick).or_default().push_back(env);
        id
    }

    pub fn emit_after(&mut self, delta: u64, kind: Event) -> u64 {
        self.emit_at(self.now.saturating_add(delta), kind)
    }

    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        self.by_tick.get_mut(&self.now)?.pop_front()
    }

    pub fn advance_tick(&mut self) {
        // clean empty current bucket
        if self.by_tick.get(&self.now).is_some_and(VecDeque::is_empty) {
            self.by_tick.remove(&self.now);
        }
        self.now = self.now.wrapping_add(1);
    }

    /// Events scheduled for any tick, including the current one.
    pub fn pending(&self) -> usize {
        self.by_tick.values().map(VecDeque::len).sum()
    }
}
