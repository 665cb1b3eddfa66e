use voxcraft_blocks::MaterialKind;

use crate::event::EventQueue;
use crate::gamestate::GameState;

pub struct App {
    pub gs: GameState,
    pub queue: EventQueue,
    pub debug_stats: DebugStats,
    /// Last crafting result announced, to only emit on change.
    pub(crate) last_craft: Option<(MaterialKind, u32)>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebugStats {
    pub events_processed: usize,
    pub ticks_run: u64,
    pub ticks_moved: u64,
    pub blocks_removed: usize,
    pub blocks_placed: usize,
    pub edits_declined: usize,
}

impl App {
    pub fn new(gs: GameState) -> Self {
        Self {
            gs,
            queue: EventQueue::new(),
            debug_stats: DebugStats::default(),
            last_craft: None,
        }
    }
}
