use std::collections::BTreeMap;
use std::fmt;

use voxcraft_blocks::MaterialKind;
use voxcraft_player::CameraPose;

use crate::gamestate::{GameView, PlayerStats, SessionFlags};

/// Headless stand-in for the presentation layer: it only reads through
/// [`GameView`] and summarises what a frame would show.
#[derive(Default)]
pub struct FrameReporter {
    seen_revision: Option<u64>,
    counts: BTreeMap<MaterialKind, usize>,
    pub frames_built: u64,
    pub frames_skipped: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    pub revision: u64,
    /// Whether the block snapshot had to be rebuilt for this frame.
    pub rebuilt: bool,
    pub blocks: usize,
    pub by_material: BTreeMap<MaterialKind, usize>,
    pub pose: CameraPose,
    pub selected: MaterialKind,
    pub sensitivity: f32,
    pub ui_scale: f32,
    pub stats: PlayerStats,
    pub flags: SessionFlags,
    /// Occupied crafting cells.
    pub grid_filled: usize,
    pub craft: Option<(MaterialKind, u32)>,
}

impl FrameReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&mut self, view: &dyn GameView) -> FrameReport {
        let revision = view.world_revision();
        let rebuilt = self.seen_revision != Some(revision);
        if rebuilt {
            self.counts.clear();
            for b in view.blocks() {
                *self.counts.entry(b.material).or_default() += 1;
            }
            self.seen_revision = Some(revision);
            self.frames_built += 1;
        } else {
            self.frames_skipped += 1;
        }
        FrameReport {
            revision,
            rebuilt,
            blocks: self.counts.values().sum(),
            by_material: self.counts.clone(),
            pose: view.pose(),
            selected: view.hotbar().selected_material(),
            sensitivity: view.settings().sensitivity,
            ui_scale: view.settings().ui_scale,
            stats: view.stats(),
            flags: view.flags(),
            grid_filled: view.crafting_grid().filled(),
            craft: view.crafting_result(),
        }
    }
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.pose.position;
        write!(
            f,
            "rev={} blocks={} pos=({:.2}, {:.2}, {:.2}) yaw={:.3} pitch={:.3} slot={} hp={}/{} food={}/{} sens={:.2} ui={:.2}",
            self.revision,
            self.blocks,
            p.x,
            p.y,
            p.z,
            self.pose.yaw,
            self.pose.pitch,
            self.selected,
            self.stats.health,
            self.stats.max_health,
            self.stats.hunger,
            self.stats.max_hunger,
            self.sensitivity,
            self.ui_scale,
        )?;
        if self.flags.paused {
            f.write_str(" [paused]")?;
        }
        if self.flags.crafting_open {
            write!(f, " [crafting {}/9]", self.grid_filled)?;
        }
        if let Some((m, n)) = self.craft {
            write!(f, " craft={}x{}", m, n)?;
        }
        Ok(())
    }
}
