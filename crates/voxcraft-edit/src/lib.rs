//! Block targeting and the edits applied to a target.
#![forbid(unsafe_code)]

pub mod raycast;

use std::error::Error;
use std::fmt;

use voxcraft_blocks::{Block, MaterialKind};
use voxcraft_geom::Ray;
use voxcraft_world::{EditError, WorldStore};

pub use raycast::{MAX_REACH, TargetHit, face_from_hit, hit_cell, resolve, resolve_traversal};

/// What a pointer click asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditAction {
    /// Primary click: break the targeted block.
    Remove,
    /// Secondary click: put a block against the targeted face.
    Place(MaterialKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Removed(Block),
    Placed(Block),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditRejected {
    NoTarget,
    Declined(EditError),
}

impl fmt::Display for EditRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditRejected::NoTarget => f.write_str("no block under the crosshair"),
            EditRejected::Declined(e) => write!(f, "edit declined: {}", e),
        }
    }
}

impl Error for EditRejected {}

impl From<EditError> for EditRejected {
    fn from(e: EditError) -> Self {
        EditRejected::Declined(e)
    }
}

pub fn remove_target(world: &mut WorldStore, hit: &TargetHit) -> Result<Block, EditError> {
    let material = world.remove(hit.pos)?;
    Ok(Block::new(hit.pos, material))
}

pub fn place_against(
    world: &mut WorldStore,
    hit: &TargetHit,
    material: MaterialKind,
) -> Result<Block, EditError> {
    let pos = hit.place_pos().ok_or(EditError::OutOfBounds { pos: hit.pos })?;
    world.add(pos, material)?;
    Ok(Block::new(pos, material))
}

/// Resolve the ray against the whole world and apply `action` to the result.
pub fn apply(
    world: &mut WorldStore,
    ray: &Ray,
    action: EditAction,
) -> Result<EditOutcome, EditRejected> {
    let hit = resolve(ray, world).ok_or(EditRejected::NoTarget)?;
    log::debug!(
        target: "edit",
        "target {} ({}) face={:?} dist={:.2}",
        hit.pos,
        hit.material,
        hit.face,
        hit.distance
    );
    match action {
        EditAction::Remove => Ok(EditOutcome::Removed(remove_target(world, &hit)?)),
        EditAction::Place(m) => Ok(EditOutcome::Placed(place_against(world, &hit, m)?)),
    }
}
