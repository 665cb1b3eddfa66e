use std::error::Error;
use std::fmt;

use hashbrown::HashMap;
use voxcraft_blocks::{Block, BlockPos, MaterialKind};

/// Declined world mutation. Never fatal; callers log and carry on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditError {
    Occupied { pos: BlockPos, existing: MaterialKind },
    Absent { pos: BlockPos },
    /// The neighbor across the struck face lies outside the i32 grid.
    OutOfBounds { pos: BlockPos },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::Occupied { pos, existing } => {
                write!(f, "cell {} already holds {}", pos, existing)
            }
            EditError::Absent { pos } => write!(f, "cell {} is empty", pos),
            EditError::OutOfBounds { pos } => {
                write!(f, "no cell beyond {} on that face", pos)
            }
        }
    }
}

impl Error for EditError {}

/// Partial map from cell coordinate to material with a change counter.
#[derive(Default, Debug, Clone)]
pub struct WorldStore {
    cells: HashMap<BlockPos, MaterialKind>,
    // Bumped on every successful add/remove.
    rev: u64,
}

impl WorldStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, pos: BlockPos) -> Option<MaterialKind> {
        self.cells.get(&pos).copied()
    }

    #[inline]
    pub fn contains(&self, pos: BlockPos) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Insert only into an empty cell.
    pub fn add(&mut self, pos: BlockPos, material: MaterialKind) -> Result<(), EditError> {
        use hashbrown::hash_map::Entry;
        match self.cells.entry(pos) {
            Entry::Occupied(e) => Err(EditError::Occupied {
                pos,
                existing: *e.get(),
            }),
            Entry::Vacant(e) => {
                e.insert(material);
                self.bump();
                Ok(())
            }
        }
    }

    /// Remove and return the material at `pos`.
    pub fn remove(&mut self, pos: BlockPos) -> Result<MaterialKind, EditError> {
        let material = self.cells.remove(&pos).ok_or(EditError::Absent { pos })?;
        self.bump();
        Ok(material)
    }

    /// Snapshot iterator for rendering. Order is unspecified.
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.cells.iter().map(|(pos, m)| Block::new(*pos, *m))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.rev
    }

    fn bump(&mut self) {
        self.rev = self.rev.wrapping_add(1).max(1);
    }
}

impl FromIterator<Block> for WorldStore {
    /// Later duplicates of a cell are dropped, matching `add`.
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        let mut store = WorldStore::new();
        for b in iter {
            let _ = store.add(b.pos, b.material);
        }
        store
    }
}
