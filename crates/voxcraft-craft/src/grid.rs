use voxcraft_blocks::MaterialKind;

pub const GRID_SIZE: usize = 3;

pub type Cells = [[Option<MaterialKind>; GRID_SIZE]; GRID_SIZE];

/// Row-major 3x3 grid of optional materials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CraftingGrid {
    cells: Cells,
}

impl CraftingGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn from_cells(cells: Cells) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// `None` for out-of-range coordinates as well as empty cells.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<MaterialKind> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Write one cell. Returns `false` when `(row, col)` is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, material: Option<MaterialKind>) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = material;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn clear_cell(&mut self, row: usize, col: usize) -> bool {
        self.set(row, col, None)
    }

    pub fn clear(&mut self) {
        self.cells = Cells::default();
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_and_clear() {
        let mut g = CraftingGrid::new();
        assert!(g.is_empty());
        assert!(g.set(1, 2, Some(MaterialKind::Stone)));
        assert_eq!(g.get(1, 2), Some(MaterialKind::Stone));
        assert_eq!(g.filled(), 1);
        assert!(g.clear_cell(1, 2));
        assert!(g.is_empty());
        g.set(0, 0, Some(MaterialKind::Wood));
        g.clear();
        assert!(g.is_empty());
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut g = CraftingGrid::new();
        assert!(!g.set(3, 0, Some(MaterialKind::Wood)));
        assert!(!g.set(0, 3, Some(MaterialKind::Wood)));
        assert_eq!(g.get(5, 5), None);
        assert!(g.is_empty());
    }
}
