use voxcraft_blocks::MaterialKind;

pub const HOTBAR_SLOTS: usize = 9;

/// Fixed material slot bar. Only the selection moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hotbar {
    slots: [MaterialKind; HOTBAR_SLOTS],
    selected: usize,
}

impl Default for Hotbar {
    fn default() -> Self {
        use MaterialKind::*;
        Self {
            slots: [Grass, Dirt, Stone, Wood, Cobblestone, Sand, Planks, Leaves, Water],
            selected: 0,
        }
    }
}

impl Hotbar {
    pub fn slots(&self) -> &[MaterialKind; HOTBAR_SLOTS] {
        &self.slots
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_material(&self) -> MaterialKind {
        self.slots[self.selected]
    }

    /// Out-of-range slots leave the selection alone.
    pub fn select(&mut self, slot: usize) -> bool {
        if slot < HOTBAR_SLOTS {
            self.selected = slot;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_grass_and_selects_in_range() {
        let mut bar = Hotbar::default();
        assert_eq!(bar.selected_material(), MaterialKind::Grass);
        assert!(bar.select(8));
        assert_eq!(bar.selected_material(), MaterialKind::Water);
        assert!(!bar.select(9));
        assert_eq!(bar.selected(), 8);
        assert_eq!(bar.slots()[4], MaterialKind::Cobblestone);
    }
}
