use proptest::prelude::*;
use voxcraft_blocks::MaterialKind::{self, Cobblestone, Planks, Stone, Wood};
use voxcraft_craft::{CraftingGrid, Recipe, RecipeBook};

fn grid_with(cells: &[(usize, usize, MaterialKind)]) -> CraftingGrid {
    let mut g = CraftingGrid::new();
    for &(r, c, m) in cells {
        g.set(r, c, Some(m));
    }
    g
}

#[test]
fn single_wood_makes_four_planks() {
    let book = RecipeBook::builtin();
    let hit = book.find_match(&grid_with(&[(0, 0, Wood)])).expect("planks");
    assert_eq!(hit.result, Planks);
    assert_eq!(hit.count, 4);
}

#[test]
fn four_planks_make_wood() {
    let book = RecipeBook::builtin();
    let g = grid_with(&[(0, 0, Planks), (0, 1, Planks), (1, 0, Planks), (1, 1, Planks)]);
    let hit = book.find_match(&g).expect("wood");
    assert_eq!(hit.result, Wood);
    assert_eq!(hit.count, 1);
}

#[test]
fn four_stone_make_cobblestone() {
    let book = RecipeBook::builtin();
    let g = grid_with(&[(0, 0, Stone), (0, 1, Stone), (1, 0, Stone), (1, 1, Stone)]);
    assert_eq!(book.find_match(&g).map(|r| r.result), Some(Cobblestone));
}

#[test]
fn empty_grid_matches_nothing() {
    assert!(RecipeBook::builtin().find_match(&CraftingGrid::new()).is_none());
}

#[test]
fn shapes_are_position_sensitive() {
    let book = RecipeBook::builtin();
    // Wood anywhere but the top-left corner is not a recipe.
    assert!(book.find_match(&grid_with(&[(1, 1, Wood)])).is_none());
    // Extra material breaks an otherwise matching pattern.
    assert!(book.find_match(&grid_with(&[(0, 0, Wood), (2, 2, Wood)])).is_none());
    // Three planks are not four.
    assert!(
        book.find_match(&grid_with(&[(0, 0, Planks), (0, 1, Planks), (1, 0, Planks)]))
            .is_none()
    );
}

#[test]
fn first_declared_recipe_wins_on_overlap() {
    let pattern = grid_with(&[(0, 0, Wood)]);
    let book = RecipeBook::new(vec![
        Recipe { pattern, result: Planks, count: 4 },
        Recipe { pattern, result: MaterialKind::Leaves, count: 9 },
    ]);
    assert_eq!(book.find_match(&pattern).map(|r| r.result), Some(Planks));
}

fn arb_cell() -> impl Strategy<Value = Option<MaterialKind>> {
    prop_oneof![
        3 => Just(None),
        1 => (0usize..MaterialKind::ALL.len()).prop_map(|i| Some(MaterialKind::ALL[i])),
    ]
}

proptest! {
    // Any match returned is a recipe whose pattern equals the grid exactly,
    // and it is the earliest such recipe.
    #[test]
    fn match_is_exact_and_earliest(cells in proptest::array::uniform3(proptest::array::uniform3(arb_cell()))) {
        let grid = CraftingGrid::from_cells(cells);
        let book = RecipeBook::builtin();
        let expected = book.recipes().iter().position(|r| r.pattern == grid);
        let got = book.find_match(&grid);
        match (expected, got) {
            (None, None) => {}
            (Some(i), Some(r)) => prop_assert_eq!(&book.recipes()[i], r),
            (e, g) => prop_assert!(false, "expected {:?}, got {:?}", e, g),
        }
    }
}
