//! 3x3 crafting grid and first-match recipe lookup.
#![forbid(unsafe_code)]

pub mod grid;
pub mod recipe;

pub use grid::{CraftingGrid, GRID_SIZE};
pub use recipe::{Recipe, RecipeBook, RecipeError};
