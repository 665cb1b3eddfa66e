use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use voxcraft_blocks::MaterialKind;

use crate::grid::{CraftingGrid, GRID_SIZE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    pub pattern: CraftingGrid,
    pub result: MaterialKind,
    pub count: u32,
}

impl Recipe {
    /// Exact cell-by-cell equality, empty only matching empty.
    pub fn matches(&self, grid: &CraftingGrid) -> bool {
        self.pattern == *grid
    }
}

/// Ordered recipe list. Lookup is first match in declaration order; overlapping
/// patterns are not detected.
#[derive(Clone, Debug, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn builtin() -> Self {
        use MaterialKind::{Planks, Stone, Wood};
        Self::new(vec![
            Recipe {
                pattern: CraftingGrid::from_cells([
                    [Some(Wood), None, None],
                    [None, None, None],
                    [None, None, None],
                ]),
                result: Planks,
                count: 4,
            },
            Recipe {
                pattern: CraftingGrid::from_cells([
                    [Some(Stone), Some(Stone), None],
                    [Some(Stone), Some(Stone), None],
                    [None, None, None],
                ]),
                result: MaterialKind::Cobblestone,
                count: 1,
            },
            Recipe {
                pattern: CraftingGrid::from_cells([
                    [Some(Planks), Some(Planks), None],
                    [Some(Planks), Some(Planks), None],
                    [None, None, None],
                ]),
                result: Wood,
                count: 1,
            },
        ])
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn find_match(&self, grid: &CraftingGrid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.matches(grid))
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: RecipesConfig = toml::from_str(toml_str)?;
        Ok(Self::from_defs(cfg.recipes)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_defs(defs: Vec<RecipeDef>) -> Result<Self, RecipeError> {
        let recipes = defs
            .into_iter()
            .enumerate()
            .map(|(i, d)| d.compile(i))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(recipes))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecipeError {
    ZeroCount { index: usize },
    BadShape { index: usize, rows: usize, cols: usize },
    UnknownMaterial { index: usize, name: String },
}

impl fmt::Display for RecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeError::ZeroCount { index } => {
                write!(f, "recipe #{}: count must be positive", index)
            }
            RecipeError::BadShape { index, rows, cols } => write!(
                f,
                "recipe #{}: pattern must be {n}x{n}, got {}x{}",
                index,
                rows,
                cols,
                n = GRID_SIZE
            ),
            RecipeError::UnknownMaterial { index, name } => {
                write!(f, "recipe #{}: unknown material '{}'", index, name)
            }
        }
    }
}

impl Error for RecipeError {}

// --- Config ---

#[derive(Deserialize)]
pub struct RecipesConfig {
    #[serde(default)]
    pub recipes: Vec<RecipeDef>,
}

/// `pattern` is three rows of three names; `""` marks an empty cell.
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeDef {
    pub result: MaterialKind,
    #[serde(default = "default_count")]
    pub count: u32,
    pub pattern: Vec<Vec<String>>,
}

fn default_count() -> u32 {
    1
}

impl RecipeDef {
    fn compile(self, index: usize) -> Result<Recipe, RecipeError> {
        if self.count == 0 {
            return Err(RecipeError::ZeroCount { index });
        }
        let rows = self.pattern.len();
        let cols = self.pattern.iter().map(Vec::len).max().unwrap_or(0);
        if rows != GRID_SIZE || self.pattern.iter().any(|r| r.len() != GRID_SIZE) {
            return Err(RecipeError::BadShape { index, rows, cols });
        }
        let mut pattern = CraftingGrid::new();
        for (r, row) in self.pattern.iter().enumerate() {
            for (c, name) in row.iter().enumerate() {
                if name.trim().is_empty() {
                    continue;
                }
                let m = name.parse::<MaterialKind>().map_err(|_| RecipeError::UnknownMaterial {
                    index,
                    name: name.clone(),
                })?;
                pattern.set(r, c, Some(m));
            }
        }
        Ok(Recipe {
            pattern,
            result: self.result,
            count: self.count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_is_planks_cobble_wood() {
        let book = RecipeBook::builtin();
        let results: Vec<MaterialKind> = book.recipes().iter().map(|r| r.result).collect();
        assert_eq!(
            results,
            vec![MaterialKind::Planks, MaterialKind::Cobblestone, MaterialKind::Wood]
        );
    }

    #[test]
    fn toml_recipes_parse_in_order() {
        let book = RecipeBook::from_toml_str(
            r#"
            [[recipes]]
            result = "sand"
            count = 2
            pattern = [["stone", "", ""], ["", "", ""], ["", "", ""]]

            [[recipes]]
            result = "leaves"
            pattern = [["", "", ""], ["", "grass", ""], ["", "", ""]]
        "#,
        )
        .unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.recipes()[0].result, MaterialKind::Sand);
        assert_eq!(book.recipes()[0].count, 2);
        assert_eq!(book.recipes()[1].count, 1);
        assert_eq!(book.recipes()[1].pattern.get(1, 1), Some(MaterialKind::Grass));
    }

    #[test]
    fn malformed_recipes_are_rejected() {
        let zero = RecipeBook::from_toml_str(
            r#"
            [[recipes]]
            result = "sand"
            count = 0
            pattern = [["", "", ""], ["", "", ""], ["", "", ""]]
        "#,
        );
        assert!(zero.unwrap_err().to_string().contains("count must be positive"));

        let short = RecipeBook::from_toml_str(
            r#"
            [[recipes]]
            result = "sand"
            pattern = [["stone", ""], ["", ""]]
        "#,
        );
        assert!(short.unwrap_err().to_string().contains("pattern must be 3x3"));

        let unknown = RecipeBook::from_toml_str(
            r#"
            [[recipes]]
            result = "sand"
            pattern = [["obsidian", "", ""], ["", "", ""], ["", "", ""]]
        "#,
        );
        assert!(unknown.unwrap_err().to_string().contains("'obsidian'"));
    }
}
