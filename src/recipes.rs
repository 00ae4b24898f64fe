//! Recipe Book
//!
//! Static recipes grouped by breakfast type. The builtin set can be extended
//! with JSON recipe files (one recipe per file).

use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RecipeError;
use crate::types::{BreakfastType, Ingredient, IngredientCategory, Ratios, Recipe};

/// Ordered recipe collection with an id index
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
    index: FxHashMap<String, usize>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recipes bundled with the app
    pub fn builtin() -> Self {
        let mut book = Self::new();
        for recipe in builtin_recipes() {
            // Builtin ids are distinct
            let id = recipe.id.clone();
            book.index.insert(id, book.recipes.len());
            book.recipes.push(recipe);
        }
        book
    }

    /// Add a recipe at the end of the book
    pub fn insert(&mut self, recipe: Recipe) -> Result<(), RecipeError> {
        if self.index.contains_key(&recipe.id) {
            return Err(RecipeError::DuplicateId(recipe.id));
        }

        self.index.insert(recipe.id.clone(), self.recipes.len());
        self.recipes.push(recipe);
        Ok(())
    }

    /// Load every `*.json` file in `dir`, in file-name order.
    ///
    /// Returns the number of recipes added.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, RecipeError> {
        let mut paths: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(io_error(dir))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<_, _>>()
            .map_err(io_error(dir))?;
        paths.retain(|p| p.extension().is_some_and(|ext| ext == "json"));
        paths.sort();

        for path in &paths {
            let contents = fs::read_to_string(path).map_err(io_error(path))?;
            let recipe: Recipe = serde_json::from_str(&contents).map_err(|source| {
                RecipeError::Parse {
                    path: path.clone(),
                    source,
                }
            })?;
            tracing::debug!("Loaded recipe {} from {:?}", recipe.id, path);
            self.insert(recipe)?;
        }

        tracing::info!("Loaded {} recipes from {:?}", paths.len(), dir);
        Ok(paths.len())
    }

    /// Recipes of one breakfast type, in book order
    pub fn recipes_by_type(&self, breakfast_type: BreakfastType) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.breakfast_type == breakfast_type)
            .collect()
    }

    pub fn recipe_by_id(&self, id: &str) -> Option<&Recipe> {
        self.index.get(id).map(|&i| &self.recipes[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> RecipeError {
    let path = path.to_path_buf();
    move |source| RecipeError::Io { path, source }
}

/// Batter ratios of a recipe: summed amounts of its flour, liquid and egg
/// ingredients. Units are taken as-is.
pub fn recipe_ratios(recipe: &Recipe) -> Ratios {
    recipe
        .ingredients
        .iter()
        .fold(Ratios::default(), |mut ratios, ingredient| {
            match ingredient.category {
                IngredientCategory::Flour => ratios.flour += ingredient.amount,
                IngredientCategory::Liquid => ratios.liquid += ingredient.amount,
                IngredientCategory::Eggs => ratios.eggs += ingredient.amount,
                IngredientCategory::Other => {}
            }
            ratios
        })
}

// ============================================================================
// BUILTIN RECIPES
// ============================================================================

fn recipe(
    id: &str,
    breakfast_type: BreakfastType,
    name: &str,
    ingredients: Vec<Ingredient>,
    directions: &[&str],
) -> Recipe {
    Recipe {
        id: id.to_string(),
        breakfast_type,
        name: name.to_string(),
        ingredients,
        directions: directions.iter().map(|d| d.to_string()).collect(),
    }
}

fn builtin_recipes() -> Vec<Recipe> {
    use IngredientCategory::{Eggs, Flour, Liquid, Other};

    vec![
        recipe(
            "pancakes-one-bowl",
            BreakfastType::Pancakes,
            "One Bowl Pancakes",
            vec![
                Ingredient::new("All-purpose flour", 2.0, "cups", Flour),
                Ingredient::new("Milk", 1.75, "cups", Liquid),
                Ingredient::new("Eggs", 2.0, "large", Eggs),
                Ingredient::new("Sugar", 2.0, "tbsp", Other),
                Ingredient::new("Baking powder", 1.0, "tbsp", Other),
                Ingredient::new("Salt", 0.5, "tsp", Other),
                Ingredient::new("Melted butter", 3.0, "tbsp", Other),
            ],
            &[
                "Whisk flour, sugar, baking powder and salt in a large bowl.",
                "Make a well in the center and add milk, eggs and melted butter.",
                "Stir until just combined; a few lumps are fine.",
                "Cook 1/4 cup portions on a hot greased griddle until bubbles form, then flip.",
            ],
        ),
        recipe(
            "waffles-quick",
            BreakfastType::Waffles,
            "Quick Waffles",
            vec![
                Ingredient::new("All-purpose flour", 2.0, "cups", Flour),
                Ingredient::new("Milk", 1.5, "cups", Liquid),
                Ingredient::new("Eggs", 2.0, "large", Eggs),
                Ingredient::new("Vegetable oil", 0.5, "cup", Other),
                Ingredient::new("Baking powder", 1.0, "tbsp", Other),
                Ingredient::new("Sugar", 1.0, "tbsp", Other),
            ],
            &[
                "Preheat the waffle iron.",
                "Whisk the dry ingredients, then beat in milk, eggs and oil.",
                "Cook until golden and crisp.",
            ],
        ),
        recipe(
            "crepes-basic",
            BreakfastType::Crepes,
            "Basic Crepes",
            vec![
                Ingredient::new("All-purpose flour", 1.0, "cup", Flour),
                Ingredient::new("Milk", 2.0, "cups", Liquid),
                Ingredient::new("Eggs", 2.0, "large", Eggs),
                Ingredient::new("Melted butter", 2.0, "tbsp", Other),
                Ingredient::new("Salt", 0.25, "tsp", Other),
            ],
            &[
                "Blend everything until smooth and rest the batter for 30 minutes.",
                "Pour a thin layer into a hot buttered pan and swirl to coat.",
                "Cook about 1 minute per side.",
            ],
        ),
        recipe(
            "popover-traditional",
            BreakfastType::Popover,
            "Traditional Popovers",
            vec![
                Ingredient::new("All-purpose flour", 1.0, "cup", Flour),
                Ingredient::new("Milk", 1.0, "cup", Liquid),
                Ingredient::new("Eggs", 2.0, "large", Eggs),
                Ingredient::new("Salt", 0.5, "tsp", Other),
                Ingredient::new("Melted butter", 1.0, "tbsp", Other),
            ],
            &[
                "Preheat oven to 450°F (230°C).",
                "Generously grease a popover pan or muffin tin.",
                "In a bowl, whisk together eggs and milk.",
                "Add flour and salt, whisking until smooth.",
                "Stir in melted butter.",
                "Fill cups about 2/3 full.",
                "Bake at 450°F for 15 minutes.",
                "Reduce heat to 350°F and bake for another 15-20 minutes until golden.",
                "Do not open oven door during baking or they may deflate.",
                "Remove from oven, pierce each popover with a knife to release steam, and serve immediately.",
            ],
        ),
        recipe(
            "clafoutis-cherry",
            BreakfastType::Clafoutis,
            "Cherry Clafoutis",
            vec![
                Ingredient::new("All-purpose flour", 0.5, "cup", Flour),
                Ingredient::new("Milk", 1.5, "cups", Liquid),
                Ingredient::new("Eggs", 4.0, "large", Eggs),
                Ingredient::new("Sugar", 0.5, "cup", Other),
                Ingredient::new("Vanilla extract", 1.0, "tsp", Other),
                Ingredient::new("Salt", 0.25, "tsp", Other),
                Ingredient::new("Butter for pan", 1.0, "tbsp", Other),
                Ingredient::new("Fresh cherries, pitted", 2.0, "cups", Other),
                Ingredient::new("Powdered sugar for dusting", 2.0, "tbsp", Other),
            ],
            &[
                "Preheat oven to 375°F (190°C).",
                "Butter a 10-inch pie dish or baking dish.",
                "Arrange cherries in the bottom of the dish.",
                "In a blender, combine eggs, milk, flour, sugar, vanilla, and salt. Blend until very smooth.",
                "Pour batter over cherries.",
                "Bake for 35-40 minutes until puffed and golden.",
                "The center should be just set.",
                "Let cool for 10 minutes.",
                "Dust with powdered sugar before serving.",
                "Serve warm or at room temperature.",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::find_closest;

    #[test]
    fn test_builtin_lookup() {
        let book = RecipeBook::builtin();
        assert_eq!(book.len(), 5);

        let popover = book.recipe_by_id("popover-traditional").unwrap();
        assert_eq!(popover.name, "Traditional Popovers");
        assert_eq!(popover.directions.len(), 10);
        assert!(book.recipe_by_id("toast").is_none());
    }

    #[test]
    fn test_recipes_by_type() {
        let book = RecipeBook::builtin();
        let clafoutis = book.recipes_by_type(BreakfastType::Clafoutis);
        assert_eq!(clafoutis.len(), 1);
        assert_eq!(clafoutis[0].id, "clafoutis-cherry");
        assert!(book.recipes_by_type(BreakfastType::Donut).is_empty());
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut book = RecipeBook::builtin();
        let copy = book.recipe_by_id("crepes-basic").unwrap().clone();
        assert!(matches!(book.insert(copy), Err(RecipeError::DuplicateId(id)) if id == "crepes-basic"));
    }

    #[test]
    fn test_recipe_ratios_ignore_other_ingredients() {
        let book = RecipeBook::builtin();
        let popover = book.recipe_by_id("popover-traditional").unwrap();

        let ratios = recipe_ratios(popover);
        assert_eq!(ratios, Ratios::new(1.0, 1.0, 2.0));
        assert_eq!(find_closest(ratios), BreakfastType::Popover);
    }

    #[test]
    fn test_load_dir_reads_json_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let donut = r#"{ "id": "donuts-baked", "type": "donut", "name": "Baked Donuts",
            "ingredients": [{ "name": "Flour", "amount": 3, "unit": "cups", "category": "flour" }],
            "directions": ["Bake."] }"#;
        let dutch = r#"{ "id": "dutch-baby-classic", "type": "dutch-baby", "name": "Dutch Baby",
            "ingredients": [], "directions": [] }"#;
        fs::write(dir.path().join("b-donuts.json"), donut).unwrap();
        fs::write(dir.path().join("a-dutch.json"), dutch).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a recipe").unwrap();

        let mut book = RecipeBook::new();
        assert_eq!(book.load_dir(dir.path()).unwrap(), 2);

        let ids: Vec<&str> = book.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["dutch-baby-classic", "donuts-baked"]);
    }

    #[test]
    fn test_load_dir_reports_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{").unwrap();

        let err = RecipeBook::new().load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, RecipeError::Parse { .. }));
    }
}
