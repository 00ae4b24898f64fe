//! Breakfast Ratios
//!
//! Classifies a batter by its flour : liquid : eggs ratio into one of eight
//! breakfast types, scales recipes for display and keeps a cooking journal.
//!
//! Layout:
//! - `types`: ratios, breakfast types, ingredients and recipes
//! - `catalog`: the eight type definitions with their reference ratios
//! - `matcher`: normalization and nearest-prototype classification
//! - `scaler`: amount scaling and kitchen-fraction formatting
//! - `recipes`: recipe book (builtin + JSON directory)
//! - `store/`: key-value persistence (memory, files)
//! - `journal/`: cooking history, notes and the in-progress recipe
//! - `config`: environment configuration for the binary

pub mod catalog;
pub mod config;
pub mod error;
pub mod journal;
pub mod matcher;
pub mod recipes;
pub mod scaler;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::Config;
pub use error::{CatalogError, JournalError, RecipeError, StoreError};
pub use journal::{Clock, Journal, ManualClock, SystemClock};
pub use matcher::{distance, find_closest, normalize, rank_all, RankedMatch, RatioMatch, RatioMatcher};
pub use recipes::{recipe_ratios, RecipeBook};
pub use scaler::{format_amount, scale, scale_recipe, ScaleFactor, ScaledIngredient};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use types::{BreakfastType, BreakfastTypeDefinition, Ingredient, IngredientCategory, Ratios, Recipe};
