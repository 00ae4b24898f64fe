//! Shared data types for ratio matching and recipes.
//!
//! Everything here is a plain value object: constructed per call, never
//! mutated after construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Relative batter proportions in arbitrary units.
///
/// Components are expected to be non-negative. There is no upper bound and
/// an all-zero vector is a valid (degenerate) input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ratios {
    pub flour: f64,
    pub liquid: f64,
    pub eggs: f64,
}

impl Ratios {
    pub const fn new(flour: f64, liquid: f64, eggs: f64) -> Self {
        Self { flour, liquid, eggs }
    }

    /// Sum of the three components
    pub fn total(&self) -> f64 {
        self.flour + self.liquid + self.eggs
    }
}

/// Breakfast type identifier.
///
/// Variant order is catalog order, which decides exact-distance ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreakfastType {
    Pancakes,
    Waffles,
    Crepes,
    DutchBaby,
    Popover,
    Donut,
    Clafoutis,
    BreakfastCake,
}

impl BreakfastType {
    /// All types in catalog order
    pub const ALL: [BreakfastType; 8] = [
        BreakfastType::Pancakes,
        BreakfastType::Waffles,
        BreakfastType::Crepes,
        BreakfastType::DutchBaby,
        BreakfastType::Popover,
        BreakfastType::Donut,
        BreakfastType::Clafoutis,
        BreakfastType::BreakfastCake,
    ];

    /// Stable identifier, e.g. "dutch-baby"
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakfastType::Pancakes => "pancakes",
            BreakfastType::Waffles => "waffles",
            BreakfastType::Crepes => "crepes",
            BreakfastType::DutchBaby => "dutch-baby",
            BreakfastType::Popover => "popover",
            BreakfastType::Donut => "donut",
            BreakfastType::Clafoutis => "clafoutis",
            BreakfastType::BreakfastCake => "breakfast-cake",
        }
    }
}

impl fmt::Display for BreakfastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for BreakfastType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BreakfastType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownType(s.to_string()))
    }
}

/// Catalog entry: one breakfast type and its prototype ratios.
///
/// Only `ratios` takes part in classification; the rest is display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakfastTypeDefinition {
    #[serde(rename = "type")]
    pub breakfast_type: BreakfastType,
    pub name: String,
    pub ratios: Ratios,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub serve_with: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// Which batter component an ingredient contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Flour,
    Liquid,
    Eggs,
    Other,
}

/// Recipe ingredient with its base (unscaled) amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub category: IngredientCategory,
}

impl Ingredient {
    pub fn new(name: &str, amount: f64, unit: &str, category: IngredientCategory) -> Self {
        Self {
            name: name.to_string(),
            amount,
            unit: unit.to_string(),
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    #[serde(rename = "type")]
    pub breakfast_type: BreakfastType,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub directions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakfast_type_identifiers_round_trip() {
        for t in BreakfastType::ALL {
            assert_eq!(t.as_str().parse::<BreakfastType>().unwrap(), t);
        }
        assert!("dutch baby".parse::<BreakfastType>().is_err());
    }

    #[test]
    fn test_breakfast_type_serializes_kebab_case() {
        let json = serde_json::to_string(&BreakfastType::BreakfastCake).unwrap();
        assert_eq!(json, "\"breakfast-cake\"");

        let parsed: BreakfastType = serde_json::from_str("\"dutch-baby\"").unwrap();
        assert_eq!(parsed, BreakfastType::DutchBaby);
    }

    #[test]
    fn test_recipe_json_shape() {
        let json = r#"{
            "id": "popover-quick",
            "type": "popover",
            "name": "Quick Popovers",
            "ingredients": [
                { "name": "Flour", "amount": 1, "unit": "cup", "category": "flour" },
                { "name": "Salt", "amount": 0.5, "unit": "tsp", "category": "other" }
            ],
            "directions": ["Whisk.", "Bake."]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.breakfast_type, BreakfastType::Popover);
        assert_eq!(recipe.ingredients[1].category, IngredientCategory::Other);
        assert_eq!(recipe.directions.len(), 2);
    }
}
