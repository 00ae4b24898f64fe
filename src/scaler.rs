//! Amount Scaler / Formatter
//!
//! Scales ingredient amounts by a batch factor and renders them with common
//! cooking fractions (⅛ ¼ ⅓ ½ ⅔ ¾) where one fits closely.

use serde::Serialize;
use std::fmt;

use crate::types::{Ingredient, IngredientCategory, Recipe};

/// Fractions a remainder may snap to, in lookup order
const FRACTIONS: [(f64, &str); 6] = [
    (0.125, "⅛"),
    (0.25, "¼"),
    (0.333, "⅓"),
    (0.5, "½"),
    (0.667, "⅔"),
    (0.75, "¾"),
];

/// A fraction is used only when the remainder is strictly closer than this
pub const FRACTION_TOLERANCE: f64 = 0.05;

/// Scale factor slider domain
pub struct ScaleFactor;

impl ScaleFactor {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 3.0;
    pub const STEP: f64 = 0.5;
    pub const DEFAULT: f64 = 1.0;
}

/// Multiply an amount by a scale factor (no clamping, no rounding)
pub fn scale(amount: f64, factor: f64) -> f64 {
    amount * factor
}

/// Closest fraction glyph for a remainder in [0, 1), if within tolerance
fn closest_fraction(remainder: f64) -> Option<&'static str> {
    let mut closest = None;
    let mut closest_diff = f64::INFINITY;

    for (value, glyph) in FRACTIONS {
        let diff = (value - remainder).abs();
        if diff < closest_diff && diff < FRACTION_TOLERANCE {
            closest_diff = diff;
            closest = Some(glyph);
        }
    }

    closest
}

/// Render an amount for display.
///
/// - `0` -> "0"
/// - remainder near a common fraction -> "½" or "1 ½"
/// - whole number -> "2"
/// - anything else -> two decimals with trailing zeros stripped ("1.9")
pub fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        return "0".to_string();
    }

    let whole = amount.floor();
    let remainder = amount - whole;

    match closest_fraction(remainder) {
        Some(glyph) if whole == 0.0 => glyph.to_string(),
        Some(glyph) => format!("{} {}", whole, glyph),
        None if remainder == 0.0 => format!("{}", whole),
        None => {
            let fixed = format!("{:.2}", amount);
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

/// Clamp a requested scale factor into the slider range and snap it to the step
pub fn snap_scale_factor(factor: f64) -> f64 {
    if factor.is_nan() {
        return ScaleFactor::DEFAULT;
    }

    let clamped = factor.clamp(ScaleFactor::MIN, ScaleFactor::MAX);
    (clamped / ScaleFactor::STEP).round() * ScaleFactor::STEP
}

/// Scale factor label, rounded to one decimal: "1.5x", "2x"
pub fn format_scale_factor(factor: f64) -> String {
    let rounded = (factor * 10.0).round() / 10.0;
    format!("{}x", rounded)
}

/// Ingredient row ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledIngredient {
    pub name: String,
    pub amount: String,
    pub unit: String,
    pub category: IngredientCategory,
}

impl fmt::Display for ScaledIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Zero amounts ("to taste") show only the name
        if self.amount == "0" {
            return f.write_str(&self.name);
        }
        if self.unit.is_empty() {
            return write!(f, "{} {}", self.amount, self.name);
        }
        write!(f, "{} {} {}", self.amount, self.unit, self.name)
    }
}

pub fn scale_ingredient(ingredient: &Ingredient, factor: f64) -> ScaledIngredient {
    ScaledIngredient {
        name: ingredient.name.clone(),
        amount: format_amount(scale(ingredient.amount, factor)),
        unit: ingredient.unit.clone(),
        category: ingredient.category,
    }
}

/// Every ingredient of a recipe, scaled and formatted, in recipe order
pub fn scale_recipe(recipe: &Recipe, factor: f64) -> Vec<ScaledIngredient> {
    recipe
        .ingredients
        .iter()
        .map(|ingredient| scale_ingredient(ingredient, factor))
        .collect()
}
