//! Journal document types.
//!
//! Field names serialize in camelCase so documents written by the mobile app
//! (`recipeId`, `scaleFactor`, ...) load unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::BreakfastType;

/// A cooked recipe. Durations are milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub recipe_id: String,
    pub recipe_name: String,
    pub recipe_type: BreakfastType,
    /// Unix milliseconds
    pub timestamp: i64,
    pub scale_factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_duration: Option<i64>,
    /// 1-5 stars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

/// History entry before the journal assigns its id and timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct NewHistoryEntry {
    pub recipe_id: String,
    pub recipe_name: String,
    pub recipe_type: BreakfastType,
    pub scale_factor: f64,
    pub cooking_duration: Option<i64>,
    pub prep_duration: Option<i64>,
    pub cook_duration: Option<i64>,
    pub rating: Option<u8>,
}

impl NewHistoryEntry {
    pub fn new(recipe_id: &str, recipe_name: &str, recipe_type: BreakfastType, scale_factor: f64) -> Self {
        Self {
            recipe_id: recipe_id.to_string(),
            recipe_name: recipe_name.to_string(),
            recipe_type,
            scale_factor,
            cooking_duration: None,
            prep_duration: None,
            cook_duration: None,
            rating: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeNote {
    pub id: String,
    pub timestamp: i64,
    pub content: String,
    /// Set when the note was written while cooking, or as completion feedback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_entry_id: Option<String>,
}

/// Per-recipe user data (currently just the notes log)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecipeData {
    pub recipe_id: String,
    #[serde(default)]
    pub notes: Vec<RecipeNote>,
}

/// The one recipe currently being cooked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRecipe {
    pub recipe_id: String,
    pub recipe_name: String,
    pub recipe_type: BreakfastType,
    pub scale_factor: f64,
    /// Indices of ticked-off ingredients
    #[serde(default)]
    pub checked_ingredients: Vec<usize>,
    pub start_time: i64,
    /// Set when the cook switches from prep to cook mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_end_time: Option<i64>,
    /// Notes saved for this recipe during the session
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note_ids: Vec<String>,
}

/// Whole persisted journal document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JournalState {
    /// Newest first
    pub history: Vec<HistoryEntry>,
    /// Legacy free-text notes (recipe id -> text), migrated on open
    pub recipe_notes: BTreeMap<String, String>,
    pub user_recipes_data: BTreeMap<String, UserRecipeData>,
    pub pending_recipe: Option<PendingRecipe>,
}

/// Optional feedback given when finishing a recipe
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionFeedback {
    pub rating: Option<u8>,
    pub note: Option<String>,
}

/// Corrected timings (milliseconds) and rating for a history entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryEdit {
    pub prep_duration: i64,
    pub cook_duration: i64,
    /// `None` clears the rating
    pub rating: Option<u8>,
}
