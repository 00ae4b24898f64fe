//! Cooking Journal
//!
//! History of cooked recipes, per-recipe notes and the single in-progress
//! ("pending") recipe. The whole state is one JSON document stored under
//! `STORE_KEY`; every mutation rewrites it.

pub mod models;
pub mod stats;

pub use models::{
    CompletionFeedback, HistoryEdit, HistoryEntry, JournalState, NewHistoryEntry, PendingRecipe,
    RecipeNote, UserRecipeData,
};

use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

use crate::error::{JournalError, JournalResult};
use crate::store::KeyValueStore;
use crate::types::BreakfastType;

/// Store key of the journal document
pub const STORE_KEY: &str = "breakfastStore";

/// Source of Unix millisecond timestamps
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now: AtomicI64::new(start_ms),
        }
    }

    pub fn advance(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, ms: i64) {
        self.now.store(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn check_rating(rating: Option<u8>) -> JournalResult<()> {
    match rating {
        Some(r) if !(1..=5).contains(&r) => Err(JournalError::InvalidRating(r)),
        _ => Ok(()),
    }
}

/// Journal over a key-value store
pub struct Journal<S: KeyValueStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    state: JournalState,
}

impl<S: KeyValueStore, C: Clock> Journal<S, C> {
    /// Load the journal document (empty if absent) and migrate legacy notes
    pub fn open(store: S, clock: C) -> JournalResult<Self> {
        let state = match store.get(STORE_KEY)? {
            Some(doc) => serde_json::from_str(&doc)?,
            None => JournalState::default(),
        };

        let mut journal = Self { store, clock, state };
        if !journal.state.recipe_notes.is_empty() {
            let migrated = journal.migrate_legacy_notes();
            tracing::info!("Migrated {} legacy recipe notes", migrated);
            journal.persist()?;
        }

        tracing::debug!(
            "Opened journal: {} history entries, pending: {}",
            journal.state.history.len(),
            journal.state.pending_recipe.is_some()
        );
        Ok(journal)
    }

    /// Move legacy free-text notes into the notes log. Returns how many moved.
    /// Blank notes are dropped; the legacy map is left empty.
    fn migrate_legacy_notes(&mut self) -> usize {
        let legacy = std::mem::take(&mut self.state.recipe_notes);
        let now = self.clock.now_ms();
        let mut migrated = 0;

        for (recipe_id, text) in legacy {
            let content = text.trim();
            if content.is_empty() {
                continue;
            }

            self.recipe_data_mut(&recipe_id).notes.push(RecipeNote {
                id: new_id(),
                timestamp: now,
                content: content.to_string(),
                history_entry_id: None,
            });
            migrated += 1;
        }
        migrated
    }

    fn persist(&mut self) -> JournalResult<()> {
        let doc = serde_json::to_string(&self.state)?;
        self.store.set(STORE_KEY, &doc)?;
        Ok(())
    }

    /// Persist the current state, or roll back to `snapshot` if the write fails
    fn commit(&mut self, snapshot: JournalState) -> JournalResult<()> {
        if let Err(e) = self.persist() {
            tracing::warn!("Journal write failed, changes rolled back: {}", e);
            self.state = snapshot;
            return Err(e);
        }
        Ok(())
    }

    fn recipe_data_mut(&mut self, recipe_id: &str) -> &mut UserRecipeData {
        self.state
            .user_recipes_data
            .entry(recipe_id.to_string())
            .or_insert_with(|| UserRecipeData {
                recipe_id: recipe_id.to_string(),
                notes: Vec::new(),
            })
    }

    fn push_history(&mut self, entry: NewHistoryEntry) -> String {
        let id = new_id();
        self.state.history.insert(
            0,
            HistoryEntry {
                id: id.clone(),
                recipe_id: entry.recipe_id,
                recipe_name: entry.recipe_name,
                recipe_type: entry.recipe_type,
                timestamp: self.clock.now_ms(),
                scale_factor: entry.scale_factor,
                cooking_duration: entry.cooking_duration,
                prep_duration: entry.prep_duration,
                cook_duration: entry.cook_duration,
                rating: entry.rating,
            },
        );
        id
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Record a cooked recipe at the front of the history. Returns its id.
    pub fn add_to_history(&mut self, entry: NewHistoryEntry) -> JournalResult<String> {
        check_rating(entry.rating)?;
        let snapshot = self.state.clone();
        let id = self.push_history(entry);
        self.commit(snapshot)?;
        tracing::debug!("Added history entry {}", id);
        Ok(id)
    }

    pub fn clear_history(&mut self) -> JournalResult<()> {
        let snapshot = self.state.clone();
        self.state.history.clear();
        self.commit(snapshot)
    }

    /// Returns false if no entry has this id
    pub fn remove_from_history(&mut self, id: &str) -> JournalResult<bool> {
        let snapshot = self.state.clone();
        let before = self.state.history.len();
        self.state.history.retain(|entry| entry.id != id);

        if self.state.history.len() == before {
            return Ok(false);
        }
        self.commit(snapshot)?;
        Ok(true)
    }

    /// Replace the timings and rating of an entry; total = prep + cook
    pub fn update_history_entry(&mut self, id: &str, edit: HistoryEdit) -> JournalResult<bool> {
        check_rating(edit.rating)?;

        let snapshot = self.state.clone();
        let Some(entry) = self.state.history.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };

        entry.prep_duration = Some(edit.prep_duration);
        entry.cook_duration = Some(edit.cook_duration);
        entry.cooking_duration = Some(edit.prep_duration + edit.cook_duration);
        entry.rating = edit.rating;

        self.commit(snapshot)?;
        Ok(true)
    }

    /// Newest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.state.history
    }

    pub fn history_entry(&self, id: &str) -> Option<&HistoryEntry> {
        self.state.history.iter().find(|e| e.id == id)
    }

    // ========================================================================
    // Notes
    // ========================================================================

    /// Append a note to a recipe's log. Returns the note id.
    ///
    /// While that recipe is pending, the note is remembered so completion can
    /// link it to the resulting history entry.
    pub fn save_recipe_note(&mut self, recipe_id: &str, content: &str) -> JournalResult<String> {
        let id = new_id();
        let now = self.clock.now_ms();
        let snapshot = self.state.clone();

        self.recipe_data_mut(recipe_id).notes.push(RecipeNote {
            id: id.clone(),
            timestamp: now,
            content: content.to_string(),
            history_entry_id: None,
        });

        if let Some(pending) = self.state.pending_recipe.as_mut() {
            if pending.recipe_id == recipe_id {
                pending.note_ids.push(id.clone());
            }
        }

        self.commit(snapshot)?;
        Ok(id)
    }

    pub fn delete_recipe_note(&mut self, recipe_id: &str, note_id: &str) -> JournalResult<bool> {
        let snapshot = self.state.clone();
        let Some(data) = self.state.user_recipes_data.get_mut(recipe_id) else {
            return Ok(false);
        };

        let before = data.notes.len();
        data.notes.retain(|note| note.id != note_id);
        if data.notes.len() == before {
            return Ok(false);
        }

        self.commit(snapshot)?;
        Ok(true)
    }

    /// Notes for a recipe, oldest first
    pub fn recipe_notes(&self, recipe_id: &str) -> &[RecipeNote] {
        self.state
            .user_recipes_data
            .get(recipe_id)
            .map(|data| data.notes.as_slice())
            .unwrap_or(&[])
    }

    // ========================================================================
    // Pending recipe
    // ========================================================================

    /// Start cooking a recipe, replacing any pending one
    pub fn start_recipe(
        &mut self,
        recipe_id: &str,
        recipe_name: &str,
        recipe_type: BreakfastType,
        scale_factor: f64,
    ) -> JournalResult<()> {
        if let Some(previous) = &self.state.pending_recipe {
            tracing::debug!("Replacing pending recipe {}", previous.recipe_id);
        }
        let snapshot = self.state.clone();

        self.state.pending_recipe = Some(PendingRecipe {
            recipe_id: recipe_id.to_string(),
            recipe_name: recipe_name.to_string(),
            recipe_type,
            scale_factor,
            checked_ingredients: Vec::new(),
            start_time: self.clock.now_ms(),
            prep_end_time: None,
            note_ids: Vec::new(),
        });
        self.commit(snapshot)
    }

    pub fn pending_recipe(&self) -> Option<&PendingRecipe> {
        self.state.pending_recipe.as_ref()
    }

    /// Apply `update` to the pending recipe; false (and no write) when nothing
    /// is pending or the update reports no change
    fn update_pending(
        &mut self,
        action: &str,
        update: impl FnOnce(&mut PendingRecipe, i64) -> bool,
    ) -> JournalResult<bool> {
        let now = self.clock.now_ms();
        let snapshot = self.state.clone();
        let Some(pending) = self.state.pending_recipe.as_mut() else {
            tracing::warn!("{}: no pending recipe", action);
            return Ok(false);
        };

        if !update(pending, now) {
            return Ok(false);
        }
        self.commit(snapshot)?;
        Ok(true)
    }

    pub fn update_pending_progress(&mut self, checked_ingredients: Vec<usize>) -> JournalResult<bool> {
        self.update_pending("update_pending_progress", |pending, _| {
            pending.checked_ingredients = checked_ingredients;
            true
        })
    }

    pub fn update_pending_scale(&mut self, scale_factor: f64) -> JournalResult<bool> {
        self.update_pending("update_pending_scale", |pending, _| {
            pending.scale_factor = scale_factor;
            true
        })
    }

    /// Mark the end of prep. Only the first switch counts.
    pub fn switch_to_cook(&mut self) -> JournalResult<bool> {
        self.update_pending("switch_to_cook", |pending, now| {
            if pending.prep_end_time.is_some() {
                return false;
            }
            pending.prep_end_time = Some(now);
            true
        })
    }

    /// Undo the prep/cook split
    pub fn switch_to_prep(&mut self) -> JournalResult<bool> {
        self.update_pending("switch_to_prep", |pending, _| {
            pending.prep_end_time.take().is_some()
        })
    }

    /// Drop the pending recipe without recording history
    pub fn cancel_pending_recipe(&mut self) -> JournalResult<bool> {
        let snapshot = self.state.clone();
        if self.state.pending_recipe.take().is_none() {
            return Ok(false);
        }
        self.commit(snapshot)?;
        Ok(true)
    }

    /// Finish the pending recipe: record it in history with its timings,
    /// save the feedback note and link session notes to the new entry.
    ///
    /// Returns the new history entry id, or `None` if nothing was pending.
    pub fn complete_pending_recipe(
        &mut self,
        feedback: CompletionFeedback,
    ) -> JournalResult<Option<String>> {
        check_rating(feedback.rating)?;

        let snapshot = self.state.clone();
        let Some(pending) = self.state.pending_recipe.take() else {
            tracing::warn!("complete_pending_recipe: no pending recipe");
            return Ok(None);
        };

        let end = self.clock.now_ms();
        let (prep_duration, cook_duration) = match pending.prep_end_time {
            Some(split) => (Some(split - pending.start_time), Some(end - split)),
            None => (None, None),
        };

        let history_id = self.push_history(NewHistoryEntry {
            recipe_id: pending.recipe_id.clone(),
            recipe_name: pending.recipe_name.clone(),
            recipe_type: pending.recipe_type,
            scale_factor: pending.scale_factor,
            cooking_duration: Some(end - pending.start_time),
            prep_duration,
            cook_duration,
            rating: feedback.rating,
        });

        if let Some(data) = self.state.user_recipes_data.get_mut(&pending.recipe_id) {
            for note in data.notes.iter_mut() {
                if pending.note_ids.contains(&note.id) {
                    note.history_entry_id = Some(history_id.clone());
                }
            }
        }

        if let Some(note) = feedback.note.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            self.recipe_data_mut(&pending.recipe_id).notes.push(RecipeNote {
                id: new_id(),
                timestamp: end,
                content: note.to_string(),
                history_entry_id: Some(history_id.clone()),
            });
        }

        self.commit(snapshot)?;
        tracing::debug!("Completed {} as history entry {}", pending.recipe_id, history_id);
        Ok(Some(history_id))
    }

    // ========================================================================
    // Access
    // ========================================================================

    pub fn state(&self) -> &JournalState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
