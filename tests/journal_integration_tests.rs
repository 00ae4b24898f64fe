//! Journal Integration Tests
//!
//! Full cooking sessions against a directory-backed store, including reopening
//! the journal from disk and migrating documents written by the mobile app.

use breakfast_ratios::journal::stats::{format_duration, type_breakdown};
use breakfast_ratios::journal::{CompletionFeedback, Journal, NewHistoryEntry, STORE_KEY};
use breakfast_ratios::{BreakfastType, FileStore, KeyValueStore, ManualClock};

const T0: i64 = 1_700_000_000_000;
const MINUTE: i64 = 60_000;

fn open<'c>(dir: &std::path::Path, clock: &'c ManualClock) -> Journal<FileStore, &'c ManualClock> {
    let store = FileStore::open(dir).unwrap();
    Journal::open(store, clock).unwrap()
}

#[test]
fn test_cooking_session_with_prep_and_cook() {
    let dir = tempfile::tempdir().unwrap();
    let clock = ManualClock::new(T0);
    let mut journal = open(dir.path(), &clock);

    journal
        .start_recipe("popover-traditional", "Traditional Popovers", BreakfastType::Popover, 1.0)
        .unwrap();
    journal.update_pending_progress(vec![0, 2]).unwrap();

    clock.advance(10 * MINUTE);
    let session_note = journal
        .save_recipe_note("popover-traditional", "room temperature eggs")
        .unwrap();
    let other_note = journal.save_recipe_note("crepes-basic", "unrelated").unwrap();
    assert!(journal.switch_to_cook().unwrap());

    clock.advance(35 * MINUTE);
    let feedback = CompletionFeedback {
        rating: Some(5),
        note: Some("  tall and crisp  ".to_string()),
    };
    let entry_id = journal.complete_pending_recipe(feedback).unwrap().unwrap();

    let entry = journal.history_entry(&entry_id).unwrap();
    assert_eq!(entry.prep_duration, Some(10 * MINUTE));
    assert_eq!(entry.cook_duration, Some(35 * MINUTE));
    assert_eq!(entry.cooking_duration, Some(45 * MINUTE));
    assert_eq!(entry.rating, Some(5));
    assert_eq!(format_duration(entry.cooking_duration.unwrap()), "45 min");
    assert!(journal.pending_recipe().is_none());

    let notes = journal.recipe_notes("popover-traditional");
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, session_note);
    assert_eq!(notes[0].history_entry_id.as_deref(), Some(entry_id.as_str()));
    assert_eq!(notes[1].content, "tall and crisp");
    assert_eq!(notes[1].history_entry_id.as_deref(), Some(entry_id.as_str()));

    let other = journal.recipe_notes("crepes-basic");
    assert_eq!(other[0].id, other_note);
    assert_eq!(other[0].history_entry_id, None);
}

#[test]
fn test_journal_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let clock = ManualClock::new(T0);

    {
        let mut journal = open(dir.path(), &clock);
        journal
            .add_to_history(NewHistoryEntry::new("crepes-basic", "Basic Crepes", BreakfastType::Crepes, 1.5))
            .unwrap();
        journal
            .start_recipe("waffles-quick", "Quick Waffles", BreakfastType::Waffles, 2.0)
            .unwrap();
    }

    clock.advance(5 * MINUTE);
    let mut journal = open(dir.path(), &clock);
    assert_eq!(journal.history().len(), 1);
    assert_eq!(journal.pending_recipe().unwrap().recipe_id, "waffles-quick");

    let id = journal.complete_pending_recipe(CompletionFeedback::default()).unwrap().unwrap();
    assert_eq!(journal.history()[0].id, id);
    assert_eq!(journal.history()[0].cooking_duration, Some(5 * MINUTE));

    let shares = type_breakdown(journal.history());
    let types: Vec<BreakfastType> = shares.iter().map(|s| s.breakfast_type).collect();
    assert_eq!(types, vec![BreakfastType::Waffles, BreakfastType::Crepes]);
}

#[test]
fn test_cancelled_session_leaves_no_history() {
    let dir = tempfile::tempdir().unwrap();
    let clock = ManualClock::new(T0);
    let mut journal = open(dir.path(), &clock);

    journal
        .start_recipe("crepes-basic", "Basic Crepes", BreakfastType::Crepes, 1.0)
        .unwrap();
    assert!(journal.cancel_pending_recipe().unwrap());

    let reopened = open(dir.path(), &clock);
    assert!(reopened.pending_recipe().is_none());
    assert!(reopened.history().is_empty());
}

#[test]
fn test_app_document_with_legacy_notes_migrates_once() {
    let dir = tempfile::tempdir().unwrap();
    let legacy = r#"{
        "history": [{
            "id": "h1", "recipeId": "crepes-basic", "recipeName": "Basic Crepes",
            "recipeType": "crepes", "timestamp": 1690000000000, "scaleFactor": 1
        }],
        "recipeNotes": { "crepes-basic": "rest the batter overnight" }
    }"#;
    FileStore::open(dir.path()).unwrap().set(STORE_KEY, legacy).unwrap();

    let clock = ManualClock::new(T0);
    {
        let journal = open(dir.path(), &clock);
        assert_eq!(journal.history().len(), 1);
        assert_eq!(journal.recipe_notes("crepes-basic").len(), 1);
    }

    let doc = FileStore::open(dir.path()).unwrap().get(STORE_KEY).unwrap().unwrap();
    assert!(doc.contains("\"recipeNotes\":{}"));
    assert!(doc.contains("\"userRecipesData\":{\"crepes-basic\""));

    let journal = open(dir.path(), &clock);
    let notes = journal.recipe_notes("crepes-basic");
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].content, "rest the batter overnight");
    assert!(journal.state().recipe_notes.is_empty());
}
