//! # Storage Layer
//!
//! The note collection is mirrored to a single persisted slot as one JSON
//! blob — the whole collection is rewritten on every mutation. The [`Slot`]
//! trait abstracts where that blob lives:
//!
//! - [`fs::FileSlot`]: production storage, one `notes.json` file
//! - [`memory::MemorySlot`]: in-memory slot for tests, no persistence
//!
//! [`NoteStore`] owns the in-memory collection and is the only writer to the
//! slot. Constructed once per process and handed to the API facade; commands
//! receive it by reference. Loading fails soft: an absent or malformed blob
//! yields an empty collection, never an error.

use chrono::{NaiveDate, Utc};

use crate::error::Result;
use crate::model::Note;
use crate::scheduler;

pub mod fs;
pub mod memory;

/// A persisted slot holding the serialized note collection.
///
/// `read` returns `None` when nothing has been persisted yet; `write`
/// overwrites the prior blob wholesale. Atomicity is delegated to the
/// backing storage.
pub trait Slot {
    fn read(&self) -> Result<Option<String>>;
    fn write(&mut self, blob: &str) -> Result<()>;
}

/// Ordered collection of notes, mirrored to a [`Slot`].
pub struct NoteStore<S: Slot> {
    slot: S,
    notes: Vec<Note>,
}

impl<S: Slot> NoteStore<S> {
    /// Load the collection from the slot. An absent or malformed blob
    /// initializes an empty collection.
    pub fn load(slot: S) -> Self {
        let notes = match slot.read() {
            Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_default(),
            Ok(None) | Err(_) => Vec::new(),
        };
        Self { slot, notes }
    }

    /// All notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Lazy filtered view of the collection, preserving order.
    pub fn filter<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Note>
    where
        P: Fn(&Note) -> bool + 'a,
    {
        self.notes.iter().filter(move |note| predicate(note))
    }

    pub fn get(&self, id: i64) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Create a note due on its own creation date, append it and persist.
    pub fn create(&mut self, title: String, content: String, date: NaiveDate) -> Result<Note> {
        let note = Note::new(self.next_id(), title, content, date);
        self.notes.push(note.clone());
        self.persist()?;
        Ok(note)
    }

    /// Remove the note with the given id. Returns whether anything was
    /// removed; an unknown id is a no-op, not an error.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Apply the review scheduler to the note with the given id, replacing it
    /// in place. Returns the updated note, or `None` (no-op) for an unknown
    /// id.
    pub fn review(
        &mut self,
        id: i64,
        intervals: &[u32],
        today: NaiveDate,
    ) -> Result<Option<Note>> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return Ok(None);
        };
        let updated = scheduler::schedule(note, intervals, today);
        *note = updated.clone();
        self.persist()?;
        Ok(Some(updated))
    }

    /// Serialize the full collection and overwrite the slot.
    pub fn persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.notes)?;
        self.slot.write(&blob)
    }

    // Current-time-derived id, bumped past any existing id so fast successive
    // creates within the same millisecond stay unique.
    fn next_id(&self) -> i64 {
        let candidate = Utc::now().timestamp_millis();
        match self.notes.iter().map(|note| note.id).max() {
            Some(max) if candidate <= max => max + 1,
            _ => candidate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemorySlot;
    use super::*;
    use crate::scheduler::REVIEW_INTERVALS;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn store() -> NoteStore<MemorySlot> {
        NoteStore::load(MemorySlot::new())
    }

    #[test]
    fn load_from_empty_slot_yields_empty_collection() {
        assert!(store().notes().is_empty());
    }

    #[test]
    fn load_from_malformed_blob_yields_empty_collection() {
        let slot = MemorySlot::with_blob("{not json");
        let store = NoteStore::load(slot);
        assert!(store.notes().is_empty());
    }

    #[test]
    fn create_appends_in_order() {
        let mut store = store();
        let a = store
            .create("A".into(), "".into(), day("2026-08-01"))
            .unwrap();
        let b = store
            .create("B".into(), "".into(), day("2026-08-02"))
            .unwrap();

        let titles: Vec<_> = store.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
        assert_ne!(a.id, b.id);
        assert_eq!(b.next_review, day("2026-08-02"));
    }

    #[test]
    fn ids_stay_unique_under_fast_successive_creates() {
        let mut store = store();
        let mut ids = Vec::new();
        for i in 0..50 {
            let note = store
                .create(format!("Note {i}"), "".into(), day("2026-08-01"))
                .unwrap();
            ids.push(note.id);
        }
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn delete_removes_matching_note() {
        let mut store = store();
        let a = store
            .create("A".into(), "".into(), day("2026-08-01"))
            .unwrap();
        store
            .create("B".into(), "".into(), day("2026-08-01"))
            .unwrap();

        assert!(store.delete(a.id).unwrap());
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].title, "B");
    }

    #[test]
    fn delete_unknown_id_leaves_collection_unchanged() {
        let mut store = store();
        store
            .create("A".into(), "".into(), day("2026-08-01"))
            .unwrap();

        assert!(!store.delete(999).unwrap());
        assert_eq!(store.notes().len(), 1);
    }

    #[test]
    fn review_unknown_id_is_a_noop() {
        let mut store = store();
        let before = store
            .create("A".into(), "".into(), day("2026-08-01"))
            .unwrap();

        let result = store
            .review(before.id + 1, &REVIEW_INTERVALS, day("2026-08-01"))
            .unwrap();
        assert!(result.is_none());
        assert_eq!(store.notes()[0], before);
    }

    #[test]
    fn review_replaces_note_in_place() {
        let mut store = store();
        let note = store
            .create("A".into(), "".into(), day("2026-08-01"))
            .unwrap();

        let updated = store
            .review(note.id, &REVIEW_INTERVALS, day("2026-08-01"))
            .unwrap()
            .unwrap();

        assert_eq!(updated.review_count, 1);
        assert_eq!(store.get(note.id).unwrap(), &updated);
        assert_eq!(store.notes().len(), 1);
    }

    #[test]
    fn filter_is_idempotent_and_order_preserving() {
        let mut store = store();
        store
            .create("One".into(), "".into(), day("2026-08-01"))
            .unwrap();
        store
            .create("Two".into(), "".into(), day("2026-09-01"))
            .unwrap();
        store
            .create("Three".into(), "".into(), day("2026-08-15"))
            .unwrap();

        let due = |n: &Note| n.is_due(day("2026-08-20"));
        let first: Vec<i64> = store.filter(due).map(|n| n.id).collect();
        let second: Vec<i64> = store.filter(due).map(|n| n.id).collect();

        assert_eq!(first, second);
        let titles: Vec<_> = store.filter(due).map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["One", "Three"]);
    }

    #[test]
    fn persist_then_load_round_trips_the_collection() {
        let mut store = store();
        let note = store
            .create("Keep".into(), "Body".into(), day("2026-08-01"))
            .unwrap();
        store
            .review(note.id, &REVIEW_INTERVALS, day("2026-08-01"))
            .unwrap();

        let blob = MemorySlot::with_blob(
            &serde_json::to_string(store.notes()).unwrap(),
        );
        let reloaded = NoteStore::load(blob);

        assert_eq!(reloaded.notes(), store.notes());
    }
}
