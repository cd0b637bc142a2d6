//! # API Facade
//!
//! The single entry point for all note operations, regardless of the UI
//! driving them. A thin dispatch layer over [`crate::commands`]: no business
//! logic, no I/O, no presentation — it returns structured `CmdResult`s and
//! leaves rendering (and the delete confirmation prompt) to the boundary.
//!
//! `NotesApi<S: Slot>` is generic over the storage slot:
//! - Production: `NotesApi<FileSlot>`
//! - Testing: `NotesApi<MemorySlot>`

use chrono::NaiveDate;

use crate::commands;
use crate::commands::list::ListFilter;
use crate::error::Result;
use crate::store::{NoteStore, Slot};

/// The main API facade. Owns the note store and the interval table for the
/// life of the process.
pub struct NotesApi<S: Slot> {
    store: NoteStore<S>,
    intervals: Vec<u32>,
}

impl<S: Slot> NotesApi<S> {
    pub fn new(store: NoteStore<S>, intervals: Vec<u32>) -> Self {
        Self { store, intervals }
    }

    pub fn create_note(
        &mut self,
        title: String,
        content: String,
        date: NaiveDate,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, title, content, date)
    }

    pub fn list_notes(&self, filter: ListFilter, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter, today)
    }

    pub fn review_note(&mut self, id: i64, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::review::run(&mut self.store, id, &self.intervals, today)
    }

    pub fn delete_note(&mut self, id: i64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    /// The stored title for a note, if it exists. Used by the boundary to
    /// phrase the delete confirmation.
    pub fn note_title(&self, id: i64) -> Option<String> {
        self.store.get(id).map(|note| note.title.clone())
    }
}
