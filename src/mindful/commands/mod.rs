//! Business logic for each operation. Commands operate on the store through
//! its method contracts, return structured [`CmdResult`] values and never
//! touch stdout, stderr or a terminal.

use chrono::NaiveDate;

use crate::model::{Note, Strength};

pub mod create;
pub mod delete;
pub mod list;
pub mod review;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A note paired with its computed display state for one rendering date.
#[derive(Debug, Clone)]
pub struct NoteView {
    pub note: Note,
    pub due: bool,
    pub strength: Strength,
}

impl NoteView {
    pub fn new(note: Note, today: NaiveDate) -> Self {
        let due = note.is_due(today);
        let strength = Strength::from_score(note.memory_strength);
        Self {
            note,
            due,
            strength,
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<NoteView>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<NoteView>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
