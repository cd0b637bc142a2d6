use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MindfulError, Result};
use crate::store::{NoteStore, Slot};

pub fn run<S: Slot>(
    store: &mut NoteStore<S>,
    title: String,
    content: String,
    date: NaiveDate,
) -> Result<CmdResult> {
    // A title is required; content may be empty.
    if title.trim().is_empty() {
        return Err(MindfulError::Input("Title cannot be empty".to_string()));
    }

    let note = store.create(title, content, date)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note created ({}): {}",
        note.id, note.title
    )));
    result.affected_notes.push(note);
    Ok(result)
}
