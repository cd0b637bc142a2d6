use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteStore, Slot};

pub fn run<S: Slot>(
    store: &mut NoteStore<S>,
    id: i64,
    intervals: &[u32],
    today: NaiveDate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.review(id, intervals, today)? {
        Some(note) => {
            result.add_message(CmdMessage::success(format!(
                "Reviewed: {} (next review {})",
                note.title, note.next_review
            )));
            result.affected_notes.push(note);
        }
        None => {
            // Stale id, likely a note deleted since the last listing.
            result.add_message(CmdMessage::warning(format!("No note with id {}", id)));
        }
    }
    Ok(result)
}
