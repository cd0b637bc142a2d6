use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteStore, Slot};

/// Remove a note outright. Confirmation happens at the boundary before this
/// runs; an unknown id is a no-op with a warning.
pub fn run<S: Slot>(store: &mut NoteStore<S>, id: i64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let title = store.get(id).map(|note| note.title.clone());

    if store.delete(id)? {
        result.add_message(CmdMessage::success(format!(
            "Note deleted: {}",
            title.unwrap_or_default()
        )));
    } else {
        result.add_message(CmdMessage::warning(format!("No note with id {}", id)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::MemorySlot;
    use crate::store::NoteStore;
    use chrono::NaiveDate;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn removes_note_from_collection() {
        let mut store = NoteStore::load(MemorySlot::new());
        let note = store
            .create("Gone".into(), "".into(), day("2026-08-01"))
            .unwrap();

        let result = run(&mut store, note.id).unwrap();

        assert!(store.notes().is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("Gone"));
    }

    #[test]
    fn unknown_id_warns_without_touching_collection() {
        let mut store = NoteStore::load(MemorySlot::new());
        store
            .create("Stays".into(), "".into(), day("2026-08-01"))
            .unwrap();

        let result = run(&mut store, 12345).unwrap();

        assert_eq!(store.notes().len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
