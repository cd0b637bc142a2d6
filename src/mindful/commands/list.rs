use chrono::NaiveDate;

use crate::commands::{CmdResult, NoteView};
use crate::error::Result;
use crate::store::{NoteStore, Slot};

/// Which slice of the collection to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    #[default]
    All,
    /// Due today or overdue (`next_review <= today`).
    Due,
}

pub fn run<S: Slot>(
    store: &NoteStore<S>,
    filter: ListFilter,
    today: NaiveDate,
) -> Result<CmdResult> {
    let listed: Vec<NoteView> = store
        .filter(|note| match filter {
            ListFilter::All => true,
            ListFilter::Due => note.is_due(today),
        })
        .map(|note| NoteView::new(note.clone(), today))
        .collect();

    Ok(CmdResult::default().with_listed_notes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Strength;
    use crate::store::memory::fixtures::StoreFixture;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn lists_all_notes_in_insertion_order() {
        let fixture = StoreFixture::new()
            .with_note("First", day("2026-08-01"))
            .with_note("Second", day("2026-08-02"));

        let result = run(&fixture.store, ListFilter::All, day("2026-08-02")).unwrap();
        let titles: Vec<_> = result
            .listed_notes
            .iter()
            .map(|view| view.note.title.as_str())
            .collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn due_filter_keeps_only_due_or_overdue_notes() {
        let fixture = StoreFixture::new()
            .with_note("Overdue", day("2026-07-01"))
            .with_reviewed_note("Scheduled out", day("2026-08-01"), 1)
            .with_note("Due today", day("2026-08-01"));

        let result = run(&fixture.store, ListFilter::Due, day("2026-08-01")).unwrap();
        let titles: Vec<_> = result
            .listed_notes
            .iter()
            .map(|view| view.note.title.as_str())
            .collect();
        assert_eq!(titles, ["Overdue", "Due today"]);
        assert!(result.listed_notes.iter().all(|view| view.due));
    }

    #[test]
    fn views_carry_strength_buckets() {
        let fixture = StoreFixture::new()
            .with_note("Fresh", day("2026-08-01"))
            .with_reviewed_note("Practiced", day("2026-08-01"), 2)
            .with_reviewed_note("Strong", day("2026-08-01"), 4);

        let result = run(&fixture.store, ListFilter::All, day("2026-08-01")).unwrap();
        let buckets: Vec<_> = result
            .listed_notes
            .iter()
            .map(|view| view.strength)
            .collect();
        assert_eq!(buckets, [Strength::Low, Strength::Medium, Strength::High]);
    }
}
