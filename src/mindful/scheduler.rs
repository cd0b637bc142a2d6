//! The review scheduler: a pure function advancing a note's review metadata.
//!
//! No I/O, no clock access. The caller supplies its local date, which keeps
//! the function deterministic and the command layer trivially testable.

use chrono::{Days, NaiveDate};

use crate::model::Note;

/// Review spacing in days. Each completed review moves the note one step
/// down the table; past the end, the largest interval repeats indefinitely.
pub const REVIEW_INTERVALS: [u32; 7] = [1, 3, 7, 14, 30, 90, 180];

/// How much a single review raises `memory_strength` (clamped at 100).
const STRENGTH_STEP: u8 = 20;

/// Advance a note's review state by one completed review.
///
/// Returns a new note; the input is untouched. `id`, `title`, `content` and
/// `date_created` carry over unchanged. Total for every valid note, including
/// those whose review count is already past the end of the table.
///
/// The table index uses the post-increment count, so the very first review
/// lands on `intervals[1]`, not `intervals[0]`. `intervals` must be
/// non-empty; [`crate::config::MindfulConfig`] validation guarantees that for
/// every table reaching this function.
pub fn schedule(note: &Note, intervals: &[u32], today: NaiveDate) -> Note {
    let review_count = note.review_count + 1;
    let index = (review_count as usize).min(intervals.len() - 1);
    let interval = intervals[index];

    Note {
        review_count,
        last_reviewed: Some(today),
        next_review: today + Days::new(u64::from(interval)),
        memory_strength: note.memory_strength.saturating_add(STRENGTH_STEP).min(100),
        ..note.clone()
    }
}
