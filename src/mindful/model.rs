use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single note with its review metadata.
///
/// Serialized in camelCase so the persisted field names stay stable
/// (`dateCreated`, `lastReviewed`, `reviewCount`, `nextReview`,
/// `memoryStrength`); dates are ISO `YYYY-MM-DD` strings on the wire and
/// `lastReviewed` is `null` until the first review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unix epoch milliseconds at creation. The store guarantees uniqueness.
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date_created: NaiveDate,
    pub last_reviewed: Option<NaiveDate>,
    pub review_count: u32,
    /// Date at or after which the note is due for review.
    pub next_review: NaiveDate,
    /// Retention proxy in [0, 100]. Display only.
    pub memory_strength: u8,
}

impl Note {
    /// A fresh, never-reviewed note. First review is due on the creation date.
    pub fn new(id: i64, title: String, content: String, date: NaiveDate) -> Self {
        Self {
            id,
            title,
            content,
            date_created: date,
            last_reviewed: None,
            review_count: 0,
            next_review: date,
            memory_strength: 0,
        }
    }

    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_review <= today
    }
}

/// Display bucket derived from `memory_strength`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Low,
    Medium,
    High,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            Strength::High
        } else if score >= 30 {
            Strength::Medium
        } else {
            Strength::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::High => "high",
            Strength::Medium => "medium",
            Strength::Low => "low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn new_note_starts_unreviewed_and_due_on_creation_date() {
        let date = day("2026-08-01");
        let note = Note::new(1, "Title".into(), "Body".into(), date);
        assert_eq!(note.review_count, 0);
        assert_eq!(note.memory_strength, 0);
        assert_eq!(note.last_reviewed, None);
        assert_eq!(note.next_review, date);
        assert!(note.is_due(date));
        assert!(!note.is_due(day("2026-07-31")));
    }

    #[test]
    fn serializes_with_stable_field_names() {
        let note = Note::new(1700000000000, "T".into(), "C".into(), day("2026-08-01"));
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"dateCreated\":\"2026-08-01\""));
        assert!(json.contains("\"lastReviewed\":null"));
        assert!(json.contains("\"reviewCount\":0"));
        assert!(json.contains("\"nextReview\":\"2026-08-01\""));
        assert!(json.contains("\"memoryStrength\":0"));

        let parsed: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, note);
    }

    #[test]
    fn strength_buckets_match_thresholds() {
        assert_eq!(Strength::from_score(0), Strength::Low);
        assert_eq!(Strength::from_score(29), Strength::Low);
        assert_eq!(Strength::from_score(30), Strength::Medium);
        assert_eq!(Strength::from_score(69), Strength::Medium);
        assert_eq!(Strength::from_score(70), Strength::High);
        assert_eq!(Strength::from_score(100), Strength::High);
        assert_eq!(Strength::High.label(), "high");
    }
}
