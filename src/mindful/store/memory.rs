use super::Slot;
use crate::error::Result;

/// In-memory slot for testing and development.
/// Does NOT persist data beyond the process.
#[derive(Default)]
pub struct MemorySlot {
    blob: Option<String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-seeded with a blob, for exercising the load path.
    pub fn with_blob(blob: &str) -> Self {
        Self {
            blob: Some(blob.to_string()),
        }
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn write(&mut self, blob: &str) -> Result<()> {
        self.blob = Some(blob.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use chrono::NaiveDate;

    use super::*;
    use crate::scheduler::REVIEW_INTERVALS;
    use crate::store::NoteStore;

    pub struct StoreFixture {
        pub store: NoteStore<MemorySlot>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: NoteStore::load(MemorySlot::new()),
            }
        }

        pub fn with_notes(mut self, count: usize, date: NaiveDate) -> Self {
            for i in 0..count {
                let title = format!("Test Note {}", i + 1);
                let content = format!("Content for note {}", i + 1);
                self.store.create(title, content, date).unwrap();
            }
            self
        }

        pub fn with_note(mut self, title: &str, date: NaiveDate) -> Self {
            self.store
                .create(title.to_string(), "Some content".to_string(), date)
                .unwrap();
            self
        }

        /// A note that has already been reviewed `times` times, with each
        /// review dated on the note's creation date.
        pub fn with_reviewed_note(mut self, title: &str, date: NaiveDate, times: u32) -> Self {
            let note = self
                .store
                .create(title.to_string(), "Reviewed content".to_string(), date)
                .unwrap();
            for _ in 0..times {
                self.store.review(note.id, &REVIEW_INTERVALS, date).unwrap();
            }
            self
        }
    }
}
