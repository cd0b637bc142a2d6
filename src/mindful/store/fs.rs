use std::fs;
use std::path::PathBuf;

use super::Slot;
use crate::error::{MindfulError, Result};

/// Production slot: the serialized collection lives in a single file
/// (by convention `notes.json` under the data directory).
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Slot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let blob = fs::read_to_string(&self.path).map_err(MindfulError::Io)?;
        Ok(Some(blob))
    }

    fn write(&mut self, blob: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(MindfulError::Io)?;
            }
        }
        fs::write(&self.path, blob).map_err(MindfulError::Io)?;
        Ok(())
    }
}
