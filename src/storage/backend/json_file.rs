//! JSON-file-backed slot.
//!
//! `JsonFileSlot` persists the consent payload in a single file on disk.
//!
//! ### I/O characteristics & caveats
//! - `set` rewrites the entire file.
//! - File writes are not atomic.
//! - A missing file reads as an empty slot; a present-but-corrupt payload is
//!   left for the store above to classify.
//!
//! ### Example
//! ```no_run
//! use consent_manager::storage::JsonFileSlot;
//!
//! let slot = JsonFileSlot::new("consent.json");
//! ```

use crate::storage::slot::StorageSlot;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A file-based slot that persists the payload across sessions.
#[derive(Debug)]
pub struct JsonFileSlot {
    /// Path to the file where the payload is stored.
    path: PathBuf,
}

impl JsonFileSlot {
    /// Creates a slot backed by the file at `path`. The file is not created
    /// until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this slot reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for JsonFileSlot {
    fn get(&self) -> Result<Option<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };

        if contents.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(contents))
    }

    fn set(&self, value: &str) -> Result<()> {
        fs::write(&self.path, value)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("Failed to remove {}", self.path.display()))
            }
        }
    }
}
