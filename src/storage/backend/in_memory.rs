use crate::storage::slot::StorageSlot;
use anyhow::Result;
use std::sync::Mutex;

/// In-memory slot (no persistence). Used as the default when the embedder
/// supplies no backend, and for tests or incognito sessions.
#[derive(Debug, Default)]
pub struct InMemorySlot {
    value: Mutex<Option<String>>,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot already holding `value`, for seeding test fixtures.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Mutex::new(Some(value.to_string())),
        }
    }
}

impl StorageSlot for InMemorySlot {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.value.lock().unwrap().clone())
    }

    fn set(&self, value: &str) -> Result<()> {
        *self.value.lock().unwrap() = Some(value.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        *self.value.lock().unwrap() = None;
        Ok(())
    }
}
