//! Load/save of the versioned consent record.
//!
//! [`ConsentStore`] is the only component that touches the storage slot. It
//! validates on the way in and stamps the authoritative fields on the way
//! out:
//!
//! - `load` fails **soft**: an empty slot and a version-mismatched record
//!   both read as [`LoadOutcome::Absent`]; an unreadable slot or a corrupt
//!   payload reads as [`LoadOutcome::Failed`]. Nothing is raised.
//! - `save` merges the update over defaults, forces `version`, `necessary`
//!   and `timestamp`, persists and returns the stored record. Write failures
//!   propagate as [`ConsentError::StorageWrite`].

use crate::consent::record::{ConsentRecord, ConsentUpdate};
use crate::errors::ConsentError;
use crate::storage::slot::SlotHandle;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Result of reading the consent slot.
///
/// Keeping the three cases apart lets callers distinguish "no consent yet"
/// from "storage is broken"; the UI path collapses both to defaults.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The slot held a structurally valid record written under the current
    /// schema version.
    Present(ConsentRecord),
    /// The slot was empty, or the record was discarded because its version
    /// did not match the current schema.
    Absent,
    /// The slot was unreadable or the payload failed validation.
    Failed(ConsentError),
}

impl LoadOutcome {
    /// The record, if one was present and valid.
    pub fn record(self) -> Option<ConsentRecord> {
        match self {
            LoadOutcome::Present(record) => Some(record),
            LoadOutcome::Absent | LoadOutcome::Failed(_) => None,
        }
    }
}

/// Reads and writes the single versioned consent record through a slot.
pub struct ConsentStore {
    slot: SlotHandle,
}

impl ConsentStore {
    pub fn new(slot: SlotHandle) -> Self {
        Self { slot }
    }

    /// Reads and validates the stored record.
    pub fn load(&self) -> LoadOutcome {
        let raw = match self.slot.get() {
            Ok(Some(raw)) => raw,
            Ok(None) => return LoadOutcome::Absent,
            Err(err) => return LoadOutcome::Failed(ConsentError::StorageRead(err)),
        };

        let record: ConsentRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(err) => return LoadOutcome::Failed(ConsentError::InvalidRecord(err)),
        };

        if !record.is_current_version() {
            // Schema changed since the record was written: force re-consent.
            return LoadOutcome::Absent;
        }

        LoadOutcome::Present(record)
    }

    /// Merges `update` over defaults, stamps the authoritative fields,
    /// persists the result and returns it.
    pub fn save(&self, update: &ConsentUpdate) -> Result<ConsentRecord, ConsentError> {
        let mut record = ConsentRecord::defaults().merged(update);
        record.timestamp = Some(now_rfc3339());

        let payload =
            serde_json::to_string(&record).map_err(|err| ConsentError::StorageWrite(err.into()))?;
        self.slot.set(&payload).map_err(ConsentError::StorageWrite)?;

        Ok(record)
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .expect("RFC 3339 formatting of the current instant")
}
