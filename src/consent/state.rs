use crate::consent::record::ConsentRecord;
use crate::storage::store::{ConsentStore, LoadOutcome};
use std::sync::Arc;

/// Authoritative view over the stored consent.
///
/// Every read of the current consent goes through [`resolve`](Self::resolve);
/// no other component consults the storage slot. Read failures are collapsed
/// to defaults here (logged, never surfaced), so the rest of the system only
/// ever sees a well-formed record.
#[derive(Clone)]
pub struct ConsentState {
    store: Arc<ConsentStore>,
}

impl ConsentState {
    pub fn new(store: Arc<ConsentStore>) -> Self {
        Self { store }
    }

    /// The store this state resolves against.
    pub fn store(&self) -> &ConsentStore {
        &self.store
    }

    /// Produces the current consent record: the stored one if present and
    /// valid, else defaults.
    pub fn resolve(&self) -> ConsentRecord {
        match self.store.load() {
            LoadOutcome::Present(record) => record,
            LoadOutcome::Absent => ConsentRecord::defaults(),
            LoadOutcome::Failed(err) => {
                log::warn!("Failed to read stored consent, applying defaults: {err}");
                ConsentRecord::defaults()
            }
        }
    }

    /// The uncollapsed load result, for callers that must tell "no consent
    /// yet" apart from "storage is broken".
    pub fn resolve_outcome(&self) -> LoadOutcome {
        self.store.load()
    }
}
