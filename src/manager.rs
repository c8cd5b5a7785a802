//! The consent manager instance.
//!
//! [`ConsentManager`] wires the storage slot, the resolved state, the event
//! bus and the banner machine into one explicitly constructed instance. It
//! replaces the kind of process-wide mutable global a page script would
//! otherwise hang its consent API on: the embedder builds it once at startup
//! and passes it (usually inside an `Arc`) to whatever needs it.
//!
//! # Example
//!
//! ```rust
//! use consent_manager::consent::ConsentCategory;
//! use consent_manager::manager::ConsentManager;
//!
//! let manager = ConsentManager::builder().build();
//! manager.start();
//!
//! assert!(!manager.has_consent(ConsentCategory::Analytics));
//! manager.accept_all().unwrap();
//! assert!(manager.has_consent(ConsentCategory::Analytics));
//! ```

use crate::banner::{BannerAction, BannerMachine, BannerState, NullSurface, SurfaceHandle};
use crate::config::ConsentConfig;
use crate::consent::record::{ConsentCategory, ConsentRecord, ConsentUpdate};
use crate::consent::state::ConsentState;
use crate::errors::ConsentError;
use crate::events::{ConsentBus, ConsentEvent, Subscription};
use crate::storage::store::{ConsentStore, LoadOutcome};
use crate::storage::{InMemorySlot, JsonFileSlot, SlotHandle};
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for [`ConsentManager`].
///
/// With no slot configured the manager keeps consent in memory only; with
/// [`persist_dir`](Self::persist_dir) it writes a JSON file named after the
/// configured storage key.
#[derive(Default)]
pub struct ConsentManagerBuilder {
    config: ConsentConfig,
    slot: Option<SlotHandle>,
    persist_dir: Option<PathBuf>,
    surface: Option<SurfaceHandle>,
}

impl ConsentManagerBuilder {
    pub fn config(mut self, config: ConsentConfig) -> Self {
        self.config = config;
        self
    }

    /// Uses `slot` as the storage backend. Takes precedence over
    /// [`persist_dir`](Self::persist_dir).
    pub fn slot(mut self, slot: SlotHandle) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Persists the record as `<dir>/<storage_key>.json`.
    pub fn persist_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.persist_dir = Some(dir.into());
        self
    }

    /// Attaches the banner surface. Without one the manager runs headless
    /// against a [`NullSurface`].
    pub fn surface(mut self, surface: SurfaceHandle) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn build(self) -> ConsentManager {
        let slot: SlotHandle = match (self.slot, self.persist_dir) {
            (Some(slot), _) => slot,
            (None, Some(dir)) => Arc::new(JsonFileSlot::new(
                dir.join(format!("{}.json", self.config.storage_key)),
            )),
            (None, None) => Arc::new(InMemorySlot::new()),
        };

        let surface = self.surface.unwrap_or_else(|| Arc::new(NullSurface));

        ConsentManager {
            state: ConsentState::new(Arc::new(ConsentStore::new(slot))),
            bus: ConsentBus::with_capacity(self.config.channel_capacity),
            banner: BannerMachine::new(surface),
            config: self.config,
        }
    }
}

/// Client-side consent manager: persists the user's tracking preferences,
/// exposes them to other components and drives the banner state machine.
pub struct ConsentManager {
    config: ConsentConfig,
    state: ConsentState,
    bus: ConsentBus,
    banner: BannerMachine,
}

impl ConsentManager {
    pub fn builder() -> ConsentManagerBuilder {
        ConsentManagerBuilder::default()
    }

    /// Performs the startup transition and returns the resulting banner
    /// state.
    ///
    /// With a valid stored record the banner stays hidden and the record is
    /// immediately announced to subscribers; otherwise (first visit, stale
    /// version, broken storage) the banner comes up with default toggles.
    pub fn start(&self) -> BannerState {
        match self.state.resolve_outcome() {
            LoadOutcome::Present(record) => {
                log::debug!("Stored consent found, announcing to subscribers");
                self.bus.publish(ConsentEvent::Applied { record });
                BannerState::Hidden
            }
            LoadOutcome::Absent => {
                self.banner.show_with(&ConsentRecord::defaults());
                BannerState::Visible
            }
            LoadOutcome::Failed(err) => {
                log::warn!("Failed to read stored consent, treating as absent: {err}");
                self.banner.show_with(&ConsentRecord::defaults());
                BannerState::Visible
            }
        }
    }

    /// The current resolved record (defaults if none stored).
    pub fn get_consent(&self) -> ConsentRecord {
        self.state.resolve()
    }

    /// Whether the given category is currently approved.
    pub fn has_consent(&self, category: ConsentCategory) -> bool {
        self.state.resolve().granted(category)
    }

    /// Reopens the banner pre-populated from the current resolved record.
    /// Callable any time, from either banner state.
    pub fn open_settings(&self) {
        let record = self.state.resolve();
        self.banner.show_with(&record);
    }

    /// Approves every optional category.
    pub fn accept_all(&self) -> Result<ConsentRecord, ConsentError> {
        self.apply(ConsentUpdate::accept_all())
    }

    /// Keeps necessary cookies only.
    pub fn reject_all(&self) -> Result<ConsentRecord, ConsentError> {
        self.apply(ConsentUpdate::reject_all())
    }

    /// Saves an explicit selection.
    pub fn accept_selected(&self, update: ConsentUpdate) -> Result<ConsentRecord, ConsentError> {
        self.apply(update)
    }

    /// Applies a banner action. `AcceptSelected` reads the current surface
    /// toggle values.
    pub fn apply_action(&self, action: BannerAction) -> Result<ConsentRecord, ConsentError> {
        let update = action
            .update()
            .unwrap_or_else(|| self.banner.selection());
        self.apply(update)
    }

    fn apply(&self, update: ConsentUpdate) -> Result<ConsentRecord, ConsentError> {
        // A failed write leaves the banner up and publishes nothing, so the
        // user can retry the action.
        let record = self.state.store().save(&update)?;
        self.bus.publish(ConsentEvent::Applied {
            record: record.clone(),
        });
        self.banner.hide();
        Ok(record)
    }

    /// Registers a subscriber for [`ConsentEvent`]s.
    pub fn subscribe(&self) -> Subscription {
        self.bus.subscribe()
    }

    pub fn banner_state(&self) -> BannerState {
        self.banner.state()
    }

    pub fn config(&self) -> &ConsentConfig {
        &self.config
    }
}
