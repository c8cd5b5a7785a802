pub mod banner;
pub mod config;
pub mod consent;
pub mod errors;
pub mod events;
pub mod manager;
pub mod storage;

pub use banner::{element_ids, BannerAction, BannerState, BannerSurface, NullSurface};
pub use config::{ConsentConfig, CONSENT_STORAGE_KEY};
pub use consent::{ConsentCategory, ConsentRecord, ConsentState, ConsentUpdate, CONSENT_VERSION};
pub use errors::ConsentError;
pub use events::{ConsentBus, ConsentEvent, Subscription};
pub use manager::{ConsentManager, ConsentManagerBuilder};
pub use storage::{ConsentStore, InMemorySlot, JsonFileSlot, LoadOutcome, StorageSlot};
