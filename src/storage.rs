//! Storage for the consent record.
//!
//! This module defines the trait, types, and implementations that persist
//! the user's consent decision. It provides both in-memory and file-backed
//! slots and the [`ConsentStore`] that validates and stamps records on their
//! way through.
//!
//! # Concepts
//!
//! The persisted state is a **single slot** holding one JSON-serialized
//! [`ConsentRecord`](crate::consent::ConsentRecord). The slot itself is an
//! abstract key-value cell behind the [`StorageSlot`] trait; everything the
//! manager knows about validation, versioning and timestamps lives in
//! [`ConsentStore`], never in a backend.
//!
//! # Available types
//!
//! - [`StorageSlot`] — Trait for any slot backend.
//! - [`SlotHandle`] — Type-erased `Arc<dyn StorageSlot>`.
//! - [`InMemorySlot`] — Ephemeral backend for tests and incognito sessions.
//! - [`JsonFileSlot`] — File-backed persistent slot.
//! - [`ConsentStore`] — Load/save of the versioned record.
//! - [`LoadOutcome`] — Tri-state result of a load.
//!
//! # Choosing a backend
//!
//! - For persistent consent, use [`JsonFileSlot`].
//! - For tests or sessions that must forget everything, use [`InMemorySlot`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use consent_manager::consent::ConsentUpdate;
//! use consent_manager::storage::{ConsentStore, InMemorySlot};
//!
//! let store = ConsentStore::new(Arc::new(InMemorySlot::new()));
//! let record = store.save(&ConsentUpdate::accept_all()).unwrap();
//! assert!(record.analytics && record.marketing);
//! ```

/// Slot module, defining the key-value slot interface.
pub mod slot;
/// Store module, providing load/save of the versioned record.
pub mod store;

/// Slot backends.
pub mod backend {
    /// In-memory slot implementation.
    pub mod in_memory;
    /// JSON-file-backed slot implementation.
    pub mod json_file;
}

pub use backend::in_memory::InMemorySlot;
pub use backend::json_file::JsonFileSlot;
pub use slot::{SlotHandle, StorageSlot};
pub use store::{ConsentStore, LoadOutcome};
