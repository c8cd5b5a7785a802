use anyhow::Result;
use std::sync::Arc;

/// A handle to a type-erased storage slot.
///
/// Slot implementations must be **`Send + Sync` and internally synchronized**,
/// since callers hold only `&self` when invoking trait methods.
pub type SlotHandle = Arc<dyn StorageSlot>;

/// Object-safe single-value storage slot (one key of a DOM-like Storage).
///
/// The consent manager persists exactly one payload, so the interface is a
/// single slot rather than a keyed map. Errors are reported through
/// `anyhow`; the store above decides which of them are recoverable.
pub trait StorageSlot: Send + Sync {
    /// Returns the raw payload, or `None` when the slot is empty.
    fn get(&self) -> Result<Option<String>>;

    /// Replaces the slot contents with `value`.
    fn set(&self, value: &str) -> Result<()>;

    /// Empties the slot.
    fn remove(&self) -> Result<()>;
}
