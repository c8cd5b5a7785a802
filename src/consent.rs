// src/consent.rs
//! Consent record, categories and resolution.

pub mod record;
pub mod state;

pub use record::{ConsentCategory, ConsentRecord, ConsentUpdate, UnknownCategory, CONSENT_VERSION};
pub use state::ConsentState;
