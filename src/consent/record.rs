//! Consent core types.
//!
//! This module defines the serializable [`ConsentRecord`], the partial
//! [`ConsentUpdate`] a user action carries, and the [`ConsentCategory`]
//! lookup enum.
//!
//! # Versioning
//!
//! Every persisted record carries a schema version. A stored record whose
//! version differs from [`CONSENT_VERSION`] is discarded on load as if no
//! record existed: there is no partial migration, a schema change forces
//! re-consent.
//!
//! # Merge policy
//!
//! An update overwrites only the optional categories (`analytics`,
//! `marketing`). `necessary` is not part of [`ConsentUpdate`] at all, so it
//! can never be taken from user input; `version` is reset to the current
//! schema version on every merge, and the timestamp is stamped by the store
//! at write time.
//!
//! ```rust
//! use consent_manager::consent::{ConsentRecord, ConsentUpdate};
//!
//! let merged = ConsentRecord::defaults().merged(&ConsentUpdate::accept_all());
//! assert!(merged.necessary && merged.analytics && merged.marketing);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Schema version of the persisted record.
pub const CONSENT_VERSION: &str = "1.0";

/// A tracking category a script can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentCategory {
    /// Non-optional category, always granted, not user-configurable.
    Necessary,
    Analytics,
    Marketing,
}

impl Display for ConsentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsentCategory::Necessary => write!(f, "necessary"),
            ConsentCategory::Analytics => write!(f, "analytics"),
            ConsentCategory::Marketing => write!(f, "marketing"),
        }
    }
}

/// Error returned when parsing an unrecognized category name.
#[derive(Debug, thiserror::Error)]
#[error("Unknown consent category: {0}")]
pub struct UnknownCategory(String);

impl FromStr for ConsentCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "necessary" => Ok(ConsentCategory::Necessary),
            "analytics" => Ok(ConsentCategory::Analytics),
            "marketing" => Ok(ConsentCategory::Marketing),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A consent record as stored/serialized by the manager.
///
/// This is the JSON payload held in the storage slot and the payload of
/// every consent notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
    /// Schema version the record was written under.
    pub version: String,

    /// Always `true`. Present in the payload so external readers see the
    /// full category set, but never taken from user input.
    pub necessary: bool,

    /// Whether analytics tracking is approved.
    pub analytics: bool,

    /// Whether marketing tracking is approved.
    pub marketing: bool,

    /// RFC 3339 instant of the last write. `None` until first saved.
    pub timestamp: Option<String>,
}

impl ConsentRecord {
    /// The record in effect before the user has decided anything.
    pub fn defaults() -> Self {
        Self {
            version: CONSENT_VERSION.to_string(),
            necessary: true,
            analytics: false,
            marketing: false,
            timestamp: None,
        }
    }

    /// Whether this record was written under the current schema version.
    pub fn is_current_version(&self) -> bool {
        self.version == CONSENT_VERSION
    }

    /// Whether the given category is approved by this record.
    pub fn granted(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Necessary => true,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
        }
    }

    /// Applies `update` on top of this record.
    ///
    /// Only the optional categories are taken from the update; `necessary`
    /// stays forced on and `version` is reset to [`CONSENT_VERSION`]. The
    /// timestamp is left untouched for the store to stamp at write time.
    pub fn merged(&self, update: &ConsentUpdate) -> Self {
        Self {
            version: CONSENT_VERSION.to_string(),
            necessary: true,
            analytics: update.analytics.unwrap_or(self.analytics),
            marketing: update.marketing.unwrap_or(self.marketing),
            timestamp: self.timestamp.clone(),
        }
    }
}

impl Default for ConsentRecord {
    fn default() -> Self {
        Self::defaults()
    }
}

/// A user's (possibly partial) choice for the optional categories.
///
/// There is deliberately no `necessary` field: the category is not
/// user-settable, and serde ignores it if present in a deserialized payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentUpdate {
    #[serde(default)]
    pub analytics: Option<bool>,

    #[serde(default)]
    pub marketing: Option<bool>,
}

impl ConsentUpdate {
    /// Update carried by the accept-all control.
    pub fn accept_all() -> Self {
        Self {
            analytics: Some(true),
            marketing: Some(true),
        }
    }

    /// Update carried by the reject-all control: only necessary cookies.
    pub fn reject_all() -> Self {
        Self {
            analytics: Some(false),
            marketing: Some(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_load_record() {
        let record = ConsentRecord::defaults();
        assert_eq!(record.version, CONSENT_VERSION);
        assert!(record.necessary);
        assert!(!record.analytics);
        assert!(!record.marketing);
        assert!(record.timestamp.is_none());
    }

    #[test]
    fn category_display_and_parse_round_trip() {
        for category in [
            ConsentCategory::Necessary,
            ConsentCategory::Analytics,
            ConsentCategory::Marketing,
        ] {
            let parsed: ConsentCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }

        let err = "tracking".parse::<ConsentCategory>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown consent category: tracking");
    }

    #[test]
    fn necessary_is_always_granted() {
        let record = ConsentRecord {
            necessary: false, // tampered payload
            ..ConsentRecord::defaults()
        };
        assert!(record.granted(ConsentCategory::Necessary));
        assert!(!record.granted(ConsentCategory::Analytics));
    }

    #[test]
    fn merge_takes_only_set_categories() {
        let base = ConsentRecord {
            analytics: true,
            ..ConsentRecord::defaults()
        };

        let merged = base.merged(&ConsentUpdate {
            marketing: Some(true),
            ..Default::default()
        });
        assert!(merged.analytics); // kept from base
        assert!(merged.marketing); // taken from update

        let merged = base.merged(&ConsentUpdate::reject_all());
        assert!(!merged.analytics);
        assert!(!merged.marketing);
    }

    #[test]
    fn merge_forces_necessary_and_current_version() {
        let base = ConsentRecord {
            version: "0.9".to_string(),
            necessary: false,
            ..ConsentRecord::defaults()
        };

        let merged = base.merged(&ConsentUpdate::default());
        assert!(merged.necessary);
        assert_eq!(merged.version, CONSENT_VERSION);
    }

    #[test]
    fn update_deserialization_ignores_necessary() {
        let update: ConsentUpdate =
            serde_json::from_str(r#"{"necessary": false, "analytics": true}"#).unwrap();
        assert_eq!(update.analytics, Some(true));
        assert_eq!(update.marketing, None);
    }

    #[test]
    fn record_serde_round_trip() {
        let record = ConsentRecord {
            analytics: true,
            timestamp: Some("2025-06-01T12:00:00Z".to_string()),
            ..ConsentRecord::defaults()
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: ConsentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
