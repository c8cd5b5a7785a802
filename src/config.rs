/// Conventional name of the slot holding the serialized consent record.
pub const CONSENT_STORAGE_KEY: &str = "cookieConsent";

const DEFAULT_SHOW_CLASS: &str = "show";

/// Main manager configuration.
#[derive(Debug, Clone)]
pub struct ConsentConfig {
    /// Key under which the record is persisted (also names the backing file
    /// when the manager is built with a persistence directory).
    pub storage_key: String,
    /// Capacity of the consent event channel.
    pub channel_capacity: usize,
    /// CSS state class a surface toggles on the banner container to show it.
    pub banner_show_class: String,
}

impl Default for ConsentConfig {
    fn default() -> Self {
        Self {
            storage_key: CONSENT_STORAGE_KEY.to_string(),
            channel_capacity: crate::events::DEFAULT_CHANNEL_CAPACITY,
            banner_show_class: DEFAULT_SHOW_CLASS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_conventional_values() {
        let config = ConsentConfig::default();
        assert_eq!(config.storage_key, "cookieConsent");
        assert_eq!(config.banner_show_class, "show");
        assert!(config.channel_capacity > 0);
    }
}
