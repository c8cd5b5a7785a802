use crate::consent::record::ConsentCategory;
use std::sync::Arc;

/// A handle to a type-erased banner surface.
pub type SurfaceHandle = Arc<dyn BannerSurface>;

/// Fixed ids of the banner controls.
///
/// These are treated as an interface: a surface implementation binds each id
/// to a real page element and routes clicks back into the manager as
/// [`BannerAction`](crate::banner::BannerAction)s or
/// [`open_settings`](crate::manager::ConsentManager::open_settings) calls.
pub mod element_ids {
    /// Banner container, shown by toggling the configured CSS state class.
    pub const BANNER: &str = "cookie-banner";
    /// Accept-all control.
    pub const ACCEPT_ALL: &str = "cookie-accept-all";
    /// Reject-all (necessary only) control.
    pub const REJECT_ALL: &str = "cookie-reject-all";
    /// Accept-selected control.
    pub const ACCEPT_SELECTED: &str = "cookie-accept-selected";
    /// Settings-reopen control, live on the page at all times.
    pub const SETTINGS_TOGGLE: &str = "cookie-settings-toggle";
    /// Analytics checkbox toggle.
    pub const ANALYTICS_TOGGLE: &str = "consent-analytics";
    /// Marketing checkbox toggle.
    pub const MARKETING_TOGGLE: &str = "consent-marketing";
}

/// Embedder-implemented rendering boundary for the banner.
///
/// The state machine only ever drives this trait; markup and styling stay
/// with the embedder. Implementations must be internally synchronized, since
/// all methods take `&self`.
pub trait BannerSurface: Send + Sync {
    /// Makes the banner container visible.
    fn show(&self);

    /// Hides the banner container.
    fn hide(&self);

    /// Sets the checked state of a category toggle. Only the optional
    /// categories have toggles; implementations may ignore `Necessary`.
    fn set_toggle(&self, category: ConsentCategory, granted: bool);

    /// Reads the current checked state of a category toggle.
    fn toggle(&self, category: ConsentCategory) -> bool;
}

/// Surface that renders nothing. Used when the manager runs headless.
#[derive(Debug, Default)]
pub struct NullSurface;

impl BannerSurface for NullSurface {
    fn show(&self) {}

    fn hide(&self) {}

    fn set_toggle(&self, _category: ConsentCategory, _granted: bool) {}

    fn toggle(&self, category: ConsentCategory) -> bool {
        matches!(category, ConsentCategory::Necessary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_surface_grants_only_necessary() {
        let surface = NullSurface;
        assert!(surface.toggle(ConsentCategory::Necessary));
        assert!(!surface.toggle(ConsentCategory::Analytics));
        assert!(!surface.toggle(ConsentCategory::Marketing));
    }

    #[test]
    fn element_ids_are_distinct() {
        use element_ids::*;
        let ids = [
            BANNER,
            ACCEPT_ALL,
            REJECT_ALL,
            ACCEPT_SELECTED,
            SETTINGS_TOGGLE,
            ANALYTICS_TOGGLE,
            MARKETING_TOGGLE,
        ];
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }
}
