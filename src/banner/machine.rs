use crate::banner::surface::SurfaceHandle;
use crate::consent::record::{ConsentCategory, ConsentRecord, ConsentUpdate};
use std::sync::RwLock;

/// Visual state of the banner. These are the only two states; storage
/// failures never get a visual state of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    Hidden,
    Visible,
}

/// User actions originating from the banner controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerAction {
    /// Approve every optional category.
    AcceptAll,
    /// Necessary cookies only.
    RejectAll,
    /// Approve whatever the toggles currently say.
    AcceptSelected,
}

impl BannerAction {
    /// The update this action carries. `AcceptSelected` carries none; its
    /// values are read from the surface toggles at apply time.
    pub fn update(self) -> Option<ConsentUpdate> {
        match self {
            BannerAction::AcceptAll => Some(ConsentUpdate::accept_all()),
            BannerAction::RejectAll => Some(ConsentUpdate::reject_all()),
            BannerAction::AcceptSelected => None,
        }
    }
}

/// Two-state machine driving a [`BannerSurface`](crate::banner::BannerSurface).
///
/// The machine starts `Hidden`; the manager's startup transition decides
/// whether it comes up. Showing is always allowed, including re-opening
/// after the banner was already dismissed.
pub struct BannerMachine {
    state: RwLock<BannerState>,
    surface: SurfaceHandle,
}

impl BannerMachine {
    pub fn new(surface: SurfaceHandle) -> Self {
        Self {
            state: RwLock::new(BannerState::Hidden),
            surface,
        }
    }

    pub fn state(&self) -> BannerState {
        *self.state.read().unwrap()
    }

    /// Shows the banner with its toggles repopulated from `record`.
    pub fn show_with(&self, record: &ConsentRecord) {
        self.surface
            .set_toggle(ConsentCategory::Analytics, record.analytics);
        self.surface
            .set_toggle(ConsentCategory::Marketing, record.marketing);
        self.surface.show();
        *self.state.write().unwrap() = BannerState::Visible;
        log::debug!("Consent banner shown");
    }

    pub fn hide(&self) {
        self.surface.hide();
        *self.state.write().unwrap() = BannerState::Hidden;
        log::debug!("Consent banner hidden");
    }

    /// Reads the current toggle values as an update (the accept-selected
    /// path).
    pub fn selection(&self) -> ConsentUpdate {
        ConsentUpdate {
            analytics: Some(self.surface.toggle(ConsentCategory::Analytics)),
            marketing: Some(self.surface.toggle(ConsentCategory::Marketing)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::surface::BannerSurface;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Test double tracking what the machine asked the surface to do.
    #[derive(Default)]
    struct RecordingSurface {
        visible: Mutex<bool>,
        toggles: Mutex<HashMap<ConsentCategory, bool>>,
    }

    impl BannerSurface for RecordingSurface {
        fn show(&self) {
            *self.visible.lock().unwrap() = true;
        }
        fn hide(&self) {
            *self.visible.lock().unwrap() = false;
        }
        fn set_toggle(&self, category: ConsentCategory, granted: bool) {
            self.toggles.lock().unwrap().insert(category, granted);
        }
        fn toggle(&self, category: ConsentCategory) -> bool {
            *self
                .toggles
                .lock()
                .unwrap()
                .get(&category)
                .unwrap_or(&false)
        }
    }

    #[test]
    fn starts_hidden() {
        let machine = BannerMachine::new(Arc::new(RecordingSurface::default()));
        assert_eq!(machine.state(), BannerState::Hidden);
    }

    #[test]
    fn show_repopulates_toggles_from_record() {
        let surface = Arc::new(RecordingSurface::default());
        let machine = BannerMachine::new(surface.clone());

        let record = ConsentRecord {
            analytics: true,
            marketing: false,
            ..ConsentRecord::defaults()
        };
        machine.show_with(&record);

        assert_eq!(machine.state(), BannerState::Visible);
        assert!(*surface.visible.lock().unwrap());
        assert!(surface.toggle(ConsentCategory::Analytics));
        assert!(!surface.toggle(ConsentCategory::Marketing));
    }

    #[test]
    fn hide_then_show_again() {
        let surface = Arc::new(RecordingSurface::default());
        let machine = BannerMachine::new(surface.clone());

        machine.show_with(&ConsentRecord::defaults());
        machine.hide();
        assert_eq!(machine.state(), BannerState::Hidden);
        assert!(!*surface.visible.lock().unwrap());

        // The banner must always be able to reappear.
        machine.show_with(&ConsentRecord::defaults());
        assert_eq!(machine.state(), BannerState::Visible);
    }

    #[test]
    fn selection_reflects_surface_toggles() {
        let surface = Arc::new(RecordingSurface::default());
        let machine = BannerMachine::new(surface.clone());

        surface.set_toggle(ConsentCategory::Analytics, true);
        surface.set_toggle(ConsentCategory::Marketing, false);

        let update = machine.selection();
        assert_eq!(update.analytics, Some(true));
        assert_eq!(update.marketing, Some(false));
    }

    #[test]
    fn action_updates() {
        assert_eq!(
            BannerAction::AcceptAll.update(),
            Some(ConsentUpdate::accept_all())
        );
        assert_eq!(
            BannerAction::RejectAll.update(),
            Some(ConsentUpdate::reject_all())
        );
        assert_eq!(BannerAction::AcceptSelected.update(), None);
    }
}
