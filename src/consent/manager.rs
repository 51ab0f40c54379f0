//! Settings-panel (cookie manager) controller.
//!
//! The reopenable counterpart to the first-visit banner: opened on demand
//! from a footer link or an `OpenSettings` event, regardless of whether a
//! decision exists. Edits stay in a local working copy until an explicit
//! save commits them; the store, never another controller, is ground truth.

use std::sync::Arc;
use tracing::debug;

use crate::consent::state::{ConsentCategory, ConsentState};
use crate::consent::store::ConsentStore;
use crate::i18n::{interpolate, strings_for, Locale};

/// Headless controller for the cookie settings panel.
pub struct ManagerController {
    store: Arc<ConsentStore>,
    open: bool,
    working: ConsentState,
}

impl ManagerController {
    /// Create a closed panel bound to the store.
    pub fn new(store: Arc<ConsentStore>) -> Self {
        Self {
            store,
            open: false,
            working: ConsentState::default_state(),
        }
    }

    /// Open the panel, seeding the working copy from the store (or the
    /// defaults when the visitor is undecided).
    pub fn open(&mut self) {
        self.working = self.store.load().unwrap_or_default();
        self.open = true;
        debug!("Settings panel opened");
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The local working copy shown by the toggles.
    pub fn working_state(&self) -> ConsentState {
        self.working
    }

    /// Flip a toggle locally. Nothing is persisted until [`save`](Self::save).
    /// The necessary toggle is pinned on.
    pub fn set_category(&mut self, category: ConsentCategory, granted: bool) {
        self.working.set(category, granted);
    }

    /// Commit the working copy to the store.
    pub fn save(&mut self) {
        self.working = self.store.save(self.working);
    }

    /// Clear the stored decision and reseed the working copy with defaults.
    pub fn reset_to_defaults(&mut self) {
        self.store.reset();
        self.working = ConsentState::default_state();
    }

    /// Re-seed the working copy from the store. Call when a consent change
    /// lands while the panel is open, so the toggles track ground truth.
    pub fn refresh(&mut self) {
        if self.open {
            self.working = self.store.load().unwrap_or_default();
        }
    }

    /// Localized "last saved" notice for a returning visitor, or `None`
    /// when no decision is on record.
    pub fn last_saved_notice(&self, locale: Locale) -> Option<String> {
        let at = self.store.last_saved_at()?;
        let template = strings_for(locale).cookies.manager.last_saved;
        let date = at.format("%Y-%m-%d").to_string();
        Some(interpolate(template, &[("date", &date)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::events::EventBus;
    use crate::consent::storage::MemoryStorage;

    fn fresh_store() -> Arc<ConsentStore> {
        Arc::new(ConsentStore::with_default_key(
            Box::new(MemoryStorage::new()),
            EventBus::new(),
        ))
    }

    // ==================== Open/Seed Tests ====================

    #[test]
    fn test_open_seeds_defaults_for_undecided() {
        let mut manager = ManagerController::new(fresh_store());
        manager.open();

        assert!(manager.is_open());
        let working = manager.working_state();
        assert!(working.necessary && !working.analytics && !working.marketing);
    }

    #[test]
    fn test_open_seeds_from_stored_decision() {
        let store = fresh_store();
        store.save(ConsentState {
            necessary: true,
            analytics: true,
            marketing: false,
            timestamp: None,
        });

        let mut manager = ManagerController::new(Arc::clone(&store));
        manager.open();

        let working = manager.working_state();
        assert!(working.analytics);
        assert!(!working.marketing);
    }

    #[test]
    fn test_reopen_rereads_rather_than_caching() {
        let store = fresh_store();
        let mut manager = ManagerController::new(Arc::clone(&store));

        manager.open();
        manager.close();

        store.save(ConsentState::accept_all());
        manager.open();
        assert!(manager.working_state().marketing);
    }

    // ==================== Edit/Save Tests ====================

    #[test]
    fn test_edits_are_local_until_save() {
        let store = fresh_store();
        store.save(ConsentState::reject_all());

        let mut manager = ManagerController::new(Arc::clone(&store));
        manager.open();
        manager.set_category(ConsentCategory::Marketing, true);

        // Not yet committed
        assert!(!store.load().unwrap().marketing);

        manager.save();
        assert!(store.load().unwrap().marketing);
    }

    #[test]
    fn test_necessary_toggle_is_pinned() {
        let mut manager = ManagerController::new(fresh_store());
        manager.open();
        manager.set_category(ConsentCategory::Necessary, false);
        assert!(manager.working_state().necessary);
    }

    #[test]
    fn test_save_adopts_stamped_state() {
        let mut manager = ManagerController::new(fresh_store());
        manager.open();
        manager.save();
        assert!(manager.working_state().timestamp.is_some());
    }

    // ==================== Reset Tests ====================

    #[test]
    fn test_reset_clears_store_and_reseeds() {
        let store = fresh_store();
        store.save(ConsentState::accept_all());

        let mut manager = ManagerController::new(Arc::clone(&store));
        manager.open();
        manager.reset_to_defaults();

        assert!(store.load().is_none());
        let working = manager.working_state();
        assert!(!working.analytics && !working.marketing);
    }

    // ==================== Refresh Tests ====================

    #[test]
    fn test_refresh_tracks_external_change_while_open() {
        let store = fresh_store();
        let mut manager = ManagerController::new(Arc::clone(&store));
        manager.open();

        store.save(ConsentState::accept_all());
        manager.refresh();
        assert!(manager.working_state().analytics);
    }

    #[test]
    fn test_refresh_is_noop_while_closed() {
        let store = fresh_store();
        let mut manager = ManagerController::new(Arc::clone(&store));

        store.save(ConsentState::accept_all());
        manager.refresh();
        // Working copy untouched until the panel opens
        assert!(!manager.working_state().analytics);
    }

    // ==================== Notice Tests ====================

    #[test]
    fn test_last_saved_notice_undecided_is_none() {
        let manager = ManagerController::new(fresh_store());
        assert!(manager.last_saved_notice(Locale::ENGLISH).is_none());
    }

    #[test]
    fn test_last_saved_notice_is_localized_and_dated() {
        let store = fresh_store();
        store.save(ConsentState::accept_all());

        let manager = ManagerController::new(store);
        let notice = manager.last_saved_notice(Locale::ENGLISH).unwrap();
        assert!(notice.starts_with("Preferences last saved "));
        assert!(!notice.contains("{date}"));
    }
}
