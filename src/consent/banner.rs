//! First-visit banner controller.
//!
//! Headless state for the consent banner: visibility, the summary vs.
//! per-category view, and a transient working copy of the toggles. The
//! rendering layer owns markup and animation; this controller owns every
//! decision about what the banner does.
//!
//! The banner never talks to the settings panel. Both treat the store as
//! ground truth and re-read it on mount, so a save made elsewhere can
//! never be overwritten with stale local state — `refresh` folds such a
//! save in by hiding the banner.

use std::sync::Arc;
use tracing::debug;

use crate::consent::state::{ConsentCategory, ConsentState};
use crate::consent::store::ConsentStore;

/// Which banner face is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerView {
    /// Title, message, accept/reject/customize actions
    Summary,
    /// Per-category toggles with a save action
    Customize,
}

/// Headless controller for the first-visit banner.
pub struct BannerController {
    store: Arc<ConsentStore>,
    visible: bool,
    view: BannerView,
    working: ConsentState,
}

impl BannerController {
    /// Mount the banner. It is visible iff no decision is on record.
    pub fn mount(store: Arc<ConsentStore>) -> Self {
        let visible = store.load().is_none();
        debug!("Banner mounted, visible={}", visible);
        Self {
            store,
            visible,
            view: BannerView::Summary,
            working: ConsentState::default_state(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn view(&self) -> BannerView {
        self.view
    }

    /// The transient toggle state shown in the customize view.
    pub fn working_state(&self) -> ConsentState {
        self.working
    }

    /// Accept every category and hide.
    pub fn accept_all(&mut self) {
        self.store.save(ConsentState::accept_all());
        self.hide();
    }

    /// Reject every optional category and hide.
    pub fn reject_all(&mut self) {
        self.store.save(ConsentState::reject_all());
        self.hide();
    }

    /// Reveal the per-category toggle view, seeded from the store (or the
    /// defaults for an undecided visitor).
    pub fn open_customize(&mut self) {
        self.working = self.store.load().unwrap_or_default();
        self.view = BannerView::Customize;
    }

    /// Return from the toggle view to the summary.
    pub fn back_to_summary(&mut self) {
        self.view = BannerView::Summary;
    }

    /// Flip a toggle in the working copy. The necessary toggle is rendered
    /// but pinned on; setting it is ignored.
    pub fn set_category(&mut self, category: ConsentCategory, granted: bool) {
        self.working.set(category, granted);
    }

    /// Commit the working copy and hide.
    pub fn save_preferences(&mut self) {
        self.store.save(self.working);
        self.hide();
    }

    /// Re-read the store: if a decision landed elsewhere (settings panel,
    /// another surface), the banner hides rather than offering to overwrite
    /// it; if the decision was reset, the banner shows again.
    pub fn refresh(&mut self) {
        self.visible = self.store.load().is_none();
    }

    fn hide(&mut self) {
        self.visible = false;
        self.view = BannerView::Summary;
        debug!("Banner hidden");
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

    // ==================== Visibility Tests ====================

    #[test]
    fn test_visible_for_fresh_visitor() {
        let banner = BannerController::mount(fresh_store());
        assert!(banner.is_visible());
        assert_eq!(banner.view(), BannerView::Summary);
    }

    #[test]
    fn test_hidden_for_returning_visitor() {
        let store = fresh_store();
        store.save(ConsentState::accept_all());

        let banner = BannerController::mount(Arc::clone(&store));
        assert!(!banner.is_visible());
    }

    // ==================== Terminal Action Tests ====================

    #[test]
    fn test_accept_all_saves_and_hides() {
        let store = fresh_store();
        let mut banner = BannerController::mount(Arc::clone(&store));

        banner.accept_all();

        assert!(!banner.is_visible());
        let state = store.load().unwrap();
        assert!(state.necessary && state.analytics && state.marketing);
    }

    #[test]
    fn test_reject_all_saves_and_hides() {
        let store = fresh_store();
        let mut banner = BannerController::mount(Arc::clone(&store));

        banner.reject_all();

        assert!(!banner.is_visible());
        let state = store.load().unwrap();
        assert!(state.necessary && !state.analytics && !state.marketing);
    }

    // ==================== Customize Tests ====================

    #[test]
    fn test_customize_flow() {
        let store = fresh_store();
        let mut banner = BannerController::mount(Arc::clone(&store));

        banner.open_customize();
        assert_eq!(banner.view(), BannerView::Customize);
        // Seeded from defaults for an undecided visitor
        assert!(!banner.working_state().analytics);

        banner.set_category(ConsentCategory::Analytics, true);
        banner.save_preferences();

        assert!(!banner.is_visible());
        let state = store.load().unwrap();
        assert!(state.analytics);
        assert!(!state.marketing);
    }

    #[test]
    fn test_necessary_toggle_is_pinned() {
        let mut banner = BannerController::mount(fresh_store());
        banner.open_customize();
        banner.set_category(ConsentCategory::Necessary, false);
        assert!(banner.working_state().necessary);
    }

    #[test]
    fn test_back_to_summary() {
        let mut banner = BannerController::mount(fresh_store());
        banner.open_customize();
        banner.back_to_summary();
        assert_eq!(banner.view(), BannerView::Summary);
    }

    // ==================== Consistency Tests ====================

    #[test]
    fn test_refresh_hides_after_external_save() {
        let store = fresh_store();
        let mut banner = BannerController::mount(Arc::clone(&store));
        assert!(banner.is_visible());

        // A save lands from another surface while the banner is mounted
        store.save(ConsentState::reject_all());

        banner.refresh();
        assert!(!banner.is_visible());
    }

    #[test]
    fn test_refresh_shows_again_after_reset() {
        let store = fresh_store();
        store.save(ConsentState::accept_all());
        let mut banner = BannerController::mount(Arc::clone(&store));
        assert!(!banner.is_visible());

        store.reset();
        banner.refresh();
        assert!(banner.is_visible());
    }
}
