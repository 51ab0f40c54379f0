//! Consent gate: the decision function tracking clients consult before
//! activating.
//!
//! The gate is read-only and fail-closed: with no decision on record, every
//! non-necessary category is denied. Callers are expected to re-check (or
//! subscribe to the notification bus) after every consent change, not just
//! once at startup.

use std::sync::Arc;

use crate::consent::state::ConsentCategory;
use crate::consent::store::ConsentStore;

/// Read-only gate over the consent store.
#[derive(Clone)]
pub struct ConsentGate {
    store: Arc<ConsentStore>,
}

impl ConsentGate {
    pub fn new(store: Arc<ConsentStore>) -> Self {
        Self { store }
    }

    /// Whether side effects for `category` may run right now.
    ///
    /// `Necessary` is always allowed and is not gated. Any other category
    /// requires a recorded decision with that flag granted.
    pub fn is_allowed(&self, category: ConsentCategory) -> bool {
        if category.is_required() {
            return true;
        }
        match self.store.load() {
            Some(state) => state.grants(category),
            None => false,
        }
    }
}
