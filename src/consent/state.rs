//! Consent state: the persisted record of a visitor's cookie decision.

use serde::{Deserialize, Serialize};

/// A cookie/tracking category the visitor can grant or withhold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsentCategory {
    /// Required for the site to function; always granted, never gated
    Necessary,
    /// Traffic analysis
    Analytics,
    /// Advertising pixels and remarketing
    Marketing,
}

impl ConsentCategory {
    /// The category id used in copy keys and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentCategory::Necessary => "necessary",
            ConsentCategory::Analytics => "analytics",
            ConsentCategory::Marketing => "marketing",
        }
    }

    /// Whether the category is required and cannot be withheld.
    pub fn is_required(&self) -> bool {
        matches!(self, ConsentCategory::Necessary)
    }

    /// All categories, in display order.
    pub fn all() -> [ConsentCategory; 3] {
        [
            ConsentCategory::Necessary,
            ConsentCategory::Analytics,
            ConsentCategory::Marketing,
        ]
    }
}

/// A visitor's cookie preferences.
///
/// `necessary` is always `true`; the store corrects any value that tries to
/// persist it as `false`. `timestamp` records when the state was last
/// written, in epoch milliseconds, and is stamped by the store on save.
///
/// The persisted layout is a single JSON object:
/// `{ "necessary": true, "analytics": bool, "marketing": bool, "timestamp": number? }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentState {
    pub necessary: bool,
    pub analytics: bool,
    pub marketing: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ConsentState {
    /// The undecided visitor's working defaults: only necessary cookies.
    pub fn default_state() -> ConsentState {
        ConsentState {
            necessary: true,
            analytics: false,
            marketing: false,
            timestamp: None,
        }
    }

    /// State produced by the accept-all action.
    pub fn accept_all() -> ConsentState {
        ConsentState {
            necessary: true,
            analytics: true,
            marketing: true,
            timestamp: None,
        }
    }

    /// State produced by the reject-all action.
    pub fn reject_all() -> ConsentState {
        ConsentState {
            necessary: true,
            analytics: false,
            marketing: false,
            timestamp: None,
        }
    }

    /// Copy of this state with `necessary` pinned to `true`.
    pub fn normalized(&self) -> ConsentState {
        ConsentState {
            necessary: true,
            ..*self
        }
    }

    /// Whether a category is granted in this state.
    pub fn grants(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Necessary => true,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
        }
    }

    /// Set a category flag. Setting `Necessary` is ignored; it is pinned on.
    pub fn set(&mut self, category: ConsentCategory, granted: bool) {
        match category {
            ConsentCategory::Necessary => {}
            ConsentCategory::Analytics => self.analytics = granted,
            ConsentCategory::Marketing => self.marketing = granted,
        }
    }

    /// Equality that ignores the write stamp.
    pub fn same_preferences(&self, other: &ConsentState) -> bool {
        self.necessary == other.necessary
            && self.analytics == other.analytics
            && self.marketing == other.marketing
    }
}

impl Default for ConsentState {
    fn default() -> Self {
        ConsentState::default_state()
    }
}
