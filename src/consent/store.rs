//! Consent store: single source of truth for the visitor's cookie decision.
//!
//! The store hydrates from its storage backend exactly once, at
//! construction, and keeps the session copy under a mutex; every read and
//! write goes through the store's public operations. Persistence is
//! best-effort: a failing backend is logged and the in-memory state stays
//! authoritative for the current session, so the consent UI keeps working
//! even when durability is lost.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::consent::events::{ConsentEvent, EventBus};
use crate::consent::state::ConsentState;
use crate::consent::storage::StorageBackend;

/// Storage key holding the consent JSON object, matching the name the site
/// uses in browser local storage.
pub const DEFAULT_STORAGE_KEY: &str = "cookieConsent";

/// Durable holder of the visitor's cookie preferences.
pub struct ConsentStore {
    backend: Box<dyn StorageBackend>,
    key: String,
    session: Mutex<Option<ConsentState>>,
    bus: EventBus,
}

impl ConsentStore {
    /// Open a store over `backend`, hydrating the session copy once.
    ///
    /// Any failure to read or parse previously persisted state is treated
    /// as "no decision yet": the visitor is returned to the undecided
    /// state and the banner will show again. Malformed state is never an
    /// error surfaced to callers.
    pub fn open(backend: Box<dyn StorageBackend>, key: impl Into<String>, bus: EventBus) -> Self {
        let key = key.into();
        let session = Self::hydrate(backend.as_ref(), &key);
        Self {
            backend,
            key,
            session: Mutex::new(session),
            bus,
        }
    }

    /// Open a store with the site's default storage key.
    pub fn with_default_key(backend: Box<dyn StorageBackend>, bus: EventBus) -> Self {
        Self::open(backend, DEFAULT_STORAGE_KEY, bus)
    }

    fn hydrate(backend: &dyn StorageBackend, key: &str) -> Option<ConsentState> {
        let raw = match backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Consent storage unavailable, starting undecided: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<ConsentState>(&raw) {
            Ok(state) => {
                if !state.necessary {
                    // A prior version (or tampering) persisted an invalid
                    // triple; correct it on the way in.
                    warn!("Persisted consent had necessary=false, correcting");
                }
                Some(state.normalized())
            }
            Err(e) => {
                warn!("Malformed persisted consent, treating as undecided: {}", e);
                None
            }
        }
    }

    /// Read the current consent state.
    ///
    /// `None` means the visitor has not decided yet (first visit, reset, or
    /// unreadable persisted state).
    pub fn load(&self) -> Option<ConsentState> {
        *self.session.lock().expect("consent store lock poisoned")
    }

    /// Whether the visitor has made a decision this session.
    pub fn is_decided(&self) -> bool {
        self.load().is_some()
    }

    /// Save a consent decision, replacing any prior state wholesale.
    ///
    /// `necessary` is pinned to `true` (a correction is logged), the write
    /// is stamped with the current time, and the full triple is persisted.
    /// Storage failures are logged and swallowed: the in-memory state the
    /// UI is using remains authoritative for the session even if
    /// persistence silently fails.
    ///
    /// Publishes [`ConsentEvent::ConsentChanged`] exactly once.
    ///
    /// # Returns
    /// The normalized, stamped state that is now current.
    pub fn save(&self, state: ConsentState) -> ConsentState {
        if !state.necessary {
            warn!("Rejecting attempt to disable necessary cookies");
        }
        let mut saved = state.normalized();
        saved.timestamp = Some(Utc::now().timestamp_millis());

        {
            let mut session = self.session.lock().expect("consent store lock poisoned");
            *session = Some(saved);
        }

        match serde_json::to_string(&saved) {
            Ok(raw) => {
                if let Err(e) = self.backend.write(&self.key, &raw) {
                    warn!("Failed to persist consent, keeping in-memory state: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize consent state: {}", e),
        }

        debug!(
            "Consent saved: analytics={} marketing={}",
            saved.analytics, saved.marketing
        );
        self.bus.publish(ConsentEvent::ConsentChanged);
        saved
    }

    /// Clear the consent decision entirely, returning the visitor to the
    /// undecided condition.
    ///
    /// Publishes [`ConsentEvent::ConsentChanged`] exactly once.
    pub fn reset(&self) {
        {
            let mut session = self.session.lock().expect("consent store lock poisoned");
            *session = None;
        }

        if let Err(e) = self.backend.remove(&self.key) {
            warn!("Failed to clear persisted consent: {}", e);
        }

        debug!("Consent reset to undecided");
        self.bus.publish(ConsentEvent::ConsentChanged);
    }

    /// When the current decision was last written, if known.
    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        self.load()
            .and_then(|state| state.timestamp)
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
    }

    /// The notification bus this store publishes on.
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }
}
