//! Resolver metrics and observability module.
//!
//! This module tracks how translation lookups resolve: directly in the
//! requested locale, through the default-locale fallback, or not at all.
//! A rising fallback or miss count is the signal that a dictionary lags
//! behind the default locale.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global resolver metrics singleton.
pub struct ResolverMetrics {
    /// Lookups resolved directly in the requested locale
    exact_hits: AtomicUsize,

    /// Lookups resolved through the default-locale fallback
    locale_fallbacks: AtomicUsize,

    /// Lookups that resolved nowhere and used the caller fallback
    misses: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<ResolverMetrics> = OnceLock::new();

impl ResolverMetrics {
    /// Get the global resolver metrics instance.
    ///
    /// This method initializes the metrics on first call and returns a reference
    /// to the singleton instance on subsequent calls.
    pub fn global() -> &'static ResolverMetrics {
        METRICS.get_or_init(|| ResolverMetrics {
            exact_hits: AtomicUsize::new(0),
            locale_fallbacks: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        })
    }

    /// Record a lookup resolved in the requested locale.
    pub fn record_exact_hit(&self) {
        self.exact_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup resolved through the default-locale fallback.
    pub fn record_locale_fallback(&self) {
        self.locale_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that used the caller fallback.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current exact-hit count.
    pub fn exact_hits(&self) -> usize {
        self.exact_hits.load(Ordering::Relaxed)
    }

    /// Get the current locale-fallback count.
    pub fn locale_fallbacks(&self) -> usize {
        self.locale_fallbacks.load(Ordering::Relaxed)
    }

    /// Get the current miss count.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> ResolverReport {
        let exact = self.exact_hits();
        let fallbacks = self.locale_fallbacks();
        let misses = self.misses();
        let total = exact + fallbacks + misses;

        let exact_rate = if total > 0 {
            (exact as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        ResolverReport {
            exact_hits: exact,
            locale_fallbacks: fallbacks,
            misses,
            total_lookups: total,
            exact_rate,
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.exact_hits.store(0, Ordering::Relaxed);
        self.locale_fallbacks.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current resolver statistics.
#[derive(Debug, Clone, Serialize)]
pub struct ResolverReport {
    /// Lookups resolved directly in the requested locale
    pub exact_hits: usize,

    /// Lookups resolved through the default-locale fallback
    pub locale_fallbacks: usize,

    /// Lookups that used the caller fallback
    pub misses: usize,

    /// Total lookups observed
    pub total_lookups: usize,

    /// Exact-hit rate as a percentage (0-100)
    pub exact_rate: f64,
}
