//! Forwarding counters.
//!
//! [`ForwardingMetrics`] is shared by reference from the kit, so counters are
//! atomics. [`MetricsSnapshot`] is the serializable view.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct ForwardingMetrics {
    events_forwarded: AtomicU64,
    commerce_events_forwarded: AtomicU64,
    screens_forwarded: AtomicU64,
    user_ids_forwarded: AtomicU64,
    user_properties_forwarded: AtomicU64,
    consent_updates_forwarded: AtomicU64,
    warnings: AtomicU64,
    skipped_calls: AtomicU64,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub events_forwarded: u64,
    /// Backend events produced from commerce events (one commerce event may
    /// produce several).
    pub commerce_events_forwarded: u64,
    pub screens_forwarded: u64,
    pub user_ids_forwarded: u64,
    pub user_properties_forwarded: u64,
    pub consent_updates_forwarded: u64,
    pub warnings: u64,
    pub skipped_calls: u64,
    pub captured_at: Option<DateTime<Utc>>,
}

impl ForwardingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_event(&self) {
        self.events_forwarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_commerce_events(&self, count: usize) {
        self.commerce_events_forwarded
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_screen(&self) {
        self.screens_forwarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_user_id(&self) {
        self.user_ids_forwarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_user_property(&self) {
        self.user_properties_forwarded
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_consent(&self) {
        self.consent_updates_forwarded
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_warnings(&self, count: usize) {
        self.warnings.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_skipped(&self) {
        self.skipped_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            events_forwarded: self.events_forwarded.load(Ordering::Relaxed),
            commerce_events_forwarded: self.commerce_events_forwarded.load(Ordering::Relaxed),
            screens_forwarded: self.screens_forwarded.load(Ordering::Relaxed),
            user_ids_forwarded: self.user_ids_forwarded.load(Ordering::Relaxed),
            user_properties_forwarded: self.user_properties_forwarded.load(Ordering::Relaxed),
            consent_updates_forwarded: self.consent_updates_forwarded.load(Ordering::Relaxed),
            warnings: self.warnings.load(Ordering::Relaxed),
            skipped_calls: self.skipped_calls.load(Ordering::Relaxed),
            captured_at: Some(Utc::now()),
        }
    }

    /// Serialize a snapshot as JSON for host diagnostics.
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot())
    }

    /// Reset all counters (useful for testing or periodic rotation).
    pub fn reset(&self) {
        for counter in [
            &self.events_forwarded,
            &self.commerce_events_forwarded,
            &self.screens_forwarded,
            &self.user_ids_forwarded,
            &self.user_properties_forwarded,
            &self.consent_updates_forwarded,
            &self.warnings,
            &self.skipped_calls,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}
