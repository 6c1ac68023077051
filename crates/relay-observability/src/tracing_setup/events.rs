//! Structured log events for relay operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

/// An analytics event or screen view reached the backend.
pub fn event_forwarded(name: &str, param_count: usize) {
    tracing::info!(
        event = "event_forwarded",
        name = %name,
        param_count = param_count,
        "event forwarded"
    );
}

/// An analytics event was not forwarded because its name standardized to
/// nothing.
pub fn event_dropped(raw_name: &str) {
    tracing::debug!(
        event = "event_dropped",
        raw_name = %raw_name,
        "event dropped: empty name after standardization"
    );
}

pub fn commerce_event_translated(action: &str, emitted: usize, mode: &str) {
    tracing::info!(
        event = "commerce_event_translated",
        action = %action,
        emitted = emitted,
        mode = %mode,
        "commerce event translated"
    );
}

/// A checkout option fell back to the deprecated `set_checkout_option` event.
pub fn checkout_option_deprecated(message: &str) {
    tracing::warn!(
        event = "checkout_option_deprecated",
        "{message}"
    );
}

pub fn currency_defaulted(currency: &str) {
    tracing::info!(
        event = "currency_defaulted",
        currency = %currency,
        "currency field required by the backend was not set, defaulting to '{currency}'"
    );
}

/// A call was skipped because a capability (backend, foreground context)
/// was missing.
pub fn capability_unavailable(operation: &str, capability: &str) {
    tracing::debug!(
        event = "capability_unavailable",
        operation = %operation,
        capability = %capability,
        "capability unavailable, call skipped"
    );
}

pub fn user_id_forwarded(field: &str) {
    tracing::debug!(
        event = "user_id_forwarded",
        field = %field,
        "user id forwarded"
    );
}

pub fn user_property_forwarded(key: &str, cleared: bool) {
    tracing::debug!(
        event = "user_property_forwarded",
        key = %key,
        cleared = cleared,
        "user property forwarded"
    );
}

pub fn consent_forwarded(entries: usize) {
    tracing::info!(
        event = "consent_forwarded",
        entries = entries,
        "consent forwarded"
    );
}

pub fn consent_mapping_invalid(reason: &str) {
    tracing::warn!(
        event = "consent_mapping_invalid",
        reason = %reason,
        "consent mapping setting ignored"
    );
}
