//! # relay-observability
//!
//! Tracing subscriber setup, one structured log event per notable relay
//! operation, span macros, and forwarding counters.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{ForwardingMetrics, MetricsSnapshot};
pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
