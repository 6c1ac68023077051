//! # relay-core
//!
//! Foundation crate for the analytics relay.
//! Defines the host event model, the backend payload accumulator, capability
//! traits, errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod payload;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RelayConfig;
pub use errors::{RelayError, RelayResult};
pub use models::{
    AnalyticsEvent, BackendEvent, CommerceEvent, EventType, Product, ProductAction,
    ReportingMessage, TransactionAttributes,
};
pub use payload::{ParamValue, Payload, PayloadBuilder};
