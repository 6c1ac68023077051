// Single source of truth for all default values.

// --- Sanitization ---
pub const DEFAULT_FORBIDDEN_PREFIXES: [&str; 3] = ["google_", "firebase_", "ga_"];
pub const DEFAULT_EVENT_NAME_MAX_LEN: usize = 40;
pub const DEFAULT_ATTRIBUTE_NAME_MAX_LEN: usize = 24;
pub const DEFAULT_EVENT_VALUE_MAX_LEN: usize = 100;
pub const DEFAULT_ATTRIBUTE_VALUE_MAX_LEN: usize = 36;

// --- Commerce ---
pub const DEFAULT_CURRENCY: &str = crate::constants::FALLBACK_CURRENCY;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
