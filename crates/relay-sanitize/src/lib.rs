//! # relay-sanitize
//!
//! Normalizes arbitrary host strings into backend-legal event names,
//! attribute names, and values.

pub mod patterns;
pub mod sanitizer;

pub use sanitizer::NameValueSanitizer;
