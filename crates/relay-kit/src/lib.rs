//! # relay-kit
//!
//! The dispatch shell the host talks to. [`FirebaseKit`] implements every
//! listener trait from `relay_core::traits` and forwards to the backend
//! client after sanitization and commerce translation.
//!
//! Nothing here is fatal: a missing capability or unusable input means less
//! data reaches the backend, never an error for the host.

pub mod attributes;
pub mod commerce;
pub mod consent;
pub mod events;
pub mod identity;
pub mod kit;

pub use identity::resolve_user_id;
pub use kit::FirebaseKit;
