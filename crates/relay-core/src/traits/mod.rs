//! Capability seams between the relay, the host SDK, and the backend client.

pub mod backend;
pub mod host;
pub mod listeners;

pub use backend::BackendClient;
pub use host::{ForegroundContext, HostSettings, HostUser};
pub use listeners::{
    CommerceListener, ConsentListener, EventListener, IdentityListener, UserAttributeListener,
};
