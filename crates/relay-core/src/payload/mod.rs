//! Backend parameter payloads.
//!
//! A [`Payload`] is an ordered key → value accumulator. It never holds a
//! placeholder for an absent source value: [`PayloadBuilder::put_if_present`]
//! skips `None` entirely.

pub mod builder;
pub mod value;

pub use builder::PayloadBuilder;
pub use value::{ParamValue, Payload};
