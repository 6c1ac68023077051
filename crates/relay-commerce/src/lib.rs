//! # relay-commerce
//!
//! Maps host commerce events onto backend events. Translation never fails:
//! unmapped actions produce nothing, and policy problems are reported as
//! [`TranslationNotice`]s next to the events that were still produced.

pub mod checkout;
pub mod items;
pub mod mapping;
pub mod notices;
pub mod translator;

pub use notices::{NoticeKind, NoticeSeverity, Translation, TranslationNotice};
pub use translator::CommerceEventTranslator;
