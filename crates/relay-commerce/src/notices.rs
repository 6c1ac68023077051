//! Non-fatal conditions raised while translating a commerce event.

use std::fmt;

use relay_core::constants::{custom_flags, events};
use relay_core::BackendEvent;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeSeverity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoticeKind {
    /// The event carried no currency; `currency` was written instead.
    CurrencyDefaulted { currency: String },
    /// A checkout option arrived without the event-type custom flag.
    CheckoutOptionFlagMissing,
    /// The event-type custom flag named an event the backend has no
    /// checkout-option form of.
    CheckoutOptionFlagUnsupported { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationNotice {
    #[serde(flatten)]
    pub kind: NoticeKind,
    pub severity: NoticeSeverity,
}

impl TranslationNotice {
    pub fn new(kind: NoticeKind) -> Self {
        let severity = match kind {
            NoticeKind::CurrencyDefaulted { .. } => NoticeSeverity::Info,
            NoticeKind::CheckoutOptionFlagMissing
            | NoticeKind::CheckoutOptionFlagUnsupported { .. } => NoticeSeverity::Warning,
        };
        Self { kind, severity }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == NoticeSeverity::Warning
    }
}

impl fmt::Display for TranslationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NoticeKind::CurrencyDefaulted { currency } => write!(
                f,
                "currency field required by the backend was not set, defaulting to '{currency}'"
            ),
            NoticeKind::CheckoutOptionFlagMissing => write!(
                f,
                "checkout options require the custom flag '{}'; sending the deprecated '{}' event",
                custom_flags::COMMERCE_EVENT_TYPE,
                events::SET_CHECKOUT_OPTION
            ),
            NoticeKind::CheckoutOptionFlagUnsupported { value } => write!(
                f,
                "unsupported value '{value}' for custom flag '{}'; sending the deprecated '{}' event",
                custom_flags::COMMERCE_EVENT_TYPE,
                events::SET_CHECKOUT_OPTION
            ),
        }
    }
}

/// Events produced for one commerce event plus the notices raised on the way.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Translation {
    pub events: Vec<BackendEvent>,
    pub notices: Vec<TranslationNotice>,
}

impl Translation {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.notices.iter().filter(|n| n.is_warning()).count()
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    pub(crate) fn notice(&mut self, kind: NoticeKind) {
        self.notices.push(TranslationNotice::new(kind));
    }
}
