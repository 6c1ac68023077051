//! Checkout-option disambiguation.
//!
//! The backend dropped its generic checkout-option event in favor of
//! `add_shipping_info` and `add_payment_info`. Which one a host checkout
//! option means is carried in the `GA4.CommerceEventType` custom flag.

use relay_core::constants::{custom_flags, events, params};
use relay_core::CommerceEvent;

use crate::notices::NoticeKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutResolution<'a> {
    ShippingInfo { shipping_tier: Option<&'a str> },
    PaymentInfo { payment_type: Option<&'a str> },
    /// Fall back to the deprecated `set_checkout_option` event.
    Deprecated { reason: NoticeKind },
}

impl<'a> CheckoutResolution<'a> {
    pub fn resolve(event: &'a CommerceEvent) -> Self {
        match event.first_custom_flag(custom_flags::COMMERCE_EVENT_TYPE) {
            None => Self::Deprecated {
                reason: NoticeKind::CheckoutOptionFlagMissing,
            },
            Some(events::ADD_SHIPPING_INFO) => Self::ShippingInfo {
                shipping_tier: event.first_custom_flag(custom_flags::SHIPPING_TIER),
            },
            Some(events::ADD_PAYMENT_INFO) => Self::PaymentInfo {
                payment_type: event.first_custom_flag(custom_flags::PAYMENT_TYPE),
            },
            Some(other) => Self::Deprecated {
                reason: NoticeKind::CheckoutOptionFlagUnsupported {
                    value: other.to_string(),
                },
            },
        }
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            Self::ShippingInfo { .. } => events::ADD_SHIPPING_INFO,
            Self::PaymentInfo { .. } => events::ADD_PAYMENT_INFO,
            Self::Deprecated { .. } => events::SET_CHECKOUT_OPTION,
        }
    }

    /// The optional extra parameter the resolved event carries.
    pub fn extension_param(&self) -> (&'static str, Option<&'a str>) {
        match self {
            Self::ShippingInfo { shipping_tier } => (params::SHIPPING_TIER, *shipping_tier),
            Self::PaymentInfo { payment_type } => (params::PAYMENT_TYPE, *payment_type),
            Self::Deprecated { .. } => (params::CHECKOUT_OPTION, None),
        }
    }
}
