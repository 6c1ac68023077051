use relay_core::config::{CommerceConfig, ItemEmissionMode};
use relay_core::constants::params;
use relay_core::payload::{Payload, PayloadBuilder};
use relay_core::{BackendEvent, CommerceEvent, ProductAction, TransactionAttributes};
use relay_observability::events;
use relay_sanitize::NameValueSanitizer;

use crate::checkout::CheckoutResolution;
use crate::items;
use crate::mapping;
use crate::notices::{NoticeKind, Translation};

/// Translates host commerce events into backend `(name, payload)` pairs.
///
/// Holds only immutable configuration; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct CommerceEventTranslator {
    config: CommerceConfig,
    sanitizer: NameValueSanitizer,
}

impl CommerceEventTranslator {
    pub fn new(config: CommerceConfig, sanitizer: NameValueSanitizer) -> Self {
        Self { config, sanitizer }
    }

    pub fn emission_mode(&self) -> ItemEmissionMode {
        self.config.item_emission_mode
    }

    /// Translate `event`, discarding notices (they are still logged).
    pub fn translate(&self, event: &CommerceEvent) -> Vec<BackendEvent> {
        self.translate_with_notices(event).events
    }

    /// Translate `event` and return the notices raised alongside the events.
    ///
    /// An event without a mapped action yields an empty translation.
    pub fn translate_with_notices(&self, event: &CommerceEvent) -> Translation {
        let mut translation = Translation::default();
        let Some(action) = event.action else {
            return translation;
        };

        let span = relay_observability::translation_span!(action.as_str());
        let _guard = span.enter();

        if action == ProductAction::CheckoutOption {
            self.translate_checkout_option(event, &mut translation);
        } else if let Some(name) = mapping::backend_event_name(action) {
            self.translate_mapped(
                name,
                event,
                (params::CHECKOUT_OPTION, None),
                action.carries_transaction(),
                &mut translation,
            );
        }

        events::commerce_event_translated(
            action.as_str(),
            translation.events.len(),
            self.config.item_emission_mode.as_str(),
        );
        translation
    }

    fn translate_checkout_option(&self, event: &CommerceEvent, translation: &mut Translation) {
        let resolution = CheckoutResolution::resolve(event);
        let CheckoutResolution::Deprecated { reason } = &resolution else {
            self.translate_mapped(
                resolution.event_name(),
                event,
                resolution.extension_param(),
                true,
                translation,
            );
            return;
        };

        translation.notice(reason.clone());
        if let Some(notice) = translation.notices.last() {
            events::checkout_option_deprecated(&notice.to_string());
        }

        let currency = self.resolve_currency(event, translation);
        let payload = PayloadBuilder::from_payload(self.custom_attributes(event))
            .put_string(params::CHECKOUT_OPTION, event.checkout_options.as_deref())
            .put_int(params::CHECKOUT_STEP, event.checkout_step)
            .put_string(params::CURRENCY, Some(currency.as_str()))
            .build();
        translation
            .events
            .push(BackendEvent::new(resolution.event_name(), payload));
    }

    /// Build the event(s) for a mapped action. `extension` is an extra
    /// parameter written when its value is present. `with_transaction`
    /// adds `value` and the transaction attributes.
    fn translate_mapped(
        &self,
        name: &str,
        event: &CommerceEvent,
        extension: (&str, Option<&str>),
        with_transaction: bool,
        translation: &mut Translation,
    ) {
        let currency = self.resolve_currency(event, translation);
        let head = self.custom_attributes(event);
        let transaction = event.transaction_attributes.as_ref();

        let common = |value: Option<f64>, totals: OrderTotals| {
            let mut builder = PayloadBuilder::from_payload(head.clone());
            if with_transaction {
                builder = builder.put_float(params::VALUE, value);
                builder = put_transaction(builder, transaction, totals);
            }
            builder
                .put_string(extension.0, extension.1)
                .put_string(params::CURRENCY, Some(currency.as_str()))
        };

        match self.config.item_emission_mode {
            ItemEmissionMode::Aggregated => {
                let payload = common(event.products_value(), OrderTotals::WithRevenue)
                    .put_items(
                        params::ITEMS,
                        Some(items::item_list(event.products.as_deref())),
                    )
                    .build();
                translation.events.push(BackendEvent::new(name, payload));
            }
            ItemEmissionMode::PerItem => {
                let products = event.products.as_deref().unwrap_or_default();
                if products.is_empty() {
                    let payload = common(event.products_value(), OrderTotals::WithRevenue).build();
                    translation.events.push(BackendEvent::new(name, payload));
                    return;
                }
                for (index, product) in products.iter().enumerate() {
                    let totals = if index == 0 {
                        OrderTotals::WithoutRevenue
                    } else {
                        OrderTotals::Omitted
                    };
                    let payload =
                        items::put_item_fields(common(Some(product.line_total()), totals), product)
                            .build();
                    translation.events.push(BackendEvent::new(name, payload));
                }
            }
        }
    }

    fn resolve_currency(&self, event: &CommerceEvent, translation: &mut Translation) -> String {
        if let Some(currency) = &event.currency {
            return currency.clone();
        }
        let currency = self.config.default_currency.clone();
        events::currency_defaulted(&currency);
        translation.notice(NoticeKind::CurrencyDefaulted {
            currency: currency.clone(),
        });
        currency
    }

    /// Custom attributes go first so reserved keys written later win.
    fn custom_attributes(&self, event: &CommerceEvent) -> Payload {
        self.sanitizer
            .standardize_attributes(&event.custom_attributes, true)
            .into_iter()
            .fold(PayloadBuilder::new(), |builder, (key, value)| {
                builder.put_string(&key, Some(value.as_str()))
            })
            .build()
    }
}

/// Which order-level totals a payload carries. Per-item events split one
/// order across several events, so only the first carries tax, shipping and
/// coupon, and none let revenue replace its line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderTotals {
    WithRevenue,
    WithoutRevenue,
    Omitted,
}

/// Transaction attributes, when present. With [`OrderTotals::WithRevenue`],
/// `revenue` overrides any computed `value` already written. The
/// transaction id is always written.
fn put_transaction(
    builder: PayloadBuilder,
    attributes: Option<&TransactionAttributes>,
    totals: OrderTotals,
) -> PayloadBuilder {
    let Some(attributes) = attributes else {
        return builder;
    };
    let builder = builder.put_string(params::TRANSACTION_ID, attributes.id.as_deref());
    let builder = match totals {
        OrderTotals::WithRevenue => builder.put_float(params::VALUE, attributes.revenue),
        OrderTotals::WithoutRevenue => builder,
        OrderTotals::Omitted => return builder,
    };
    builder
        .put_float(params::TAX, attributes.tax)
        .put_float(params::SHIPPING, attributes.shipping)
        .put_string(params::COUPON, attributes.coupon_code.as_deref())
}
