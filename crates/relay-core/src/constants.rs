/// Relay version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display name reported in acknowledgements.
pub const KIT_NAME: &str = "Google Analytics for Firebase";

/// Currency used when a commerce event does not carry one.
pub const FALLBACK_CURRENCY: &str = "USD";

/// Backend event names.
pub mod events {
    pub const ADD_TO_CART: &str = "add_to_cart";
    pub const ADD_TO_WISHLIST: &str = "add_to_wishlist";
    pub const BEGIN_CHECKOUT: &str = "begin_checkout";
    pub const PURCHASE: &str = "purchase";
    pub const REFUND: &str = "refund";
    pub const REMOVE_FROM_CART: &str = "remove_from_cart";
    pub const SELECT_CONTENT: &str = "select_content";
    pub const VIEW_ITEM: &str = "view_item";
    pub const SET_CHECKOUT_OPTION: &str = "set_checkout_option";
    pub const ADD_SHIPPING_INFO: &str = "add_shipping_info";
    pub const ADD_PAYMENT_INFO: &str = "add_payment_info";
    pub const SEARCH: &str = "search";
    pub const SCREEN_VIEW: &str = "screen_view";
}

/// Backend parameter keys.
pub mod params {
    pub const ITEMS: &str = "items";
    pub const CURRENCY: &str = "currency";
    pub const VALUE: &str = "value";
    pub const TRANSACTION_ID: &str = "transaction_id";
    pub const TAX: &str = "tax";
    pub const SHIPPING: &str = "shipping";
    pub const COUPON: &str = "coupon";
    pub const QUANTITY: &str = "quantity";
    pub const ITEM_ID: &str = "item_id";
    pub const ITEM_NAME: &str = "item_name";
    pub const ITEM_CATEGORY: &str = "item_category";
    pub const PRICE: &str = "price";
    pub const CHECKOUT_OPTION: &str = "checkout_option";
    pub const CHECKOUT_STEP: &str = "checkout_step";
    pub const SHIPPING_TIER: &str = "shipping_tier";
    pub const PAYMENT_TYPE: &str = "payment_type";
    pub const SCREEN_NAME: &str = "screen_name";
}

/// Custom flag keys a host attaches to commerce events.
pub mod custom_flags {
    pub const COMMERCE_EVENT_TYPE: &str = "GA4.CommerceEventType";
    pub const PAYMENT_TYPE: &str = "GA4.PaymentType";
    pub const SHIPPING_TIER: &str = "GA4.ShippingTier";
}

/// Kit setting keys supplied by the host.
pub mod settings {
    pub const USER_ID_FIELD: &str = "userIdField";
    pub const USER_ID_CUSTOMER_ID: &str = "customerId";
    pub const USER_ID_EMAIL: &str = "email";
    pub const USER_ID_MPID: &str = "mpid";

    pub const CONSENT_MAPPING: &str = "consentMappingSDK";
    pub const DEFAULT_AD_STORAGE_CONSENT: &str = "defaultAdStorageConsentSDK";
    pub const DEFAULT_AD_USER_DATA_CONSENT: &str = "defaultAdUserDataConsentSDK";
    pub const DEFAULT_AD_PERSONALIZATION_CONSENT: &str = "defaultAdPersonalizationConsentSDK";
    pub const DEFAULT_ANALYTICS_STORAGE_CONSENT: &str = "defaultAnalyticsStorageConsentSDK";
}
