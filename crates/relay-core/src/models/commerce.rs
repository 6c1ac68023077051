//! Commerce event model as supplied by the host SDK.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The product action a commerce event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductAction {
    AddToCart,
    AddToWishlist,
    Checkout,
    CheckoutOption,
    Purchase,
    Refund,
    RemoveFromCart,
    RemoveFromWishlist,
    Click,
    Detail,
}

impl ProductAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddToCart => "add_to_cart",
            Self::AddToWishlist => "add_to_wishlist",
            Self::Checkout => "checkout",
            Self::CheckoutOption => "checkout_option",
            Self::Purchase => "purchase",
            Self::Refund => "refund",
            Self::RemoveFromCart => "remove_from_cart",
            Self::RemoveFromWishlist => "remove_from_wishlist",
            Self::Click => "click",
            Self::Detail => "detail",
        }
    }

    /// Actions whose payload carries transaction attributes and a monetary value.
    pub fn carries_transaction(&self) -> bool {
        matches!(self, Self::Checkout | Self::Purchase | Self::Refund)
    }
}

/// A single product line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: f64,
    pub unit_price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, sku: impl Into<String>, unit_price: f64) -> Self {
        Self {
            sku: Some(sku.into()),
            name: Some(name.into()),
            category: None,
            quantity: 1.0,
            unit_price,
        }
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// `quantity * unit_price`.
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Transaction-level attributes of a checkout, purchase, or refund.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionAttributes {
    pub id: Option<String>,
    pub coupon_code: Option<String>,
    pub revenue: Option<f64>,
    pub tax: Option<f64>,
    pub shipping: Option<f64>,
}

impl TransactionAttributes {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.revenue = Some(revenue);
        self
    }
}

/// A structured purchase/cart/wishlist/checkout/view event.
///
/// `action` is `None` for commerce events the relay has no mapping for
/// (promotions, impressions).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceEvent {
    pub action: Option<ProductAction>,
    pub products: Option<Vec<Product>>,
    pub transaction_attributes: Option<TransactionAttributes>,
    pub currency: Option<String>,
    pub checkout_options: Option<String>,
    pub checkout_step: Option<i64>,
    /// Out-of-band hints keyed by flag name, e.g. `GA4.CommerceEventType`.
    pub custom_flags: BTreeMap<String, Vec<String>>,
    pub custom_attributes: BTreeMap<String, String>,
}

impl CommerceEvent {
    pub fn new(action: ProductAction) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.get_or_insert_with(Vec::new).push(product);
        self
    }

    pub fn with_transaction_attributes(mut self, attributes: TransactionAttributes) -> Self {
        self.transaction_attributes = Some(attributes);
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_custom_flag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_flags
            .entry(key.into())
            .or_default()
            .push(value.into());
        self
    }

    /// First value of a custom flag, if the flag is present and non-empty.
    pub fn first_custom_flag(&self, key: &str) -> Option<&str> {
        self.custom_flags
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Sum of `quantity * unit_price` over all products, `None` when the
    /// product list is absent.
    pub fn products_value(&self) -> Option<f64> {
        self.products
            .as_ref()
            .map(|products| products.iter().map(Product::line_total).sum())
    }
}
