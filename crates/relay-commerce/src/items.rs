//! Product → item parameters.

use relay_core::constants::params;
use relay_core::payload::{Payload, PayloadBuilder};
use relay_core::Product;

/// Write the item fields of `product` into `builder`. Quantity is sent as an
/// integer (truncated toward zero).
pub fn put_item_fields(builder: PayloadBuilder, product: &Product) -> PayloadBuilder {
    builder
        .put_int(params::QUANTITY, Some(product.quantity as i64))
        .put_string(params::ITEM_ID, product.sku.as_deref())
        .put_string(params::ITEM_NAME, product.name.as_deref())
        .put_string(params::ITEM_CATEGORY, product.category.as_deref())
        .put_float(params::PRICE, Some(product.unit_price))
}

pub fn item_payload(product: &Product) -> Payload {
    put_item_fields(PayloadBuilder::new(), product).build()
}

/// One item payload per product; an absent product list is empty.
pub fn item_list(products: Option<&[Product]>) -> Vec<Payload> {
    products
        .unwrap_or_default()
        .iter()
        .map(item_payload)
        .collect()
}
