use relay_core::constants::events;
use relay_core::ProductAction;

/// Backend event name for a product action. `CheckoutOption` is resolved
/// from custom flags (see [`crate::checkout`]); `RemoveFromWishlist` has no
/// backend counterpart.
pub fn backend_event_name(action: ProductAction) -> Option<&'static str> {
    match action {
        ProductAction::AddToCart => Some(events::ADD_TO_CART),
        ProductAction::AddToWishlist => Some(events::ADD_TO_WISHLIST),
        ProductAction::Checkout => Some(events::BEGIN_CHECKOUT),
        ProductAction::Purchase => Some(events::PURCHASE),
        ProductAction::Refund => Some(events::REFUND),
        ProductAction::RemoveFromCart => Some(events::REMOVE_FROM_CART),
        ProductAction::Click => Some(events::SELECT_CONTENT),
        ProductAction::Detail => Some(events::VIEW_ITEM),
        ProductAction::CheckoutOption | ProductAction::RemoveFromWishlist => None,
    }
}
