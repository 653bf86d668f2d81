//! Cart responses to page mutations

use crate::domain::cart::{
    AddToCartResponse, CartMutation, ItemId, Quantity, Subtotal, UpdateCartResponse,
};
use crate::domain::Notification;
use crate::render::markup::escape_html;

pub const ADD_ERROR: &str = "Error adding to cart";
pub const ADD_SUCCESS: &str = "Added to cart";
pub const UPDATE_ERROR: &str = "Error updating cart";
pub const UPDATE_SUCCESS: &str = "Cart updated";

/// Markup shown in the subtotal and total nodes; server text is escaped
pub fn price_text(subtotal: &Subtotal) -> String {
    format!("${}", escape_html(&subtotal.to_string()))
}

/// Mutations for a cart update response.
///
/// Rejected updates change nothing on the page. An empty cart always ends
/// with a reload, whichever line triggered it.
pub fn update_mutations(
    item_id: &ItemId,
    quantity: Quantity,
    response: &UpdateCartResponse,
) -> Vec<CartMutation> {
    if !response.success {
        return Vec::new();
    }

    let mut mutations = Vec::with_capacity(5);

    if quantity.is_zero() {
        mutations.push(CartMutation::RemoveLine(item_id.clone()));
    } else {
        mutations.push(CartMutation::SetQuantity(item_id.clone(), quantity));
    }

    if let Some(subtotal) = &response.subtotal {
        let text = price_text(subtotal);
        mutations.push(CartMutation::SetSubtotal(text.clone()));
        // No tax or shipping yet, so the total mirrors the subtotal.
        mutations.push(CartMutation::SetTotal(text));
    }

    if let Some(count) = response.cart_total {
        mutations.push(CartMutation::SetBadge(count));
    }

    if response.cart_is_empty() {
        mutations.push(CartMutation::Reload);
    }

    mutations
}

/// Notification for a cart update response
pub fn update_notification(response: &UpdateCartResponse) -> Notification {
    let message = non_empty(response.message.as_deref());
    if response.success {
        Notification::success(message.unwrap_or(UPDATE_SUCCESS))
    } else {
        Notification::danger(message.unwrap_or(UPDATE_ERROR))
    }
}

/// Notification for an add-to-cart response
pub fn add_notification(response: &AddToCartResponse) -> Notification {
    let message = non_empty(response.message.as_deref());
    if response.success {
        Notification::success(message.unwrap_or(ADD_SUCCESS))
    } else {
        Notification::danger(message.unwrap_or(ADD_ERROR))
    }
}

fn non_empty(message: Option<&str>) -> Option<&str> {
    message.filter(|m| !m.trim().is_empty())
}
