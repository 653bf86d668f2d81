//! Cart view binding

use super::{ButtonState, ItemId, Quantity};

/// Page nodes the cart controller reads and patches
///
/// Implementations silently ignore nodes that are absent from the page, so a
/// product page without totals and a cart page share the same controller.
pub trait CartView: Send + Sync {
    /// Shows the item count in the cart badge
    fn set_badge(&self, count: u32);

    /// Raw text currently shown in an item's quantity input
    fn displayed_quantity(&self, item_id: &ItemId) -> Option<String>;

    /// Writes a quantity into an item's input
    fn set_quantity(&self, item_id: &ItemId, quantity: Quantity);

    /// Removes an item's row from the page
    fn remove_line(&self, item_id: &ItemId);

    fn set_subtotal(&self, text: &str);

    fn set_total(&self, text: &str);

    /// Updates the submit button of the given form
    fn set_submit_button(&self, form_id: &str, state: ButtonState);

    /// Asks the user to confirm a destructive action
    fn confirm(&self, prompt: &str) -> bool;

    /// Re-renders the whole page from the server
    fn reload(&self);
}

/// A single change to apply to the cart page
#[derive(Debug, Clone, PartialEq)]
pub enum CartMutation {
    RemoveLine(ItemId),
    SetQuantity(ItemId, Quantity),
    SetSubtotal(String),
    SetTotal(String),
    SetBadge(u32),
    Reload,
}

/// Applies mutations to a view in order
pub fn apply_mutations(view: &dyn CartView, mutations: &[CartMutation]) {
    for mutation in mutations {
        match mutation {
            CartMutation::RemoveLine(item_id) => view.remove_line(item_id),
            CartMutation::SetQuantity(item_id, quantity) => view.set_quantity(item_id, *quantity),
            CartMutation::SetSubtotal(text) => view.set_subtotal(text),
            CartMutation::SetTotal(text) => view.set_total(text),
            CartMutation::SetBadge(count) => view.set_badge(*count),
            CartMutation::Reload => view.reload(),
        }
    }
}
