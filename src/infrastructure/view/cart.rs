//! Cart view over an in-memory document

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use super::document::Document;
use crate::domain::cart::{ButtonState, CartView, ItemId, Quantity};
use crate::render::markup::button_html;

/// Element ids the cart view patches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartBinding {
    pub badge_id: String,
    pub subtotal_id: String,
    pub total_id: String,
    pub row_prefix: String,
    pub quantity_prefix: String,
}

impl Default for CartBinding {
    fn default() -> Self {
        Self {
            badge_id: "cart-count".to_string(),
            subtotal_id: "cart-subtotal".to_string(),
            total_id: "cart-total".to_string(),
            row_prefix: "cart-item-".to_string(),
            quantity_prefix: "quantity-".to_string(),
        }
    }
}

impl CartBinding {
    pub fn row_id(&self, item_id: &ItemId) -> String {
        format!("{}{}", self.row_prefix, item_id)
    }

    pub fn quantity_id(&self, item_id: &ItemId) -> String {
        format!("{}{}", self.quantity_prefix, item_id)
    }
}

/// `CartView` backed by a [`Document`]
///
/// Confirmation prompts are answered with a preset value and reloads are
/// counted, since there is no user or browser behind the document.
#[derive(Debug)]
pub struct DocumentCartView {
    document: Arc<Document>,
    binding: CartBinding,
    confirm_answer: AtomicBool,
    prompts: Mutex<Vec<String>>,
    reloads: AtomicUsize,
    button_labels: Mutex<HashMap<String, String>>,
}

impl DocumentCartView {
    pub fn new(document: Arc<Document>, binding: CartBinding) -> Self {
        Self {
            document,
            binding,
            confirm_answer: AtomicBool::new(true),
            prompts: Mutex::new(Vec::new()),
            reloads: AtomicUsize::new(0),
            button_labels: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_confirm_answer(self, answer: bool) -> Self {
        self.confirm_answer.store(answer, Ordering::SeqCst);
        self
    }

    pub fn set_confirm_answer(&self, answer: bool) {
        self.confirm_answer.store(answer, Ordering::SeqCst);
    }

    pub fn document(&self) -> &Arc<Document> {
        &self.document
    }

    pub fn binding(&self) -> &CartBinding {
        &self.binding
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }

    /// Prompts shown so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Id of the submit button belonging to a form
    pub fn button_id(form_id: &str) -> String {
        format!("{}-submit", form_id)
    }
}

impl CartView for DocumentCartView {
    fn set_badge(&self, count: u32) {
        self.document.set_html(&self.binding.badge_id, count.to_string());
    }

    fn displayed_quantity(&self, item_id: &ItemId) -> Option<String> {
        self.document.value(&self.binding.quantity_id(item_id))
    }

    fn set_quantity(&self, item_id: &ItemId, quantity: Quantity) {
        self.document
            .set_value(&self.binding.quantity_id(item_id), quantity.to_string());
    }

    fn remove_line(&self, item_id: &ItemId) {
        self.document.remove(&self.binding.row_id(item_id));
        self.document.remove(&self.binding.quantity_id(item_id));
    }

    fn set_subtotal(&self, text: &str) {
        self.document.set_html(&self.binding.subtotal_id, text);
    }

    fn set_total(&self, text: &str) {
        self.document.set_html(&self.binding.total_id, text);
    }

    fn set_submit_button(&self, form_id: &str, state: ButtonState) {
        let id = Self::button_id(form_id);
        let Some(button) = self.document.get(&id) else {
            return;
        };

        let mut labels = self
            .button_labels
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match button_html(state) {
            Some(html) => {
                labels.entry(form_id.to_string()).or_insert(button.html);
                self.document.set_html(&id, html);
            }
            None => {
                if let Some(label) = labels.remove(form_id) {
                    self.document.set_html(&id, label);
                }
            }
        }

        if state.is_disabled() {
            self.document.add_class(&id, "disabled");
        } else {
            self.document.remove_class(&id, "disabled");
        }

        if state == ButtonState::Added {
            self.document.remove_class(&id, "btn-primary");
            self.document.add_class(&id, "btn-success");
        } else if button.classes.contains("btn-success") {
            self.document.remove_class(&id, "btn-success");
            self.document.add_class(&id, "btn-primary");
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_string());
        self.confirm_answer.load(Ordering::SeqCst)
    }

    fn reload(&self) {
        debug!("Reloading cart page");
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::view::Element;

    fn cart_page() -> Arc<Document> {
        Arc::new(
            Document::new()
                .with_element("cart-count", Element::new().with_html("0"))
                .with_element("cart-subtotal", Element::new())
                .with_element("cart-total", Element::new())
                .with_element("cart-item-7", Element::new())
                .with_element("quantity-7", Element::new().with_value("2"))
                .with_element(
                    "product-7-submit",
                    Element::new().with_class("btn-primary").with_html("Add to cart"),
                ),
        )
    }

    #[test]
    fn test_quantity_and_removal() {
        let view = DocumentCartView::new(cart_page(), CartBinding::default());
        let item = ItemId::new("7");

        assert_eq!(view.displayed_quantity(&item).as_deref(), Some("2"));
        view.set_quantity(&item, Quantity::clamped(5));
        assert_eq!(view.displayed_quantity(&item).as_deref(), Some("5"));

        view.remove_line(&item);
        assert!(!view.document().contains("cart-item-7"));
        assert_eq!(view.displayed_quantity(&item), None);
    }

    #[test]
    fn test_button_cycle_restores_label() {
        let view = DocumentCartView::new(cart_page(), CartBinding::default());
        let document = view.document().clone();

        view.set_submit_button("product-7", ButtonState::Busy);
        assert!(document.html("product-7-submit").unwrap().ends_with("Adding..."));
        assert!(document.has_class("product-7-submit", "disabled"));

        view.set_submit_button("product-7", ButtonState::Added);
        assert!(document.has_class("product-7-submit", "btn-success"));

        view.set_submit_button("product-7", ButtonState::Idle);
        assert_eq!(document.html("product-7-submit").as_deref(), Some("Add to cart"));
        assert!(!document.has_class("product-7-submit", "disabled"));
        assert!(document.has_class("product-7-submit", "btn-primary"));
        assert!(!document.has_class("product-7-submit", "btn-success"));
    }

    #[test]
    fn test_confirm_and_reload() {
        let view = DocumentCartView::new(cart_page(), CartBinding::default()).with_confirm_answer(false);

        assert!(!view.confirm("Remove this item?"));
        view.reload();

        assert_eq!(view.prompts(), vec!["Remove this item?".to_string()]);
        assert_eq!(view.reload_count(), 1);
    }
}
