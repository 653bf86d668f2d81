//! Cart page controller

use std::sync::{Arc, Weak};
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::config::TimingConfig;
use crate::domain::cart::{
    apply_mutations, ButtonState, CartApi, CartView, ItemId, Quantity, QuantityDirection,
    SubmitOutcome, SubmittedForm,
};
use crate::domain::notification::{Notification, NotificationSink};
use crate::infrastructure::timing::{Debouncer, KeyedSequencer};
use crate::render::cart::{
    add_notification, update_mutations, update_notification, ADD_ERROR, UPDATE_ERROR,
};

pub const REMOVE_PROMPT: &str = "Are you sure you want to remove this item?";

/// Timers used by the cart controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTiming {
    /// Quiet period before a typed quantity is sent; zero sends every edit
    pub quantity_debounce: Duration,
    pub notification_ttl: Duration,
    /// How long the "Added!" button state lasts
    pub button_reset: Duration,
}

impl Default for CartTiming {
    fn default() -> Self {
        Self::from(&TimingConfig::default())
    }
}

impl From<&TimingConfig> for CartTiming {
    fn from(config: &TimingConfig) -> Self {
        Self {
            quantity_debounce: config.debounce_policy().quantity,
            notification_ttl: config.notification_ttl(),
            button_reset: config.button_reset(),
        }
    }
}

/// Drives the cart badge, add-to-cart forms and cart line edits
///
/// Failures never escape: each one ends as a danger notification, except the
/// initial badge load which only logs.
pub struct CartController {
    api: Arc<dyn CartApi>,
    view: Arc<dyn CartView>,
    notifications: Arc<dyn NotificationSink>,
    timing: CartTiming,
    debouncer: Debouncer,
    sequencer: KeyedSequencer,
}

impl std::fmt::Debug for CartController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartController")
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}

fn item_key(item_id: &ItemId) -> String {
    format!("item:{}", item_id)
}

fn button_key(form_id: &str) -> String {
    format!("button:{}", form_id)
}

impl CartController {
    pub fn new(
        api: Arc<dyn CartApi>,
        view: Arc<dyn CartView>,
        notifications: Arc<dyn NotificationSink>,
        timing: CartTiming,
    ) -> Self {
        Self {
            api,
            view,
            notifications,
            timing,
            debouncer: Debouncer::new(),
            sequencer: KeyedSequencer::new(),
        }
    }

    /// Fills the badge with the server's item count
    #[instrument(skip(self))]
    pub async fn load_initial_count(&self) {
        match self.api.cart_count().await {
            Ok(response) if response.success => self.view.set_badge(response.cart_total),
            Ok(_) => warn!("Cart count request was rejected"),
            Err(e) => warn!(error = %e, "Failed to load cart count"),
        }
    }

    /// Routes a form submission; only add-to-cart forms are intercepted
    pub async fn handle_submit(&self, form: &SubmittedForm) -> SubmitOutcome {
        if !form.is_add_to_cart() {
            debug!(form_id = %form.id, "Ignoring form submission");
            return SubmitOutcome::Ignored;
        }

        self.handle_add_to_cart(form).await;
        SubmitOutcome::Intercepted
    }

    #[instrument(skip(self, form), fields(form_id = %form.id, action = %form.action))]
    pub async fn handle_add_to_cart(&self, form: &SubmittedForm) {
        let form_id = form.id.as_str();
        let reset_key = button_key(form_id);

        self.debouncer.cancel(&reset_key);
        self.view.set_submit_button(form_id, ButtonState::Busy);

        match self.api.add_to_cart(&form.action, &form.fields).await {
            Ok(response) if response.success => {
                if let Some(count) = response.cart_total {
                    self.view.set_badge(count);
                }
                info!(cart_total = ?response.cart_total, "Added to cart");
                self.notify(add_notification(&response));
                self.view.set_submit_button(form_id, ButtonState::Added);

                let view = Arc::clone(&self.view);
                let form_id = form_id.to_string();
                self.debouncer.schedule(&reset_key, self.timing.button_reset, async move {
                    view.set_submit_button(&form_id, ButtonState::Idle);
                });
            }
            Ok(response) => {
                warn!(message = ?response.message, "Add to cart was rejected");
                self.view.set_submit_button(form_id, ButtonState::Idle);
                self.notify(add_notification(&response));
            }
            Err(e) => {
                warn!(error = %e, "Add to cart failed");
                self.view.set_submit_button(form_id, ButtonState::Idle);
                self.notify(Notification::danger(ADD_ERROR));
            }
        }
    }

    /// Sends a typed quantity, parsed leniently and clamped into range
    pub async fn handle_quantity_edit(self: &Arc<Self>, item_id: ItemId, raw: &str) {
        let quantity = Quantity::parse_lenient(raw);
        let delay = self.timing.quantity_debounce;

        if delay.is_zero() {
            self.update_cart_item(&item_id, quantity).await;
            return;
        }

        let controller: Weak<Self> = Arc::downgrade(self);
        self.debouncer.schedule(&item_key(&item_id), delay, async move {
            if let Some(controller) = controller.upgrade() {
                controller.update_cart_item(&item_id, quantity).await;
            }
        });
    }

    /// Steps the displayed quantity by one; does nothing when the item has no input
    pub async fn handle_quantity_button(&self, item_id: &ItemId, direction: QuantityDirection) {
        let Some(displayed) = self.view.displayed_quantity(item_id) else {
            debug!(item_id = %item_id, "No quantity input for item");
            return;
        };

        let quantity = Quantity::parse_lenient(&displayed).step(direction);
        self.debouncer.cancel(&item_key(item_id));
        self.update_cart_item(item_id, quantity).await;
    }

    /// Removes a line after the user confirms
    pub async fn handle_remove(&self, item_id: &ItemId) {
        if !self.view.confirm(REMOVE_PROMPT) {
            debug!(item_id = %item_id, "Removal declined");
            return;
        }

        self.debouncer.cancel(&item_key(item_id));
        self.update_cart_item(item_id, Quantity::ZERO).await;
    }

    /// Sets a line's quantity on the server and mirrors the result on the page
    ///
    /// Only the response to the latest request for an item is applied.
    #[instrument(skip(self, item_id, quantity), fields(item_id = %item_id, quantity = quantity.value()))]
    pub async fn update_cart_item(&self, item_id: &ItemId, quantity: Quantity) {
        let key = item_key(item_id);
        let ticket = self.sequencer.issue(&key);

        let result = self.api.update_cart(item_id, quantity).await;

        if !self.sequencer.is_current(&key, ticket) {
            debug!(ticket = ticket.value(), "Discarding stale cart update response");
            return;
        }

        match result {
            Ok(response) => {
                if !response.success {
                    warn!(message = ?response.message, "Cart update was rejected");
                }
                let mutations = update_mutations(item_id, quantity, &response);
                apply_mutations(self.view.as_ref(), &mutations);
                self.notify(update_notification(&response));
            }
            Err(e) => {
                warn!(error = %e, "Cart update failed");
                self.notify(Notification::danger(UPDATE_ERROR));
            }
        }
    }

    fn notify(&self, notification: Notification) {
        self.notifications
            .notify(notification.with_ttl(self.timing.notification_ttl));
    }
}
