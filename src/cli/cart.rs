//! Cart command - drives the cart controller against the backend

use std::sync::Arc;
use std::time::Duration;

use clap::Subcommand;
use tracing::info;

use super::{http_client, prepare, BackendArgs};
use crate::config::AppConfig;
use crate::controller::{CartController, CartTiming};
use crate::domain::cart::{ItemId, QuantityDirection, SubmitOutcome, SubmittedForm, CSRF_FIELD};
use crate::infrastructure::api::HttpCartApi;
use crate::infrastructure::http::{CsrfToken, HttpClient};
use crate::infrastructure::notification::InMemoryNotificationSink;
use crate::infrastructure::view::{CartBinding, Document, DocumentCartView, Element};

const FORM_ID: &str = "add-to-cart";

#[derive(Subcommand, Debug)]
pub enum CartCommand {
    /// Show the number of items in the cart
    Count,

    /// Submit an add-to-cart form
    Add {
        /// Form action (defaults to the configured add-to-cart path)
        #[arg(long)]
        action: Option<String>,

        /// Form field as name=value; repeatable
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },

    /// Type a quantity into a cart line
    Set {
        item: String,
        /// Raw input, parsed leniently and clamped to 0..=99
        quantity: String,
    },

    /// Press a +/- button on a cart line
    Bump {
        item: String,
        /// increase or decrease
        direction: QuantityDirection,
        /// Quantity currently shown for the line
        #[arg(long, default_value_t = 1)]
        current: u32,
    },

    /// Remove a cart line
    Remove {
        item: String,
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

/// Page with the cart nodes and, when given, one cart line
fn cart_page(line: Option<(&ItemId, u32)>) -> Arc<Document> {
    let binding = CartBinding::default();
    let document = Document::new()
        .with_element(&binding.badge_id, Element::new())
        .with_element(&binding.subtotal_id, Element::new())
        .with_element(&binding.total_id, Element::new())
        .with_element(
            &DocumentCartView::button_id(FORM_ID),
            Element::new().with_class("btn-primary").with_html("Add to cart"),
        );

    if let Some((item_id, quantity)) = line {
        document.insert(&binding.row_id(item_id), Element::new());
        document.insert(
            &binding.quantity_id(item_id),
            Element::new().with_value(quantity.to_string()),
        );
    }
    Arc::new(document)
}

pub async fn run(backend: BackendArgs, command: CartCommand) -> anyhow::Result<()> {
    let config = prepare(&backend);

    let line = match &command {
        CartCommand::Set { item, .. } | CartCommand::Remove { item, .. } => {
            Some((ItemId::new(item.as_str()), 1))
        }
        CartCommand::Bump { item, current, .. } => Some((ItemId::new(item.as_str()), *current)),
        _ => None,
    };

    let document = cart_page(line.as_ref().map(|(id, quantity)| (id, *quantity)));
    let view = Arc::new(DocumentCartView::new(document.clone(), CartBinding::default()));
    let notifications = Arc::new(InMemoryNotificationSink::new());
    let controller = Arc::new(CartController::new(
        Arc::new(cart_api(&config)?),
        view.clone(),
        notifications.clone(),
        // One edit per invocation, so there is nothing to debounce.
        CartTiming {
            quantity_debounce: Duration::ZERO,
            ..CartTiming::from(&config.timing)
        },
    ));

    match command {
        CartCommand::Count => controller.load_initial_count().await,
        CartCommand::Add { action, fields } => {
            let action = action.unwrap_or_else(|| config.backend.add_to_cart_path.clone());
            let mut form = SubmittedForm::new(FORM_ID, action).with_class("add-to-cart-form");
            if let Some(token) = &config.backend.csrf_token {
                form = form.with_field(CSRF_FIELD, token.as_str());
            }
            for (name, value) in fields {
                form = form.with_field(name, value);
            }

            if controller.handle_submit(&form).await == SubmitOutcome::Ignored {
                info!("Form was not an add-to-cart form");
            }
        }
        CartCommand::Set { item, quantity } => {
            controller
                .handle_quantity_edit(ItemId::new(item), &quantity)
                .await;
        }
        CartCommand::Bump { item, direction, .. } => {
            controller
                .handle_quantity_button(&ItemId::new(item), direction)
                .await;
        }
        CartCommand::Remove { item, yes } => {
            view.set_confirm_answer(yes);
            controller.handle_remove(&ItemId::new(item)).await;
            if !yes {
                println!("Removal not confirmed; pass --yes to remove the line");
            }
        }
    }

    print_page(&document, view.as_ref(), line.as_ref().map(|(id, _)| id));
    for notification in notifications.history() {
        println!("[{}] {}", notification.kind.as_str(), notification.message);
    }
    Ok(())
}

fn cart_api(config: &AppConfig) -> anyhow::Result<HttpCartApi<HttpClient>> {
    let csrf = CsrfToken::from(config.backend.csrf_token.clone());
    let api = HttpCartApi::new(http_client(config)?, &config.backend.base_url, csrf)
        .with_paths(&config.backend.cart_count_path, &config.backend.update_cart_path);
    Ok(api)
}

fn print_page(document: &Document, view: &DocumentCartView, item_id: Option<&ItemId>) {
    let binding = view.binding();
    let show = |label: &str, id: &str| {
        if let Some(html) = document.html(id).filter(|html| !html.is_empty()) {
            println!("{:<10} {}", label, html);
        }
    };

    show("badge:", &binding.badge_id);
    show("subtotal:", &binding.subtotal_id);
    show("total:", &binding.total_id);

    if let Some(item_id) = item_id {
        match document.value(&binding.quantity_id(item_id)) {
            Some(quantity) => println!("{:<10} {} x{}", "line:", item_id, quantity),
            None => println!("{:<10} {} removed", "line:", item_id),
        }
    }

    if view.reload_count() > 0 {
        println!("cart is empty; page reloaded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("quantity=2").unwrap(),
            ("quantity".to_string(), "2".to_string())
        );
        assert_eq!(
            parse_field("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert!(parse_field("=2").is_err());
        assert!(parse_field("quantity").is_err());
    }

    #[test]
    fn test_cart_page_with_line() {
        let item = ItemId::new("9");
        let document = cart_page(Some((&item, 4)));

        assert!(document.contains("cart-item-9"));
        assert_eq!(document.value("quantity-9").as_deref(), Some("4"));
        assert!(document.contains("add-to-cart-submit"));
    }
}
