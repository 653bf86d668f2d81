use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use storefront_ui::controller::{CartController, CartTiming, RegistrationValidator};
use storefront_ui::domain::cart::{ItemId, SubmittedForm};
use storefront_ui::domain::registration::{Field, FieldState, RegistrationConfig};
use storefront_ui::domain::NotificationKind;
use storefront_ui::infrastructure::api::{HttpAccountApi, HttpCartApi};
use storefront_ui::infrastructure::http::{CsrfToken, HttpClient};
use storefront_ui::infrastructure::notification::InMemoryNotificationSink;
use storefront_ui::infrastructure::timing::DebouncePolicy;
use storefront_ui::infrastructure::view::{
    CartBinding, Document, DocumentCartView, DocumentRegistrationView, Element,
    RegistrationBinding,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct CartPage {
    controller: Arc<CartController>,
    view: Arc<DocumentCartView>,
    notifications: Arc<InMemoryNotificationSink>,
}

fn cart_page(server: &MockServer) -> CartPage {
    let document = Arc::new(
        Document::new()
            .with_element("cart-count", Element::new().with_html("1"))
            .with_element("cart-subtotal", Element::new().with_html("$19.90"))
            .with_element("cart-total", Element::new().with_html("$19.90"))
            .with_element("cart-item-42", Element::new())
            .with_element("quantity-42", Element::new().with_value("1"))
            .with_element(
                "product-42-submit",
                Element::new().with_class("btn-primary").with_html("Add to cart"),
            ),
    );
    let view = Arc::new(DocumentCartView::new(document, CartBinding::default()));
    let notifications = Arc::new(InMemoryNotificationSink::new());
    let api = HttpCartApi::new(HttpClient::new(), server.uri(), CsrfToken::new("tok"));
    let controller = Arc::new(CartController::new(
        Arc::new(api),
        view.clone(),
        notifications.clone(),
        CartTiming {
            button_reset: Duration::from_millis(100),
            ..CartTiming::default()
        },
    ));

    CartPage {
        controller,
        view,
        notifications,
    }
}

fn signup_page(
    server: &MockServer,
    policy: DebouncePolicy,
) -> (Arc<RegistrationValidator>, Arc<Document>) {
    let config = RegistrationConfig {
        check_email_url: "/accounts/ajax/check-email/".into(),
        check_username_url: "/accounts/ajax/check-username/".into(),
        validate_password_url: "/accounts/ajax/validate-password/".into(),
        email_field_id: "id_email".into(),
        username_field_id: "id_username".into(),
        password_field_id: "id_password1".into(),
    };
    let binding = RegistrationBinding::from_config(&config);

    let document = Document::new();
    for id in [
        "id_email",
        "id_username",
        "id_password1",
        "email-feedback",
        "username-feedback",
        "strength-bar",
        "password-feedback",
        "password-suggestions",
    ] {
        document.insert(id, Element::new());
    }
    for id in ["email-spinner", "email-check", "email-cross"] {
        document.insert(id, Element::new().with_class("d-none"));
    }
    let document = Arc::new(document);

    let view = Arc::new(DocumentRegistrationView::new(document.clone(), binding));
    let api = HttpAccountApi::new(HttpClient::new(), server.uri(), &config, CsrfToken::new("tok"));
    let validator = Arc::new(RegistrationValidator::new(Arc::new(api), view, policy));
    (validator, document)
}

#[tokio::test]
async fn add_to_cart_updates_badge_and_button() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orders/add_to_cart/42/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Added to cart",
            "cart_total": 3
        })))
        .expect(1)
        .mount(&server)
        .await;
    let page = cart_page(&server);
    let document = page.view.document().clone();

    let form = SubmittedForm::new("product-42", "/orders/add_to_cart/42/")
        .with_class("add-to-cart-form")
        .with_field("quantity", "2");
    page.controller.handle_submit(&form).await;

    assert_eq!(document.html("cart-count").as_deref(), Some("3"));
    assert!(document.html("product-42-submit").unwrap().ends_with("Added!"));
    let notification = page.notifications.last().unwrap();
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.message, "Added to cart");

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(document.html("product-42-submit").as_deref(), Some("Add to cart"));
}

#[tokio::test]
async fn removing_last_line_reloads_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/orders/update-cart/"))
        .and(body_json(json!({"item_id": "42", "quantity": 0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Item removed",
            "subtotal": "0.00",
            "cart_total": 0
        })))
        .expect(1)
        .mount(&server)
        .await;
    let page = cart_page(&server);
    let document = page.view.document().clone();

    page.controller.handle_remove(&ItemId::new("42")).await;

    assert!(!document.contains("cart-item-42"));
    assert_eq!(document.html("cart-subtotal").as_deref(), Some("$0.00"));
    assert_eq!(document.html("cart-total").as_deref(), Some("$0.00"));
    assert_eq!(document.html("cart-count").as_deref(), Some("0"));
    assert_eq!(page.view.reload_count(), 1);
    assert_eq!(page.notifications.last().unwrap().message, "Item removed");
}

#[tokio::test]
async fn rejected_update_shows_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/orders/update-cart/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"success": false, "message": "Only 5 left in stock"})),
        )
        .mount(&server)
        .await;
    let page = cart_page(&server);

    page.controller
        .handle_quantity_edit(ItemId::new("42"), "8")
        .await;

    let notification = page.notifications.last().unwrap();
    assert_eq!(notification.kind, NotificationKind::Danger);
    assert_eq!(notification.message, "Only 5 left in stock");
    assert_eq!(page.view.document().value("quantity-42").as_deref(), Some("1"));
}

#[tokio::test]
async fn debounced_email_sends_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/accounts/ajax/check-email/"))
        .and(body_json(json!({"email": "taken@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "is_valid": false,
            "message": "This email is already registered"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let policy = DebouncePolicy {
        email: Duration::from_millis(50),
        ..DebouncePolicy::default()
    };
    let (validator, document) = signup_page(&server, policy);

    for value in ["t", "taken@", "taken@example.com"] {
        validator.on_email_input(value).await;
    }
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(validator.state(Field::Email), FieldState::Invalid);
    assert!(!document.has_class("email-cross", "d-none"));
    assert!(document.has_class("id_email", "is-invalid"));
    let feedback = document.html("email-feedback").unwrap();
    assert!(feedback.contains("Invalid Email"));
    assert!(feedback.contains("This email is already registered"));
}

#[tokio::test]
async fn strong_password_renders_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/accounts/ajax/validate-password/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "is_valid": true,
            "strength": "strong",
            "score": 9,
            "max_score": 10,
            "message": "Excellent password",
            "suggestions": "",
            "details": "✓ Good length"
        })))
        .mount(&server)
        .await;
    let (validator, document) = signup_page(&server, DebouncePolicy::default());

    validator.on_password_input("Tr0ub4dor&3-horse").await;

    assert_eq!(validator.state(Field::Password), FieldState::Valid);
    assert_eq!(
        document.get("strength-bar").unwrap().class_name(),
        "strength-bar strength-strong"
    );
    assert!(document
        .html("password-feedback")
        .unwrap()
        .contains("Strength: 9/10 points"));
    assert!(!document
        .html("password-suggestions")
        .unwrap()
        .contains("Improve:"));
}

#[tokio::test]
async fn backend_outage_renders_connection_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;
    let (validator, document) = signup_page(&server, DebouncePolicy::uniform(Duration::ZERO));

    validator.on_email_input("grace@example.com").await;

    assert_eq!(validator.state(Field::Email), FieldState::NetworkError);
    let feedback = document.html("email-feedback").unwrap();
    assert!(feedback.contains("Connection Error"));
    assert!(feedback.contains("Error checking email availability"));
}
