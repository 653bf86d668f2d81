use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use super::decode;
use crate::domain::cart::{
    AddToCartResponse, CartApi, CartCountResponse, ItemId, Quantity, UpdateCartResponse,
    CSRF_FIELD,
};
use crate::domain::DomainError;
use crate::infrastructure::http::{
    resolve_url, CsrfToken, HttpClientTrait, CSRF_HEADER, REQUESTED_WITH_HEADER,
    XML_HTTP_REQUEST,
};

pub const DEFAULT_CART_COUNT_PATH: &str = "/api/v1/orders/cart-count/";
pub const DEFAULT_UPDATE_CART_PATH: &str = "/api/v1/orders/update-cart/";

/// Cart endpoints of the storefront backend
#[derive(Debug)]
pub struct HttpCartApi<C: HttpClientTrait> {
    client: C,
    base_url: String,
    cart_count_path: String,
    update_cart_path: String,
    csrf: CsrfToken,
}

impl<C: HttpClientTrait> HttpCartApi<C> {
    pub fn new(client: C, base_url: impl Into<String>, csrf: CsrfToken) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cart_count_path: DEFAULT_CART_COUNT_PATH.to_string(),
            update_cart_path: DEFAULT_UPDATE_CART_PATH.to_string(),
            csrf,
        }
    }

    pub fn with_paths(
        mut self,
        cart_count_path: impl Into<String>,
        update_cart_path: impl Into<String>,
    ) -> Self {
        self.cart_count_path = cart_count_path.into();
        self.update_cart_path = update_cart_path.into();
        self
    }

    fn url(&self, path: &str) -> String {
        resolve_url(&self.base_url, path)
    }
}

#[async_trait]
impl<C: HttpClientTrait> CartApi for HttpCartApi<C> {
    async fn cart_count(&self) -> Result<CartCountResponse, DomainError> {
        let value = self
            .client
            .get_json(&self.url(&self.cart_count_path), Vec::new())
            .await?;
        decode(value)
    }

    async fn add_to_cart(
        &self,
        action: &str,
        fields: &[(String, String)],
    ) -> Result<AddToCartResponse, DomainError> {
        // The form's own hidden token wins over the configured one.
        let token = fields
            .iter()
            .find(|(name, value)| name == CSRF_FIELD && !value.is_empty())
            .map(|(_, value)| value.as_str())
            .unwrap_or(self.csrf.as_str());

        let url = self.url(action);
        debug!(url = %url, fields = fields.len(), "Posting add-to-cart form");

        let headers = vec![
            (REQUESTED_WITH_HEADER, XML_HTTP_REQUEST),
            (CSRF_HEADER, token),
        ];
        let value = self.client.post_form(&url, headers, fields).await?;
        decode(value)
    }

    async fn update_cart(
        &self,
        item_id: &ItemId,
        quantity: Quantity,
    ) -> Result<UpdateCartResponse, DomainError> {
        let body = json!({
            "item_id": item_id.as_str(),
            "quantity": quantity.value(),
        });

        let value = self
            .client
            .post_json(
                &self.url(&self.update_cart_path),
                vec![self.csrf.header()],
                &body,
            )
            .await?;
        decode(value)
    }
}
