//! Cart backend trait

use async_trait::async_trait;

use super::{AddToCartResponse, CartCountResponse, ItemId, Quantity, UpdateCartResponse};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Backend calls the cart controller depends on
///
/// Business rejections (`success: false`) come back as `Ok`; only transport
/// failures and unparseable bodies are errors.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CartApi: Send + Sync {
    /// Fetches the current number of items in the cart
    async fn cart_count(&self) -> Result<CartCountResponse, DomainError>;

    /// Posts an add-to-cart form to its action URL
    async fn add_to_cart(
        &self,
        action: &str,
        fields: &[(String, String)],
    ) -> Result<AddToCartResponse, DomainError>;

    /// Sets the quantity of a cart line; zero removes it
    async fn update_cart(
        &self,
        item_id: &ItemId,
        quantity: Quantity,
    ) -> Result<UpdateCartResponse, DomainError>;
}
