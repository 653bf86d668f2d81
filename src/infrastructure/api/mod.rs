//! Typed clients for the storefront JSON endpoints

mod account;
mod cart;

pub use account::HttpAccountApi;
pub use cart::{HttpCartApi, DEFAULT_CART_COUNT_PATH, DEFAULT_UPDATE_CART_PATH};

use serde::de::DeserializeOwned;

use crate::domain::DomainError;

/// Decodes an endpoint payload, treating an unexpected shape as a malformed response
fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, DomainError> {
    serde_json::from_value(value)
        .map_err(|e| DomainError::malformed(format!("Unexpected response shape: {}", e)))
}
