//! Cart endpoint payloads

use serde::{Deserialize, Serialize};

/// Response of the cart count endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartCountResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub cart_total: u32,
}

/// Response of an add-to-cart form post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddToCartResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub cart_total: Option<u32>,
}

/// Response of the cart update endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCartResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub subtotal: Option<Subtotal>,
    #[serde(default)]
    pub cart_total: Option<u32>,
}

impl UpdateCartResponse {
    /// Whether the server reports the cart as empty
    pub fn cart_is_empty(&self) -> bool {
        self.cart_total == Some(0)
    }
}

/// Cart subtotal as the backend sends it
///
/// Some endpoints emit a preformatted string, others a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Subtotal {
    Text(String),
    Amount(f64),
}

impl std::fmt::Display for Subtotal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Amount(amount) => write!(f, "{:.2}", amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_response_with_string_subtotal() {
        let response: UpdateCartResponse = serde_json::from_value(json!({
            "success": true,
            "cart_total": 0,
            "subtotal": "0.00"
        }))
        .unwrap();

        assert!(response.success);
        assert!(response.cart_is_empty());
        assert_eq!(response.subtotal.unwrap().to_string(), "0.00");
        assert_eq!(response.message, None);
    }

    #[test]
    fn test_update_response_with_numeric_subtotal() {
        let response: UpdateCartResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Cart updated",
            "cart_total": 4,
            "subtotal": 12.5
        }))
        .unwrap();

        assert_eq!(response.subtotal.as_ref().unwrap().to_string(), "12.50");
        assert!(!response.cart_is_empty());
    }

    #[test]
    fn test_rejection_without_totals() {
        let response: UpdateCartResponse = serde_json::from_value(json!({
            "success": false,
            "message": "No CartItem matches the given query."
        }))
        .unwrap();

        assert!(!response.success);
        assert_eq!(response.cart_total, None);
        assert!(!response.cart_is_empty());
    }

    #[test]
    fn test_count_response_defaults() {
        let response: CartCountResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!response.success);
        assert_eq!(response.cart_total, 0);
    }
}
