//! Anti-forgery token handling

/// Header the backend reads the token from
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Header marking a request as issued by page script
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Per-session anti-forgery token sent on state-changing requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// A missing token is sent as an empty header, letting the server reject it
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn header(&self) -> (&'static str, &str) {
        (CSRF_HEADER, &self.0)
    }
}

impl From<Option<String>> for CsrfToken {
    fn from(token: Option<String>) -> Self {
        token.map(Self).unwrap_or_default()
    }
}

/// Resolves an endpoint path against the backend base URL.
///
/// Absolute URLs (as found in form actions) are returned unchanged.
pub fn resolve_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_pair() {
        let token = CsrfToken::new("abc");
        assert_eq!(token.header(), ("X-CSRFToken", "abc"));
    }

    #[test]
    fn test_from_option() {
        assert!(CsrfToken::from(None).is_empty());
        assert_eq!(CsrfToken::from(Some("t".to_string())).as_str(), "t");
    }

    #[test]
    fn test_resolve_url() {
        assert_eq!(
            resolve_url("http://shop.test/", "/api/v1/orders/cart-count/"),
            "http://shop.test/api/v1/orders/cart-count/"
        );
        assert_eq!(
            resolve_url("http://shop.test", "orders/cart/add/"),
            "http://shop.test/orders/cart/add/"
        );
        assert_eq!(
            resolve_url("http://shop.test", "https://other.test/add_to_cart/"),
            "https://other.test/add_to_cart/"
        );
    }
}
