//! HTTP transport to the storefront backend

mod client;
mod csrf;

#[cfg(test)]
pub use client::mock;
pub use client::{HttpClient, HttpClientTrait};
pub use csrf::{resolve_url, CsrfToken, CSRF_HEADER, REQUESTED_WITH_HEADER, XML_HTTP_REQUEST};
