//! Storefront UI
//!
//! Client-side controllers for a storefront backend:
//! - Cart badge, add-to-cart forms and cart line edits with running totals
//! - Live signup validation of email, username and password
//! - Debounced, CSRF-protected JSON calls with last-sent-wins ordering
//! - View bindings over an in-memory page document and toast notifications

pub mod cli;
pub mod config;
pub mod controller;
pub mod domain;
pub mod infrastructure;
pub mod render;

pub use config::AppConfig;
pub use controller::{CartController, CartTiming, RegistrationValidator};
