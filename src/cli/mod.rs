//! CLI module for the storefront UI controllers
//!
//! Drives the controllers headlessly against a running backend:
//! - `cart`: badge count, add-to-cart and cart line edits
//! - `check`: live signup validation of an email, username or password

pub mod cart;
pub mod check;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::http::HttpClient;
use crate::infrastructure::logging;

/// Storefront UI - cart and signup controllers
#[derive(Parser)]
#[command(name = "storefront")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub backend: BackendArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Backend overrides shared by every command
#[derive(Args, Clone, Debug, Default)]
pub struct BackendArgs {
    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// CSRF token sent on mutating requests (overrides config)
    #[arg(long, global = true)]
    pub csrf_token: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Cart badge and cart line operations
    #[command(subcommand)]
    Cart(cart::CartCommand),

    /// Signup field validation
    #[command(subcommand)]
    Check(check::CheckCommand),
}

/// Loads configuration, applies command line overrides and starts logging
pub fn prepare(backend: &BackendArgs) -> AppConfig {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().unwrap_or_default();
    if let Some(base_url) = &backend.base_url {
        config.backend.base_url = base_url.clone();
    }
    if let Some(token) = &backend.csrf_token {
        config.backend.csrf_token = Some(token.clone());
    }

    logging::init_logging(&config.logging);
    config
}

pub fn http_client(config: &AppConfig) -> anyhow::Result<HttpClient> {
    let client = match config.backend.timeout() {
        Some(timeout) => HttpClient::with_timeout(timeout)?,
        None => HttpClient::new(),
    };
    Ok(client)
}
