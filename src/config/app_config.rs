use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::api::{DEFAULT_CART_COUNT_PATH, DEFAULT_UPDATE_CART_PATH};
use crate::infrastructure::timing::DebouncePolicy;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub timing: TimingConfig,
    pub logging: LoggingConfig,
}

/// Storefront backend location and endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub cart_count_path: String,
    pub update_cart_path: String,
    pub add_to_cart_path: String,
    pub check_email_path: String,
    pub check_username_path: String,
    pub validate_password_path: String,
    pub csrf_token: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Debounce delays and UI timers, in milliseconds
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub email_debounce_ms: u64,
    pub username_debounce_ms: u64,
    pub password_debounce_ms: u64,
    pub quantity_debounce_ms: u64,
    pub notification_ttl_ms: u64,
    pub button_reset_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            cart_count_path: DEFAULT_CART_COUNT_PATH.to_string(),
            update_cart_path: DEFAULT_UPDATE_CART_PATH.to_string(),
            add_to_cart_path: "/orders/cart/add/".to_string(),
            check_email_path: "/accounts/ajax/check-email/".to_string(),
            check_username_path: "/accounts/ajax/check-username/".to_string(),
            validate_password_path: "/accounts/ajax/validate-password/".to_string(),
            csrf_token: None,
            timeout_secs: None,
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            email_debounce_ms: 500,
            username_debounce_ms: 500,
            password_debounce_ms: 0,
            quantity_debounce_ms: 0,
            notification_ttl_ms: 5000,
            button_reset_ms: 2000,
        }
    }
}

impl TimingConfig {
    pub fn debounce_policy(&self) -> DebouncePolicy {
        DebouncePolicy {
            email: Duration::from_millis(self.email_debounce_ms),
            username: Duration::from_millis(self.username_debounce_ms),
            password: Duration::from_millis(self.password_debounce_ms),
            quantity: Duration::from_millis(self.quantity_debounce_ms),
        }
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    pub fn button_reset(&self) -> Duration {
        Duration::from_millis(self.button_reset_ms)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("STOREFRONT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
