//! Signup form configuration injected by the page

use std::collections::HashMap;

use super::AvailabilityField;
use crate::domain::DomainError;

const CHECK_EMAIL_URL: &str = "data-check-email-url";
const CHECK_USERNAME_URL: &str = "data-check-username-url";
const VALIDATE_PASSWORD_URL: &str = "data-validate-password-url";
const USERNAME_FIELD_ID: &str = "data-username-field-id";
const PASSWORD_FIELD_ID: &str = "data-password-field-id";

/// Element id of the email input rendered by the signup form
pub const DEFAULT_EMAIL_FIELD_ID: &str = "id_email";
pub const DEFAULT_USERNAME_FIELD_ID: &str = "id_username";
pub const DEFAULT_PASSWORD_FIELD_ID: &str = "id_password1";

/// Endpoints and input ids read from the signup form's data attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationConfig {
    pub check_email_url: String,
    pub check_username_url: String,
    pub validate_password_url: String,
    pub email_field_id: String,
    pub username_field_id: String,
    pub password_field_id: String,
}

impl RegistrationConfig {
    /// Builds the configuration from the host form's `data-*` attributes.
    ///
    /// The three endpoint attributes are required; field ids fall back to the
    /// ids the server-side form renders by default.
    pub fn from_data_attributes(attributes: &HashMap<String, String>) -> Result<Self, DomainError> {
        let required = |name: &str| -> Result<String, DomainError> {
            attributes
                .get(name)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .ok_or_else(|| {
                    DomainError::configuration(format!("signup form is missing {}", name))
                })
        };
        let optional = |name: &str, default: &str| -> String {
            attributes
                .get(name)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Ok(Self {
            check_email_url: required(CHECK_EMAIL_URL)?,
            check_username_url: required(CHECK_USERNAME_URL)?,
            validate_password_url: required(VALIDATE_PASSWORD_URL)?,
            email_field_id: DEFAULT_EMAIL_FIELD_ID.to_string(),
            username_field_id: optional(USERNAME_FIELD_ID, DEFAULT_USERNAME_FIELD_ID),
            password_field_id: optional(PASSWORD_FIELD_ID, DEFAULT_PASSWORD_FIELD_ID),
        })
    }

    /// Endpoint that checks the given field
    pub fn availability_url(&self, field: AvailabilityField) -> &str {
        match field {
            AvailabilityField::Email => &self.check_email_url,
            AvailabilityField::Username => &self.check_username_url,
        }
    }
}
