use async_trait::async_trait;
use serde_json::{json, Map, Value};

use super::decode;
use crate::domain::registration::{
    AccountApi, AvailabilityField, AvailabilityResult, PasswordCheck, RegistrationConfig,
};
use crate::domain::DomainError;
use crate::infrastructure::http::{resolve_url, CsrfToken, HttpClientTrait};

/// Signup validation endpoints, addressed by the URLs the signup form carries
#[derive(Debug)]
pub struct HttpAccountApi<C: HttpClientTrait> {
    client: C,
    base_url: String,
    check_email_url: String,
    check_username_url: String,
    validate_password_url: String,
    csrf: CsrfToken,
}

impl<C: HttpClientTrait> HttpAccountApi<C> {
    pub fn new(
        client: C,
        base_url: impl Into<String>,
        config: &RegistrationConfig,
        csrf: CsrfToken,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            check_email_url: config.check_email_url.clone(),
            check_username_url: config.check_username_url.clone(),
            validate_password_url: config.validate_password_url.clone(),
            csrf,
        }
    }

    fn availability_url(&self, field: AvailabilityField) -> String {
        let path = match field {
            AvailabilityField::Email => &self.check_email_url,
            AvailabilityField::Username => &self.check_username_url,
        };
        resolve_url(&self.base_url, path)
    }
}

#[async_trait]
impl<C: HttpClientTrait> AccountApi for HttpAccountApi<C> {
    async fn check_availability(
        &self,
        field: AvailabilityField,
        value: &str,
    ) -> Result<AvailabilityResult, DomainError> {
        let mut body = Map::new();
        body.insert(field.payload_key().to_string(), Value::String(value.to_string()));

        let response = self
            .client
            .post_json(
                &self.availability_url(field),
                vec![self.csrf.header()],
                &Value::Object(body),
            )
            .await?;
        decode(response)
    }

    async fn check_password(&self, password: &str) -> Result<PasswordCheck, DomainError> {
        let response = self
            .client
            .post_json(
                &resolve_url(&self.base_url, &self.validate_password_url),
                vec![self.csrf.header()],
                &json!({ "password": password }),
            )
            .await?;
        decode(response)
    }
}
