//! Account validation backend trait

use async_trait::async_trait;

use super::{AvailabilityField, AvailabilityResult, PasswordCheck};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Backend calls the signup validator depends on
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Checks whether an email or username is well-formed and unused
    async fn check_availability(
        &self,
        field: AvailabilityField,
        value: &str,
    ) -> Result<AvailabilityResult, DomainError>;

    /// Scores a candidate password
    async fn check_password(&self, password: &str) -> Result<PasswordCheck, DomainError>;
}
