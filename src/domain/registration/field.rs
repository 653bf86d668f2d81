//! Signup form fields and their validation state

use serde::{Deserialize, Serialize};

/// A field on the signup form that receives live feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Email,
    Username,
    Password,
}

impl Field {
    pub fn all() -> [Self; 3] {
        [Self::Email, Self::Username, Self::Password]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "username",
            Self::Password => "password",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields checked for availability against the account store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityField {
    Email,
    Username,
}

impl AvailabilityField {
    pub fn field(self) -> Field {
        match self {
            Self::Email => Field::Email,
            Self::Username => Field::Username,
        }
    }

    /// JSON key the check endpoint expects
    pub fn payload_key(self) -> &'static str {
        self.field().as_str()
    }
}

impl std::fmt::Display for AvailabilityField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.payload_key())
    }
}

/// Validation state of a single field
///
/// `Idle` → `Pending` → one of `Valid`, `Invalid`, `NetworkError`; emptying the
/// field or submitting the form returns it to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
    #[default]
    Idle,
    Pending,
    Valid,
    Invalid,
    NetworkError,
}

impl FieldState {
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Valid | Self::Invalid | Self::NetworkError)
    }
}
