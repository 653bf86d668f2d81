//! Validation endpoint payloads

use serde::{Deserialize, Serialize};

/// Response of the email and username availability checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    #[serde(default)]
    pub is_valid: bool,
    #[serde(default)]
    pub message: String,
}

impl AvailabilityResult {
    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Server-classified password quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    #[default]
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Response of the password strength check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCheck {
    #[serde(default)]
    pub is_valid: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub strength: Strength,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub max_score: u32,
    #[serde(default)]
    pub suggestions: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    /// Set when the rejection comes from the server's password policy
    /// validators rather than the strength heuristic
    #[serde(default)]
    pub django_error: bool,
}

impl PasswordCheck {
    pub fn new(is_valid: bool, strength: Strength, message: impl Into<String>) -> Self {
        Self {
            is_valid,
            message: message.into(),
            strength,
            score: 0,
            max_score: 0,
            suggestions: None,
            details: None,
            django_error: false,
        }
    }

    pub fn with_score(mut self, score: u32, max_score: u32) -> Self {
        self.score = score;
        self.max_score = max_score;
        self
    }

    pub fn with_suggestions(mut self, suggestions: impl Into<String>) -> Self {
        self.suggestions = Some(suggestions.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_policy_error(mut self) -> Self {
        self.django_error = true;
        self
    }

    /// Accepted and classified as strong
    pub fn is_strong_and_valid(&self) -> bool {
        self.is_valid && self.strength == Strength::Strong
    }
}
