use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        status: Option<u16>,
    },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl DomainError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            status: None,
        }
    }

    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether the page should render this as a "could not reach the server" state.
    ///
    /// Transport failures and unparseable responses are indistinguishable to the user.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::MalformedResponse { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error() {
        let error = DomainError::transport("connection refused");
        assert_eq!(error.to_string(), "Transport error: connection refused");
        assert!(error.is_connection_error());
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_http_status_error() {
        let error = DomainError::http_status(502, "HTTP 502 Bad Gateway: <html>");
        assert_eq!(error.status(), Some(502));
        assert!(error.is_connection_error());
    }

    #[test]
    fn test_malformed_is_connection_error() {
        let error = DomainError::malformed("expected value at line 1 column 1");
        assert!(error.is_connection_error());
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("missing data-check-email-url");
        assert_eq!(
            error.to_string(),
            "Configuration error: missing data-check-email-url"
        );
        assert!(!error.is_connection_error());
    }
}
