//! Auth-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Credentials file not readable: {0}")]
    MissingCredentials(#[source] std::io::Error),

    #[error("Malformed service account key: {0}")]
    MalformedKey(#[from] serde_json::Error),

    #[error("Invalid private key: {0}")]
    InvalidKey(#[from] jsonwebtoken::errors::Error),

    #[error("Token grant rejected: {0}")]
    GrantRejected(String),

    #[error("Token endpoint error: {0}")]
    TokenEndpoint(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

impl AuthError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredentials(_) => "Service account key file not found".to_string(),
            Self::MalformedKey(_) => "Service account key file is not valid JSON".to_string(),
            Self::InvalidKey(_) => "Service account private key is not usable".to_string(),
            Self::GrantRejected(_) => {
                "The service account was refused access. Check its authorization scope."
                    .to_string()
            }
            Self::TokenEndpoint(msg) => format!("Token endpoint error: {}", msg),
            Self::NetworkError(_) => "Network error. Check your connection.".to_string(),
        }
    }

    /// Whether this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NetworkError(_) | Self::TokenEndpoint(_))
    }
}
