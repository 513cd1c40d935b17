//! Calendar-specific error types.

use resly_auth::AuthError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Authentication required")]
    AuthRequired,

    #[error("Token expired")]
    TokenExpired,

    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl CalendarError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthRequired => "The service account is not authorized for this calendar".to_string(),
            Self::TokenExpired => "The access token has expired. Re-authenticate.".to_string(),
            Self::RateLimited(secs) => format!("Too many requests. Please wait {} seconds.", secs),
            Self::EventNotFound(_) => "Event not found".to_string(),
            Self::InvalidConfig(msg) => format!("Invalid configuration: {}", msg),
            Self::ApiError(msg) => format!("Calendar error: {}", msg),
            Self::NetworkError(_) => "Network error. Check your connection.".to_string(),
            Self::Auth(err) => err.user_message(),
        }
    }

    /// Whether this error should trigger a token refresh.
    pub fn should_refresh_token(&self) -> bool {
        matches!(self, Self::TokenExpired | Self::AuthRequired)
    }

    /// Whether this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited(_) | Self::NetworkError(_) => true,
            Self::Auth(err) => err.is_retryable(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = CalendarError::AuthRequired;
        assert!(err.user_message().contains("authorized"));

        let err = CalendarError::RateLimited(30);
        assert!(err.user_message().contains("30"));

        let err = CalendarError::EventNotFound("abc".into());
        assert!(err.user_message().contains("not found"));
    }

    #[test]
    fn test_should_refresh_token() {
        assert!(CalendarError::TokenExpired.should_refresh_token());
        assert!(CalendarError::AuthRequired.should_refresh_token());
        assert!(!CalendarError::EventNotFound("x".into()).should_refresh_token());
    }

    #[test]
    fn test_is_retryable() {
        assert!(CalendarError::RateLimited(10).is_retryable());
        assert!(!CalendarError::EventNotFound("x".into()).is_retryable());
        assert!(!CalendarError::InvalidConfig("x".into()).is_retryable());
    }

    #[test]
    fn test_auth_errors_pass_through() {
        let err = CalendarError::from(AuthError::GrantRejected("invalid_scope".into()));
        assert!(err.user_message().contains("scope"));
        assert!(!err.is_retryable());
    }
}
