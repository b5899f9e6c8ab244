//! Error types for the HIBP client.

use breachcheck_core::BreachCheckError;
use thiserror::Error;

/// Errors returned by the HaveIBeenPwned API or the transport underneath it.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP 400
    #[error("Bad request - invalid email format")]
    InvalidEmail,

    /// HTTP 401
    #[error("Unauthorized - check your API key")]
    Unauthorized,

    /// HTTP 403
    #[error("Forbidden - API key may be invalid or expired")]
    Forbidden,

    /// HTTP 429
    #[error("Rate limit exceeded - please wait before trying again")]
    RateLimited,

    /// HTTP 404 on the single-breach endpoint
    #[error("Breach '{name}' not found")]
    BreachNotFound {
        /// Breach name that was requested
        name: String,
    },

    /// Any other status code
    #[error("API request failed with status {status}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
    },

    /// Connection, DNS, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 200 response whose body is not the expected JSON
    #[error("invalid response body: {0}")]
    InvalidResponse(String),

    /// HTTP client could not be constructed
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for HIBP operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<ApiError> for BreachCheckError {
    fn from(err: ApiError) -> Self {
        BreachCheckError::Api(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiError::RateLimited.to_string(),
            "Rate limit exceeded - please wait before trying again"
        );
        assert_eq!(
            ApiError::UnexpectedStatus { status: 503 }.to_string(),
            "API request failed with status 503"
        );
        assert_eq!(
            ApiError::BreachNotFound {
                name: "Adobe".to_string()
            }
            .to_string(),
            "Breach 'Adobe' not found"
        );
    }

    #[test]
    fn test_into_breachcheck_error() {
        let err: BreachCheckError = ApiError::Unauthorized.into();
        assert!(matches!(err, BreachCheckError::Api(_)));
        assert_eq!(
            err.to_string(),
            "API Error: Unauthorized - check your API key"
        );
    }
}
