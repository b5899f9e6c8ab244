//! HTTP status interpretation for the HIBP endpoints.
//!
//! Kept free of any I/O so every mapping can be checked directly.

use crate::error::{ApiError, Result};

/// What the caller should do with a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    /// Decode the body as JSON
    Parse,
    /// The account is not in any breach; there is no body to decode
    NoBreaches,
}

/// Map a `/breachedaccount` status code. A 404 means "no breaches".
pub fn interpret_account_status(status: u16) -> Result<StatusOutcome> {
    match status {
        200 => Ok(StatusOutcome::Parse),
        404 => Ok(StatusOutcome::NoBreaches),
        other => Err(common_failure(other)),
    }
}

/// Map a `/breaches` status code.
pub fn interpret_catalog_status(status: u16) -> Result<StatusOutcome> {
    match status {
        200 => Ok(StatusOutcome::Parse),
        other => Err(common_failure(other)),
    }
}

/// Map a `/breach/{name}` status code. A 404 means the name is unknown.
pub fn interpret_breach_status(status: u16, name: &str) -> Result<StatusOutcome> {
    match status {
        200 => Ok(StatusOutcome::Parse),
        404 => Err(ApiError::BreachNotFound {
            name: name.to_string(),
        }),
        other => Err(common_failure(other)),
    }
}

fn common_failure(status: u16) -> ApiError {
    match status {
        400 => ApiError::InvalidEmail,
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        429 => ApiError::RateLimited,
        status => ApiError::UnexpectedStatus { status },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_status_table() {
        assert_eq!(interpret_account_status(200).unwrap(), StatusOutcome::Parse);
        assert_eq!(
            interpret_account_status(404).unwrap(),
            StatusOutcome::NoBreaches
        );
        assert!(matches!(
            interpret_account_status(400),
            Err(ApiError::InvalidEmail)
        ));
        assert!(matches!(
            interpret_account_status(401),
            Err(ApiError::Unauthorized)
        ));
        assert!(matches!(
            interpret_account_status(403),
            Err(ApiError::Forbidden)
        ));
        assert!(matches!(
            interpret_account_status(429),
            Err(ApiError::RateLimited)
        ));
        assert!(matches!(
            interpret_account_status(503),
            Err(ApiError::UnexpectedStatus { status: 503 })
        ));
    }

    #[test]
    fn test_other_success_codes_are_unexpected() {
        assert!(matches!(
            interpret_account_status(204),
            Err(ApiError::UnexpectedStatus { status: 204 })
        ));
    }

    #[test]
    fn test_catalog_404_is_an_error() {
        assert_eq!(interpret_catalog_status(200).unwrap(), StatusOutcome::Parse);
        assert!(matches!(
            interpret_catalog_status(404),
            Err(ApiError::UnexpectedStatus { status: 404 })
        ));
    }

    #[test]
    fn test_breach_404_names_the_breach() {
        match interpret_breach_status(404, "Adobe") {
            Err(ApiError::BreachNotFound { name }) => assert_eq!(name, "Adobe"),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(matches!(
            interpret_breach_status(429, "Adobe"),
            Err(ApiError::RateLimited)
        ));
    }
}
