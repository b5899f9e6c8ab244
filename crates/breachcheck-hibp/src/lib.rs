//! BreachCheck HIBP - client for the HaveIBeenPwned v3 REST API.
//!
//! This crate wraps the three read-only endpoints BreachCheck uses and
//! turns HTTP status codes into typed [`ApiError`]s.
//!
//! | Endpoint | Operation |
//! |---|---|
//! | `/breachedaccount/{email}` | [`HibpClient::lookup_account_breaches`] |
//! | `/breaches` | [`HibpClient::list_all_breaches`] |
//! | `/breach/{name}` | [`HibpClient::get_breach_detail`] |
//!
//! # Example
//!
//! ```rust,no_run
//! use breachcheck_hibp::HibpClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HibpClient::new("my-api-key")?;
//! let breaches = client.lookup_account_breaches("user@example.com", false).await?;
//! println!("{} breaches", breaches.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod client;
pub mod error;
pub mod raw;
pub mod status;

// Re-export commonly used types
pub use client::{HibpClient, DEFAULT_BASE_URL, DEFAULT_REQUEST_SPACING};
pub use error::{ApiError, Result};
pub use raw::{DataClasses, RawBreach};
pub use status::StatusOutcome;
