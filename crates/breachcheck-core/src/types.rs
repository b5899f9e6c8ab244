//! Shared types used across BreachCheck.

use crate::error::BreachCheckError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Newtype for email addresses with shape validation.
///
/// The check is intentionally shallow: one `@`, a local part of
/// `[a-zA-Z0-9._%+-]`, and a dotted domain whose last label has at least
/// two letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse an email address, trimming surrounding whitespace first.
    ///
    /// # Errors
    /// Returns [`BreachCheckError::Validation`] if the address is malformed.
    pub fn parse(input: &str) -> Result<Self, BreachCheckError> {
        let email = input.trim();
        if Self::is_valid(email) {
            Ok(Self(email.to_string()))
        } else {
            Err(BreachCheckError::Validation(
                "Invalid email format".to_string(),
            ))
        }
    }

    /// Check whether `email` has a valid shape.
    #[must_use]
    pub fn is_valid(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
        });
        regex.is_match(email)
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mask the address for display, e.g. `john.doe@example.com` becomes
    /// `j******e@e******.com`.
    #[must_use]
    pub fn masked(&self) -> String {
        mask_email(&self.0, '*')
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mask part of an email address for privacy.
///
/// The local part keeps its first and last character (two characters or
/// fewer are fully masked). The first domain label keeps its first
/// character and the remaining labels are kept as-is.
#[must_use]
pub fn mask_email(email: &str, mask_char: char) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };

    let local_chars: Vec<char> = local.chars().collect();
    let masked_local = if local_chars.len() <= 2 {
        mask_char.to_string().repeat(local_chars.len())
    } else {
        let mut out = String::new();
        out.push(local_chars[0]);
        out.push_str(&mask_char.to_string().repeat(local_chars.len() - 2));
        out.push(local_chars[local_chars.len() - 1]);
        out
    };

    let masked_domain = match domain.split_once('.') {
        Some((name, ext)) => {
            let name_len = name.chars().count();
            let masked_name = if name_len <= 2 {
                mask_char.to_string().repeat(name_len)
            } else {
                let first = name.chars().next().map(String::from).unwrap_or_default();
                first + &mask_char.to_string().repeat(name_len - 1)
            };
            format!("{masked_name}.{ext}")
        }
        None => mask_char.to_string().repeat(domain.chars().count()),
    };

    format!("{masked_local}@{masked_domain}")
}
