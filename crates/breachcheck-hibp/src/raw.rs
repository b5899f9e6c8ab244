//! Wire schema of a breach object as returned by the API.
//!
//! Every field is optional: truncated responses only carry `Name`, and the
//! API has added fields over time. A field holding an unexpected JSON type
//! decodes as absent instead of failing the whole response.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A breach object exactly as the API sends it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawBreach {
    /// Stable Pascal-cased identifier, e.g. `Adobe`
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Descriptive title
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    /// Domain of the breached site
    #[serde(default, deserialize_with = "lenient")]
    pub domain: Option<String>,
    /// Date the breach occurred, `YYYY-MM-DD`
    #[serde(default, deserialize_with = "lenient")]
    pub breach_date: Option<String>,
    /// Date the breach was added to the service (ISO 8601)
    #[serde(default, deserialize_with = "lenient")]
    pub added_date: Option<String>,
    /// Number of accounts loaded into the service
    #[serde(default, deserialize_with = "lenient")]
    pub pwn_count: Option<u64>,
    /// HTML description of the incident
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    /// Categories of data that were exposed
    #[serde(default, deserialize_with = "lenient")]
    pub data_classes: Option<DataClasses>,
    /// Breach has been verified as legitimate
    #[serde(default, deserialize_with = "lenient")]
    pub is_verified: Option<bool>,
    /// Breach is believed to be fabricated
    #[serde(default, deserialize_with = "lenient")]
    pub is_fabricated: Option<bool>,
    /// Breach is flagged as sensitive
    #[serde(default, deserialize_with = "lenient")]
    pub is_sensitive: Option<bool>,
    /// Breach has been retired from default results
    #[serde(default, deserialize_with = "lenient")]
    pub is_retired: Option<bool>,
    /// Breach is a spam list
    #[serde(default, deserialize_with = "lenient")]
    pub is_spam_list: Option<bool>,
}

/// Decode a field as `Some` only when the value has the expected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(T::deserialize(value).ok())
}

/// `DataClasses` is documented as a list of strings; anything else is kept
/// verbatim so decoding never fails on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataClasses {
    /// The documented shape
    List(Vec<String>),
    /// Any other JSON value
    Other(Value),
}
