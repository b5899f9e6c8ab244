//! Normalized breach record.

use serde::{Deserialize, Serialize};

/// One breach, normalized from the API shape.
///
/// Built once by [`crate::normalize`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct BreachRecord {
    /// Breach name, `Unknown` when absent
    pub name: String,
    /// Domain of the breached site, `Unknown` when absent
    pub domain: String,
    /// `YYYY-MM-DD`, `Unknown` when absent, or the raw value if unparseable
    pub date: String,
    /// Comma-joined list of exposed data categories
    pub compromised_data: String,
    /// HTML description, empty when absent
    pub description: String,
    /// Number of affected accounts, 0 when unknown
    pub affected_count: u64,
    /// Verified as legitimate
    pub is_verified: bool,
    /// Flagged as sensitive
    pub is_sensitive: bool,
    /// Retired from default results
    pub is_retired: bool,
}
