//! Aggregate view over a set of breach records.

use crate::record::BreachRecord;
use serde::Serialize;

/// Counts plus the earliest and latest breach of a result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BreachSummary {
    /// Number of records
    pub total: usize,
    /// Records verified as legitimate
    pub verified_count: usize,
    /// Records flagged as sensitive
    pub sensitive_count: usize,
    /// First record when sorted ascending by date
    pub earliest: Option<BreachRecord>,
    /// Last record when sorted ascending by date
    pub latest: Option<BreachRecord>,
}

/// Summarize `records`. Earliest and latest come from an ascending sort of
/// a copy, so the input order does not matter.
#[must_use]
pub fn build_summary(records: &[BreachRecord]) -> BreachSummary {
    if records.is_empty() {
        return BreachSummary::default();
    }

    let mut by_date = records.to_vec();
    by_date.sort_by(|a, b| a.date.cmp(&b.date));

    BreachSummary {
        total: records.len(),
        verified_count: records.iter().filter(|r| r.is_verified).count(),
        sensitive_count: records.iter().filter(|r| r.is_sensitive).count(),
        earliest: by_date.first().cloned(),
        latest: by_date.last().cloned(),
    }
}
