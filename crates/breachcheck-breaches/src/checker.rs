//! Breach lookups that return normalized, ordered records.

use crate::normalize::normalize;
use crate::record::BreachRecord;
use crate::summary::{build_summary, BreachSummary};
use breachcheck_core::{EmailAddress, Result};
use breachcheck_hibp::HibpClient;

/// Sort records newest first. Ties keep their original order.
pub fn sort_newest_first(records: &mut [BreachRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Wraps an [`HibpClient`] and turns raw responses into [`BreachRecord`]s.
pub struct BreachChecker {
    client: HibpClient,
}

impl BreachChecker {
    /// Create a checker around an existing client.
    #[must_use]
    pub fn new(client: HibpClient) -> Self {
        Self { client }
    }

    /// Create a checker talking to the production API.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::new(HibpClient::new(api_key)?))
    }

    /// All breaches for `email`, newest first. An account with no breaches
    /// yields an empty list.
    pub async fn check_email(
        &self,
        email: &EmailAddress,
        truncate: bool,
    ) -> Result<Vec<BreachRecord>> {
        let raw = self
            .client
            .lookup_account_breaches(email.as_str(), truncate)
            .await?;

        let mut records: Vec<BreachRecord> = raw.iter().map(normalize).collect();
        sort_newest_first(&mut records);

        tracing::debug!(count = records.len(), "normalized breach records");
        Ok(records)
    }

    /// Look up `email` and summarize the result.
    pub async fn summarize(&self, email: &EmailAddress, truncate: bool) -> Result<BreachSummary> {
        let records = self.check_email(email, truncate).await?;
        Ok(build_summary(&records))
    }

    /// A single breach by name.
    pub async fn breach_detail(&self, name: &str) -> Result<BreachRecord> {
        let raw = self.client.get_breach_detail(name).await?;
        Ok(normalize(&raw))
    }

    /// Every breach known to the service, newest first.
    pub async fn catalog(&self) -> Result<Vec<BreachRecord>> {
        let raw = self.client.list_all_breaches().await?;

        let mut records: Vec<BreachRecord> = raw.iter().map(normalize).collect();
        sort_newest_first(&mut records);

        tracing::debug!(count = records.len(), "normalized breach catalog");
        Ok(records)
    }
}
