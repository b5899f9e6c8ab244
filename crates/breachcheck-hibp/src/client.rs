//! HTTP client for the HaveIBeenPwned v3 API.

use crate::error::{ApiError, Result};
use crate::raw::RawBreach;
use crate::status::{
    interpret_account_status, interpret_breach_status, interpret_catalog_status, StatusOutcome,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://haveibeenpwned.com/api/v3";

/// Minimum spacing before an account lookup. The service allows roughly one
/// request every 1.5 seconds per key.
pub const DEFAULT_REQUEST_SPACING: Duration = Duration::from_millis(1600);

const API_KEY_HEADER: &str = "hibp-api-key";
const USER_AGENT: &str = "BreachCheck-CLI-Tool";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Build the HTTP client shared by every request.
fn build_http_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ApiError::Internal(format!("failed to create HTTP client: {e}")))
}

/// Client for the three breach endpoints.
pub struct HibpClient {
    api_key: String,
    client: Client,
    base_url: String,
    request_spacing: Duration,
}

impl HibpClient {
    /// Create a client against the production API.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            api_key: api_key.into(),
            client: build_http_client(REQUEST_TIMEOUT_SECS)?,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_spacing: DEFAULT_REQUEST_SPACING,
        })
    }

    /// Point the client at a different API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the delay issued before each account lookup.
    #[must_use]
    pub fn with_request_spacing(mut self, spacing: Duration) -> Self {
        self.request_spacing = spacing;
        self
    }

    /// API root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All breaches an account appears in.
    ///
    /// Waits for the request spacing first. A 404 is returned as an empty
    /// list. With `truncate`, the API only returns breach names.
    pub async fn lookup_account_breaches(
        &self,
        email: &str,
        truncate: bool,
    ) -> Result<Vec<RawBreach>> {
        tokio::time::sleep(self.request_spacing).await;

        let url = format!(
            "{}/breachedaccount/{}",
            self.base_url,
            urlencoding::encode(email)
        );
        tracing::debug!(truncate, "GET {}/breachedaccount/<email>", self.base_url);

        let mut request = self.client.get(&url).header(API_KEY_HEADER, &self.api_key);
        if truncate {
            request = request.query(&[("truncateResponse", "true")]);
        }
        let response = request.send().await?;

        let status = response.status().as_u16();
        tracing::debug!(status, "breachedaccount response");

        match interpret_account_status(status)? {
            StatusOutcome::NoBreaches => Ok(Vec::new()),
            StatusOutcome::Parse => {
                let breaches: Vec<RawBreach> = decode(response).await?;
                tracing::info!(count = breaches.len(), "account lookup returned breaches");
                Ok(breaches)
            }
        }
    }

    /// Every breach known to the service. Not rate limited.
    pub async fn list_all_breaches(&self) -> Result<Vec<RawBreach>> {
        let url = format!("{}/breaches", self.base_url);
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::debug!(status, "breaches response");

        interpret_catalog_status(status)?;
        decode(response).await
    }

    /// A single breach by name.
    pub async fn get_breach_detail(&self, name: &str) -> Result<RawBreach> {
        let url = format!("{}/breach/{}", self.base_url, urlencoding::encode(name));
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::debug!(status, "breach response");

        interpret_breach_status(status, name)?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}
