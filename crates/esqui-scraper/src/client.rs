//! HTTP client for resort status pages.

use std::time::Duration;

use esqui_core::{AppConfig, ResortSlug};
use reqwest::Client;

use crate::error::ScraperError;

/// Fetches `<base_url>/<slug>/` with a fixed timeout and a browser `User-Agent`.
///
/// One GET per call: no retries, no caching, no extra headers. Non-2xx
/// responses become typed errors.
#[derive(Debug, Clone)]
pub struct ResortClient {
    client: Client,
    base_url: String,
}

impl ResortClient {
    /// Creates a `ResortClient` for pages under `base_url`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if `base_url` does not parse as an
    ///   absolute URL.
    /// - [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed (e.g., invalid TLS config).
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        reqwest::Url::parse(base_url).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Builds a client from the `ESQUI_SOURCE_BASE_URL`, timeout and
    /// user-agent settings.
    ///
    /// # Errors
    ///
    /// See [`ResortClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            &config.source_base_url,
            config.scraper_request_timeout_secs,
            &config.scraper_user_agent,
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Status page URL for `slug`: the base, the slug, and a trailing `/`.
    #[must_use]
    pub fn resort_url(&self, slug: &ResortSlug) -> String {
        format!("{}/{}/", self.base_url, slug)
    }

    /// Fetches the status page for `slug` and returns its decoded body.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::NotFound`] on HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`ScraperError::Http`] on connection failure, timeout, or an
    ///   undecodable body.
    pub async fn fetch_page(&self, slug: &ResortSlug) -> Result<String, ScraperError> {
        let url = self.resort_url(slug);
        tracing::debug!(%slug, %url, "fetching resort page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound { url });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
