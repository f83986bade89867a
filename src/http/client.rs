//! HTTP client for the Discogs API
//!
//! Handles request construction, authentication headers, and response
//! body parsing. Logging lives here at the transport seam; the
//! pagination core above it stays silent.

use crate::auth::Credentials;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.discogs.com";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// User agent string (required by Discogs)
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
    /// Credentials applied to every request
    pub credentials: Credentials,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("discogs-client/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(30),
            credentials: Credentials::Anonymous,
        }
    }
}

/// HTTP client carrying the base URL, user agent, and credentials
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        if config.user_agent.trim().is_empty() {
            return Err(Error::config("user agent must not be empty"));
        }
        url::Url::parse(&config.base_url)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Make a GET request and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let url = self.build_url(path);

        let mut req = self.client.get(&url);
        if !query.is_empty() {
            req = req.query(query);
        }
        req = self.config.credentials.apply(req);

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), url = %url, "request failed");
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!(url = %url, "request succeeded");
        let parsed = response.json::<T>().await?;
        Ok(parsed)
    }

    /// Build the full URL from an endpoint path
    pub(crate) fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .field("user_agent", &self.config.user_agent)
            .finish_non_exhaustive()
    }
}
