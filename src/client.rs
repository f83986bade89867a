//! Public client surface
//!
//! `DiscogsClient` exposes the database endpoints: plain single-entity
//! getters, and the four listing operations which each return a
//! [`Paginated`] handle consumable in pull or push mode.

use crate::auth::Credentials;
use crate::data::{
    Artist, ArtistRelease, ArtistReleasesPage, Label, LabelRelease, LabelReleasesPage, Master,
    MasterVersionsPage, Release, ReleaseVersion, SearchQuery, SearchResult, SearchResultsPage,
    Sort,
};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::{JsonPageFetcher, PagedResponse, Paginated};
use std::sync::Arc;
use std::time::Duration;

/// Client for the Discogs database API
///
/// Cheap to clone; all clones share one connection pool. Each listing
/// call constructs its own independent pagination state, so concurrent
/// traversals never interfere.
///
/// ```no_run
/// use discogs_client::{Credentials, DiscogsClient};
/// use futures::StreamExt;
///
/// # async fn run() -> discogs_client::Result<()> {
/// let client = DiscogsClient::builder()
///     .user_agent("MyApp/1.0 +https://example.com")
///     .credentials(Credentials::token("my-token"))
///     .build()?;
///
/// let release = client.get_release(249504).await?;
///
/// let mut versions = client.master_versions(96559).max(100).stream();
/// while let Some(version) = versions.next().await {
///     println!("{}", version?.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DiscogsClient {
    http: HttpClient,
}

impl DiscogsClient {
    /// Create a builder for the client
    pub fn builder() -> DiscogsClientBuilder {
        DiscogsClientBuilder::default()
    }

    // ========================================================================
    // Single-entity getters
    // ========================================================================

    /// Get a release by id
    pub async fn get_release(&self, release_id: u64) -> Result<Release> {
        self.http
            .get_json(&format!("/releases/{release_id}"), &[])
            .await
    }

    /// Get a master release by id
    pub async fn get_master(&self, master_id: u64) -> Result<Master> {
        self.http
            .get_json(&format!("/masters/{master_id}"), &[])
            .await
    }

    /// Get an artist by id
    pub async fn get_artist(&self, artist_id: u64) -> Result<Artist> {
        self.http
            .get_json(&format!("/artists/{artist_id}"), &[])
            .await
    }

    /// Get a label by id
    pub async fn get_label(&self, label_id: u64) -> Result<Label> {
        self.http.get_json(&format!("/labels/{label_id}"), &[]).await
    }

    // ========================================================================
    // Listing operations
    // ========================================================================

    /// All releases that are versions of a master
    pub fn master_versions(&self, master_id: u64) -> Paginated<ReleaseVersion> {
        self.paginated::<MasterVersionsPage>(format!("/masters/{master_id}/versions"), Vec::new())
    }

    /// Releases and masters associated with an artist
    ///
    /// Pass a [`Sort`] to order by year, title or format; `None` uses
    /// the remote's default ordering.
    pub fn artist_releases(&self, artist_id: u64, sort: Option<Sort>) -> Paginated<ArtistRelease> {
        let query = sort.map(|s| s.to_params()).unwrap_or_default();
        self.paginated::<ArtistReleasesPage>(format!("/artists/{artist_id}/releases"), query)
    }

    /// All releases associated with a label
    pub fn label_releases(&self, label_id: u64) -> Paginated<LabelRelease> {
        self.paginated::<LabelReleasesPage>(format!("/labels/{label_id}/releases"), Vec::new())
    }

    /// Search the database
    pub fn search(&self, query: &SearchQuery) -> Paginated<SearchResult> {
        self.paginated::<SearchResultsPage>("/database/search".to_string(), query.to_params())
    }

    fn paginated<R: PagedResponse>(
        &self,
        path: String,
        query: Vec<(String, String)>,
    ) -> Paginated<R::Item> {
        let fetcher = JsonPageFetcher::<R>::new(self.http.clone(), path, query);
        Paginated::new(Arc::new(fetcher))
    }
}

/// Builder for [`DiscogsClient`]
#[derive(Debug, Default)]
pub struct DiscogsClientBuilder {
    config: HttpClientConfig,
}

impl DiscogsClientBuilder {
    /// Set the user agent (required by Discogs; a default is provided)
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the credentials
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.config.credentials = credentials;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Override the API base URL
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DiscogsClient> {
        Ok(DiscogsClient {
            http: HttpClient::new(self.config)?,
        })
    }
}
