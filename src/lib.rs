//! # discogs-client
//!
//! Async client for the [Discogs](https://www.discogs.com/developers)
//! database API: releases, masters, artists, labels, and search.
//!
//! ## Features
//!
//! - **Streaming pagination**: every listing endpoint is exposed as a
//!   single lazy sequence; pages are fetched only as consumed
//! - **Dual consumption modes**: pull (`Stream`) or push (subscriber
//!   callbacks) over one drive loop
//! - **Item caps**: stop after N items without over-fetching
//! - **Cancellation**: drop the stream or cancel the subscription; no
//!   further page fetch is issued and an in-flight one is abandoned
//! - **Authentication**: personal token or consumer key/secret
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use discogs_client::{DiscogsClient, Credentials, SearchQuery};
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> discogs_client::Result<()> {
//!     let client = DiscogsClient::builder()
//!         .user_agent("MyApp/1.0 +https://example.com")
//!         .credentials(Credentials::token("my-token"))
//!         .build()?;
//!
//!     let query = SearchQuery::new().artist("nirvana").year("1991");
//!     let mut results = client.search(&query).max(50).stream();
//!     while let Some(hit) = results.next().await {
//!         println!("{}", hit?.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      DiscogsClient                       │
//! │  get_release / get_master / get_artist / get_label       │
//! │  master_versions / artist_releases / label_releases /    │
//! │  search  →  Paginated<T>                                 │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//! ┌──────────┬───────────────┴──────────────┬────────────────┐
//! │   Auth   │          Pagination          │      HTTP      │
//! ├──────────┼──────────────────────────────┼────────────────┤
//! │ Token    │ Cursor (cap, terminal)       │ reqwest        │
//! │ Key/     │ ItemStream (pull)            │ base URL       │
//! │ Secret   │ Subscriber (push)            │ user agent     │
//! └──────────┴──────────────────────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Discogs authentication forms
pub mod auth;

/// HTTP transport
pub mod http;

/// Domain records and query types
pub mod data;

/// Pagination-to-stream core
pub mod pagination;

/// The public client
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::Credentials;
pub use client::{DiscogsClient, DiscogsClientBuilder};
pub use data::{SearchQuery, SearchType, Sort, SortField, SortOrder};
pub use error::{Error, Result};
pub use pagination::{ItemStream, Page, PageInfo, Paginated, Subscriber, Subscription};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
