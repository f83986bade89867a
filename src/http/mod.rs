//! HTTP transport module
//!
//! Thin wrapper over `reqwest` for the Discogs API:
//!
//! - **Base URL handling**: endpoint paths are joined onto the API root
//! - **User agent**: Discogs rejects requests without one, so it is mandatory
//! - **Authentication**: credentials from the auth module applied per request
//! - **Status mapping**: non-success responses become typed errors
//!
//! Failures are surfaced verbatim to the caller; there is no retry or
//! backoff, and a failed request is terminal for whatever was driving it.

mod client;

pub use client::{HttpClient, HttpClientConfig};
