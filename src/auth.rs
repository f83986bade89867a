//! Authentication for the Discogs API
//!
//! Discogs accepts two credential forms on the `Authorization` header:
//! a personal access token (`Discogs token=...`) or a consumer
//! key/secret pair (`Discogs key=..., secret=...`). Unauthenticated
//! requests are allowed but heavily throttled and cannot search.

use reqwest::RequestBuilder;

/// Credentials applied to every outgoing request
#[derive(Debug, Clone, Default)]
pub enum Credentials {
    /// No authentication
    #[default]
    Anonymous,

    /// Personal access token
    Token(String),

    /// Consumer key and secret
    KeySecret {
        /// Consumer key
        key: String,
        /// Consumer secret
        secret: String,
    },
}

impl Credentials {
    /// Create token credentials
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Create key/secret credentials
    pub fn key_secret(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::KeySecret {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Render the `Authorization` header value, if any
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Anonymous => None,
            Self::Token(token) => Some(format!("Discogs token={token}")),
            Self::KeySecret { key, secret } => {
                Some(format!("Discogs key={key}, secret={secret}"))
            }
        }
    }

    /// Apply the credentials to a request
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self.header_value() {
            Some(value) => req.header(reqwest::header::AUTHORIZATION, value),
            None => req,
        }
    }
}
