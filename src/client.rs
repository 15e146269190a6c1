//! HTTP client for the Spotify Web API.
//!
//! All requests are plain `GET`s with a single `Authorization: Bearer {token}`
//! header. The flow for every endpoint method is:
//!
//! 1. Build the endpoint URL from the configured API root (see `endpoint`)
//! 2. Validate the URL (absolute, public host — see `validate`)
//! 3. Dispatch the GET and parse the response body as JSON
//!
//! The response envelope is returned as an untouched [`serde_json::Value`];
//! no field of it is interpreted by this crate.
//!
//! # Error contract
//!
//! Failures come back as `Err`, so callers branch on
//! [`Result`](crate::Result) explicitly rather than inspecting the shape of
//! a resolved value. HTTP status codes are not inspected: a 4xx/5xx
//! response with a JSON body is returned as data.

use crate::error::Result;
use crate::validate::validate_url;
use serde_json::Value;

/// Default API root for the Spotify Web API.
pub const API_URL: &str = "https://api.spotify.com/v1";

/// Asynchronous client for the Spotify Web API.
///
/// Holds a [`reqwest::Client`] plus the configuration supplied at
/// construction: the API root and the bearer token. Both are immutable for
/// the lifetime of the client; there are no setters and no per-call hidden
/// state, so identical arguments always produce identical requests.
///
/// Endpoint methods live in separate modules (`album`, `search`) as
/// `impl SpotifyClient` blocks.
///
/// The client is cheap to clone and safe to share across tasks: any number
/// of calls may be in flight concurrently with no ordering guarantee between
/// their completions.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl SpotifyClient {
    /// Create a client for the default API root ([`API_URL`]) with the given
    /// bearer token.
    ///
    /// The token is opaque to this crate: it is not validated, refreshed, or
    /// expiry-tracked, and is sent verbatim (an empty token produces the
    /// header `Authorization: Bearer ` — the remote API rejects it).
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_api_url(API_URL, token)
    }

    /// Create a client pointed at a non-default API root (useful for testing
    /// against a local server or an API-compatible proxy).
    ///
    /// `api_url` is stored exactly as supplied — no trailing-slash trimming
    /// or other normalization.
    pub fn with_api_url(api_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            api_url: api_url.into(),
            token: token.into(),
        })
    }

    /// The API root this client was constructed with.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// The bearer token this client was constructed with.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Issue an authenticated GET to an arbitrary URL and parse the response
    /// body as JSON.
    ///
    /// This is the raw passthrough underneath every endpoint method; it can
    /// be called directly with a full URL (e.g. a `next` page link from a
    /// search envelope).
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::InvalidUrl`](crate::SpotifyError::InvalidUrl) —
    ///   `url` failed validation; returned before any network I/O.
    /// - [`SpotifyError::Http`](crate::SpotifyError::Http) — transport
    ///   failure or non-JSON response body. Non-2xx statuses with JSON
    ///   bodies are NOT errors.
    pub async fn request(&self, url: &str) -> Result<Value> {
        validate_url(url)?;
        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_api_url() {
        let client = SpotifyClient::new("foo").unwrap();
        assert_eq!(client.api_url(), "https://api.spotify.com/v1");
        assert_eq!(client.token(), "foo");
    }

    #[test]
    fn api_url_override_is_stored_exactly() {
        let client = SpotifyClient::with_api_url("bablabla", "foo").unwrap();
        assert_eq!(client.api_url(), "bablabla");
    }

    #[test]
    fn empty_token_is_accepted() {
        let client = SpotifyClient::new("").unwrap();
        assert_eq!(client.token(), "");
    }
}
