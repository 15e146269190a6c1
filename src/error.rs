//! Error types for the Spotify Web API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Spotify API.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// The target URL failed validation before dispatch.
    ///
    /// Raised when the URL is not absolute, has a non-HTTP(S)/FTP scheme,
    /// has no host, or points at a private/loopback/link-local IPv4 address
    /// (10/8, 127/8, 169.254/16, 172.16/12, 192.168/16). No network call is
    /// attempted when this is returned.
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl {
        /// The URL as supplied by the caller.
        url: String,
        /// Why validation rejected it.
        reason: String,
    },

    /// HTTP transport error (DNS failure, connection refused, TLS failure)
    /// or a response body that could not be decoded as JSON.
    ///
    /// HTTP status codes are NOT mapped here: a 4xx/5xx response with a JSON
    /// body still parses and is returned as data. Callers that care about
    /// status must inspect the returned body (Spotify error bodies carry an
    /// `error` object with `status` and `message` fields).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenience alias for `Result<T, SpotifyError>`.
pub type Result<T> = std::result::Result<T, SpotifyError>;
