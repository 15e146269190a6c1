//! Search API.
//!
//! Endpoint: `GET /search?q={query}&type={types}`
//!
//! - `q` — search keyword, passed through verbatim (callers supply URL-safe
//!   strings)
//! - `type` — comma-separated list of [`SearchType`] values, in caller order
//!
//! Response JSON is a pagination envelope per requested type:
//!
//! ```json
//! {
//!   "artists":   { "items": [ ... ], "total": 123, "next": "https://..." },
//!   "albums":    { "items": [ ... ], ... },
//!   "tracks":    { "items": [ ... ], ... },
//!   "playlists": { "items": [ ... ], ... }
//! }
//! ```
//!
//! Only the envelopes matching the requested types are present.

use crate::client::SpotifyClient;
use crate::endpoint;
use crate::error::Result;
use serde_json::Value;

/// Search target type, mapped to the API `type` query parameter.
///
/// | Variant    | API value  |
/// |------------|------------|
/// | `Artist`   | `artist`   |
/// | `Album`    | `album`    |
/// | `Track`    | `track`    |
/// | `Playlist` | `playlist` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Artist,
    Album,
    Track,
    Playlist,
}

impl SearchType {
    /// The string sent in the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Track => "track",
            Self::Playlist => "playlist",
        }
    }
}

impl SpotifyClient {
    /// Search across one or more result types.
    ///
    /// `types` are joined with `,` in the order given (no deduplication).
    /// An empty `query` or empty `types` is passed through unvalidated; the
    /// remote API rejects the malformed request with an error body.
    pub async fn search(&self, query: &str, types: &[SearchType]) -> Result<Value> {
        self.request(&endpoint::search_url(self.api_url(), query, types))
            .await
    }

    /// Search artists only.
    pub async fn search_artists(&self, query: &str) -> Result<Value> {
        self.search(query, &[SearchType::Artist]).await
    }

    /// Search albums only.
    pub async fn search_albums(&self, query: &str) -> Result<Value> {
        self.search(query, &[SearchType::Album]).await
    }

    /// Search tracks only.
    pub async fn search_tracks(&self, query: &str) -> Result<Value> {
        self.search(query, &[SearchType::Track]).await
    }

    /// Search playlists only.
    pub async fn search_playlists(&self, query: &str) -> Result<Value> {
        self.search(query, &[SearchType::Playlist]).await
    }
}
