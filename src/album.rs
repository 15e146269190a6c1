//! Album API.
//!
//! # Endpoints
//!
//! ## `get_album` — `GET /albums/{id}`
//!
//! Returns a full album object:
//!
//! ```json
//! {
//!   "id": "4aawyAB9vmqN3uQ7FjRGTy",
//!   "name": "Global Warming",
//!   "artists": [ { "id": "...", "name": "Pitbull" } ],
//!   "tracks": { "items": [ ... ], "total": 18 },
//!   ...
//! }
//! ```
//!
//! ## `get_albums` — `GET /albums/?ids=a,b,c`
//!
//! Returns `{ "albums": [ <album object or null>, ... ] }` in request order.
//!
//! ## `get_album_tracks` — `GET /albums/{id}/tracks`
//!
//! Returns a paging envelope `{ "items": [ <track> ], "total": n, "next": url }`.
//!
//! IDs are not validated here; an empty or malformed ID produces a URL the
//! remote API answers with an error body.

use crate::client::SpotifyClient;
use crate::endpoint;
use crate::error::Result;
use serde_json::Value;

impl SpotifyClient {
    /// Look up a single album by its Spotify ID.
    pub async fn get_album(&self, id: &str) -> Result<Value> {
        self.request(&endpoint::album_url(self.api_url(), id)).await
    }

    /// Look up several albums in one call.
    ///
    /// The response's `albums` array preserves the order of `ids`.
    pub async fn get_albums(&self, ids: &[&str]) -> Result<Value> {
        self.request(&endpoint::albums_url(self.api_url(), ids)).await
    }

    /// List the tracks of an album.
    pub async fn get_album_tracks(&self, id: &str) -> Result<Value> {
        self.request(&endpoint::album_tracks_url(self.api_url(), id))
            .await
    }
}
