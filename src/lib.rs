//! Spotify Web API client library.
//!
//! Provides bearer-token-authenticated access to the Spotify Web API album
//! and search endpoints. Responses are passed through as raw
//! [`serde_json::Value`] — the response shapes (album objects, paginated
//! search envelopes) are defined entirely by the remote API and this crate
//! performs no schema validation or transformation.
//!
//! # Authentication
//!
//! All API calls require a valid OAuth bearer token obtained out of band
//! (e.g. from the Spotify developer console or an authorization-code flow).
//! Token acquisition, refresh, and expiry are outside this crate's scope;
//! the token is used verbatim for the lifetime of the client.
//!
//! ```no_run
//! use spotify_api::SpotifyClient;
//!
//! # async fn run() -> spotify_api::Result<()> {
//! let spotify = SpotifyClient::new("YOUR_TOKEN")?;
//! let album = spotify.get_album("4aawyAB9vmqN3uQ7FjRGTy").await?;
//! println!("{}", album["name"]);
//! # Ok(())
//! # }
//! ```
//!
//! # API endpoint mapping
//!
//! | Method                               | Endpoint                     | Description            |
//! |--------------------------------------|------------------------------|------------------------|
//! | [`SpotifyClient::search`]            | `/search?q=..&type=..`       | Generic search         |
//! | [`SpotifyClient::search_artists`]    | `/search?q=..&type=artist`   | Artist search          |
//! | [`SpotifyClient::search_albums`]     | `/search?q=..&type=album`    | Album search           |
//! | [`SpotifyClient::search_tracks`]     | `/search?q=..&type=track`    | Track search           |
//! | [`SpotifyClient::search_playlists`]  | `/search?q=..&type=playlist` | Playlist search        |
//! | [`SpotifyClient::get_album`]         | `/albums/{id}`               | Single album           |
//! | [`SpotifyClient::get_albums`]        | `/albums/?ids=a,b`           | Batch album lookup     |
//! | [`SpotifyClient::get_album_tracks`]  | `/albums/{id}/tracks`        | Album track listing    |
//! | [`SpotifyClient::request`]           | (caller-supplied URL)        | Raw GET passthrough    |
//!
//! # Error model
//!
//! Every call returns [`Result`]. Target URLs are validated before dispatch
//! ([`SpotifyError::InvalidUrl`]); transport and JSON-decode failures surface
//! as [`SpotifyError::Http`]. HTTP status codes are deliberately not
//! inspected — a non-2xx response with a JSON body is returned as data, so
//! callers wanting status handling must look at the body shape.

mod album;
pub mod client;
mod endpoint;
pub mod error;
mod search;
mod validate;

pub use client::{API_URL, SpotifyClient};
pub use error::{Result, SpotifyError};
pub use search::SearchType;
