//! Endpoint URL assembly.
//!
//! Pure string building: the API root and all arguments are inserted as-is,
//! with no trimming, case-folding, or percent-escaping. Callers are
//! responsible for supplying URL-safe strings; malformed inputs (empty IDs,
//! empty queries) produce well-formed-looking URLs that the remote API
//! rejects.

use crate::search::SearchType;

/// `{root}/search?q={query}&type={types}` — types comma-joined in caller
/// order, no dedup.
pub(crate) fn search_url(root: &str, query: &str, types: &[SearchType]) -> String {
    let joined = types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(",");
    format!("{root}/search?q={query}&type={joined}")
}

/// `{root}/albums/{id}`
pub(crate) fn album_url(root: &str, id: &str) -> String {
    format!("{root}/albums/{id}")
}

/// `{root}/albums/?ids={ids}` — ids comma-joined in caller order.
pub(crate) fn albums_url(root: &str, ids: &[&str]) -> String {
    format!("{root}/albums/?ids={}", ids.join(","))
}

/// `{root}/albums/{id}/tracks`
pub(crate) fn album_tracks_url(root: &str, id: &str) -> String {
    format!("{root}/albums/{id}/tracks")
}
