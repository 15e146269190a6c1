//! Target-URL validation.
//!
//! A permissive absolute-URL check plus an informal SSRF guard: the URL must
//! parse, carry an `http`/`https`/`ftp` scheme and a host, and IPv4 hosts in
//! private, loopback, or link-local ranges are rejected. Domain hosts are
//! not resolved, so a hostname pointing at a private address still passes —
//! the guard filters obvious literal-IP targets only.

use crate::error::{Result, SpotifyError};
use url::{Host, Url};

fn invalid(raw: &str, reason: impl Into<String>) -> SpotifyError {
    SpotifyError::InvalidUrl {
        url: raw.to_owned(),
        reason: reason.into(),
    }
}

/// Check `raw` before dispatch. `Ok(())` means the executor may proceed.
pub(crate) fn validate_url(raw: &str) -> Result<()> {
    let url = Url::parse(raw).map_err(|e| invalid(raw, e.to_string()))?;

    match url.scheme() {
        "http" | "https" | "ftp" => {}
        other => return Err(invalid(raw, format!("unsupported scheme `{other}`"))),
    }

    let Some(host) = url.host() else {
        return Err(invalid(raw, "missing host"));
    };

    if let Host::Ipv4(addr) = host {
        // 10/8, 172.16/12, 192.168/16 (is_private), 127/8 (is_loopback),
        // 169.254/16 (is_link_local)
        if addr.is_private() || addr.is_loopback() || addr.is_link_local() {
            return Err(invalid(raw, format!("private or loopback address {addr}")));
        }
    }

    Ok(())
}
