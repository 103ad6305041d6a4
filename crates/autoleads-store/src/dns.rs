//! Early DNS check for the store host.
//!
//! A failing lookup produces a much clearer diagnostic than the connect error
//! reqwest would report later.

use reqwest::Url;

use crate::error::StoreError;

/// Host and port the store URL points at.
///
/// The port falls back to the scheme default (443 for https, 80 otherwise).
///
/// # Errors
///
/// Returns [`StoreError::InvalidUrl`] if the URL does not parse or has no host.
pub fn store_host(url: &str) -> Result<(String, u16), StoreError> {
    let parsed = Url::parse(url).map_err(|e| StoreError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    let host = parsed.host_str().ok_or_else(|| StoreError::InvalidUrl {
        url: url.to_string(),
        reason: "no host".to_string(),
    })?;
    let port = parsed.port().unwrap_or(match parsed.scheme() {
        "https" => 443,
        _ => 80,
    });
    Ok((host.to_string(), port))
}

/// Resolve `host` and fail if it has no addresses.
///
/// # Errors
///
/// Returns [`StoreError::Dns`] if resolution fails or yields nothing.
pub async fn resolve(host: &str, port: u16) -> Result<(), StoreError> {
    let mut addrs = tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| StoreError::Dns {
            host: host.to_string(),
            message: e.to_string(),
        })?;

    if addrs.next().is_none() {
        return Err(StoreError::Dns {
            host: host.to_string(),
            message: "no addresses returned".to_string(),
        });
    }
    Ok(())
}
