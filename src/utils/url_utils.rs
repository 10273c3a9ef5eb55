//! URL validation helpers.
//!
//! Purely syntactic checks for "is this something a crawler could fetch":
//! an absolute URL with an `http` or `https` scheme. No DNS lookup, no
//! network access.

use url::Url;

use crate::registry::errors::{RegistryError, RegistryResult};

/// Check if a string is a fetchable absolute http(s) URL.
///
/// Relative forms, scheme-relative forms (`//host/..`) and bare domains
/// (`google.com`) are rejected; a scheme is mandatory. The `url` crate
/// normalizes schemes to lowercase, so `HTTP://..` passes.
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Parse a string under the same rule as [`is_valid_url`], keeping the
/// structured form.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidUrl`] carrying the offending string when
/// it is not an absolute http(s) URL.
pub fn parse_http_url(url: &str) -> RegistryResult<Url> {
    let parsed = Url::parse(url).map_err(|_| RegistryError::InvalidUrl {
        url: url.to_owned(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(RegistryError::InvalidUrl {
            url: url.to_owned(),
        });
    }

    Ok(parsed)
}
