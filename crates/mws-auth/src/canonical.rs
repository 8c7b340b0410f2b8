//! Canonical request description and string to sign.
//!
//! The canonical query string is every `key=value` pair sorted by key (byte
//! order, not locale-aware) and joined with `&`. Values are already cleaned by
//! the time they get here, so nothing is encoded again.
//!
//! The string to sign for `SignatureVersion=2` is:
//!
//! ```text
//! HTTPVerb + "\n" +
//! lowercase(Host) + "\n" +
//! RequestPath + "\n" +
//! CanonicalQueryString
//! ```

use crate::flatten::FlatParams;

/// Build the canonical query string from a flat parameter set.
///
/// # Examples
///
/// ```
/// use mws_auth::{ParameterValue, canonicalize, flatten};
///
/// let flat = flatten(&ParameterValue::map([("b", 1), ("a", 2)]), "").unwrap();
/// assert_eq!(canonicalize(&flat), "a=2&b=1");
/// ```
#[must_use]
pub fn canonicalize(params: &FlatParams) -> String {
    // `FlatParams` iterates in byte order already.
    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Normalize an endpoint into the host line of the string to sign.
///
/// Any `http://` or `https://` scheme and trailing `/` are removed and the result
/// is lowercased.
///
/// # Examples
///
/// ```
/// use mws_auth::canonical::canonical_host;
///
/// assert_eq!(canonical_host("https://MWS.amazonservices.com"), "mws.amazonservices.com");
/// assert_eq!(canonical_host("Example.com"), "example.com");
/// ```
#[must_use]
pub fn canonical_host(endpoint: &str) -> String {
    let trimmed = endpoint.trim();
    let without_scheme = strip_prefix_ignore_case(trimmed, "https://")
        .or_else(|| strip_prefix_ignore_case(trimmed, "http://"))
        .unwrap_or(trimmed);
    without_scheme.trim_end_matches('/').to_ascii_lowercase()
}

/// Build the string to sign from its four components.
///
/// An empty path is normalized to `/`.
///
/// # Examples
///
/// ```
/// use mws_auth::canonical::build_string_to_sign;
///
/// let s = build_string_to_sign("GET", "https://Example.com", "/", "Timestamp=1");
/// assert_eq!(s, "GET\nexample.com\n/\nTimestamp=1");
/// ```
#[must_use]
pub fn build_string_to_sign(method: &str, host: &str, path: &str, query: &str) -> String {
    let host = canonical_host(host);
    let path = if path.is_empty() { "/" } else { path };
    format!("{method}\n{host}\n{path}\n{query}")
}

/// Parameters whose values are masked by [`redact_query`].
pub const SENSITIVE_PARAMS: &[&str] = &["MWSAuthToken"];

/// Mask the values of [`SENSITIVE_PARAMS`] in a canonical query string, for logging.
///
/// # Examples
///
/// ```
/// use mws_auth::canonical::redact_query;
///
/// assert_eq!(
///     redact_query("Action=ListOrders&MWSAuthToken=amzn.mws.1"),
///     "Action=ListOrders&MWSAuthToken=<redacted>"
/// );
/// ```
#[must_use]
pub fn redact_query(query: &str) -> String {
    query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if SENSITIVE_PARAMS.contains(&key) => format!("{key}=<redacted>"),
            _ => pair.to_owned(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}
