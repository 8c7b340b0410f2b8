//! Request body digests.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use digest::Digest;

/// Header carrying the body digest.
pub const CONTENT_MD5: &str = "content-md5";

/// Compute the base64-encoded MD5 digest of `data`, as sent in `Content-MD5`.
///
/// # Examples
///
/// ```
/// use mws_request::content::calc_md5;
///
/// assert_eq!(calc_md5(b""), "1B2M2Y8AsgTpgAmY7PhCfg==");
/// ```
#[must_use]
pub fn calc_md5(data: &[u8]) -> String {
    BASE64_STANDARD.encode(md5::Md5::digest(data))
}
