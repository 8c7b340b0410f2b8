//! `SignatureVersion=2` request signing with HMAC-SHA256.
//!
//! ```text
//! Signature = Base64(HMAC-SHA256(SecretKey, StringToSign))
//! ```
//!
//! See [`crate::canonical::build_string_to_sign`] for the string layout.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::canonical::{build_string_to_sign, redact_query};
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Value of the `SignatureMethod` parameter for this signer.
pub const SIGNATURE_METHOD: &str = "HmacSHA256";

/// Value of the `SignatureVersion` parameter for this signer.
pub const SIGNATURE_VERSION: &str = "2";

/// Name of the parameter the signature is sent in.
pub const SIGNATURE_PARAM: &str = "Signature";

/// Sign a request description with `secret_key`.
///
/// # Errors
///
/// Returns [`AuthError::Signing`] if `secret_key` is empty.
///
/// # Examples
///
/// ```
/// use mws_auth::sign;
///
/// let a = sign("GET", "Example.com", "/", "Timestamp=1", "secret").unwrap();
/// let b = sign("GET", "example.com", "/", "Timestamp=1", "secret").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn sign(
    method: &str,
    host: &str,
    path: &str,
    canonical_query: &str,
    secret_key: &str,
) -> AuthResult<String> {
    let string_to_sign = build_string_to_sign(method, host, path, canonical_query);
    debug!(
        method,
        host,
        path,
        query = %redact_query(canonical_query),
        "Built SigV2 string to sign"
    );
    compute_signature(secret_key.as_bytes(), &string_to_sign)
}

/// Compute `Base64(HMAC-SHA256(secret, data))`.
///
/// # Errors
///
/// Returns [`AuthError::Signing`] if `secret` is empty.
pub fn compute_signature(secret: &[u8], data: &str) -> AuthResult<String> {
    if secret.is_empty() {
        return Err(AuthError::Signing("secret key is empty".to_owned()));
    }
    let mut mac =
        HmacSha256::new_from_slice(secret).map_err(|e| AuthError::Signing(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// A request signer bound to one secret key.
///
/// The key is never mutated after construction, so a `Signer` can be shared
/// freely between threads. Its `Debug` output redacts the key.
#[derive(Clone)]
pub struct Signer {
    secret_key: String,
}

impl Signer {
    /// Create a signer, rejecting an empty secret key up front.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Signing`] if `secret_key` is empty.
    pub fn new(secret_key: impl Into<String>) -> AuthResult<Self> {
        let secret_key = secret_key.into();
        if secret_key.is_empty() {
            return Err(AuthError::Signing("secret key is empty".to_owned()));
        }
        Ok(Self { secret_key })
    }

    /// Sign a request description. See [`sign`].
    ///
    /// # Errors
    ///
    /// Propagates [`AuthError::Signing`] from the HMAC primitive.
    pub fn sign(
        &self,
        method: &str,
        host: &str,
        path: &str,
        canonical_query: &str,
    ) -> AuthResult<String> {
        sign(method, host, path, canonical_query, &self.secret_key)
    }

    /// Check `provided` against the expected signature in constant time.
    ///
    /// # Errors
    ///
    /// Propagates [`AuthError::Signing`] from computing the expected signature.
    pub fn verify(
        &self,
        method: &str,
        host: &str,
        path: &str,
        canonical_query: &str,
        provided: &str,
    ) -> AuthResult<bool> {
        let expected = self.sign(method, host, path, canonical_query)?;
        let matches: bool = provided.as_bytes().ct_eq(expected.as_bytes()).into();
        if !matches {
            debug!(method, path, "signature mismatch");
        }
        Ok(matches)
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
