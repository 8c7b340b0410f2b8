//! Parameter flattening and `SignatureVersion=2` request signing for MWS.
//!
//! Marketplace web service requests carry every argument in the query string
//! and are authenticated by an HMAC-SHA256 signature over a canonical
//! description of that query string. This crate implements the pipeline that
//! produces it:
//!
//! 1. [`ParameterValue`] models nested request arguments.
//! 2. [`flatten`] turns them into dotted keys (`Item.1.SellerSKU`), cleaning
//!    every leaf with [`clean`] and dropping absent values.
//! 3. [`canonicalize`] sorts and joins the flat set into the canonical query.
//! 4. [`sign`] (or a [`Signer`]) computes the base64 signature.
//!
//! Everything here is synchronous and pure; nothing is sent over the network.
//!
//! # Usage
//!
//! ```rust
//! use mws_auth::{ParameterValue, Signer, flatten};
//!
//! let params = ParameterValue::map([
//!     ("Action", ParameterValue::from("ListOrders")),
//!     ("MarketplaceId", ParameterValue::list(["ATVPDKIKX0DER"])),
//! ]);
//! let flat = flatten(&params, "").unwrap();
//! let query = flat.canonical_query();
//! assert_eq!(query, "Action=ListOrders&MarketplaceId.1=ATVPDKIKX0DER");
//!
//! let signer = Signer::new("secret").unwrap();
//! let signature = signer
//!     .sign("POST", "mws.amazonservices.com", "/Orders/2013-09-01", &query)
//!     .unwrap();
//! assert!(!signature.is_empty());
//! ```
//!
//! # Modules
//!
//! - [`value`] - Nested parameter value model
//! - [`clean`] - Scalar cleaning and percent-encoding
//! - [`flatten`] - Recursive flattening into [`FlatParams`]
//! - [`canonical`] - Canonical query string and string to sign
//! - [`signer`] - HMAC-SHA256 signing
//! - [`error`] - Error types

pub mod canonical;
pub mod clean;
pub mod error;
pub mod flatten;
pub mod signer;
pub mod value;

pub use canonical::canonicalize;
pub use clean::{clean, clean_str};
pub use error::{AuthError, AuthResult};
pub use flatten::{FlatParams, flatten};
pub use signer::{Signer, sign};
pub use value::ParameterValue;
