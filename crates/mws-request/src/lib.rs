//! Signed MWS request preparation.
//!
//! This crate sits on top of [`mws_auth`]: it knows which parameters every
//! request carries (`AWSAccessKeyId`, `Timestamp`, `Version`...), how API
//! sections differ from each other, and how to turn the signed parameter set
//! into a URL or an `http::Request`. It never performs network I/O.
//!
//! # Usage
//!
//! ```rust
//! use http::Method;
//! use mws_core::{Marketplace, MwsConfig};
//! use mws_request::params::enumerate_param;
//! use mws_request::{Api, RequestBuilder};
//!
//! let config = MwsConfig {
//!     access_key: "AKID".to_owned(),
//!     secret_key: "secret".to_owned(),
//!     account_id: "SELLER".to_owned(),
//!     region: Marketplace::Us,
//!     ..MwsConfig::default()
//! };
//! let api = Api::builder()
//!     .uri("/Orders/2013-09-01")
//!     .version("2013-09-01")
//!     .build();
//!
//! let builder = RequestBuilder::new(&config, api).unwrap();
//! let params = enumerate_param("MarketplaceId.Id", Marketplace::Us.marketplace_id()).unwrap();
//! let request = builder.prepare("ListOrders", params, Method::POST).unwrap();
//! assert!(request.url.contains("&Signature="));
//! ```
//!
//! # Modules
//!
//! - [`api`] - API section descriptors
//! - [`builder`] - Request builder and prepared requests
//! - [`params`] - Enumerated and keyed parameter helpers
//! - [`content`] - Body digests
//! - [`error`] - Error types

pub mod api;
pub mod builder;
pub mod content;
pub mod error;
pub mod params;

pub use api::Api;
pub use builder::{PreparedRequest, RequestBuilder};
pub use content::calc_md5;
pub use error::{RequestError, RequestResult};
