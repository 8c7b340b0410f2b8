//! Core types and configuration for the MWS client.
//!
//! This crate holds what every other crate in the workspace shares: the
//! marketplace table (endpoint and marketplace id per region), credentials
//! configuration loaded from the environment, and the top-level error type.

mod config;
mod error;
mod types;

pub use config::MwsConfig;
pub use error::{MwsError, MwsResult};
pub use types::Marketplace;
