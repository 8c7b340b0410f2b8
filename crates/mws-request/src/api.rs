//! API section descriptors.
//!
//! Each MWS API section (Orders, Feeds, Reports…) lives under its own URI and
//! version, and names the seller account under a section-specific key.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Version used by sections that do not declare their own.
pub const DEFAULT_VERSION: &str = "2009-01-01";

/// Account-type key used by most sections.
pub const DEFAULT_ACCOUNT_TYPE: &str = "SellerId";

/// Description of one API section.
///
/// # Examples
///
/// ```
/// use mws_request::Api;
///
/// let feeds = Api::builder()
///     .uri("/Feeds/2009-01-01")
///     .account_type("Merchant")
///     .next_token_operations(vec!["GetFeedSubmissionList".to_owned()])
///     .build();
/// assert_eq!(feeds.version, "2009-01-01");
/// assert!(feeds.supports_next_token("GetFeedSubmissionList"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Api {
    /// Request path, e.g. `/Orders/2013-09-01`.
    #[builder(default = String::from("/"), setter(into))]
    pub uri: String,

    /// Value of the `Version` parameter.
    #[builder(default = String::from(DEFAULT_VERSION), setter(into))]
    pub version: String,

    /// Parameter name the account id is sent under (`SellerId` or `Merchant`).
    #[builder(default = String::from(DEFAULT_ACCOUNT_TYPE), setter(into))]
    pub account_type: String,

    /// Actions that have a `...ByNextToken` pagination counterpart.
    #[builder(default)]
    pub next_token_operations: Vec<String>,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            uri: String::from("/"),
            version: String::from(DEFAULT_VERSION),
            account_type: String::from(DEFAULT_ACCOUNT_TYPE),
            next_token_operations: Vec::new(),
        }
    }
}

impl Api {
    /// Returns `true` if `action` may be continued with a next token.
    #[must_use]
    pub fn supports_next_token(&self, action: &str) -> bool {
        self.next_token_operations.iter().any(|op| op == action)
    }

    /// Return this section with its URI rooted at `/`.
    ///
    /// An empty URI becomes `/`.
    #[must_use]
    pub fn with_rooted_uri(mut self) -> Self {
        if !self.uri.starts_with('/') {
            self.uri.insert(0, '/');
        }
        self
    }

    /// Returns `true` if this section has a service-specific URI.
    #[must_use]
    pub fn has_service_uri(&self) -> bool {
        !self.uri.is_empty() && self.uri != "/"
    }
}
