//! Configuration management for the MWS client.
//!
//! All configuration is driven by environment variables.

use crate::error::{MwsError, MwsResult};
use crate::types::Marketplace;

/// Default `User-Agent` sent with prepared requests.
const DEFAULT_USER_AGENT: &str = concat!(
    "mws-rs/",
    env!("CARGO_PKG_VERSION"),
    " (Language=Rust)"
);

/// Credentials and request settings for the MWS client.
///
/// `Debug` output never includes the secret key.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MwsConfig {
    /// Access key id, sent as `AWSAccessKeyId`.
    pub access_key: String,
    /// Secret key used for signing. Never serialized.
    #[serde(skip_serializing)]
    pub secret_key: String,
    /// Seller or merchant id, sent under the API's account-type key.
    pub account_id: String,
    /// Marketplace whose endpoint requests are sent to.
    pub region: Marketplace,
    /// Optional delegated authorization token, sent as `MWSAuthToken`.
    pub auth_token: Option<String>,
    /// `User-Agent` header for prepared requests.
    pub user_agent: String,
    /// Log level.
    pub log_level: String,
}

impl Default for MwsConfig {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            secret_key: String::new(),
            account_id: String::new(),
            region: Marketplace::default(),
            auth_token: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl MwsConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `MWS_ACCESS_KEY` | `access_key` |
    /// | `MWS_SECRET_KEY` | `secret_key` |
    /// | `MWS_ACCOUNT_ID` | `account_id` |
    /// | `MWS_REGION` | `region` |
    /// | `MWS_AUTH_TOKEN` | `auth_token` |
    /// | `MWS_USER_AGENT` | `user_agent` |
    /// | `LOG_LEVEL` | `log_level` |
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::InvalidRegion`] if `MWS_REGION` is not a known code.
    pub fn from_env() -> MwsResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::InvalidRegion`] if the region variable is not a known code.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> MwsResult<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("MWS_ACCESS_KEY") {
            config.access_key = v;
        }
        if let Some(v) = lookup("MWS_SECRET_KEY") {
            config.secret_key = v;
        }
        if let Some(v) = lookup("MWS_ACCOUNT_ID") {
            config.account_id = v;
        }
        if let Some(v) = lookup("MWS_REGION") {
            config.region = v.parse()?;
        }
        if let Some(v) = lookup("MWS_AUTH_TOKEN") {
            config.auth_token = Some(v).filter(|t| !t.is_empty());
        }
        if let Some(v) = lookup("MWS_USER_AGENT") {
            config.user_agent = v;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        Ok(config)
    }

    /// Check that the credentials needed to sign a request are present.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Config`] naming the first missing setting.
    pub fn validate(&self) -> MwsResult<()> {
        let required = [
            ("MWS_ACCESS_KEY", &self.access_key),
            ("MWS_SECRET_KEY", &self.secret_key),
            ("MWS_ACCOUNT_ID", &self.account_id),
        ];
        for (name, value) in required {
            if value.is_empty() {
                return Err(MwsError::Config(format!("{name} is not set")));
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for MwsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MwsConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("account_id", &self.account_id)
            .field("region", &self.region)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
