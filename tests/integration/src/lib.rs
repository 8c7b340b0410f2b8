//! End-to-end tests for MWS request flattening and signing.
//!
//! Everything runs offline: requests are prepared and signed with fixed
//! credentials and timestamps so the expected signatures are reproducible.
//!
//! ```text
//! cargo test -p mws-integration
//! ```

use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use mws_core::{Marketplace, MwsConfig};
use mws_request::{Api, RequestBuilder};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Configuration with fixed test credentials in the US marketplace.
#[must_use]
pub fn test_config() -> MwsConfig {
    MwsConfig {
        access_key: "AKID".to_owned(),
        secret_key: "secret".to_owned(),
        account_id: "SELLER".to_owned(),
        region: Marketplace::Us,
        ..MwsConfig::default()
    }
}

/// The Orders section, paginated by `ListOrders`.
#[must_use]
pub fn orders_api() -> Api {
    Api::builder()
        .uri("/Orders/2013-09-01")
        .version("2013-09-01")
        .next_token_operations(vec!["ListOrders".to_owned(), "ListOrderItems".to_owned()])
        .build()
}

/// The Feeds section, which names the account `Merchant`.
#[must_use]
pub fn feeds_api() -> Api {
    Api::builder()
        .uri("/")
        .account_type("Merchant")
        .next_token_operations(vec!["GetFeedSubmissionList".to_owned()])
        .build()
}

/// A request builder for `api` using [`test_config`].
///
/// # Panics
///
/// Panics if the test configuration is rejected.
#[must_use]
pub fn test_builder(api: Api) -> RequestBuilder {
    init_tracing();
    RequestBuilder::new(&test_config(), api).expect("test config is valid")
}

/// `2020-01-02T03:04:05Z`, the timestamp every reference vector uses.
#[must_use]
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5)
        .single()
        .expect("valid timestamp")
}

mod test_flatten;
mod test_request;
mod test_signing;
