//! mws-sign - print a signed MWS request URL.
//!
//! Credentials come from the environment; the request is prepared and signed
//! locally and its URL written to stdout. Nothing is sent.
//!
//! # Usage
//!
//! ```text
//! echo '{"MarketplaceId": {"Id": ["ATVPDKIKX0DER"]}}' \
//!     | mws-sign ListOrders --post --uri /Orders/2013-09-01 --version 2013-09-01
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MWS_ACCESS_KEY` | *(required)* | Access key id |
//! | `MWS_SECRET_KEY` | *(required)* | Secret key used for signing |
//! | `MWS_ACCOUNT_ID` | *(required)* | Seller or merchant id |
//! | `MWS_REGION` | `US` | Marketplace whose endpoint is used |
//! | `MWS_AUTH_TOKEN` | *(unset)* | Delegated authorization token |
//! | `MWS_USER_AGENT` | `mws-rs/<version>` | `User-Agent` header |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod cli;

use std::io::{IsTerminal, Read};

use anyhow::{Context, Result};
use clap::Parser;
use mws_auth::flatten;
use mws_core::MwsConfig;
use mws_request::{Api, RequestBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, parse_params};

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Logs go to stderr so stdout carries only the URL.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Build the API section description from command-line overrides.
fn build_api(args: &Args) -> Api {
    let mut api = Api::default();
    if let Some(uri) = &args.uri {
        api.uri.clone_from(uri);
    }
    if let Some(version) = &args.version {
        api.version.clone_from(version);
    }
    if let Some(account_type) = &args.account_type {
        api.account_type.clone_from(account_type);
    }
    api
}

/// Read parameter JSON from `--params`, or from stdin when it is piped.
fn read_params_json(args: &Args) -> Result<String> {
    if let Some(json) = &args.params {
        return Ok(json.clone());
    }
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut json = String::new();
    stdin
        .read_to_string(&mut json)
        .context("failed to read parameters from stdin")?;
    Ok(json)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = MwsConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config.log_level)?;

    info!(
        region = %config.region,
        endpoint = config.region.endpoint(),
        "loaded configuration"
    );

    let params = parse_params(&read_params_json(&args)?)?;
    let flat = flatten(&params, "").context("invalid request parameters")?;

    let builder = RequestBuilder::new(&config, build_api(&args))?;
    let prepared = builder.prepare(&args.action, flat, args.method())?;

    info!(
        action = %args.action,
        method = %prepared.method,
        param_count = prepared.params.len(),
        "signed request"
    );

    println!("{}", prepared.url);
    Ok(())
}
