//! Command-line arguments.

use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use clap::Parser;
use http::Method;
use mws_auth::ParameterValue;

/// Print a signed MWS request URL.
///
/// JSON parameters are read from stdin when `--params` is not given and stdin
/// is not a terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "mws-sign")]
pub struct Args {
    /// Action to sign, e.g. `ListOrders`
    pub action: String,

    /// Sign for POST instead of GET
    #[arg(long)]
    pub post: bool,

    /// Request path of the API section, e.g. `/Orders/2013-09-01`
    #[arg(long)]
    pub uri: Option<String>,

    /// Value of the `Version` parameter
    #[arg(long)]
    pub version: Option<String>,

    /// Parameter name the account id is sent under (`SellerId` or `Merchant`)
    #[arg(long)]
    pub account_type: Option<String>,

    /// Request parameters as a JSON object
    #[arg(long)]
    pub params: Option<String>,
}

impl Args {
    /// HTTP method the request is signed for.
    #[must_use]
    pub fn method(&self) -> Method {
        if self.post { Method::POST } else { Method::GET }
    }
}

/// Parse a JSON document into request parameters. Blank input means none.
pub fn parse_params(json: &str) -> Result<ParameterValue> {
    if json.trim().is_empty() {
        return Ok(ParameterValue::Map(BTreeMap::new()));
    }
    let value: serde_json::Value =
        serde_json::from_str(json).context("parameters are not valid JSON")?;
    if !value.is_object() {
        bail!("parameters must be a JSON object");
    }
    Ok(ParameterValue::from(value))
}
