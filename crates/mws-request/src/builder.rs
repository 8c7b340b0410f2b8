//! Signed request preparation.
//!
//! [`RequestBuilder`] combines the default parameters every MWS request needs
//! with the caller's action parameters, signs the result, and hands back a
//! [`PreparedRequest`]. Sending it is left to whichever HTTP client the caller
//! uses; [`PreparedRequest::into_http`] produces a plain `http::Request`.
//!
//! The request URL has the form:
//!
//! ```text
//! {endpoint}{uri}?{canonical query}&Signature={percent-encoded signature}
//! ```

use bytes::Bytes;
use chrono::{DateTime, SubsecRound, Utc};
use http::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use http::{HeaderName, Method};
use mws_auth::signer::{SIGNATURE_METHOD, SIGNATURE_PARAM, SIGNATURE_VERSION};
use mws_auth::{FlatParams, ParameterValue, Signer, clean_str, flatten};
use mws_core::MwsConfig;
use tracing::debug;

use crate::api::Api;
use crate::content::{CONTENT_MD5, calc_md5};
use crate::error::{RequestError, RequestResult};

/// Builds signed requests for one API section with one set of credentials.
///
/// The builder holds no mutable state; it can be shared between threads and
/// reused for any number of requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    api: Api,
    access_key: String,
    account_id: String,
    auth_token: Option<String>,
    user_agent: String,
    endpoint: String,
    signer: Signer,
}

impl RequestBuilder {
    /// Create a builder from validated configuration.
    ///
    /// A relative `api.uri` is rooted at `/`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Config`] if credentials are missing.
    pub fn new(config: &MwsConfig, api: Api) -> RequestResult<Self> {
        config.validate()?;
        let signer = Signer::new(config.secret_key.clone())?;

        Ok(Self {
            api: api.with_rooted_uri(),
            access_key: config.access_key.clone(),
            account_id: config.account_id.clone(),
            auth_token: config.auth_token.clone(),
            user_agent: config.user_agent.clone(),
            endpoint: config.region.endpoint().to_owned(),
            signer,
        })
    }

    /// Send requests to `endpoint` instead of the configured marketplace's.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_owned();
        self
    }

    /// The API section this builder targets.
    #[must_use]
    pub fn api(&self) -> &Api {
        &self.api
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Parameters required on every request, stamped with `timestamp`.
    ///
    /// The timestamp is truncated to whole seconds.
    ///
    /// # Errors
    ///
    /// Propagates cleaning errors from [`FlatParams::set`].
    pub fn default_params(&self, timestamp: DateTime<Utc>) -> RequestResult<FlatParams> {
        let mut params = FlatParams::new();
        params.set("AWSAccessKeyId", &ParameterValue::from(&self.access_key))?;
        params.set(
            self.api.account_type.as_str(),
            &ParameterValue::from(&self.account_id),
        )?;
        params.set("SignatureVersion", &ParameterValue::from(SIGNATURE_VERSION))?;
        params.set("SignatureMethod", &ParameterValue::from(SIGNATURE_METHOD))?;
        params.set(
            "Timestamp",
            &ParameterValue::from(timestamp.trunc_subsecs(0)),
        )?;
        params.set("Version", &ParameterValue::from(&self.api.version))?;
        if let Some(token) = &self.auth_token {
            params.set("MWSAuthToken", &ParameterValue::from(token))?;
        }
        Ok(params)
    }

    /// Prepare a signed request for `action`, stamped with the current time.
    ///
    /// # Errors
    ///
    /// See [`Self::prepare_at`].
    pub fn prepare(
        &self,
        action: &str,
        params: FlatParams,
        method: Method,
    ) -> RequestResult<PreparedRequest> {
        self.prepare_at(action, params, method, Utc::now())
    }

    /// Prepare a signed request for `action` with an explicit timestamp.
    ///
    /// `params` override default parameters with the same key.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Auth`] if signing fails and
    /// [`RequestError::Http`] if the `User-Agent` is not a valid header value.
    pub fn prepare_at(
        &self,
        action: &str,
        params: FlatParams,
        method: Method,
        timestamp: DateTime<Utc>,
    ) -> RequestResult<PreparedRequest> {
        let mut all = self.default_params(timestamp)?;
        all.set("Action", &ParameterValue::from(action))?;
        all.merge(params);

        let canonical_query = all.canonical_query();
        let signature = self.signer.sign(
            method.as_str(),
            &self.endpoint,
            &self.api.uri,
            &canonical_query,
        )?;

        let url = format!(
            "{}{}?{}&{}={}",
            self.endpoint,
            self.api.uri,
            canonical_query,
            SIGNATURE_PARAM,
            clean_str(&signature)
        );

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent).map_err(http::Error::from)?,
        );

        debug!(
            action,
            method = %method,
            uri = %self.api.uri,
            param_count = all.len(),
            "prepared signed request"
        );

        Ok(PreparedRequest {
            method,
            url,
            params: all,
            canonical_query,
            signature,
            headers,
            body: Bytes::new(),
        })
    }

    /// Prepare a request from arbitrarily nested parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidUri`] when this section has no
    /// service-specific URI and [`RequestError::InvalidParameters`] when
    /// `params` is not a map.
    pub fn generic(
        &self,
        action: &str,
        params: &ParameterValue,
        method: Method,
    ) -> RequestResult<PreparedRequest> {
        if !self.api.has_service_uri() {
            return Err(RequestError::InvalidUri(self.api.uri.clone()));
        }
        if !params.is_map() {
            return Err(RequestError::InvalidParameters(format!(
                "expected a map, got {}",
                params.type_name()
            )));
        }
        let flat = flatten(params, "")?;
        self.prepare(action, flat, method)
    }

    /// Prepare the `...ByNextToken` continuation of a paginated action.
    ///
    /// `action` is the base name (e.g. `ListOrders`); the suffix is added here.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::UnsupportedNextToken`] if the section does not
    /// list `action` as paginated.
    pub fn by_next_token(&self, action: &str, next_token: &str) -> RequestResult<PreparedRequest> {
        if !self.api.supports_next_token(action) {
            return Err(RequestError::UnsupportedNextToken(action.to_owned()));
        }
        let mut params = FlatParams::new();
        params.set("NextToken", &ParameterValue::from(next_token))?;
        self.prepare(&format!("{action}ByNextToken"), params, Method::POST)
    }

    /// Prepare a `GetServiceStatus` request for this section.
    ///
    /// # Errors
    ///
    /// See [`Self::prepare_at`].
    pub fn service_status(&self) -> RequestResult<PreparedRequest> {
        self.prepare("GetServiceStatus", FlatParams::new(), Method::GET)
    }

    /// Check a signature received for `params` in constant time.
    ///
    /// # Errors
    ///
    /// Propagates signing errors.
    pub fn verify(
        &self,
        method: &Method,
        params: &FlatParams,
        signature: &str,
    ) -> RequestResult<bool> {
        Ok(self.signer.verify(
            method.as_str(),
            &self.endpoint,
            &self.api.uri,
            &params.canonical_query(),
            signature,
        )?)
    }
}

/// A signed request, ready to be sent.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method the request was signed for.
    pub method: Method,
    /// Full request URL including the signature.
    pub url: String,
    /// Signed parameters, without `Signature`.
    pub params: FlatParams,
    /// Canonical query string the signature covers.
    pub canonical_query: String,
    /// Base64 signature, not percent-encoded.
    pub signature: String,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body. Not covered by the signature.
    pub body: Bytes,
}

impl PreparedRequest {
    /// Attach a body, setting `Content-Type` and its base64 `Content-MD5`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Http`] if `content_type` is not a valid header value.
    pub fn with_body(
        mut self,
        body: impl Into<Bytes>,
        content_type: &str,
    ) -> RequestResult<Self> {
        let body = body.into();
        let md5 = calc_md5(&body);
        self.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(content_type).map_err(http::Error::from)?,
        );
        self.headers.insert(
            HeaderName::from_static(CONTENT_MD5),
            HeaderValue::from_str(&md5).map_err(http::Error::from)?,
        );
        self.body = body;
        Ok(self)
    }

    /// The query string as sent, including the encoded `Signature`.
    #[must_use]
    pub fn query_string(&self) -> String {
        format!(
            "{}&{}={}",
            self.canonical_query,
            SIGNATURE_PARAM,
            clean_str(&self.signature)
        )
    }

    /// Convert into an `http::Request` carrying the URL, headers, and body.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Http`] if the URL is not a valid URI.
    pub fn into_http(self) -> RequestResult<http::Request<Bytes>> {
        let mut builder = http::Request::builder().method(self.method).uri(self.url);
        if let Some(headers) = builder.headers_mut() {
            headers.extend(self.headers);
        }
        Ok(builder.body(self.body)?)
    }
}
