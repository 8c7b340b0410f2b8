//! Scalar cleaning: canonical string form plus percent-encoding.
//!
//! Every leaf value goes through [`clean`] exactly once before it enters the
//! canonical query string. The encoding leaves only ASCII alphanumerics and
//! `-_.~` unescaped (RFC 3986 unreserved characters); a space becomes `%20`,
//! never `+`.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::{AuthError, AuthResult};
use crate::value::ParameterValue;

/// Characters that must be percent-encoded in parameter values.
const PARAM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Clean a scalar value into its percent-encoded canonical string.
///
/// Absent values must be filtered out before this is called (see
/// [`ParameterValue::is_absent`]); a `Null` reaching the cleaner is a type error
/// like a `Map` or `List`.
///
/// # Errors
///
/// Returns [`AuthError::InvalidParameterType`] for `Null`, `Map`, and `List`.
///
/// # Examples
///
/// ```
/// use mws_auth::{ParameterValue, clean};
///
/// assert_eq!(clean(&ParameterValue::from("a b/c")).unwrap(), "a%20b%2Fc");
/// assert_eq!(clean(&ParameterValue::from(true)).unwrap(), "true");
/// ```
pub fn clean(value: &ParameterValue) -> AuthResult<String> {
    let raw = match value {
        ParameterValue::Null | ParameterValue::Map(_) | ParameterValue::List(_) => {
            return Err(AuthError::InvalidParameterType(value.type_name()));
        }
        ParameterValue::String(s) => return Ok(clean_str(s)),
        ParameterValue::Integer(i) => i.to_string(),
        ParameterValue::Float(f) => format_float(*f),
        ParameterValue::Bool(b) => clean_bool(*b).to_owned(),
        ParameterValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        ParameterValue::NaiveDateTime(dt) => format_naive_datetime(dt),
        ParameterValue::DateTime(dt) => format_datetime(dt),
    };
    Ok(clean_str(&raw))
}

/// Percent-encode a string with the parameter encoding rules.
///
/// # Examples
///
/// ```
/// use mws_auth::clean_str;
///
/// assert_eq!(clean_str("-_.~"), "-_.~");
/// assert_eq!(clean_str("2020-01-01T00:00:00+00:00"), "2020-01-01T00%3A00%3A00%2B00%3A00");
/// ```
#[must_use]
pub fn clean_str(value: &str) -> String {
    utf8_percent_encode(value, PARAM_ENCODE_SET).to_string()
}

/// Canonical boolean literal.
#[must_use]
pub fn clean_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Render an ISO-8601 datetime with an offset, e.g. `2020-01-02T03:04:05+00:00`.
///
/// Fractional seconds appear as six digits only when non-zero.
#[must_use]
pub fn format_datetime(dt: &DateTime<FixedOffset>) -> String {
    let mut out = format_naive_datetime(&dt.naive_local());
    out.push_str(&dt.format("%:z").to_string());
    out
}

/// Render an ISO-8601 datetime without an offset, e.g. `2020-01-02T03:04:05`.
#[must_use]
pub fn format_naive_datetime(dt: &NaiveDateTime) -> String {
    let mut out = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
    let micros = dt.nanosecond() / 1_000;
    if micros != 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out
}

/// Render a float the way a Python `repr` does.
///
/// Decimal exponents below -4 or from 16 up switch to scientific notation
/// with a signed two-digit exponent (`1e+16`, `1.5e-05`). Otherwise the value
/// is written positionally and keeps a trailing `.0` when integral.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_owned();
    }
    if f.is_infinite() {
        return if f.is_sign_negative() { "-inf" } else { "inf" }.to_owned();
    }

    let sci = format!("{f:e}");
    if let Some((mantissa, exp)) = sci
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
    {
        if !(-4..16).contains(&exp) {
            let sign = if exp < 0 { '-' } else { '+' };
            return format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
        }
    }

    let s = f.to_string();
    if s.contains('.') { s } else { format!("{s}.0") }
}
