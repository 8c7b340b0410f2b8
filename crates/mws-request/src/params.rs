//! Helpers for the enumerated and keyed parameter shapes MWS actions use.
//!
//! These are thin wrappers over [`mws_auth::flatten`] for the common cases:
//!
//! ```text
//! enumerate_param("MarketplaceIdList.Id", ["A", "B"])
//!     MarketplaceIdList.Id.1=A
//!     MarketplaceIdList.Id.2=B
//!
//! enumerate_keyed_param("Items.member", [{"SellerSKU": "x", "Quantity": 3}])
//!     Items.member.1.Quantity=3
//!     Items.member.1.SellerSKU=x
//!
//! dict_keyed_param("PackageDimensions", {"Length": 5, "Unit": "inches"})
//!     PackageDimensions.Length=5
//!     PackageDimensions.Unit=inches
//! ```

use mws_auth::{AuthError, AuthResult, FlatParams, ParameterValue, flatten};

/// Enumerate `values` under `param` with 1-based indices.
///
/// A single non-list value is treated as a one-element list. Absent values
/// (including an absent single value) produce nothing.
///
/// # Errors
///
/// Propagates flattening errors, e.g. [`AuthError::InvalidKey`] for a bad `param`.
///
/// # Examples
///
/// ```
/// use mws_auth::ParameterValue;
/// use mws_request::params::enumerate_param;
///
/// let flat = enumerate_param("MarketplaceIdList.Id.", ParameterValue::list([123, 345])).unwrap();
/// assert_eq!(flat.get("MarketplaceIdList.Id.1"), Some("123"));
/// assert_eq!(flat.get("MarketplaceIdList.Id.2"), Some("345"));
/// ```
pub fn enumerate_param(param: &str, values: impl Into<ParameterValue>) -> AuthResult<FlatParams> {
    let values = as_list(values.into());
    flatten(&values, param)
}

/// Enumerate several parameters and merge the results.
///
/// # Errors
///
/// Returns the first error from [`enumerate_param`].
pub fn enumerate_params<K, V>(params: impl IntoIterator<Item = (K, V)>) -> AuthResult<FlatParams>
where
    K: AsRef<str>,
    V: Into<ParameterValue>,
{
    let mut out = FlatParams::new();
    for (param, values) in params {
        out.merge(enumerate_param(param.as_ref(), values)?);
    }
    Ok(out)
}

/// Enumerate a list of maps under `param`, keying each map's entries.
///
/// A single map is treated as a one-element list.
///
/// # Errors
///
/// Returns [`AuthError::InvalidParameterType`] if any element is not a map.
pub fn enumerate_keyed_param(
    param: &str,
    values: impl Into<ParameterValue>,
) -> AuthResult<FlatParams> {
    let values = as_list(values.into());
    if let Some(items) = values.as_list() {
        if let Some(bad) = items.iter().find(|item| !item.is_map()) {
            return Err(AuthError::InvalidParameterType(bad.type_name()));
        }
    }
    flatten(&values, param)
}

/// Key the entries of `map` under `param`, without enumeration.
///
/// # Errors
///
/// Returns [`AuthError::InvalidParameterType`] if `map` is not a map.
pub fn dict_keyed_param(param: &str, map: impl Into<ParameterValue>) -> AuthResult<FlatParams> {
    let map = map.into();
    if !map.is_map() {
        return Err(AuthError::InvalidParameterType(map.type_name()));
    }
    flatten(&map, param)
}

fn as_list(value: ParameterValue) -> ParameterValue {
    match value {
        ParameterValue::List(_) => value,
        v if v.is_absent() => ParameterValue::List(Vec::new()),
        v => ParameterValue::List(vec![v]),
    }
}
