//! Recursive flattening of nested parameters into dotted keys.
//!
//! Maps contribute their keys verbatim and lists contribute 1-based indices,
//! each joined to the parent path with `.`:
//!
//! ```text
//! {"a": 1, "c": ["foo", {"what": "have"}]}  with prefix "example"
//!
//! example.a=1
//! example.c.1=foo
//! example.c.2.what=have
//! ```
//!
//! Leaves are cleaned as they are emitted, so a [`FlatParams`] only ever holds
//! percent-encoded values. Absent values (`Null` and `""`) are dropped at any
//! depth before cleaning.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use crate::canonical::canonicalize;
use crate::clean::clean;
use crate::error::{AuthError, AuthResult};
use crate::value::ParameterValue;

/// Separator between path segments.
pub const KEY_SEPARATOR: char = '.';

/// A flat, cleaned parameter set keyed by dotted path.
///
/// Keys iterate in byte-lexicographic order, which is the order the canonical
/// query string uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatParams {
    entries: BTreeMap<String, String>,
}

impl FlatParams {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the cleaned value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over `(key, cleaned value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over keys in canonical order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Clean and set a single scalar parameter, replacing any previous value.
    ///
    /// Absent values are skipped and leave an existing entry untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingKey`] for an empty key,
    /// [`AuthError::InvalidKey`] for a key [`validate_key`] rejects, and
    /// [`AuthError::InvalidParameterType`] for non-scalar values.
    pub fn set(&mut self, key: impl Into<String>, value: &ParameterValue) -> AuthResult<()> {
        if value.is_absent() {
            return Ok(());
        }
        let key = key.into();
        if key.is_empty() {
            return Err(AuthError::MissingKey(value.type_name()));
        }
        validate_key(&key)?;
        let cleaned = clean(value)?;
        self.entries.insert(key, cleaned);
        Ok(())
    }

    /// Remove a parameter, returning its cleaned value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Merge `other` into `self`. Entries from `other` win on key conflicts.
    pub fn merge(&mut self, other: FlatParams) {
        self.entries.extend(other.entries);
    }

    /// Build the canonical query string for these parameters.
    #[must_use]
    pub fn canonical_query(&self) -> String {
        canonicalize(self)
    }

    /// Consume the set and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.entries
    }

    fn insert_unique(&mut self, key: String, value: String) -> AuthResult<()> {
        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
            Entry::Occupied(slot) => Err(AuthError::DuplicateKey(slot.key().clone())),
        }
    }
}

impl<'a> IntoIterator for &'a FlatParams {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for FlatParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&canonicalize(self))
    }
}

/// Flatten `value` into dotted keys under `prefix`, cleaning every leaf.
///
/// A single trailing `.` on `prefix` is ignored, so `"MarketplaceIdList.Id."`
/// and `"MarketplaceIdList.Id"` are equivalent. A scalar at the top level needs a
/// non-empty prefix to name it.
///
/// # Errors
///
/// - [`AuthError::MissingKey`] if a scalar has no key.
/// - [`AuthError::InvalidKey`] if the prefix or a map key is not a valid segment.
/// - [`AuthError::DuplicateKey`] if two paths produce the same key.
///
/// # Examples
///
/// ```
/// use mws_auth::{ParameterValue, flatten};
///
/// let flat = flatten(&ParameterValue::list(["x", "y"]), "List").unwrap();
/// assert_eq!(flat.get("List.1"), Some("x"));
/// assert_eq!(flat.get("List.2"), Some("y"));
/// ```
pub fn flatten(value: &ParameterValue, prefix: &str) -> AuthResult<FlatParams> {
    let prefix = prefix.strip_suffix(KEY_SEPARATOR).unwrap_or(prefix);
    if !prefix.is_empty() {
        validate_key(prefix)?;
    }

    let mut out = FlatParams::new();
    let mut path = prefix.to_owned();
    walk(value, &mut path, &mut out)?;
    Ok(out)
}

/// Depth-first walk; `path` is reused as a stack of segments.
fn walk(value: &ParameterValue, path: &mut String, out: &mut FlatParams) -> AuthResult<()> {
    match value {
        ParameterValue::Map(entries) => {
            for (key, sub) in entries {
                validate_key(key)?;
                let len = path.len();
                push_segment(path, key);
                walk(sub, path, out)?;
                path.truncate(len);
            }
            Ok(())
        }
        ParameterValue::List(items) => {
            for (idx, sub) in items.iter().enumerate() {
                let len = path.len();
                push_segment(path, &(idx + 1).to_string());
                walk(sub, path, out)?;
                path.truncate(len);
            }
            Ok(())
        }
        v if v.is_absent() => Ok(()),
        scalar => {
            if path.is_empty() {
                return Err(AuthError::MissingKey(scalar.type_name()));
            }
            out.insert_unique(path.clone(), clean(scalar)?)
        }
    }
}

fn push_segment(path: &mut String, segment: &str) {
    if !path.is_empty() {
        path.push(KEY_SEPARATOR);
    }
    path.push_str(segment);
}

/// Check that `key` can be emitted unencoded as part of a dotted path.
///
/// Keys may contain interior dots (`"MarketplaceIdList.Id"`), but no empty
/// segments and nothing outside ASCII alphanumerics and `-_.~`.
///
/// # Errors
///
/// Returns [`AuthError::InvalidKey`] describing the rejected key.
pub fn validate_key(key: &str) -> AuthResult<()> {
    let well_formed = !key.is_empty()
        && key.split(KEY_SEPARATOR).all(|segment| !segment.is_empty())
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~'));

    if well_formed {
        Ok(())
    } else {
        Err(AuthError::InvalidKey(key.to_owned()))
    }
}
