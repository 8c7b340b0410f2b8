//! Request parameter value model.
//!
//! [`ParameterValue`] is a tagged union over everything a caller may pass as a
//! request parameter: scalars, dates, and arbitrarily nested maps and lists.
//! Strings are a distinct variant, so a string is never walked as a sequence.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

/// A request parameter value, possibly nested.
///
/// `Null` and the empty string are *absent* values: the flattener drops them
/// silently instead of emitting an empty parameter (see [`Self::is_absent`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParameterValue {
    /// No value. Omitted from the flattened output.
    #[default]
    Null,
    /// String value, sent as-is before percent-encoding.
    String(String),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value, rendered as `true` / `false`.
    Bool(bool),
    /// Calendar date, rendered as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// Date and time without an offset, rendered as `YYYY-MM-DDTHH:MM:SS[.ffffff]`.
    NaiveDateTime(NaiveDateTime),
    /// Date and time with an offset, rendered as `YYYY-MM-DDTHH:MM:SS[.ffffff]+HH:MM`.
    DateTime(DateTime<FixedOffset>),
    /// Keyed sub-parameters. Each key becomes a path segment.
    Map(BTreeMap<String, ParameterValue>),
    /// Ordered sub-parameters. Each element gets a 1-based index segment.
    List(Vec<ParameterValue>),
}

impl ParameterValue {
    /// Build a `Map` from key/value pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use mws_auth::ParameterValue;
    ///
    /// let value = ParameterValue::map([("SellerSKU", "Football2415")]);
    /// assert!(value.is_map());
    /// ```
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<ParameterValue>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a `List` from values, preserving order.
    pub fn list<V>(values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<ParameterValue>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Returns `true` for values the request pipeline omits: `Null` and `""`.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns `true` if this is a `Map`.
    #[must_use]
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Returns `true` if this is a `List`.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns `true` for leaf values (anything but `Map` and `List`).
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        !self.is_map() && !self.is_list()
    }

    /// Returns the map if this is a `Map`.
    #[must_use]
    pub fn as_map(&self) -> Option<&BTreeMap<String, ParameterValue>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the elements if this is a `List`.
    #[must_use]
    pub fn as_list(&self) -> Option<&[ParameterValue]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Short type name used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Date(_) => "date",
            Self::NaiveDateTime(_) | Self::DateTime(_) => "datetime",
            Self::Map(_) => "map",
            Self::List(_) => "list",
        }
    }

    /// Count the terminal scalars reachable from this value, excluding absent ones.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Map(m) => m.values().map(Self::leaf_count).sum(),
            Self::List(l) => l.iter().map(Self::leaf_count).sum(),
            v if v.is_absent() => 0,
            _ => 1,
        }
    }
}

impl From<String> for ParameterValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for ParameterValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<&String> for ParameterValue {
    fn from(v: &String) -> Self {
        Self::String(v.clone())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParameterValue {
                fn from(v: $ty) -> Self {
                    Self::Integer(i64::from(v))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for ParameterValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for ParameterValue {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<bool> for ParameterValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<NaiveDate> for ParameterValue {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<NaiveDateTime> for ParameterValue {
    fn from(v: NaiveDateTime) -> Self {
        Self::NaiveDateTime(v)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ParameterValue {
    fn from(v: DateTime<Tz>) -> Self {
        Self::DateTime(v.fixed_offset())
    }
}

impl<T: Into<ParameterValue>> From<Option<T>> for ParameterValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<ParameterValue>> From<Vec<T>> for ParameterValue {
    fn from(v: Vec<T>) -> Self {
        Self::list(v)
    }
}

impl<K: Into<String>, V: Into<ParameterValue>> From<BTreeMap<K, V>> for ParameterValue {
    fn from(v: BTreeMap<K, V>) -> Self {
        Self::map(v)
    }
}

impl<K: Into<String>, V: Into<ParameterValue>, S> From<HashMap<K, V, S>> for ParameterValue {
    fn from(v: HashMap<K, V, S>) -> Self {
        Self::map(v)
    }
}

impl From<serde_json::Value> for ParameterValue {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value;

        match v {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if n.is_u64() {
                    // Out of i64 range: keep every digit.
                    Self::String(n.to_string())
                } else {
                    n.as_f64().map_or(Self::Null, Self::Float)
                }
            }
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::list(items),
            Value::Object(fields) => Self::map(fields),
        }
    }
}
