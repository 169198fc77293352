use std::fmt;

use indexmap::IndexMap;

use crate::Value;

/// Lookup of a field that the record doesn't have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field not found: {0}")]
pub struct FieldNotFound(pub String);

/// A record: an ordered mapping from field name to [`Value`].
///
/// Fields keep their insertion order. Equality (both the derived one and
/// [`Record::strictly_equals`]) ignores field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record(IndexMap<String, Value>);

/// Construct a [`Record`] from `key: value` pairs.
///
/// ```
/// use seqkit_value::{record, Value};
///
/// let user = record! { id: 1, name: "AA", age: 32 };
/// assert_eq!(user.get("name"), Some(&Value::from("AA")));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($key:ident : $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert(stringify!($key), $value);
        )+
        record
    }};
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// A record with a single field.
    pub fn single(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new().with(key, value)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a field, returning the previous value if there was one.
    ///
    /// A replaced field keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn field(&self, key: &str) -> Result<&Value, FieldNotFound> {
        self.0
            .get(key)
            .ok_or_else(|| FieldNotFound(key.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// True if every field of `criteria` is present in this record and
    /// strictly equal to it. Fields not named by `criteria` are ignored.
    pub fn contains_all(&self, criteria: &Record) -> bool {
        criteria.iter().all(|(key, expected)| {
            self.get(key)
                .is_some_and(|value| value.strictly_equals(expected))
        })
    }

    pub fn strictly_equals(&self, other: &Record) -> bool {
        self.len() == other.len() && self.contains_all(other)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}
