//! Result rows.
//!
//! A [`Row`] holds one response's bindings as identifier → native value,
//! in the order the agent bound them.

use std::collections::HashMap;

use crate::coerce::NativeValue;

/// Insertion-ordered mapping from OID string to coerced value.
///
/// Inserting an OID that is already present replaces its value without
/// moving it. Lookups and inserts go through a hash index, so building a
/// row from a wide response stays linear in its binding count.
///
/// # Examples
///
/// ```
/// use quicksnmp::{NativeValue, Row};
///
/// let mut row = Row::new();
/// row.insert("1.3.6.1.2.1.1.5.0", NativeValue::from("core-sw-01"));
/// row.insert("1.3.6.1.2.1.1.3.0", NativeValue::Float(4200.0));
///
/// assert_eq!(row.len(), 2);
/// assert_eq!(row.get("1.3.6.1.2.1.1.5.0").and_then(|v| v.as_str()), Some("core-sw-01"));
/// assert_eq!(row.keys().next(), Some("1.3.6.1.2.1.1.5.0"));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Row {
    entries: Vec<(String, NativeValue)>,
    /// OID -> position in `entries`
    index: HashMap<String, usize>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty row with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a value, returning the previous value for this OID if any.
    pub fn insert(&mut self, oid: impl Into<String>, value: NativeValue) -> Option<NativeValue> {
        let oid = oid.into();
        match self.index.get(&oid) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(oid.clone(), self.entries.len());
                self.entries.push((oid, value));
                None
            }
        }
    }

    /// Look up the value bound to `oid`.
    pub fn get(&self, oid: &str) -> Option<&NativeValue> {
        self.index.get(oid).map(|&pos| &self.entries[pos].1)
    }

    /// Whether `oid` is bound in this row.
    pub fn contains_key(&self, oid: &str) -> bool {
        self.index.contains_key(oid)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(oid, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NativeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over OIDs in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &NativeValue> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl std::fmt::Debug for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl IntoIterator for Row {
    type Item = (String, NativeValue);
    type IntoIter = std::vec::IntoIter<(String, NativeValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, NativeValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, NativeValue)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (oid, value) in iter {
            row.insert(oid, value);
        }
        row
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Row {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (oid, value) in &self.entries {
            map.serialize_entry(oid, value)?;
        }
        map.end()
    }
}
