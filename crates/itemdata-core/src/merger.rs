//! Additive merging of resolved item properties

use crate::table::CellValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Canonical output key -> value, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedProperties {
    entries: IndexMap<String, CellValue>,
}

impl ResolvedProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, overwriting any previous value for `key`
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Merge a single entry: two integers stack (saturating), anything else
    /// overwrites.
    pub fn add(&mut self, key: impl Into<String>, value: CellValue) {
        let key = key.into();
        if let (Some(CellValue::Integer(existing)), CellValue::Integer(extra)) =
            (self.entries.get_mut(&key), &value)
        {
            *existing = existing.saturating_add(*extra);
            return;
        }
        self.entries.insert(key, value);
    }

    /// Merge every entry of `addition` into `self`, left to right
    pub fn combine(&mut self, addition: &ResolvedProperties) {
        for (key, value) in &addition.entries {
            self.add(key.clone(), value.clone());
        }
    }

    /// Consuming form of [`combine`](Self::combine)
    pub fn combined(mut self, addition: &ResolvedProperties) -> Self {
        self.combine(addition);
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for ResolvedProperties {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        let mut props = ResolvedProperties::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

impl<'a> IntoIterator for &'a ResolvedProperties {
    type Item = (&'a String, &'a CellValue);
    type IntoIter = indexmap::map::Iter<'a, String, CellValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// `combine(base, addition)` without mutating either side
pub fn combine(base: &ResolvedProperties, addition: &ResolvedProperties) -> ResolvedProperties {
    base.clone().combined(addition)
}
