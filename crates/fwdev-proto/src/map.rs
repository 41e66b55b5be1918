//! Ordered string-keyed variant maps.

use crate::value::Variant;
use rkyv::{Archive, Deserialize, Serialize};
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A single key/value pair in a [`VariantMap`].
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize)]
pub struct VariantEntry {
    /// Entry key.
    pub key: String,
    /// Entry value.
    pub value: Variant,
}

impl VariantEntry {
    /// Create a new entry.
    pub fn new(key: impl Into<String>, value: impl Into<Variant>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An ordered mapping of string keys to typed values.
///
/// Entries keep insertion order. Maps received from the wire may contain a
/// key more than once; consumers see every entry in order.
#[derive(Debug, Clone, Default, PartialEq, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize)]
pub struct VariantMap {
    entries: Vec<VariantEntry>,
}

impl VariantMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing the value of an existing key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Variant>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.value = value,
            None => self.entries.push(VariantEntry { key, value }),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Variant>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Variant> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    /// Check if the map has an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &VariantEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert to a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::Map::new();
        for entry in &self.entries {
            obj.insert(entry.key.clone(), entry.value.to_json());
        }
        serde_json::Value::Object(obj)
    }
}

impl FromIterator<VariantEntry> for VariantMap {
    fn from_iter<I: IntoIterator<Item = VariantEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a VariantMap {
    type Item = &'a VariantEntry;
    type IntoIter = std::slice::Iter<'a, VariantEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let map = VariantMap::new()
            .with("Guid", "abc")
            .with("Name", "ColorHug2")
            .with("Flags", 3u64);

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["Guid", "Name", "Flags"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = VariantMap::new().with("Name", "a").with("Version", "1");
        map.insert("Name", "b");

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["Name", "Version"]);
        assert_eq!(map.get("Name"), Some(&Variant::String("b".into())));
    }

    #[test]
    fn test_duplicate_keys_from_wire_are_kept() {
        let map: VariantMap = vec![
            VariantEntry::new("Name", "first"),
            VariantEntry::new("Name", "second"),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Name").and_then(Variant::as_str), Some("first"));
    }

    #[test]
    fn test_to_json() {
        let map = VariantMap::new().with("Name", "X").with("FlashesLeft", 1u32);
        assert_eq!(
            map.to_json(),
            serde_json::json!({ "Name": "X", "FlashesLeft": 1 })
        );
    }

    #[test]
    fn test_empty() {
        let map = VariantMap::new();
        assert!(map.is_empty());
        assert!(!map.contains_key("Guid"));
    }
}
