//! Insertion-ordered mapping payload.
//!
//! Iteration follows first-insertion order. Re-inserting an existing key
//! replaces its value without moving it, so the order a mapping is
//! summarized in matches the order its keys first appeared.

use rustc_hash::FxHashMap;

use super::Value;

/// Mapping from `Value` keys to `Value`s that remembers insertion order.
#[derive(Clone, Debug, Default)]
pub struct MapValue {
    entries: Vec<(Value, Value)>,
    index: FxHashMap<Value, usize>,
}

impl MapValue {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value pair, returning the value it replaced.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        if let Some(&slot) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[slot].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key/value pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Move every key and value into `out`, leaving the mapping empty.
    pub(crate) fn drain_into(&mut self, out: &mut Vec<Value>) {
        // Index keys are clones; release them first so the entry keys are unique
        self.index.clear();
        for (key, value) in self.entries.drain(..) {
            out.push(key);
            out.push(value);
        }
    }
}

impl FromIterator<(Value, Value)> for MapValue {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = MapValue::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl PartialEq for MapValue {
    /// Order-insensitive, like the mappings it models.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|ov| v == ov))
    }
}

impl Eq for MapValue {}

#[cfg(test)]
mod tests;
