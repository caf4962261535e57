use crate::KeyValue;
use std::collections::hash_map;
use std::collections::HashMap;

/// Intermediate key -> values structure built by the shuffle collector.
///
/// Owned by exactly one collector while it is being filled, then moved into
/// the reduce stage. Value order within a group is unspecified.
#[derive(Debug, Default)]
pub struct Grouping {
    groups: HashMap<String, Vec<i64>>,
    emissions: usize,
}

impl Grouping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the emission's value to its key's group
    pub fn insert(&mut self, emission: KeyValue) {
        self.groups
            .entry(emission.key)
            .or_default()
            .push(emission.value);
        self.emissions += 1;
    }

    pub fn get(&self, key: &str) -> Option<&[i64]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total emissions absorbed, across all keys
    pub fn emission_count(&self) -> usize {
        self.emissions
    }
}

impl IntoIterator for Grouping {
    type Item = (String, Vec<i64>);
    type IntoIter = hash_map::IntoIter<String, Vec<i64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl FromIterator<KeyValue> for Grouping {
    fn from_iter<I: IntoIterator<Item = KeyValue>>(iter: I) -> Self {
        let mut grouping = Grouping::new();
        for emission in iter {
            grouping.insert(emission);
        }
        grouping
    }
}
