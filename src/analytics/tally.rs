use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::models::Message;

/// Split a selection into per-sender selections, keyed and ordered by sender name
pub fn group_by_sender<'a>(messages: &[&'a Message]) -> BTreeMap<&'a str, Vec<&'a Message>> {
    let mut groups: BTreeMap<&'a str, Vec<&'a Message>> = BTreeMap::new();
    for &message in messages {
        groups.entry(message.sender.as_str()).or_default().push(message);
    }
    groups
}

/// Counter that remembers when each key was first seen
///
/// Ranking sorts by count (descending) and breaks ties by first appearance, so results
/// are deterministic regardless of hash order.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    counts: HashMap<K, (u64, usize)>,
}

impl<K: Eq + Hash> Tally<K> {
    pub fn new() -> Self {
        Self { counts: HashMap::new() }
    }

    pub fn add(&mut self, key: K) {
        let next = self.counts.len();
        self.counts.entry(key).or_insert((0, next)).0 += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// All keys, highest count first
    pub fn ranked(self) -> Vec<(K, u64)> {
        let mut entries: Vec<_> = self.counts.into_iter().collect();
        entries.sort_by(|(_, (ca, fa)), (_, (cb, fb))| cb.cmp(ca).then(fa.cmp(fb)));
        entries.into_iter().map(|(key, (count, _))| (key, count)).collect()
    }

    /// The `n` highest-count keys
    pub fn most_common(self, n: usize) -> Vec<(K, u64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

impl<K: Eq + Hash> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Self::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}
