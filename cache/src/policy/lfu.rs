use super::EvictionPolicy;

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Usage bookkeeping for a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Usage {
  count: u64,
  // Assigned once, on first insertion. Lower is older.
  seq: u64,
}

impl Usage {
  fn rank(&self) -> (u64, u64) {
    (self.count, self.seq)
  }
}

/// An eviction policy that evicts the least frequently used entry.
///
/// Every insertion of a new key starts its count at 1; re-insertions and reads
/// increment it. Among keys sharing the lowest count, the one inserted
/// earliest is evicted.
#[derive(Debug)]
pub struct Lfu<K> {
  usage: HashMap<K, Usage, ahash::RandomState>,
  // Ordered by (count, insertion sequence), so the first entry is the victim.
  ranking: BTreeMap<(u64, u64), K>,
  next_seq: u64,
}

impl<K: Eq + Hash + Clone> Lfu<K> {
  pub fn new() -> Self {
    Self {
      usage: HashMap::default(),
      ranking: BTreeMap::new(),
      next_seq: 0,
    }
  }

  /// Returns how many times `key` has been inserted or read while tracked.
  pub fn frequency(&self, key: &K) -> Option<u64> {
    self.usage.get(key).map(|usage| usage.count)
  }

  fn bump(&mut self, key: &K) -> bool {
    match self.usage.get_mut(key) {
      Some(usage) => {
        let stale = usage.rank();
        usage.count += 1;
        let fresh = usage.rank();
        if let Some(owned) = self.ranking.remove(&stale) {
          self.ranking.insert(fresh, owned);
        }
        true
      }
      None => false,
    }
  }
}

impl<K: Eq + Hash + Clone> Default for Lfu<K> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K: Eq + Hash + Clone> EvictionPolicy<K> for Lfu<K> {
  fn name(&self) -> &'static str {
    "lfu"
  }

  fn on_insert(&mut self, key: &K) {
    if self.bump(key) {
      return;
    }
    let usage = Usage {
      count: 1,
      seq: self.next_seq,
    };
    self.next_seq += 1;
    self.ranking.insert(usage.rank(), key.clone());
    self.usage.insert(key.clone(), usage);
  }

  fn on_access(&mut self, key: &K) {
    self.bump(key);
  }

  fn victim(&self, incoming: &K) -> Option<K> {
    self.ranking.values().find(|key| *key != incoming).cloned()
  }

  fn on_remove(&mut self, key: &K) {
    if let Some(usage) = self.usage.remove(key) {
      self.ranking.remove(&usage.rank());
    }
  }

  fn len(&self) -> usize {
    self.usage.len()
  }

  fn clear(&mut self) {
    self.usage.clear();
    self.ranking.clear();
    self.next_seq = 0;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_key_starts_at_one() {
    let mut policy = Lfu::new();
    policy.on_insert(&"a");
    assert_eq!(policy.frequency(&"a"), Some(1));
    assert_eq!(policy.frequency(&"b"), None);
  }

  #[test]
  fn test_access_and_reinsert_increment() {
    let mut policy = Lfu::new();
    policy.on_insert(&"a");
    policy.on_access(&"a");
    policy.on_insert(&"a");

    assert_eq!(policy.frequency(&"a"), Some(3));
    assert_eq!(policy.len(), 1);
  }

  #[test]
  fn test_tie_break_prefers_oldest_insertion() {
    let mut policy = Lfu::new();
    for k in ["k1", "k2", "k3", "k4"] {
      policy.on_insert(&k);
    }
    policy.on_access(&"k1");
    policy.on_access(&"k1");
    policy.on_access(&"k2");
    policy.on_insert(&"k5");

    assert_eq!(policy.victim(&"k5"), Some("k3"));
  }

  #[test]
  fn test_incoming_key_is_never_the_victim() {
    let mut policy = Lfu::new();
    policy.on_insert(&"a");
    policy.on_insert(&"b");
    policy.on_access(&"a");
    policy.on_access(&"b");
    policy.on_insert(&"c");

    // "c" has the lowest count but is the one being inserted.
    assert_eq!(policy.victim(&"c"), Some("a"));
  }

  #[test]
  fn test_reinsert_keeps_insertion_order() {
    let mut policy = Lfu::new();
    policy.on_insert(&"a");
    policy.on_insert(&"b");
    policy.on_insert(&"c");
    policy.on_insert(&"a");
    policy.on_access(&"b");

    // "a" and "b" tie at 2, "c" alone has the minimum.
    policy.on_insert(&"d");
    assert_eq!(policy.victim(&"d"), Some("c"));

    policy.on_remove(&"c");
    policy.on_access(&"d");
    policy.on_insert(&"e");
    // a=2, b=2, d=2, e=1: "e" is incoming, so the oldest of the 2s goes.
    assert_eq!(policy.victim(&"e"), Some("a"));
  }

  #[test]
  fn test_on_remove_cleans_up_state() {
    let mut policy = Lfu::new();
    policy.on_insert(&"a");
    policy.on_insert(&"b");
    policy.on_remove(&"a");
    policy.on_remove(&"a");

    assert_eq!(policy.len(), 1);
    assert_eq!(policy.ranking.len(), 1);
    assert_eq!(policy.frequency(&"a"), None);
  }

  #[test]
  fn test_clear_resets_state() {
    let mut policy = Lfu::new();
    policy.on_insert(&"a");
    policy.on_insert(&"b");
    policy.clear();

    assert!(policy.is_empty());
    assert!(policy.ranking.is_empty());
    assert_eq!(policy.victim(&"a"), None);
  }
}
