use super::key_list::KeyList;
use super::EvictionPolicy;

use std::hash::Hash;

/// An eviction policy that evicts the least recently used entries.
#[derive(Debug)]
pub struct Lru<K: Eq + Hash + Clone> {
  // Ordered by recent use; the back is the most recent.
  order: KeyList<K>,
}

impl<K: Eq + Hash + Clone> Lru<K> {
  pub fn new() -> Self {
    Self {
      order: KeyList::new(),
    }
  }
}

impl<K: Eq + Hash + Clone> Default for Lru<K> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K: Eq + Hash + Clone> EvictionPolicy<K> for Lru<K> {
  fn name(&self) -> &'static str {
    "lru"
  }

  /// When an item is inserted, it is the most recently used.
  fn on_insert(&mut self, key: &K) {
    self.order.push_back(key);
  }

  /// When an item is accessed, move it to the most recent end.
  fn on_access(&mut self, key: &K) {
    self.order.move_to_back(key);
  }

  fn victim(&self, incoming: &K) -> Option<K> {
    self.order.iter().find(|key| *key != incoming).cloned()
  }

  fn on_remove(&mut self, key: &K) {
    self.order.remove(key);
  }

  fn len(&self) -> usize {
    self.order.len()
  }

  fn clear(&mut self) {
    self.order.clear();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_victim_is_least_recently_used() {
    let mut policy = Lru::new();
    for k in 1..=4 {
      policy.on_insert(&k);
    }
    policy.on_access(&1);
    policy.on_insert(&5);

    assert_eq!(policy.victim(&5), Some(2));
  }

  #[test]
  fn test_re_insert_promotes_key() {
    let mut policy = Lru::new();
    policy.on_insert(&1);
    policy.on_insert(&2);
    policy.on_insert(&1);
    policy.on_insert(&3);

    assert_eq!(policy.victim(&3), Some(2));
    assert_eq!(policy.len(), 3);
  }

  #[test]
  fn test_access_to_unknown_key_is_ignored() {
    let mut policy = Lru::new();
    policy.on_insert(&1);
    policy.on_access(&42);

    assert_eq!(policy.len(), 1);
    assert_eq!(policy.order.back(), Some(&1));
  }

  #[test]
  fn test_on_remove_and_clear() {
    let mut policy = Lru::new();
    policy.on_insert(&1);
    policy.on_insert(&2);
    policy.on_remove(&1);
    assert_eq!(policy.order.front(), Some(&2));

    policy.clear();
    assert!(policy.is_empty());
  }
}
