use super::key_list::KeyList;
use super::EvictionPolicy;

use std::hash::Hash;

/// An eviction policy that evicts the most recently inserted key, other than
/// the one whose insertion overflowed the cache.
///
/// Re-inserting a key counts as a fresh insertion. Reads are ignored.
#[derive(Debug)]
pub struct Lifo<K: Eq + Hash + Clone> {
  // Back is the most recently inserted key.
  stack: KeyList<K>,
}

impl<K: Eq + Hash + Clone> Lifo<K> {
  pub fn new() -> Self {
    Self {
      stack: KeyList::new(),
    }
  }
}

impl<K: Eq + Hash + Clone> Default for Lifo<K> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K: Eq + Hash + Clone> EvictionPolicy<K> for Lifo<K> {
  fn name(&self) -> &'static str {
    "lifo"
  }

  fn on_insert(&mut self, key: &K) {
    self.stack.push_back(key);
  }

  fn on_access(&mut self, _key: &K) {}

  /// The incoming key sits on top of the stack, so the victim is the one
  /// directly beneath it.
  fn victim(&self, incoming: &K) -> Option<K> {
    self.stack.iter().rev().find(|key| *key != incoming).cloned()
  }

  fn on_remove(&mut self, key: &K) {
    self.stack.remove(key);
  }

  fn len(&self) -> usize {
    self.stack.len()
  }

  fn clear(&mut self) {
    self.stack.clear();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn order(policy: &Lifo<i32>) -> Vec<i32> {
    policy.stack.iter().copied().collect()
  }

  #[test]
  fn test_victim_is_previous_top() {
    let mut policy = Lifo::new();
    for k in 1..=5 {
      policy.on_insert(&k);
    }
    assert_eq!(policy.victim(&5), Some(4));
  }

  #[test]
  fn test_re_insert_moves_key_to_top() {
    let mut policy = Lifo::new();
    policy.on_insert(&1);
    policy.on_insert(&2);
    policy.on_insert(&3);
    policy.on_insert(&1);

    assert_eq!(order(&policy), vec![2, 3, 1]);
    policy.on_insert(&4);
    assert_eq!(policy.victim(&4), Some(1));
  }

  #[test]
  fn test_access_is_a_noop() {
    let mut policy = Lifo::new();
    policy.on_insert(&1);
    policy.on_insert(&2);
    policy.on_access(&1);

    assert_eq!(order(&policy), vec![1, 2]);
  }

  #[test]
  fn test_sequential_overflows() {
    let mut policy = Lifo::new();
    for k in 1..=5 {
      policy.on_insert(&k);
    }
    let first = policy.victim(&5).unwrap();
    policy.on_remove(&first);

    policy.on_insert(&6);
    assert_eq!(policy.victim(&6), Some(5));
  }

  #[test]
  fn test_on_remove_and_clear() {
    let mut policy = Lifo::new();
    policy.on_insert(&1);
    policy.on_insert(&2);
    policy.on_remove(&2);
    assert_eq!(order(&policy), vec![1]);

    policy.clear();
    assert!(policy.is_empty());
  }
}
