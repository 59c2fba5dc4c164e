use super::key_list::KeyList;
use super::EvictionPolicy;

use std::hash::Hash;

/// An eviction policy that evicts the most recently used entry that existed
/// before the insertion which overflowed the cache.
#[derive(Debug)]
pub struct Mru<K: Eq + Hash + Clone> {
  // Ordered by recent use; the back is the most recent.
  order: KeyList<K>,
}

impl<K: Eq + Hash + Clone> Mru<K> {
  pub fn new() -> Self {
    Self {
      order: KeyList::new(),
    }
  }
}

impl<K: Eq + Hash + Clone> Default for Mru<K> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K: Eq + Hash + Clone> EvictionPolicy<K> for Mru<K> {
  fn name(&self) -> &'static str {
    "mru"
  }

  fn on_insert(&mut self, key: &K) {
    self.order.push_back(key);
  }

  fn on_access(&mut self, key: &K) {
    self.order.move_to_back(key);
  }

  fn victim(&self, incoming: &K) -> Option<K> {
    self.order.iter().rev().find(|key| *key != incoming).cloned()
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
