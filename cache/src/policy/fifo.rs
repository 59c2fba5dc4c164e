use super::key_list::KeyList;
use super::EvictionPolicy;

use std::hash::Hash;

/// An eviction policy that evicts entries in a First-In, First-Out (FIFO) manner.
#[derive(Debug)]
pub struct Fifo<K: Eq + Hash + Clone> {
  // Front is the oldest key.
  list: KeyList<K>,
}

impl<K: Eq + Hash + Clone> Fifo<K> {
  pub fn new() -> Self {
    Self {
      list: KeyList::new(),
    }
  }
}

impl<K: Eq + Hash + Clone> Default for Fifo<K> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K: Eq + Hash + Clone> EvictionPolicy<K> for Fifo<K> {
  fn name(&self) -> &'static str {
    "fifo"
  }

  /// On insert, add the new key to the back of the queue.
  fn on_insert(&mut self, key: &K) {
    // Re-inserting keeps the original arrival position.
    if !self.list.contains(key) {
      self.list.push_back(key);
    }
  }

  /// A FIFO policy does not care about access patterns. This is a no-op.
  fn on_access(&mut self, _key: &K) {}

  fn victim(&self, incoming: &K) -> Option<K> {
    self.list.iter().find(|key| *key != incoming).cloned()
  }

  fn on_remove(&mut self, key: &K) {
    self.list.remove(key);
  }

  fn len(&self) -> usize {
    self.list.len()
  }

  fn clear(&mut self) {
    self.list.clear();
  }
}
