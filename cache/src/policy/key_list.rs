use std::collections::HashMap;
use std::hash::Hash;

use generational_arena::{Arena, Index};

#[derive(Debug)]
pub(crate) struct Node<K> {
  pub(crate) key: K,
  pub(crate) next: Option<Index>,
  pub(crate) prev: Option<Index>,
}

/// An ordered list of keys with O(1) append, move-to-back and removal.
///
/// The front holds the key that has been in place longest; the back holds the
/// key that was pushed or moved most recently.
#[derive(Debug)]
pub(crate) struct KeyList<K: Eq + Hash + Clone> {
  // Arena stores all nodes contiguously.
  nodes: Arena<Node<K>>,
  // Key -> node index in the arena.
  lookup: HashMap<K, Index, ahash::RandomState>,
  head: Option<Index>,
  tail: Option<Index>,
}

impl<K: Eq + Hash + Clone> KeyList<K> {
  pub fn new() -> Self {
    Self {
      nodes: Arena::new(),
      lookup: HashMap::default(),
      head: None,
      tail: None,
    }
  }

  // Detaches a node from its neighbours. Does not touch the arena or the map.
  fn unlink(&mut self, index: Index) {
    let node = &self.nodes[index];
    let prev_idx = node.prev;
    let next_idx = node.next;

    if let Some(prev) = prev_idx {
      self.nodes[prev].next = next_idx;
    } else {
      self.head = next_idx;
    }

    if let Some(next) = next_idx {
      self.nodes[next].prev = prev_idx;
    } else {
      self.tail = prev_idx;
    }
  }

  // Attaches an arena node as the new tail.
  fn link_back(&mut self, index: Index) {
    let old_tail = self.tail;
    self.nodes[index].prev = old_tail;
    self.nodes[index].next = None;
    self.tail = Some(index);

    match old_tail {
      Some(tail) => self.nodes[tail].next = Some(index),
      None => self.head = Some(index),
    }
  }

  pub fn len(&self) -> usize {
    self.lookup.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lookup.is_empty()
  }

  pub fn contains(&self, key: &K) -> bool {
    self.lookup.contains_key(key)
  }

  /// Appends `key` at the back, or moves it there if it is already present.
  pub fn push_back(&mut self, key: &K) {
    if self.lookup.contains_key(key) {
      self.move_to_back(key);
      return;
    }
    let index = self.nodes.insert(Node {
      key: key.clone(),
      next: None,
      prev: None,
    });
    self.lookup.insert(key.clone(), index);
    self.link_back(index);
  }

  /// Moves an existing key to the back. Unknown keys are ignored.
  pub fn move_to_back(&mut self, key: &K) {
    if let Some(&index) = self.lookup.get(key) {
      if self.tail != Some(index) {
        self.unlink(index);
        self.link_back(index);
      }
    }
  }

  /// Removes `key`, returning whether it was present.
  pub fn remove(&mut self, key: &K) -> bool {
    match self.lookup.remove(key) {
      Some(index) => {
        self.unlink(index);
        self.nodes.remove(index);
        true
      }
      None => false,
    }
  }

  #[cfg(test)]
  pub fn front(&self) -> Option<&K> {
    self.head.map(|index| &self.nodes[index].key)
  }

  #[cfg(test)]
  pub fn back(&self) -> Option<&K> {
    self.tail.map(|index| &self.nodes[index].key)
  }

  pub fn iter(&self) -> Iter<'_, K> {
    Iter {
      list: self,
      front: self.head,
      back: self.tail,
      remaining: self.len(),
    }
  }

  pub fn clear(&mut self) {
    self.nodes.clear();
    self.lookup.clear();
    self.head = None;
    self.tail = None;
  }
}

/// Front-to-back iterator over a [`KeyList`]. Reversible.
pub(crate) struct Iter<'a, K: Eq + Hash + Clone> {
  list: &'a KeyList<K>,
  front: Option<Index>,
  back: Option<Index>,
  remaining: usize,
}

impl<'a, K: Eq + Hash + Clone> Iterator for Iter<'a, K> {
  type Item = &'a K;

  fn next(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      return None;
    }
    let node = &self.list.nodes[self.front?];
    self.front = node.next;
    self.remaining -= 1;
    Some(&node.key)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<'a, K: Eq + Hash + Clone> DoubleEndedIterator for Iter<'a, K> {
  fn next_back(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      return None;
    }
    let node = &self.list.nodes[self.back?];
    self.back = node.prev;
    self.remaining -= 1;
    Some(&node.key)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn keys(list: &KeyList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
  }

  #[test]
  fn new_list_is_empty() {
    let list = KeyList::<i32>::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
    assert!(keys(&list).is_empty());
  }

  #[test]
  fn push_back_appends_in_order() {
    let mut list = KeyList::new();
    list.push_back(&1);
    list.push_back(&2);
    list.push_back(&3);

    assert_eq!(keys(&list), vec![1, 2, 3]);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));
    assert_eq!(list.len(), 3);
  }

  #[test]
  fn push_back_existing_key_moves_it() {
    let mut list = KeyList::new();
    list.push_back(&1);
    list.push_back(&2);
    list.push_back(&3);

    list.push_back(&1);
    assert_eq!(keys(&list), vec![2, 3, 1]);
    assert_eq!(list.len(), 3, "Length should not change");
  }

  #[test]
  fn move_to_back_of_tail_is_stable() {
    let mut list = KeyList::new();
    list.push_back(&1);
    list.push_back(&2);

    list.move_to_back(&2);
    assert_eq!(keys(&list), vec![1, 2]);

    list.move_to_back(&99);
    assert_eq!(keys(&list), vec![1, 2], "Unknown keys are ignored");
  }

  #[test]
  fn remove_from_each_position() {
    let mut list = KeyList::new();
    for k in 1..=5 {
      list.push_back(&k);
    }

    assert!(list.remove(&3));
    assert_eq!(keys(&list), vec![1, 2, 4, 5]);

    assert!(list.remove(&1));
    assert_eq!(list.front(), Some(&2));

    assert!(list.remove(&5));
    assert_eq!(list.back(), Some(&4));
    assert_eq!(keys(&list), vec![2, 4]);

    assert!(!list.remove(&5), "Double removal reports absence");
    assert_eq!(list.len(), 2);
  }

  #[test]
  fn reverse_iteration() {
    let mut list = KeyList::new();
    for k in 1..=4 {
      list.push_back(&k);
    }
    let rev: Vec<i32> = list.iter().rev().copied().collect();
    assert_eq!(rev, vec![4, 3, 2, 1]);

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
  }

  #[test]
  fn clear_resets_list() {
    let mut list = KeyList::new();
    list.push_back(&1);
    list.push_back(&2);
    list.clear();

    assert!(list.is_empty());
    assert!(!list.contains(&1));
    assert_eq!(list.front(), None);

    list.push_back(&7);
    assert_eq!(keys(&list), vec![7]);
  }
}
