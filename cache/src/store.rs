use std::borrow::Borrow;
use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;

// Anything above this is left to grow on demand.
const MAX_PREALLOCATED: usize = 1024;

/// The authoritative key -> value mapping owned by a single cache.
#[derive(Debug)]
pub(crate) struct Store<K, V> {
  map: HashMap<K, V, ahash::RandomState>,
}

impl<K: Eq + Hash, V> Store<K, V> {
  /// Creates a store sized for `capacity` entries plus the transient overflow
  /// entry that exists between an insert and its eviction.
  pub(crate) fn with_capacity(capacity: usize) -> Self {
    let prealloc = if capacity < MAX_PREALLOCATED {
      capacity + 1
    } else {
      0
    };
    Self {
      map: HashMap::with_capacity_and_hasher(prealloc, ahash::RandomState::new()),
    }
  }

  /// Inserts or replaces a value, returning the previous one.
  #[inline]
  pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
    self.map.insert(key, value)
  }

  #[inline]
  pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.map.get(key)
  }

  #[inline]
  pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.map.get_key_value(key)
  }

  #[inline]
  pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.map.contains_key(key)
  }

  #[inline]
  pub(crate) fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
    self.map.remove_entry(key)
  }

  #[inline]
  pub(crate) fn len(&self) -> usize {
    self.map.len()
  }

  pub(crate) fn iter(&self) -> hash_map::Iter<'_, K, V> {
    self.map.iter()
  }

  pub(crate) fn clear(&mut self) {
    self.map.clear();
  }
}
