use crate::blank::Blank;
use crate::cache::Cache;
use crate::metrics::{Metrics, MetricsSnapshot};
use crate::policy::{BoxedPolicy, EvictionPolicy};

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

/// A thread-safe handle to a [`Cache`].
///
/// The whole cache sits behind a single lock, so the store update, the policy
/// update and any resulting eviction of one `put` are observed atomically by
/// every other handle. Cloning the handle is cheap and shares the same cache.
///
/// Eviction listeners run while the lock is held and must not call back into
/// the same cache.
pub struct SyncCache<K, V, P = BoxedPolicy<K>> {
  inner: Arc<Mutex<Cache<K, V, P>>>,
  // Shared with the inner cache, so reads need no lock.
  metrics: Arc<Metrics>,
}

impl<K, V, P> Clone for SyncCache<K, V, P> {
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
      metrics: Arc::clone(&self.metrics),
    }
  }
}

impl<K, V, P> fmt::Debug for SyncCache<K, V, P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SyncCache")
      .field("metrics", &self.metrics.snapshot())
      .finish_non_exhaustive()
  }
}

impl<K, V, P> From<Cache<K, V, P>> for SyncCache<K, V, P> {
  fn from(cache: Cache<K, V, P>) -> Self {
    let metrics = Arc::clone(&cache.metrics);
    Self {
      inner: Arc::new(Mutex::new(cache)),
      metrics,
    }
  }
}

impl<K, V, P> SyncCache<K, V, P>
where
  K: Blank + Eq + Hash + Clone + fmt::Display,
  V: Blank,
  P: EvictionPolicy<K>,
{
  /// Inserts or replaces the value for `key`. See [`Cache::put`].
  pub fn put(&self, key: K, value: V) {
    self.inner.lock().put(key, value);
  }
}

impl<K, V, P> SyncCache<K, V, P>
where
  K: Eq + Hash,
  P: EvictionPolicy<K>,
{
  /// Looks up an entry and, if found, applies a closure to the value.
  ///
  /// The closure runs while the cache lock is held, so it should be fast.
  pub fn get<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    F: FnOnce(&V) -> R,
  {
    self.inner.lock().get(key).map(f)
  }

  /// Fetches a clone of the value for `key`, recording the access.
  pub fn fetch<Q>(&self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    V: Clone,
  {
    self.inner.lock().get(key).cloned()
  }

  /// Removes every entry without notifying the eviction listener.
  pub fn clear(&self) {
    self.inner.lock().clear();
  }

  /// Fetches a clone of the value without touching the eviction policy.
  pub fn peek<Q>(&self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    V: Clone,
  {
    self.inner.lock().peek(key).cloned()
  }

  pub fn contains_key<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.inner.lock().contains_key(key)
  }

  pub fn size(&self) -> usize {
    self.inner.lock().size()
  }

  pub fn capacity(&self) -> usize {
    self.inner.lock().capacity()
  }

  pub fn metrics(&self) -> MetricsSnapshot {
    self.metrics.snapshot()
  }

  /// Locks the cache for a sequence of operations that must not interleave
  /// with other handles.
  pub fn lock(&self) -> MutexGuard<'_, Cache<K, V, P>> {
    self.inner.lock()
  }
}
