use crate::blank::Blank;
use crate::listener::EvictionListener;
use crate::metrics::{Metrics, MetricsSnapshot};
use crate::policy::{BoxedPolicy, EvictionPolicy};
use crate::store::Store;

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// The default number of entries a cache holds before it starts evicting.
pub const MAX_ITEMS: usize = 4;

/// A bounded, single-owner cache.
///
/// Every `put` and `get` completes its bookkeeping before returning: after
/// any call, the number of stored entries never exceeds [`capacity`] and the
/// eviction policy tracks exactly the stored keys.
///
/// Wrap the cache in a [`SyncCache`](crate::SyncCache) to share it between
/// threads.
///
/// [`capacity`]: Cache::capacity
pub struct Cache<K, V, P = BoxedPolicy<K>> {
  store: Store<K, V>,
  policy: P,
  capacity: usize,
  listener: Option<Box<dyn EvictionListener<K, V>>>,
  pub(crate) metrics: Arc<Metrics>,
}

impl<K, V, P> fmt::Debug for Cache<K, V, P>
where
  K: Eq + Hash,
  P: EvictionPolicy<K>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Cache")
      .field("capacity", &self.capacity)
      .field("size", &self.store.len())
      .field("policy", &self.policy.name())
      .field("has_listener", &self.listener.is_some())
      .finish_non_exhaustive()
  }
}

impl<K, V, P> Cache<K, V, P>
where
  K: Blank + Eq + Hash + Clone + fmt::Display,
  V: Blank,
  P: EvictionPolicy<K>,
{
  /// Creates a cache holding at most [`MAX_ITEMS`] entries.
  ///
  /// Any keys `policy` already tracks are forgotten. Use
  /// [`CacheBuilder`](crate::CacheBuilder) for any other capacity or to
  /// register an eviction listener.
  pub fn new(mut policy: P) -> Self {
    policy.clear();
    Self::from_parts(MAX_ITEMS, policy, None)
  }

  pub(crate) fn from_parts(
    capacity: usize,
    policy: P,
    listener: Option<Box<dyn EvictionListener<K, V>>>,
  ) -> Self {
    Self {
      store: Store::with_capacity(capacity),
      policy,
      capacity,
      listener,
      metrics: Arc::new(Metrics::new()),
    }
  }

  /// Inserts or replaces the value for `key`.
  ///
  /// A blank key or value is ignored. If the insertion pushes the cache over
  /// capacity, exactly one entry (chosen by the policy, and never `key`
  /// itself) is evicted before this returns, and the eviction listener is
  /// notified.
  pub fn put(&mut self, key: K, value: V) {
    if key.is_blank() || value.is_blank() {
      Metrics::incr(&self.metrics.rejected);
      tracing::trace!("ignoring put with a blank key or value");
      return;
    }

    let replaced = self.store.insert(key.clone(), value).is_some();
    self.policy.on_insert(&key);

    if replaced {
      Metrics::incr(&self.metrics.updates);
    } else {
      Metrics::incr(&self.metrics.inserts);
      if self.store.len() > self.capacity {
        self.evict_for(&key);
      }
    }

    debug_assert_eq!(self.store.len(), self.policy.len());
  }

  // Removes the policy's victim after `incoming` overflowed the store.
  // Victims the store does not hold are dropped from the policy and skipped.
  fn evict_for(&mut self, incoming: &K) {
    let mut stale_budget = self.policy.len();
    while self.store.len() > self.capacity {
      let Some(victim) = self.policy.victim(incoming) else {
        tracing::warn!(
          policy = self.policy.name(),
          size = self.store.len(),
          capacity = self.capacity,
          "eviction policy yielded no victim"
        );
        return;
      };

      self.policy.on_remove(&victim);
      let Some((key, value)) = self.store.remove_entry(&victim) else {
        tracing::warn!(policy = self.policy.name(), "skipping victim that was not in the store");
        if stale_budget == 0 {
          return;
        }
        stale_budget -= 1;
        continue;
      };
      Metrics::incr(&self.metrics.evictions);

      tracing::info!(target: "policy_cache::discard", policy = self.policy.name(), "DISCARD: {}", key);
      if let Some(listener) = &self.listener {
        listener.on_evict(key, value);
      }
    }
  }
}

impl<K, V, P> Cache<K, V, P>
where
  K: Eq + Hash,
  P: EvictionPolicy<K>,
{
  /// Looks up `key`, recording the access with the eviction policy.
  ///
  /// Returns `None` for a missing or blank key.
  pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    match self.store.get_key_value(key) {
      Some((stored_key, value)) => {
        self.policy.on_access(stored_key);
        Metrics::incr(&self.metrics.hits);
        Some(value)
      }
      None => {
        Metrics::incr(&self.metrics.misses);
        tracing::trace!(policy = self.policy.name(), "cache miss");
        None
      }
    }
  }

  /// Removes every entry without notifying the eviction listener.
  pub fn clear(&mut self) {
    self.store.clear();
    self.policy.clear();
  }

  /// "Peeks" at a value without updating the eviction policy or metrics.
  pub fn peek<Q>(&self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.store.get(key)
  }

  pub fn contains_key<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.store.contains_key(key)
  }

  /// The number of entries currently stored.
  pub fn size(&self) -> usize {
    self.store.len()
  }

  pub fn is_empty(&self) -> bool {
    self.store.len() == 0
  }

  /// The maximum number of entries held after any operation completes.
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// An iterator over the stored entries, in no particular order.
  pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
    self.store.iter()
  }

  pub fn policy(&self) -> &P {
    &self.policy
  }

  pub fn policy_name(&self) -> &'static str {
    self.policy.name()
  }

  pub fn metrics(&self) -> MetricsSnapshot {
    self.metrics.snapshot()
  }
}

/// Renders the contents sorted by key, one `key: value` line per entry.
impl<K, V, P> fmt::Display for Cache<K, V, P>
where
  K: Eq + Hash + Ord + fmt::Display,
  V: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut entries: Vec<_> = self.store.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    writeln!(f, "Current cache:")?;
    for (key, value) in entries {
      writeln!(f, "{}: {}", key, value)?;
    }
    Ok(())
  }
}
