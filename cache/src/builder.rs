use crate::blank::Blank;
use crate::cache::{Cache, MAX_ITEMS};
use crate::config::CacheConfig;
use crate::error::BuildError;
use crate::listener::EvictionListener;
use crate::policy::{BoxedPolicy, EvictionPolicy, PolicyKind};
use crate::sync::SyncCache;

use core::fmt;
use std::hash::Hash;

/// A builder for creating `Cache` and `SyncCache` instances.
///
/// The default builder selects its policy at runtime through
/// [`policy`](CacheBuilder::policy). Calling
/// [`cache_policy`](CacheBuilder::cache_policy) swaps in a concrete policy
/// type instead, which the resulting cache then carries as a type parameter.
pub struct CacheBuilder<K, V, P = BoxedPolicy<K>> {
  capacity: usize,
  policy: P,
  listener: Option<Box<dyn EvictionListener<K, V>>>,
}

// Manual Debug implementation for CacheBuilder.
impl<K, V, P> fmt::Debug for CacheBuilder<K, V, P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CacheBuilder")
      .field("capacity", &self.capacity)
      .field("has_listener", &self.listener.is_some())
      .finish_non_exhaustive()
  }
}

// --- Default Constructor ---
impl<K, V> CacheBuilder<K, V>
where
  K: Eq + Hash + Clone + Send + 'static,
{
  /// Creates a new `CacheBuilder` with a capacity of [`MAX_ITEMS`] and the
  /// LRU policy.
  pub fn new() -> Self {
    Self {
      capacity: MAX_ITEMS,
      policy: PolicyKind::default().build(),
      listener: None,
    }
  }

  /// Creates a builder from deserialized configuration.
  pub fn from_config(config: &CacheConfig) -> Self {
    Self::new().capacity(config.capacity).policy(config.policy)
  }

  /// Selects one of the built-in eviction policies.
  pub fn policy(mut self, kind: PolicyKind) -> Self {
    self.policy = kind.build();
    self
  }
}

impl<K, V> Default for CacheBuilder<K, V>
where
  K: Eq + Hash + Clone + Send + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

// --- General Configuration Methods ---
impl<K, V, P> CacheBuilder<K, V, P> {
  /// Sets the maximum number of entries.
  pub fn capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }

  /// Sets the cache to be "unbounded". It will never evict.
  pub fn unbounded(mut self) -> Self {
    self.capacity = usize::MAX;
    self
  }

  /// Sets the eviction listener for the cache.
  pub fn eviction_listener<Listener>(mut self, listener: Listener) -> Self
  where
    Listener: EvictionListener<K, V> + 'static,
  {
    self.listener = Some(Box::new(listener));
    self
  }

  /// Sets a concrete eviction policy for the cache.
  ///
  /// The policy must not be tracking any keys yet.
  pub fn cache_policy<Policy>(self, policy: Policy) -> CacheBuilder<K, V, Policy>
  where
    Policy: EvictionPolicy<K>,
  {
    CacheBuilder {
      capacity: self.capacity,
      policy,
      listener: self.listener,
    }
  }
}

// --- Build Methods ---
impl<K, V, P> CacheBuilder<K, V, P>
where
  K: Blank + Eq + Hash + Clone + fmt::Display,
  V: Blank,
  P: EvictionPolicy<K>,
{
  /// Builds a single-owner `Cache`.
  pub fn build(self) -> Result<Cache<K, V, P>, BuildError> {
    self.validate()?;
    tracing::debug!(
      policy = self.policy.name(),
      capacity = self.capacity,
      "building cache"
    );
    Ok(Cache::from_parts(self.capacity, self.policy, self.listener))
  }

  /// Builds a thread-safe `SyncCache`.
  pub fn build_sync(self) -> Result<SyncCache<K, V, P>, BuildError> {
    self.build().map(SyncCache::from)
  }

  /// Validates the builder configuration.
  pub(crate) fn validate(&self) -> Result<(), BuildError> {
    if self.capacity == 0 {
      return Err(BuildError::ZeroCapacity);
    }
    if !self.policy.is_empty() {
      return Err(BuildError::PolicyNotEmpty {
        tracked: self.policy.len(),
      });
    }
    Ok(())
  }
}
