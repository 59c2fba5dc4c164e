pub mod fifo;
pub mod lfu;
pub mod lifo;
pub mod lru;
pub mod mru;

mod key_list;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::PolicyParseError;

pub use fifo::Fifo;
pub use lfu::Lfu;
pub use lifo::Lifo;
pub use lru::Lru;
pub use mru::Mru;

/// A policy selected at runtime, as produced by [`PolicyKind::build`].
pub type BoxedPolicy<K> = Box<dyn EvictionPolicy<K> + Send>;

/// A trait for the bookkeeping that decides which entry leaves the cache.
///
/// The cache owns exactly one policy and keeps it in lockstep with its store:
/// every key the store holds is tracked by the policy and nothing else is.
/// Implementations never see blank keys.
pub trait EvictionPolicy<K> {
  /// A short, lowercase name used in logs.
  fn name(&self) -> &'static str;

  /// Called after `key` has been stored, whether it is new or replaced an
  /// existing value.
  fn on_insert(&mut self, key: &K);

  /// Called after a successful lookup of `key`.
  fn on_access(&mut self, key: &K);

  /// Chooses the key to evict after `incoming` pushed the cache over capacity.
  ///
  /// `incoming` is always tracked and must never be returned. Returns `None`
  /// only when no other key is tracked.
  fn victim(&self, incoming: &K) -> Option<K>;

  /// Stops tracking `key`. Unknown keys are ignored.
  fn on_remove(&mut self, key: &K);

  /// The number of tracked keys.
  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Forgets every tracked key.
  fn clear(&mut self);
}

impl<K, P> EvictionPolicy<K> for Box<P>
where
  P: EvictionPolicy<K> + ?Sized,
{
  fn name(&self) -> &'static str {
    (**self).name()
  }

  fn on_insert(&mut self, key: &K) {
    (**self).on_insert(key)
  }

  fn on_access(&mut self, key: &K) {
    (**self).on_access(key)
  }

  fn victim(&self, incoming: &K) -> Option<K> {
    (**self).victim(incoming)
  }

  fn on_remove(&mut self, key: &K) {
    (**self).on_remove(key)
  }

  fn len(&self) -> usize {
    (**self).len()
  }

  fn clear(&mut self) {
    (**self).clear()
  }
}

/// The built-in eviction policies, for selecting one at runtime or from
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(rename_all = "lowercase")
)]
pub enum PolicyKind {
  /// First in, first out. Reads do not affect order.
  Fifo,
  /// Last in, first out. Evicts the newest key before the incoming one.
  Lifo,
  /// Least recently used.
  #[default]
  Lru,
  /// Most recently used, excluding the incoming key.
  Mru,
  /// Least frequently used, oldest insertion first among ties.
  Lfu,
}

impl PolicyKind {
  pub const ALL: [PolicyKind; 5] = [
    PolicyKind::Fifo,
    PolicyKind::Lifo,
    PolicyKind::Lru,
    PolicyKind::Mru,
    PolicyKind::Lfu,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      PolicyKind::Fifo => "fifo",
      PolicyKind::Lifo => "lifo",
      PolicyKind::Lru => "lru",
      PolicyKind::Mru => "mru",
      PolicyKind::Lfu => "lfu",
    }
  }

  /// Creates an empty tracker of this kind.
  pub fn build<K>(self) -> BoxedPolicy<K>
  where
    K: Eq + Hash + Clone + Send + 'static,
  {
    match self {
      PolicyKind::Fifo => Box::new(Fifo::new()),
      PolicyKind::Lifo => Box::new(Lifo::new()),
      PolicyKind::Lru => Box::new(Lru::new()),
      PolicyKind::Mru => Box::new(Mru::new()),
      PolicyKind::Lfu => Box::new(Lfu::new()),
    }
  }
}

impl fmt::Display for PolicyKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PolicyKind {
  type Err = PolicyParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    PolicyKind::ALL
      .into_iter()
      .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
      .ok_or_else(|| PolicyParseError {
        input: s.to_string(),
      })
  }
}
