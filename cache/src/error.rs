use std::fmt;

/// Errors that can occur when building a cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
  /// The cache was configured with a capacity of zero, which is not allowed
  /// for a bounded cache. Use `unbounded()` for a cache that never evicts.
  ZeroCapacity,
  /// The supplied eviction policy already tracks keys. The store and the
  /// policy must start out in agreement, so a fresh policy is required.
  PolicyNotEmpty { tracked: usize },
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BuildError::ZeroCapacity => write!(f, "bounded cache capacity cannot be zero"),
      BuildError::PolicyNotEmpty { tracked } => write!(
        f,
        "eviction policy must be empty at build time, but it tracks {} keys",
        tracked
      ),
    }
  }
}

impl std::error::Error for BuildError {}

/// Returned when a policy name does not match any built-in policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyParseError {
  pub input: String,
}

impl fmt::Display for PolicyParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "unknown eviction policy '{}', expected one of: fifo, lifo, lru, mru, lfu",
      self.input
    )
  }
}

impl std::error::Error for PolicyParseError {}
