use crate::cache::MAX_ITEMS;
use crate::policy::PolicyKind;

/// Declarative cache settings, typically deserialized from a config file.
///
/// ```yaml
/// capacity: 4
/// policy: lfu
/// ```
///
/// Omitted fields fall back to the defaults: a capacity of [`MAX_ITEMS`] and
/// the LRU policy. Unknown fields are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(default, deny_unknown_fields)
)]
pub struct CacheConfig {
  pub capacity: usize,
  pub policy: PolicyKind,
}

impl Default for CacheConfig {
  fn default() -> Self {
    Self {
      capacity: MAX_ITEMS,
      policy: PolicyKind::default(),
    }
  }
}
