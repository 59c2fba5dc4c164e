//! A bounded in-memory key-value cache with interchangeable eviction policies.
//!
//! # Features
//! - **Five Policies**: FIFO, LIFO, LRU, MRU and LFU (oldest insertion wins
//!   ties), all behind the single [`EvictionPolicy`] trait.
//! - **Synchronous Capacity Enforcement**: a `put` that overflows the cache
//!   evicts exactly one entry before it returns.
//! - **Eviction Listeners**: callbacks run in-line with the triggering `put`;
//!   every discard is also logged as `DISCARD: <key>` through `tracing`.
//! - **Blank Input Guard**: puts with an empty key or an empty/absent value
//!   are silently ignored.
//! - **Shared Handle**: [`SyncCache`] puts the whole cache behind one lock.
//! - **Configuration**: optional `serde` feature for [`CacheConfig`].
//!
//! ```
//! use policy_cache::{CacheBuilder, PolicyKind};
//!
//! let mut cache = CacheBuilder::new()
//!   .capacity(2)
//!   .policy(PolicyKind::Lru)
//!   .build()
//!   .unwrap();
//!
//! cache.put("A", "Hello");
//! cache.put("B", "World");
//! cache.get("A");
//! cache.put("C", "Holberton");
//!
//! assert!(cache.contains_key("A"));
//! assert!(!cache.contains_key("B"));
//! ```

// Public modules that form the API
pub mod blank;
pub mod builder;
pub mod config;
pub mod error;
pub mod listener;
pub mod metrics;
pub mod policy;

// Internal, crate-only modules
mod cache;
mod store;
mod sync;

// Re-export the primary user-facing types for convenience
pub use blank::Blank;
pub use builder::CacheBuilder;
pub use cache::{Cache, MAX_ITEMS};
pub use config::CacheConfig;
pub use error::{BuildError, PolicyParseError};
pub use listener::{DiscardPrinter, EvictionListener};
pub use metrics::MetricsSnapshot;
pub use policy::{BoxedPolicy, EvictionPolicy, PolicyKind};
pub use sync::SyncCache;
