#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use policy_cache::{Cache, CacheBuilder, EvictionListener, PolicyKind};

/// An in-memory writer whose contents can be read while something else owns
/// a clone of it.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
  pub fn contents(&self) -> String {
    String::from_utf8_lossy(&self.0.lock()).into_owned()
  }

  pub fn lines(&self) -> Vec<String> {
    self.contents().lines().map(str::to_owned).collect()
  }
}

impl Write for SharedBuf {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

/// Collects the keys handed to an eviction listener, in order.
#[derive(Clone, Default)]
pub struct Evictions(Arc<Mutex<Vec<String>>>);

impl Evictions {
  pub fn keys(&self) -> Vec<String> {
    self.0.lock().clone()
  }

  pub fn last(&self) -> Option<String> {
    self.0.lock().last().cloned()
  }
}

impl<V> EvictionListener<String, V> for Evictions {
  fn on_evict(&self, key: String, _value: V) {
    self.0.lock().push(key);
  }
}

// Helper to build a cache that records its evictions.
pub fn recording_cache(
  kind: PolicyKind,
  capacity: usize,
) -> (Cache<String, String>, Evictions) {
  let evictions = Evictions::default();
  let cache = CacheBuilder::new()
    .capacity(capacity)
    .policy(kind)
    .eviction_listener(evictions.clone())
    .build()
    .unwrap();
  (cache, evictions)
}

/// Puts `key -> "value of <key>"` for every key, in order.
pub fn put_all(cache: &mut Cache<String, String>, keys: &[&str]) {
  for key in keys {
    cache.put(key.to_string(), format!("value of {}", key));
  }
}
