use policy_cache::{Cache, CacheBuilder, EvictionListener, EvictionPolicy};
use std::collections::BTreeSet;

/// Evicts the key that sorts last, ignoring how keys are used.
#[derive(Debug, Default)]
struct LastKeyPolicy {
  keys: BTreeSet<String>,
}

impl EvictionPolicy<String> for LastKeyPolicy {
  fn name(&self) -> &'static str {
    "last-key"
  }

  fn on_insert(&mut self, key: &String) {
    self.keys.insert(key.clone());
  }

  fn on_access(&mut self, _key: &String) {}

  fn victim(&self, incoming: &String) -> Option<String> {
    self.keys.iter().rev().find(|key| *key != incoming).cloned()
  }

  fn on_remove(&mut self, key: &String) {
    self.keys.remove(key);
  }

  fn len(&self) -> usize {
    self.keys.len()
  }

  fn clear(&mut self) {
    self.keys.clear();
  }
}

// A simple listener that just prints evicted entries.
struct MyListener;

impl EvictionListener<String, String> for MyListener {
  fn on_evict(&self, key: String, value: String) {
    println!("[Listener] Item evicted! Key: {}, Value: '{}'", key, value);
  }
}

fn main() {
  println!("--- Cache with Custom Policy and Eviction Listener ---");

  let mut cache: Cache<String, String, LastKeyPolicy> = CacheBuilder::new()
    .capacity(3)
    .cache_policy(LastKeyPolicy::default())
    .eviction_listener(MyListener)
    .build()
    .expect("Failed to build cache");

  cache.put("apple".to_string(), "red".to_string());
  cache.put("kiwi".to_string(), "green".to_string());
  cache.put("plum".to_string(), "purple".to_string());
  println!("\nInserted apple, kiwi, plum. Cache is full.");

  // "plum" sorts last among the existing keys, so it is evicted
  // before this put returns.
  println!("\nInserting banana. This will trigger an eviction.");
  cache.put("banana".to_string(), "yellow".to_string());

  assert!(cache.get("plum").is_none(), "plum should have been evicted");
  assert!(cache.get("banana").is_some());

  println!("\n{}", cache);
  println!("Cache metrics: {:#?}", cache.metrics());
}
