use policy_cache::{CacheBuilder, PolicyKind, SyncCache};
use std::thread;

fn main() {
  // A shared cache of 100 items, evicting the least recently used.
  let cache: SyncCache<String, u32> = CacheBuilder::new()
    .capacity(100)
    .policy(PolicyKind::Lru)
    .build_sync()
    .expect("Failed to build cache");

  println!("Inserting ('key1', 100) into the cache.");
  cache.put("key1".to_string(), 100);

  match cache.fetch("key1") {
    Some(value) => println!("Found value for key1: {}", value),
    None => println!("Value for key1 not found."),
  }

  // Four writers, 50 keys each: half of the 200 keys are evicted.
  let handles: Vec<_> = (0..4)
    .map(|t| {
      let cache = cache.clone();
      thread::spawn(move || {
        for i in 0..50 {
          cache.put(format!("t{}-{}", t, i), i + 1);
        }
      })
    })
    .collect();
  for handle in handles {
    handle.join().expect("writer panicked");
  }

  println!("Size after concurrent writes: {}", cache.size());
  println!("\nCache metrics: {:#?}", cache.metrics());
}
