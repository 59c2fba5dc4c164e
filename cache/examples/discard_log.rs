use policy_cache::{Cache, CacheBuilder, DiscardPrinter, PolicyKind};

// Replays the same put/get sequence against every built-in policy and prints
// each discard as it happens.
fn main() {
  let puts = [
    ("A", "Hello"),
    ("B", "World"),
    ("C", "Holberton"),
    ("D", "School"),
  ];

  for kind in PolicyKind::ALL {
    println!("=== {} ===", kind);
    let mut cache: Cache<&str, &str> = CacheBuilder::new()
      .policy(kind)
      .eviction_listener(DiscardPrinter::stdout())
      .build()
      .expect("Failed to build cache");

    for (key, value) in puts {
      cache.put(key, value);
    }
    cache.get("B");
    cache.get("B");
    cache.put("E", "Battery");
    cache.put("C", "Street");
    cache.put("F", "Mission");
    cache.put("G", "San Francisco");

    print!("{}", cache);
  }
}
