mod common;

use common::{put_all, recording_cache, SharedBuf};
use policy_cache::PolicyKind;
use tracing::Level;

// Runs `f` with a subscriber that writes plain-text INFO events into a buffer.
fn capture_info<F: FnOnce()>(f: F) -> SharedBuf {
  let buf = SharedBuf::default();
  let writer = buf.clone();
  let subscriber = tracing_subscriber::fmt()
    .with_writer(move || writer.clone())
    .with_ansi(false)
    .with_max_level(Level::INFO)
    .finish();
  tracing::subscriber::with_default(subscriber, f);
  buf
}

#[test]
fn test_each_eviction_logs_a_discard_line() {
  let logs = capture_info(|| {
    let (mut cache, _) = recording_cache(PolicyKind::Lru, 2);
    put_all(&mut cache, &["A", "B", "C", "D"]);
  });

  let discards: Vec<String> = logs
    .lines()
    .into_iter()
    .filter(|line| line.contains("DISCARD:"))
    .collect();
  assert_eq!(discards.len(), 2);
  assert!(discards[0].contains("DISCARD: A"));
  assert!(discards[0].contains("policy_cache::discard"));
  assert!(discards[0].contains("policy=\"lru\""));
  assert!(discards[1].contains("DISCARD: B"));
}

#[test]
fn test_ignored_puts_are_not_logged_at_info() {
  let logs = capture_info(|| {
    let (mut cache, _) = recording_cache(PolicyKind::Fifo, 1);
    cache.put(String::new(), "x".to_string());
    cache.put("k".to_string(), String::new());
  });

  assert!(logs.contents().is_empty());
}
