use std::fmt;
use std::io::{self, Write};

use parking_lot::Mutex;

/// A listener that can be registered with the cache to receive notifications
/// when entries are evicted.
///
/// `on_evict` is called synchronously from inside the `put` that caused the
/// eviction, after the entry has left the cache and before `put` returns. It
/// receives ownership of the evicted key and value.
///
/// Any `Fn(K, V)` closure that is `Send + Sync` is a listener.
pub trait EvictionListener<K, V>: Send + Sync {
  fn on_evict(&self, key: K, value: V);
}

impl<K, V, F> EvictionListener<K, V> for F
where
  F: Fn(K, V) + Send + Sync,
{
  fn on_evict(&self, key: K, value: V) {
    self(key, value)
  }
}

/// A listener that writes a `DISCARD: <key>` line for every eviction.
pub struct DiscardPrinter<W> {
  out: Mutex<W>,
}

impl DiscardPrinter<io::Stdout> {
  /// Prints discards to standard output.
  pub fn stdout() -> Self {
    Self::new(io::stdout())
  }
}

impl<W: Write + Send> DiscardPrinter<W> {
  pub fn new(out: W) -> Self {
    Self {
      out: Mutex::new(out),
    }
  }

  /// Consumes the printer, returning the underlying writer.
  pub fn into_inner(self) -> W {
    self.out.into_inner()
  }
}

impl<W> fmt::Debug for DiscardPrinter<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DiscardPrinter").finish_non_exhaustive()
  }
}

impl<K, V, W> EvictionListener<K, V> for DiscardPrinter<W>
where
  K: fmt::Display,
  W: Write + Send,
{
  fn on_evict(&self, key: K, _value: V) {
    let mut out = self.out.lock();
    if let Err(err) = writeln!(out, "DISCARD: {}", key).and_then(|_| out.flush()) {
      tracing::warn!(error = %err, "failed to write discard notice");
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn printer_writes_one_line_per_eviction() {
    let printer = DiscardPrinter::new(Vec::new());
    EvictionListener::<&str, u32>::on_evict(&printer, "k1", 1);
    EvictionListener::<&str, u32>::on_evict(&printer, "k2", 2);

    let written = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(written, "DISCARD: k1\nDISCARD: k2\n");
  }

  #[test]
  fn closures_are_listeners() {
    let seen = Mutex::new(Vec::new());
    let listener = |key: &str, value: u32| seen.lock().push((key.to_string(), value));
    EvictionListener::<&str, u32>::on_evict(&listener, "a", 7);

    assert_eq!(*seen.lock(), vec![("a".to_string(), 7)]);
  }
}
