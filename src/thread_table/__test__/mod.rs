#[cfg(test)]
mod __test__ {
  use crate::thread_table::{ThreadTable, CAPACITY};

  #[test]
  fn first_intern_returns_handle_one() {
    let mut table = ThreadTable::new();
    let mut buf = Vec::new();
    let handle = table.get_or_intern(&mut buf, 10, 20).unwrap();
    assert_eq!(handle, 1);
  }

  #[test]
  fn repeated_pair_is_idempotent() {
    let mut table = ThreadTable::new();
    let mut buf = Vec::new();
    let first = table.get_or_intern(&mut buf, 10, 20).unwrap();
    let second = table.get_or_intern(&mut buf, 10, 20).unwrap();
    assert_eq!(first, second);
    // One Thread record: header + process-id word + thread-id word.
    assert_eq!(buf.len(), 24);
  }

  #[test]
  fn wraps_after_capacity_inserts() {
    let mut table = ThreadTable::new();
    let mut buf = Vec::new();
    for i in 0..CAPACITY as u64 {
      table.get_or_intern(&mut buf, i, i + 1).unwrap();
    }
    let handle = table.get_or_intern(&mut buf, 9999, 9999).unwrap();
    assert_eq!(handle, 1);
  }
}
