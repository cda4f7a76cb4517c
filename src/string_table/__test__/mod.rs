#[cfg(test)]
mod __test__ {
  use crate::error::FxtError;
  use crate::string_table::{StringTable, CAPACITY, MAX_LEN};

  #[test]
  fn first_intern_returns_handle_one() {
    let mut table = StringTable::new();
    let mut buf = Vec::new();
    let handle = table.get_or_intern(&mut buf, b"foo").unwrap();
    assert_eq!(handle, 1);
  }

  #[test]
  fn scenario_4_repeated_intern_is_idempotent_and_emits_once() {
    let mut table = StringTable::new();
    let mut buf = Vec::new();
    let first = table.get_or_intern(&mut buf, b"foo").unwrap();
    let second = table.get_or_intern(&mut buf, b"foo").unwrap();
    assert_eq!(first, 1);
    assert_eq!(second, 1);

    // One String record: header word + one payload word ("foo" + 5 zero bytes).
    assert_eq!(buf.len(), 16);
    assert_eq!(&buf[8..11], b"foo");
    assert_eq!(&buf[11..16], &[0, 0, 0, 0, 0]);
  }

  #[test]
  fn distinct_strings_get_distinct_handles() {
    let mut table = StringTable::new();
    let mut buf = Vec::new();
    let a = table.get_or_intern(&mut buf, b"alpha").unwrap();
    let b = table.get_or_intern(&mut buf, b"beta").unwrap();
    assert_ne!(a, b);
  }

  #[test]
  fn wraps_after_capacity_inserts() {
    let mut table = StringTable::new();
    let mut buf = Vec::new();
    for i in 0..CAPACITY {
      let s = format!("s{i}");
      table.get_or_intern(&mut buf, s.as_bytes()).unwrap();
    }
    let handle = table.get_or_intern(&mut buf, b"one-more").unwrap();
    assert_eq!(handle, 1);
  }

  #[test]
  fn rejects_strings_over_max_len() {
    let mut table = StringTable::new();
    let mut buf = Vec::new();
    let bytes = vec![b'a'; MAX_LEN + 1];
    let err = table.get_or_intern(&mut buf, &bytes).unwrap_err();
    assert!(matches!(err, FxtError::StrTooLong { len, max } if len == MAX_LEN + 1 && max == MAX_LEN));
  }

  #[quickcheck_macros::quickcheck]
  fn interning_twice_is_idempotent_and_emits_once(s: String) -> bool {
    if s.len() > MAX_LEN {
      return true;
    }
    let mut table = StringTable::new();
    let mut buf = Vec::new();
    let first = table.get_or_intern(&mut buf, s.as_bytes()).unwrap();
    let len_after_first = buf.len();
    let second = table.get_or_intern(&mut buf, s.as_bytes()).unwrap();
    first == second && buf.len() == len_after_first
  }

  #[quickcheck_macros::quickcheck]
  fn handle_is_never_zero(s: String) -> bool {
    if s.len() > MAX_LEN {
      return true;
    }
    let mut table = StringTable::new();
    let mut buf = Vec::new();
    table.get_or_intern(&mut buf, s.as_bytes()).unwrap() != 0
  }
}
