#[cfg(test)]
mod __test__ {
  use crate::sink::{padding_for, words_for, SinkAdapter};

  #[test]
  fn padding_rounds_up_to_eight() {
    assert_eq!(padding_for(0), 0);
    assert_eq!(padding_for(1), 7);
    assert_eq!(padding_for(7), 1);
    assert_eq!(padding_for(8), 0);
    assert_eq!(padding_for(9), 7);
  }

  #[test]
  fn words_for_rounds_up() {
    assert_eq!(words_for(0), 0);
    assert_eq!(words_for(1), 1);
    assert_eq!(words_for(8), 1);
    assert_eq!(words_for(9), 2);
  }

  #[test]
  fn emit_word_is_little_endian() {
    let mut buf = Vec::new();
    SinkAdapter::new(&mut buf).emit_word(0x0102030405060708).unwrap();
    assert_eq!(buf, vec![0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
  }

  #[test]
  fn emit_padded_zero_pads_to_eight_bytes() {
    let mut buf = Vec::new();
    SinkAdapter::new(&mut buf).emit_padded(b"foo").unwrap();
    assert_eq!(buf, vec![b'f', b'o', b'o', 0, 0, 0, 0, 0]);
  }

  #[quickcheck_macros::quickcheck]
  fn padding_always_completes_a_word(len: usize) -> bool {
    let len = len % 4096;
    (len + padding_for(len)) % 8 == 0
  }
}
