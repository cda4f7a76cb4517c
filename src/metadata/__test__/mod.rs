#[cfg(test)]
mod __test__ {
  use crate::metadata::{add_initialization, add_provider_event, add_provider_section, write_magic};

  #[test]
  fn scenario_1_magic_only() {
    let mut buf = Vec::new();
    write_magic(&mut buf).unwrap();
    assert_eq!(buf, vec![0x10, 0x00, 0x04, 0x46, 0x78, 0x54, 0x16, 0x00]);
  }

  #[test]
  fn scenario_2_provider_section() {
    let mut buf = Vec::new();
    add_provider_section(&mut buf, 0x1F633).unwrap();
    let expected = (0x1F633u64 << 20) | (2 << 16) | (1 << 4);
    assert_eq!(buf, expected.to_le_bytes());
  }

  #[test]
  fn scenario_3_initialization() {
    let mut buf = Vec::new();
    add_initialization(&mut buf, 1000).unwrap();
    assert_eq!(buf.len(), 16);
    assert_eq!(&buf[0..8], &0x21u64.to_le_bytes());
    assert_eq!(&buf[8..16], &1000u64.to_le_bytes());
  }

  #[test]
  fn provider_event_sets_metadata_type_three() {
    let mut buf = Vec::new();
    add_provider_event(&mut buf, 7, 2).unwrap();
    let word = u64::from_le_bytes(buf.try_into().unwrap());
    assert_eq!((word >> 16) & 0xF, 3);
    assert_eq!((word >> 52) & 0xF, 2);
  }
}
