#[cfg(test)]
mod __test__ {
  use crate::argument::{Argument, ArgumentName, ArgumentValue};
  use crate::event::EventKind;
  use crate::writer::Writer;

  #[test]
  fn fresh_writer_produces_no_output() {
    let writer = Writer::new(Vec::new());
    assert!(writer.into_inner().is_empty());
  }

  #[test]
  fn scenario_1_magic_only() {
    let mut writer = Writer::new(Vec::new());
    writer.write_magic().unwrap();
    assert_eq!(
      writer.into_inner(),
      vec![0x10, 0x00, 0x04, 0x46, 0x78, 0x54, 0x16, 0x00]
    );
  }

  #[test]
  fn scenario_4_repeated_string_intern_returns_same_handle() {
    let mut writer = Writer::new(Vec::new());
    let first = writer.get_or_intern_string(b"foo").unwrap();
    let second = writer.get_or_intern_string(b"foo").unwrap();
    assert_eq!(first, 1);
    assert_eq!(second, 1);
  }

  #[test]
  fn repeated_thread_intern_returns_same_handle() {
    let mut writer = Writer::new(Vec::new());
    let first = writer.get_or_intern_thread(10, 20).unwrap();
    let second = writer.get_or_intern_thread(10, 20).unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn full_stream_round_trip_is_well_formed() {
    let mut writer = Writer::new(Vec::new());
    writer.write_magic().unwrap();
    writer.add_provider_info(1, "test-provider").unwrap();
    writer.add_initialization(1_000_000_000).unwrap();
    writer.set_process_name(1, "my-process").unwrap();
    writer.set_thread_name(1, 2, "my-thread").unwrap();

    let args = [Argument::new(
      ArgumentName::Interned("k".to_string()),
      ArgumentValue::Int32(42),
    )];
    writer
      .add_event(EventKind::Instant, "cat", "name", 1, 2, 100, &args)
      .unwrap();

    let bytes = writer.into_inner();
    assert!(!bytes.is_empty());
    assert_eq!(bytes.len() % 8, 0);
    assert_eq!(&bytes[0..8], &[0x10, 0x00, 0x04, 0x46, 0x78, 0x54, 0x16, 0x00]);
  }
}
