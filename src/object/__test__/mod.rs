#[cfg(test)]
mod __test__ {
  use crate::error::FxtError;
  use crate::object::{add_blob, add_userspace_object, set_process_name, set_thread_name, MAX_BLOB_LEN};
  use crate::string_table::StringTable;
  use crate::thread_table::ThreadTable;

  #[test]
  fn blob_at_max_len_is_accepted() {
    let mut strings = StringTable::new();
    let mut buf = Vec::new();
    let bytes = vec![0xAB; MAX_BLOB_LEN];
    assert!(add_blob(&mut buf, &mut strings, "heap-dump", 1, &bytes).is_ok());
  }

  #[test]
  fn blob_over_max_len_is_rejected() {
    let mut strings = StringTable::new();
    let mut buf = Vec::new();
    let bytes = vec![0xAB; MAX_BLOB_LEN + 1];
    let err = add_blob(&mut buf, &mut strings, "heap-dump", 1, &bytes).unwrap_err();
    assert!(matches!(err, FxtError::DataTooLong { len, max } if len == MAX_BLOB_LEN + 1 && max == MAX_BLOB_LEN));
  }

  #[test]
  fn userspace_object_emits_pointer_word() {
    let mut strings = StringTable::new();
    let mut threads = ThreadTable::new();
    let mut buf = Vec::new();
    add_userspace_object(&mut buf, &mut strings, &mut threads, 1, 2, "lock", 0xDEAD_BEEF, &[]).unwrap();
    assert!(buf.len() >= 16);
  }

  #[test]
  fn set_process_name_has_no_arguments() {
    let mut strings = StringTable::new();
    let mut buf = Vec::new();
    set_process_name(&mut buf, &mut strings, 55, "init").unwrap();
    // One String record (16 bytes) + one kernel-object record (2 words = 16 bytes).
    assert_eq!(buf.len(), 16 + 16);
  }

  #[test]
  fn set_thread_name_carries_process_koid_argument() {
    let mut strings = StringTable::new();
    let mut buf = Vec::new();
    set_thread_name(&mut buf, &mut strings, 55, 99, "worker").unwrap();
    // Strings: "worker" + "process" (2 records, 16 bytes each) + kernel-object
    // record (2 words header/object-id + 2 words KOID argument) = 32 bytes.
    assert_eq!(buf.len(), 16 + 16 + 32);
  }
}
