//! # Shared record-header helpers
//!
//! Every record in the format begins with a header word whose low 4 bits
//! are a type tag and whose next 12 bits are the record's total size in
//! 64-bit words (the header word itself included). This module owns that
//! shared layout; everything else about a given record kind (the
//! remaining header bits, fixed fields, and payload) lives in the module
//! for that kind.


use crate::bits::pack_field;
use crate::error::{FxtError, Result};

/// The 4-bit record-type tag occupying header bits `[0..3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecordType {
  Metadata = 0,
  Initialization = 1,
  String = 2,
  Thread = 3,
  Event = 4,
  Blob = 5,
  UserspaceObject = 6,
  KernelObject = 7,
  Scheduling = 8,
}

/// Largest value the 12-bit `sizeInWords` header field can hold.
pub(crate) const MAX_SIZE_IN_WORDS: usize = 0xFFF;

/// Pack the common `type[0..3] | sizeInWords[4..15]` prefix of a record
/// header. Every record-kind module ORs its own fields on top of this.
///
/// Fails with [`FxtError::RecordSizeTooLarge`] if `size_in_words` does not
/// fit the 12-bit field.
pub(crate) fn header_prefix(record_type: RecordType, size_in_words: usize) -> Result<u64> {
  if size_in_words > MAX_SIZE_IN_WORDS {
    return Err(FxtError::RecordSizeTooLarge(size_in_words));
  }
  Ok(pack_field(record_type as u64, 0, 3) | pack_field(size_in_words as u64, 4, 15))
}
