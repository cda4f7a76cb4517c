//! # Thread intern table
//!
//! Identical structure to [`string_table`](crate::string_table), keyed by a
//! `(process-id, thread-id)` pair instead of string bytes, with capacity
//! 128 and an 8-bit handle.

mod __test__;

use crate::bits::pack_field;
use crate::error::Result;
use crate::record::{header_prefix, RecordType};
use crate::sink::{Sink, SinkAdapter};
use crate::string_table::fnv1a_hash;

/// Number of slots in the thread intern table.
pub(crate) const CAPACITY: usize = 128;

/// Bounded hash-indexed table of interned `(process-id, thread-id)` pairs.
pub(crate) struct ThreadTable {
  slots: Box<[Option<u64>; CAPACITY]>,
  next_index: usize,
}

impl ThreadTable {
  pub(crate) fn new() -> Self {
    Self {
      slots: Box::new([None; CAPACITY]),
      next_index: 0,
    }
  }

  /// Look up or insert `(process_id, thread_id)`, emitting a Thread record
  /// through `sink` on a miss. Returns the 1-based handle (`slot + 1`).
  pub(crate) fn get_or_intern<S: Sink + ?Sized>(
    &mut self,
    sink: &mut S,
    process_id: u64,
    thread_id: u64,
  ) -> Result<u8> {
    let hash = pair_hash(process_id, thread_id);
    let probe_len = self.next_index.min(CAPACITY);
    if let Some(slot) = self.slots[..probe_len].iter().position(|h| *h == Some(hash)) {
      return Ok((slot + 1) as u8);
    }

    let slot = self.next_index % CAPACITY;
    self.slots[slot] = Some(hash);
    self.next_index += 1;

    self.emit_thread_record(sink, slot, process_id, thread_id)?;
    Ok((slot + 1) as u8)
  }

  fn emit_thread_record<S: Sink + ?Sized>(
    &self,
    sink: &mut S,
    slot: usize,
    process_id: u64,
    thread_id: u64,
  ) -> Result<()> {
    let header = header_prefix(RecordType::Thread, 3)? | pack_field((slot + 1) as u64, 16, 23);

    let mut adapter = SinkAdapter::new(sink);
    adapter.emit_word(header)?;
    adapter.emit_word(process_id)?;
    adapter.emit_word(thread_id)?;
    Ok(())
  }
}

fn pair_hash(process_id: u64, thread_id: u64) -> u64 {
  let mut bytes = [0u8; 16];
  bytes[..8].copy_from_slice(&process_id.to_le_bytes());
  bytes[8..].copy_from_slice(&thread_id.to_le_bytes());
  fnv1a_hash(&bytes)
}
