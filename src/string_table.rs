//! # String intern table
//!
//! A fixed-capacity, content-hash-keyed table mapping string bytes to a
//! small 15-bit handle. Only the hash is retained, not the bytes, so the
//! table's footprint is `capacity * 8` bytes regardless of how much string
//! data flows through it over the writer's lifetime.
//!
//! Takes the round-robin local cache and FNV-style content hash of
//! `ttlog`'s `StringInterner` and reshapes it from an unbounded `Vec` +
//! `HashMap` into the fixed-capacity wraparound table this format requires:
//! capacity 512, slot `nextIndex mod 512`, oldest binding silently replaced
//! on wraparound.

mod __test__;

use crate::bits::pack_field;
use crate::error::{FxtError, Result};
use crate::record::{header_prefix, RecordType};
use crate::sink::{padding_for, words_for, Sink, SinkAdapter};

/// Number of slots in the string intern table.
pub(crate) const CAPACITY: usize = 512;

/// Format limit on an interned string's byte length (one less than the
/// inline-argument limit; bit 15 of the 15-bit length field is reserved
/// by the table's own bookkeeping).
pub(crate) const MAX_LEN: usize = 0x7FFE;

/// FNV-1a, 64-bit, over an arbitrary byte slice. The algorithm is not part
/// of the wire format (any stable, fast hash works), but FNV-1a matches
/// the flavor of content hash already in use elsewhere in this lineage.
pub(crate) fn fnv1a_hash(bytes: &[u8]) -> u64 {
  const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
  const PRIME: u64 = 0x100000001b3;
  let mut hash = OFFSET_BASIS;
  for &byte in bytes {
    hash ^= byte as u64;
    hash = hash.wrapping_mul(PRIME);
  }
  hash
}

/// Bounded hash-indexed table of interned strings.
pub(crate) struct StringTable {
  slots: Box<[Option<u64>; CAPACITY]>,
  next_index: usize,
}

impl StringTable {
  pub(crate) fn new() -> Self {
    Self {
      slots: Box::new([None; CAPACITY]),
      next_index: 0,
    }
  }

  /// Look up or insert `bytes`, emitting a String record through `sink` on
  /// a miss. Returns the 1-based handle (`slot + 1`).
  pub(crate) fn get_or_intern<S: Sink + ?Sized>(
    &mut self,
    sink: &mut S,
    bytes: &[u8],
  ) -> Result<u16> {
    if bytes.len() > MAX_LEN {
      return Err(FxtError::StrTooLong {
        len: bytes.len(),
        max: MAX_LEN,
      });
    }

    let hash = fnv1a_hash(bytes);
    let probe_len = self.next_index.min(CAPACITY);
    if let Some(slot) = self.slots[..probe_len].iter().position(|h| *h == Some(hash)) {
      return Ok((slot + 1) as u16);
    }

    let slot = self.next_index % CAPACITY;
    self.slots[slot] = Some(hash);
    self.next_index += 1;

    self.emit_string_record(sink, slot, bytes)?;
    Ok((slot + 1) as u16)
  }

  fn emit_string_record<S: Sink + ?Sized>(
    &self,
    sink: &mut S,
    slot: usize,
    bytes: &[u8],
  ) -> Result<()> {
    let size_in_words = 1 + words_for(bytes.len());
    let header = header_prefix(RecordType::String, size_in_words)?
      | pack_field((slot + 1) as u64, 16, 30)
      | pack_field(bytes.len() as u64, 32, 46);

    let mut adapter = SinkAdapter::new(sink);
    adapter.emit_word(header)?;
    adapter.emit_bytes(bytes)?;
    adapter.emit_zeros(padding_for(bytes.len()))?;
    Ok(())
  }
}
