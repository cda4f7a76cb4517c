//! # Metadata and initialization records
//!
//! The handful of stream-framing record kinds: the fixed magic-number
//! word that opens a well-formed stream, the three provider-declaration
//! metadata records, and the initialization record that declares the tick
//! rate subsequent timestamps are expressed in.

mod __test__;

use crate::bits::pack_field;
use crate::error::{FxtError, Result};
use crate::record::{header_prefix, RecordType};
use crate::sink::{padding_for, words_for, Sink, SinkAdapter};

/// The literal 8-byte word that identifies a stream as FXT. Encodes the
/// magic value `0x16547846` inside a metadata/trace-info header.
pub(crate) const MAGIC_NUMBER_RECORD: u64 = 0x0016547846040010;

/// Format limit on a provider name's byte length (8-bit `NameLength` field
/// minus one, per the format's own "< 256" wording).
pub(crate) const MAX_PROVIDER_NAME_LEN: usize = 255;

pub(crate) fn write_magic<S: Sink + ?Sized>(sink: &mut S) -> Result<()> {
  SinkAdapter::new(sink).emit_word(MAGIC_NUMBER_RECORD)?;
  Ok(())
}

pub(crate) fn add_provider_info<S: Sink + ?Sized>(
  sink: &mut S,
  provider_id: u64,
  name: &[u8],
) -> Result<()> {
  if name.len() > MAX_PROVIDER_NAME_LEN {
    return Err(FxtError::StrTooLong {
      len: name.len(),
      max: MAX_PROVIDER_NAME_LEN,
    });
  }
  let size_in_words = 1 + words_for(name.len());
  let header = header_prefix(RecordType::Metadata, size_in_words)?
    | pack_field(1, 16, 19)
    | pack_field(provider_id, 20, 51)
    | pack_field(name.len() as u64, 52, 59);

  let mut adapter = SinkAdapter::new(sink);
  adapter.emit_word(header)?;
  adapter.emit_bytes(name)?;
  adapter.emit_zeros(padding_for(name.len()))?;
  Ok(())
}

pub(crate) fn add_provider_section<S: Sink + ?Sized>(sink: &mut S, provider_id: u64) -> Result<()> {
  let header =
    header_prefix(RecordType::Metadata, 1)? | pack_field(2, 16, 19) | pack_field(provider_id, 20, 51);
  SinkAdapter::new(sink).emit_word(header)?;
  Ok(())
}

pub(crate) fn add_provider_event<S: Sink + ?Sized>(
  sink: &mut S,
  provider_id: u64,
  event_type: u8,
) -> Result<()> {
  let header = header_prefix(RecordType::Metadata, 1)?
    | pack_field(3, 16, 19)
    | pack_field(provider_id, 20, 51)
    | pack_field(event_type as u64, 52, 55);
  SinkAdapter::new(sink).emit_word(header)?;
  Ok(())
}

pub(crate) fn add_initialization<S: Sink + ?Sized>(sink: &mut S, ticks_per_second: u64) -> Result<()> {
  let header = header_prefix(RecordType::Initialization, 2)?;
  let mut adapter = SinkAdapter::new(sink);
  adapter.emit_word(header)?;
  adapter.emit_word(ticks_per_second)?;
  Ok(())
}
