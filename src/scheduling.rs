//! # Scheduling records
//!
//! Context-switch and thread-wakeup share record type 8, distinguished by
//! the `EventType` field in the header's top nibble. Both carry thread
//! identifiers as raw 64-bit payload words rather than interned
//! [`crate::thread_table::ThreadTable`] handles. The scheduler reports
//! kernel thread IDs directly, not handles into this writer's own
//! bookkeeping.


use crate::argument::{self, Argument};
use crate::bits::pack_field;
use crate::error::{FxtError, Result};
use crate::record::{header_prefix, RecordType};
use crate::sink::{Sink, SinkAdapter};
use crate::string_table::StringTable;

/// Largest value the 4-bit `OutgoingThreadState` field can hold.
const MAX_OUTGOING_THREAD_STATE: u8 = 0xF;

const SCHEDULING_EVENT_TYPE_CONTEXT_SWITCH: u64 = 1;
const SCHEDULING_EVENT_TYPE_THREAD_WAKEUP: u64 = 2;

#[allow(clippy::too_many_arguments)]
pub(crate) fn add_context_switch<S: Sink + ?Sized>(
  sink: &mut S,
  strings: &mut StringTable,
  cpu_number: u64,
  outgoing_thread_state: u8,
  outgoing_tid: u64,
  incoming_tid: u64,
  timestamp: u64,
  args: &[Argument],
) -> Result<()> {
  if outgoing_thread_state > MAX_OUTGOING_THREAD_STATE {
    return Err(FxtError::InvalidOutgoingThreadState(outgoing_thread_state));
  }
  let (prepared_args, args_words) = argument::prepare_all(sink, strings, args)?;
  let size_in_words = 1 + 3 + args_words;

  let header = header_prefix(RecordType::Scheduling, size_in_words)?
    | pack_field(args.len() as u64, 16, 19)
    | pack_field(cpu_number, 20, 35)
    | pack_field(outgoing_thread_state as u64, 36, 39)
    | pack_field(SCHEDULING_EVENT_TYPE_CONTEXT_SWITCH, 60, 63);

  let mut adapter = SinkAdapter::new(sink);
  adapter.emit_word(header)?;
  adapter.emit_word(timestamp)?;
  adapter.emit_word(outgoing_tid)?;
  adapter.emit_word(incoming_tid)?;
  drop(adapter);

  for prepared in &prepared_args {
    prepared.emit(sink)?;
  }
  Ok(())
}

pub(crate) fn add_thread_wakeup<S: Sink + ?Sized>(
  sink: &mut S,
  strings: &mut StringTable,
  cpu_number: u64,
  waking_tid: u64,
  timestamp: u64,
  args: &[Argument],
) -> Result<()> {
  let (prepared_args, args_words) = argument::prepare_all(sink, strings, args)?;
  let size_in_words = 1 + 2 + args_words;

  let header = header_prefix(RecordType::Scheduling, size_in_words)?
    | pack_field(args.len() as u64, 16, 19)
    | pack_field(cpu_number, 20, 35)
    | pack_field(SCHEDULING_EVENT_TYPE_THREAD_WAKEUP, 60, 63);

  let mut adapter = SinkAdapter::new(sink);
  adapter.emit_word(header)?;
  adapter.emit_word(timestamp)?;
  adapter.emit_word(waking_tid)?;
  drop(adapter);

  for prepared in &prepared_args {
    prepared.emit(sink)?;
  }
  Ok(())
}
