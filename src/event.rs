//! # Event records
//!
//! The event record family covers all eleven Fuchsia trace event subtypes.
//! Per the design guidance this crate follows (the source expresses these
//! as eleven near-duplicate routines, an artifact of its call-site
//! overloading rather than a real structural requirement), they share one
//! generic [`add_event`] routine parameterized by an [`EventKind`] that
//! carries each subtype's extra word, if it has one.


use crate::argument::{self, Argument};
use crate::bits::pack_field;
use crate::error::Result;
use crate::record::{header_prefix, RecordType};
use crate::sink::{Sink, SinkAdapter};
use crate::string_table::StringTable;
use crate::thread_table::ThreadTable;

/// The eleven event subtypes, tagged with whatever extra correlation or
/// timestamp word that subtype carries after its arguments.
#[derive(Debug, Clone, Copy)]
pub enum EventKind {
  Instant,
  DurationBegin,
  DurationEnd,
  /// `end_timestamp` is the record's one extra word; the begin timestamp
  /// is the record's ordinary (common) timestamp field.
  DurationComplete { end_timestamp: u64 },
  Counter { counter_id: u64 },
  AsyncBegin { async_id: u64 },
  AsyncInstant { async_id: u64 },
  AsyncEnd { async_id: u64 },
  FlowBegin { flow_id: u64 },
  FlowStep { flow_id: u64 },
  FlowEnd { flow_id: u64 },
}

impl EventKind {
  fn event_type(&self) -> u64 {
    match self {
      EventKind::Instant => 0,
      EventKind::Counter { .. } => 1,
      EventKind::DurationBegin => 2,
      EventKind::DurationEnd => 3,
      EventKind::DurationComplete { .. } => 4,
      EventKind::AsyncBegin { .. } => 5,
      EventKind::AsyncInstant { .. } => 6,
      EventKind::AsyncEnd { .. } => 7,
      EventKind::FlowBegin { .. } => 8,
      EventKind::FlowStep { .. } => 9,
      EventKind::FlowEnd { .. } => 10,
    }
  }

  fn extra_word(&self) -> Option<u64> {
    match self {
      EventKind::Instant | EventKind::DurationBegin | EventKind::DurationEnd => None,
      EventKind::DurationComplete { end_timestamp } => Some(*end_timestamp),
      EventKind::Counter { counter_id } => Some(*counter_id),
      EventKind::AsyncBegin { async_id }
      | EventKind::AsyncInstant { async_id }
      | EventKind::AsyncEnd { async_id } => Some(*async_id),
      EventKind::FlowBegin { flow_id }
      | EventKind::FlowStep { flow_id }
      | EventKind::FlowEnd { flow_id } => Some(*flow_id),
    }
  }
}

/// Emit one event record of any of the eleven subtypes.
#[allow(clippy::too_many_arguments)]
pub(crate) fn add_event<S: Sink + ?Sized>(
  sink: &mut S,
  strings: &mut StringTable,
  threads: &mut ThreadTable,
  kind: EventKind,
  category: &str,
  name: &str,
  process_id: u64,
  thread_id: u64,
  timestamp: u64,
  args: &[Argument],
) -> Result<()> {
  // Interning order matches the format's own binding discipline: each
  // String/Thread record must precede any record referencing its handle,
  // and this crate interns in call-argument order (category, name, thread,
  // then each argument's own name) so the emitted stream is deterministic.
  let category_ref = strings.get_or_intern(sink, category.as_bytes())?;
  let name_ref = strings.get_or_intern(sink, name.as_bytes())?;
  let thread_ref = threads.get_or_intern(sink, process_id, thread_id)?;
  let (prepared_args, args_words) = argument::prepare_all(sink, strings, args)?;

  let extra_words = if kind.extra_word().is_some() { 1 } else { 0 };
  let size_in_words = 1 + 1 + args_words + extra_words;

  let category_ref = crate::argument::StringRef::Indexed(category_ref);
  let name_ref = crate::argument::StringRef::Indexed(name_ref);

  let header = header_prefix(RecordType::Event, size_in_words)?
    | pack_field(kind.event_type(), 16, 19)
    | pack_field(args.len() as u64, 20, 23)
    | pack_field(thread_ref as u64, 24, 31)
    | pack_field(category_ref.encode(), 32, 47)
    | pack_field(name_ref.encode(), 48, 63);

  let mut adapter = SinkAdapter::new(sink);
  adapter.emit_word(header)?;
  adapter.emit_word(timestamp)?;
  drop(adapter);

  for prepared in &prepared_args {
    prepared.emit(sink)?;
  }

  if let Some(extra) = kind.extra_word() {
    SinkAdapter::new(sink).emit_word(extra)?;
  }

  Ok(())
}
