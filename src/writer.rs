//! # Public dispatcher
//!
//! [`Writer`] is the crate's entire public surface: construct one over a
//! [`Sink`], then call the stream-framing, naming, event, blob,
//! object, and scheduling operations named in the format. Every method
//! forwards to the record-encoder function for its record kind, threading
//! the writer's own string and thread intern tables through.

mod __test__;

use crate::argument::Argument;
use crate::error::Result;
use crate::event::{self, EventKind};
use crate::metadata;
use crate::object;
use crate::scheduling;
use crate::sink::Sink;
use crate::string_table::StringTable;
use crate::thread_table::ThreadTable;

/// A sequential, single-owner FXT stream writer.
///
/// Not `Send`/`Sync` by omission rather than an explicit bound: the intern
/// tables and the sink are both plain mutable state with no internal
/// synchronization, so sharing a `Writer` across threads without external
/// mutual exclusion would corrupt both.
pub struct Writer<S: Sink> {
  sink: S,
  strings: StringTable,
  threads: ThreadTable,
}

impl<S: Sink> Writer<S> {
  /// Construct a writer over `sink`. Both intern tables start empty; no
  /// bytes are written until the first call.
  pub fn new(sink: S) -> Self {
    Self {
      sink,
      strings: StringTable::new(),
      threads: ThreadTable::new(),
    }
  }

  /// Consume the writer, returning the underlying sink.
  pub fn into_inner(self) -> S {
    self.sink
  }

  // ---- Stream framing -------------------------------------------------

  pub fn write_magic(&mut self) -> Result<()> {
    metadata::write_magic(&mut self.sink)
  }

  pub fn add_provider_info(&mut self, provider_id: u64, name: &str) -> Result<()> {
    metadata::add_provider_info(&mut self.sink, provider_id, name.as_bytes())
  }

  pub fn add_provider_section(&mut self, provider_id: u64) -> Result<()> {
    metadata::add_provider_section(&mut self.sink, provider_id)
  }

  pub fn add_provider_event(&mut self, provider_id: u64, event_type: u8) -> Result<()> {
    metadata::add_provider_event(&mut self.sink, provider_id, event_type)
  }

  pub fn add_initialization(&mut self, ticks_per_second: u64) -> Result<()> {
    metadata::add_initialization(&mut self.sink, ticks_per_second)
  }

  // ---- Naming ----------------------------------------------------------

  pub fn set_process_name(&mut self, process_id: u64, name: &str) -> Result<()> {
    object::set_process_name(&mut self.sink, &mut self.strings, process_id, name)
  }

  pub fn set_thread_name(&mut self, process_id: u64, thread_id: u64, name: &str) -> Result<()> {
    object::set_thread_name(&mut self.sink, &mut self.strings, process_id, thread_id, name)
  }

  // ---- Events ------------------------------------------------------------

  #[allow(clippy::too_many_arguments)]
  pub fn add_event(
    &mut self,
    kind: EventKind,
    category: &str,
    name: &str,
    process_id: u64,
    thread_id: u64,
    timestamp: u64,
    args: &[Argument],
  ) -> Result<()> {
    event::add_event(
      &mut self.sink,
      &mut self.strings,
      &mut self.threads,
      kind,
      category,
      name,
      process_id,
      thread_id,
      timestamp,
      args,
    )
  }

  // ---- Blob / object / scheduling ---------------------------------------

  pub fn add_blob(&mut self, name: &str, blob_type: u8, bytes: &[u8]) -> Result<()> {
    object::add_blob(&mut self.sink, &mut self.strings, name, blob_type, bytes)
  }

  #[allow(clippy::too_many_arguments)]
  pub fn add_userspace_object(
    &mut self,
    process_id: u64,
    thread_id: u64,
    name: &str,
    pointer: u64,
    args: &[Argument],
  ) -> Result<()> {
    object::add_userspace_object(
      &mut self.sink,
      &mut self.strings,
      &mut self.threads,
      process_id,
      thread_id,
      name,
      pointer,
      args,
    )
  }

  #[allow(clippy::too_many_arguments)]
  pub fn add_context_switch(
    &mut self,
    cpu_number: u64,
    outgoing_thread_state: u8,
    outgoing_tid: u64,
    incoming_tid: u64,
    timestamp: u64,
    args: &[Argument],
  ) -> Result<()> {
    scheduling::add_context_switch(
      &mut self.sink,
      &mut self.strings,
      cpu_number,
      outgoing_thread_state,
      outgoing_tid,
      incoming_tid,
      timestamp,
      args,
    )
  }

  pub fn add_thread_wakeup(
    &mut self,
    cpu_number: u64,
    waking_tid: u64,
    timestamp: u64,
    args: &[Argument],
  ) -> Result<()> {
    scheduling::add_thread_wakeup(&mut self.sink, &mut self.strings, cpu_number, waking_tid, timestamp, args)
  }

  // ---- Testing helpers ---------------------------------------------------

  /// Exposed for tests that need to assert on intern-table behavior
  /// directly, without going through a record that references the result.
  pub fn get_or_intern_string(&mut self, bytes: &[u8]) -> Result<u16> {
    self.strings.get_or_intern(&mut self.sink, bytes)
  }

  /// Exposed for tests that need to assert on intern-table behavior
  /// directly, without going through a record that references the result.
  pub fn get_or_intern_thread(&mut self, process_id: u64, thread_id: u64) -> Result<u8> {
    self.threads.get_or_intern(&mut self.sink, process_id, thread_id)
  }
}
