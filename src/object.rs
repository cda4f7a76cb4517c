//! # Blob, userspace-object, and kernel-object records
//!
//! Three record kinds that attach a name and (for the object records) an
//! argument list to either a raw byte blob or a process/thread identity.
//!
//! The blob record's `BlobSize` field is packed into bits `[32..54]` (23
//! bits) here rather than the narrower range a literal reading of the
//! field table might suggest. The format's own stated boundary
//! (`BlobSize <= 0x7FFFFF`) needs the full 23 bits to be representable at
//! all, so the field width follows that constraint.

mod __test__;

use crate::argument::{self, Argument, ArgumentName, ArgumentValue, StringRef};
use crate::bits::pack_field;
use crate::error::{FxtError, Result};
use crate::record::{header_prefix, RecordType};
use crate::sink::{padding_for, words_for, Sink, SinkAdapter};
use crate::string_table::StringTable;
use crate::thread_table::ThreadTable;

/// Format limit on a blob's byte length (23-bit `BlobSize` field).
pub(crate) const MAX_BLOB_LEN: usize = 0x7F_FFFF;

/// `ObjectType` used by [`set_process_name`]'s kernel-object record.
const OBJECT_TYPE_PROCESS: u64 = 1;
/// `ObjectType` used by [`set_thread_name`]'s kernel-object record.
const OBJECT_TYPE_THREAD: u64 = 2;

pub(crate) fn add_blob<S: Sink + ?Sized>(
  sink: &mut S,
  strings: &mut StringTable,
  name: &str,
  blob_type: u8,
  bytes: &[u8],
) -> Result<()> {
  if bytes.len() > MAX_BLOB_LEN {
    return Err(FxtError::DataTooLong {
      len: bytes.len(),
      max: MAX_BLOB_LEN,
    });
  }
  let name_handle = strings.get_or_intern(sink, name.as_bytes())?;
  let size_in_words = 1 + words_for(bytes.len());
  let header = header_prefix(RecordType::Blob, size_in_words)?
    | pack_field(StringRef::Indexed(name_handle).encode(), 16, 31)
    | pack_field(bytes.len() as u64, 32, 54)
    | pack_field(blob_type as u64, 55, 62);

  let mut adapter = SinkAdapter::new(sink);
  adapter.emit_word(header)?;
  adapter.emit_bytes(bytes)?;
  adapter.emit_zeros(padding_for(bytes.len()))?;
  Ok(())
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn add_userspace_object<S: Sink + ?Sized>(
  sink: &mut S,
  strings: &mut StringTable,
  threads: &mut ThreadTable,
  process_id: u64,
  thread_id: u64,
  name: &str,
  pointer: u64,
  args: &[Argument],
) -> Result<()> {
  let thread_ref = threads.get_or_intern(sink, process_id, thread_id)?;
  let name_handle = strings.get_or_intern(sink, name.as_bytes())?;
  let (prepared_args, args_words) = argument::prepare_all(sink, strings, args)?;

  let size_in_words = 1 + 1 + args_words;
  let header = header_prefix(RecordType::UserspaceObject, size_in_words)?
    | pack_field(thread_ref as u64, 16, 23)
    | pack_field(StringRef::Indexed(name_handle).encode(), 24, 39)
    | pack_field(args.len() as u64, 40, 43);

  let mut adapter = SinkAdapter::new(sink);
  adapter.emit_word(header)?;
  adapter.emit_word(pointer)?;
  drop(adapter);

  for prepared in &prepared_args {
    prepared.emit(sink)?;
  }
  Ok(())
}

fn add_kernel_object<S: Sink + ?Sized>(
  sink: &mut S,
  strings: &mut StringTable,
  object_type: u64,
  name: &str,
  object_id: u64,
  args: &[Argument],
) -> Result<()> {
  let name_handle = strings.get_or_intern(sink, name.as_bytes())?;
  let (prepared_args, args_words) = argument::prepare_all(sink, strings, args)?;

  let size_in_words = 1 + 1 + args_words;
  let header = header_prefix(RecordType::KernelObject, size_in_words)?
    | pack_field(object_type, 16, 23)
    | pack_field(StringRef::Indexed(name_handle).encode(), 24, 39)
    | pack_field(args.len() as u64, 40, 43);

  let mut adapter = SinkAdapter::new(sink);
  adapter.emit_word(header)?;
  adapter.emit_word(object_id)?;
  drop(adapter);

  for prepared in &prepared_args {
    prepared.emit(sink)?;
  }
  Ok(())
}

pub(crate) fn set_process_name<S: Sink + ?Sized>(
  sink: &mut S,
  strings: &mut StringTable,
  process_id: u64,
  name: &str,
) -> Result<()> {
  add_kernel_object(sink, strings, OBJECT_TYPE_PROCESS, name, process_id, &[])
}

pub(crate) fn set_thread_name<S: Sink + ?Sized>(
  sink: &mut S,
  strings: &mut StringTable,
  process_id: u64,
  thread_id: u64,
  name: &str,
) -> Result<()> {
  let process_arg = Argument::new(
    ArgumentName::Interned("process".to_string()),
    ArgumentValue::Koid(process_id),
  );
  add_kernel_object(
    sink,
    strings,
    OBJECT_TYPE_THREAD,
    name,
    thread_id,
    std::slice::from_ref(&process_arg),
  )
}
