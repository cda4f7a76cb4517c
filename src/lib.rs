//! A producer-side encoder for the Fuchsia Trace Format (FXT).
//!
//! Callers drive a [`Writer`] through named operations (record an instant
//! event, declare a process name, record a context switch) and it turns
//! each call into one or more 64-bit-word-aligned records written through a
//! caller-supplied [`Sink`]. The resulting byte stream is byte-for-byte
//! compatible with existing FXT readers.
//!
//! This crate does not buffer, flush, open files, or spawn threads; it
//! does not parse traces back, and it does not log. Every operation is
//! synchronous and every failure is a returned [`FxtError`].
//!
//! ```
//! use fxt_trace::{Writer, FxtError};
//!
//! # fn run() -> Result<(), FxtError> {
//! let mut writer = Writer::new(Vec::new());
//! writer.write_magic()?;
//! writer.add_initialization(1_000_000_000)?;
//! # Ok(())
//! # }
//! ```

pub mod argument;
mod bits;
pub mod error;
mod event;
mod metadata;
mod object;
mod record;
mod scheduling;
mod sink;
mod string_table;
mod thread_table;
pub mod writer;

pub use argument::{Argument, ArgumentName, ArgumentValue, StringValue};
pub use error::{FxtError, Result, SinkError};
pub use event::EventKind;
pub use sink::Sink;
pub use writer::Writer;
