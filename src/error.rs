//! # Error Types
//!
//! Every public entry point in this crate returns a [`Result<T>`] rather than
//! the raw integer status codes of the format this crate implements
//! (`0` = success, negative values enumerate failures). The mapping is
//! one-to-one: each row below corresponds to exactly one of the named error
//! conditions the encoder can raise.
//!
//! ## Design
//!
//! The set of failure modes is closed and known at compile time, so this is
//! a plain `thiserror`-derived enum rather than a `Box<dyn Error>`. No
//! caller ever needs to handle a failure mode this crate didn't enumerate.
//! `SinkError` is the one variant that wraps a caller-supplied error; it is
//! the only place a [`Sink`](crate::sink::Sink) implementation's own error
//! crosses into this crate's error type.


use thiserror::Error;

/// Specialized `Result` alias used throughout this crate.
pub type Result<T> = std::result::Result<T, FxtError>;

/// Opaque failure from a caller-supplied [`Sink`](crate::sink::Sink).
///
/// The format's own non-goals place the sink's implementation (buffering,
/// file creation, transport) outside this crate; this error carries only a
/// human-readable reason through to the encoder's own error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("sink write failed: {reason}")]
pub struct SinkError {
  /// Caller-supplied description of why the write failed.
  pub reason: String,
}

impl SinkError {
  /// Construct a sink error with the given reason.
  pub fn new(reason: impl Into<String>) -> Self {
    Self {
      reason: reason.into(),
    }
  }
}

/// All failure modes the encoder can raise.
///
/// Every variant here corresponds to exactly one of the negative status
/// codes of the format this crate implements; `0` (success) is the `Ok(())`
/// case and is never represented as a variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FxtError {
  /// The sink capability returned an error while emitting a record.
  #[error("write to sink failed: {0}")]
  WriteToStreamFailed(#[from] SinkError),

  /// A record-level string (provider name, interned string, blob name)
  /// exceeds its format-defined maximum length.
  #[error("string of length {len} exceeds the maximum of {max}")]
  StrTooLong {
    /// Length of the offending string, in bytes.
    len: usize,
    /// Maximum permitted length, in bytes.
    max: usize,
  },

  /// Post-emission word count disagrees with the pre-computed argument
  /// size. This signals an encoder bug, not a caller error; the stream
  /// emitted so far must be considered corrupt.
  #[error("wrote {actual} words for arguments but expected {expected}")]
  WriteLengthMismatch {
    /// Words actually emitted.
    actual: usize,
    /// Words the pre-computed size summation expected.
    expected: usize,
  },

  /// A blob exceeds the 23-bit size field (`0x7FFFFF` bytes).
  #[error("blob of {len} bytes exceeds the maximum of {max}")]
  DataTooLong {
    /// Length of the offending blob, in bytes.
    len: usize,
    /// Maximum permitted length, in bytes.
    max: usize,
  },

  /// A context-switch record's outgoing thread state exceeds 4 bits.
  #[error("outgoing thread state {0} exceeds the 4-bit field maximum of 15")]
  InvalidOutgoingThreadState(u8),

  /// The computed record size exceeds the 12-bit `sizeInWords` field
  /// (`0xFFF` words).
  #[error("record size of {0} words exceeds the 12-bit field maximum of 4095")]
  RecordSizeTooLarge(usize),

  /// An argument's type tag is outside the defined range. Unreachable from
  /// safe callers: [`ArgumentValue`](crate::argument::ArgumentValue) is a
  /// closed enum over the format's ten kinds, so there is no tag for this
  /// variant to report other than the ones already covered by a match arm.
  /// Kept in the enum because the format itself names this as a distinct
  /// failure mode.
  #[error("invalid argument type tag: {0}")]
  InvalidArgType(u8),

  /// An inline argument name exceeds `0x7FFF` bytes.
  #[error("argument name of {0} bytes exceeds the inline maximum of 0x7FFF")]
  ArgNameTooLong(usize),

  /// An inline (or hex-encoded) argument string value exceeds `0x7FFF`
  /// bytes.
  #[error("argument string value of {0} bytes exceeds the inline maximum of 0x7FFF")]
  ArgStrValueTooLong(usize),

  /// An event, userspace-object, or scheduling record's argument count
  /// exceeds 15 (the 4-bit `ArgumentCount` field maximum).
  #[error("argument count {0} exceeds the field maximum of 15")]
  TooManyArgs(usize),
}
