//! # Argument encoder
//!
//! Arguments are packed inner records: a header word (type tag, size in
//! words, name reference, type-specific bits) optionally followed by
//! payload words and an inline name byte sequence. Encoding happens in two
//! passes so the owning record can learn the total argument size before
//! its own header is packed; see [`preprocess`] and [`PreparedArgument::emit`].
//!
//! Generalizes `ttlog`'s `FieldValue`/`Field` pair (a tagged value plus a
//! name) to this format's ten argument kinds and its indexed-vs-inline
//! name/value encoding.


use crate::bits::pack_field;
use crate::error::{FxtError, Result};
use crate::sink::{words_for, Sink, SinkAdapter};
use crate::string_table::StringTable;

/// Format limit on an inline argument name or string value, in bytes.
pub const MAX_INLINE_LEN: usize = 0x7FFF;

/// Maximum number of arguments a single record may carry (4-bit field).
pub const MAX_ARGS: usize = 15;

/// The ten argument type tags, in the order the wire format assigns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgumentType {
  Null = 0,
  Int32 = 1,
  UInt32 = 2,
  Int64 = 3,
  UInt64 = 4,
  Double = 5,
  String = 6,
  Pointer = 7,
  Koid = 8,
  Bool = 9,
}

/// How an argument's name is carried on the wire.
#[derive(Debug, Clone)]
pub enum ArgumentName {
  /// Intern the name and reference it by handle.
  Interned(String),
  /// Carry the name's bytes inline in the argument.
  Inline(String),
}

/// How a string argument's value is carried on the wire.
#[derive(Debug, Clone)]
pub enum StringValue {
  /// Intern the value and reference it by handle.
  Interned(String),
  /// Carry the value's bytes inline.
  Inline(String),
  /// Render `bytes` as lowercase ASCII hex, inline. Forces the inline form.
  Hex(Vec<u8>),
}

/// One of the ten argument payload kinds.
#[derive(Debug, Clone)]
pub enum ArgumentValue {
  Null,
  Int32(i32),
  UInt32(u32),
  Int64(i64),
  UInt64(u64),
  Double(f64),
  String(StringValue),
  Pointer(u64),
  Koid(u64),
  Bool(bool),
}

/// A single `{name, value}` argument attached to a record.
#[derive(Debug, Clone)]
pub struct Argument {
  pub name: ArgumentName,
  pub value: ArgumentValue,
}

impl Argument {
  pub fn new(name: ArgumentName, value: ArgumentValue) -> Self {
    Self { name, value }
  }
}

/// A 16-bit name-or-value string reference: indexed handle or inline
/// length, matching the format's 15-bit-handle-plus-flag-bit layout.
///
/// Shared with [`crate::event`], [`crate::object`], and
/// [`crate::metadata`] wherever a record header carries a
/// `CategoryStringRef`/`NameStringRef` field of this same shape.
#[derive(Debug, Clone, Copy)]
pub(crate) enum StringRef {
  Indexed(u16),
  Inline(usize),
}

impl StringRef {
  pub(crate) fn encode(self) -> u64 {
    match self {
      StringRef::Indexed(handle) => handle as u64,
      StringRef::Inline(len) => (1u64 << 15) | (len as u64 & 0x7FFF),
    }
  }
}

enum PreparedValue {
  Null,
  Int32(i32),
  UInt32(u32),
  Int64(i64),
  UInt64(u64),
  Double(f64),
  String {
    value_ref: StringRef,
    inline_bytes: Option<Vec<u8>>,
  },
  Pointer(u64),
  Koid(u64),
  Bool(bool),
}

/// The result of Phase A preprocessing: everything Phase B needs to emit
/// the argument, plus the word count the owning record adds to its own
/// `sizeInWords`.
pub(crate) struct PreparedArgument {
  arg_type: ArgumentType,
  name_ref: StringRef,
  name_inline_bytes: Option<Vec<u8>>,
  value: PreparedValue,
  pub(crate) total_words: usize,
}

/// Phase A: resolve the argument's name and value, performing any nested
/// string interning, and compute its total word count.
pub(crate) fn preprocess<S: Sink + ?Sized>(
  sink: &mut S,
  strings: &mut StringTable,
  arg: &Argument,
) -> Result<PreparedArgument> {
  let (name_ref, name_inline_bytes, name_words) = match &arg.name {
    ArgumentName::Interned(name) => {
      let handle = strings.get_or_intern(sink, name.as_bytes())?;
      (StringRef::Indexed(handle), None, 0)
    }
    ArgumentName::Inline(name) => {
      let bytes = name.as_bytes().to_vec();
      if bytes.len() > MAX_INLINE_LEN {
        return Err(FxtError::ArgNameTooLong(bytes.len()));
      }
      let words = words_for(bytes.len());
      (StringRef::Inline(bytes.len()), Some(bytes), words)
    }
  };

  let (arg_type, value, value_words) = match &arg.value {
    ArgumentValue::Null => (ArgumentType::Null, PreparedValue::Null, 1),
    ArgumentValue::Int32(v) => (ArgumentType::Int32, PreparedValue::Int32(*v), 1),
    ArgumentValue::UInt32(v) => (ArgumentType::UInt32, PreparedValue::UInt32(*v), 1),
    ArgumentValue::Int64(v) => (ArgumentType::Int64, PreparedValue::Int64(*v), 2),
    ArgumentValue::UInt64(v) => (ArgumentType::UInt64, PreparedValue::UInt64(*v), 2),
    ArgumentValue::Double(v) => (ArgumentType::Double, PreparedValue::Double(*v), 2),
    ArgumentValue::Pointer(v) => (ArgumentType::Pointer, PreparedValue::Pointer(*v), 2),
    ArgumentValue::Koid(v) => (ArgumentType::Koid, PreparedValue::Koid(*v), 2),
    ArgumentValue::Bool(v) => (ArgumentType::Bool, PreparedValue::Bool(*v), 1),
    ArgumentValue::String(string_value) => {
      let (value_ref, inline_bytes, words) = match string_value {
        StringValue::Interned(s) => {
          let handle = strings.get_or_intern(sink, s.as_bytes())?;
          (StringRef::Indexed(handle), None, 1)
        }
        StringValue::Inline(s) => {
          let bytes = s.as_bytes().to_vec();
          if bytes.len() > MAX_INLINE_LEN {
            return Err(FxtError::ArgStrValueTooLong(bytes.len()));
          }
          let words = 1 + words_for(bytes.len());
          (StringRef::Inline(bytes.len()), Some(bytes), words)
        }
        StringValue::Hex(raw) => {
          let encoded = hex_encode(raw);
          if encoded.len() > MAX_INLINE_LEN {
            return Err(FxtError::ArgStrValueTooLong(encoded.len()));
          }
          let words = 1 + words_for(encoded.len());
          (StringRef::Inline(encoded.len()), Some(encoded), words)
        }
      };
      (
        ArgumentType::String,
        PreparedValue::String {
          value_ref,
          inline_bytes,
        },
        words,
      )
    }
  };

  Ok(PreparedArgument {
    arg_type,
    name_ref,
    name_inline_bytes,
    value,
    total_words: name_words + value_words,
  })
}

impl PreparedArgument {
  /// Phase B: emit the argument's header, inline name, and value payload.
  pub(crate) fn emit<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<()> {
    let type_specific = match &self.value {
      PreparedValue::Null => 0,
      PreparedValue::Int32(v) => *v as u32 as u64,
      PreparedValue::UInt32(v) => *v as u64,
      PreparedValue::Int64(_) | PreparedValue::UInt64(_) | PreparedValue::Double(_) => 0,
      PreparedValue::String { value_ref, .. } => pack_field(value_ref.encode(), 0, 15),
      PreparedValue::Pointer(_) | PreparedValue::Koid(_) => 0,
      PreparedValue::Bool(v) => {
        if *v {
          1
        } else {
          0
        }
      }
    };

    let header = pack_field(self.arg_type as u64, 0, 3)
      | pack_field(self.total_words as u64, 4, 15)
      | pack_field(self.name_ref.encode(), 16, 31)
      | pack_field(type_specific, 32, 63);

    let mut adapter = SinkAdapter::new(sink);
    let mut words_written = 1usize;
    adapter.emit_word(header)?;

    if let Some(name_bytes) = &self.name_inline_bytes {
      adapter.emit_padded(name_bytes)?;
      words_written += words_for(name_bytes.len());
    }

    words_written += match &self.value {
      PreparedValue::Int64(v) => {
        adapter.emit_word(*v as u64)?;
        1
      }
      PreparedValue::UInt64(v) => {
        adapter.emit_word(*v)?;
        1
      }
      PreparedValue::Double(v) => {
        adapter.emit_word(v.to_bits())?;
        1
      }
      PreparedValue::Pointer(v) => {
        adapter.emit_word(*v)?;
        1
      }
      PreparedValue::Koid(v) => {
        adapter.emit_word(*v)?;
        1
      }
      PreparedValue::String { inline_bytes, .. } => match inline_bytes {
        Some(bytes) => {
          adapter.emit_padded(bytes)?;
          words_for(bytes.len())
        }
        None => 0,
      },
      _ => 0,
    };

    if words_written != self.total_words {
      return Err(FxtError::WriteLengthMismatch {
        actual: words_written,
        expected: self.total_words,
      });
    }
    Ok(())
  }
}

fn hex_encode(bytes: &[u8]) -> Vec<u8> {
  const DIGITS: &[u8; 16] = b"0123456789abcdef";
  let mut out = Vec::with_capacity(bytes.len() * 2);
  for &b in bytes {
    out.push(DIGITS[(b >> 4) as usize]);
    out.push(DIGITS[(b & 0xF) as usize]);
  }
  out
}

/// Sum the pre-computed [`PreparedArgument::total_words`] of `args`,
/// failing with [`FxtError::TooManyArgs`] if `args.len()` exceeds the
/// 4-bit argument-count field.
pub(crate) fn prepare_all<S: Sink + ?Sized>(
  sink: &mut S,
  strings: &mut StringTable,
  args: &[Argument],
) -> Result<(Vec<PreparedArgument>, usize)> {
  if args.len() > MAX_ARGS {
    return Err(FxtError::TooManyArgs(args.len()));
  }
  let mut prepared = Vec::with_capacity(args.len());
  let mut total = 0usize;
  for arg in args {
    let p = preprocess(sink, strings, arg)?;
    total += p.total_words;
    prepared.push(p);
  }
  Ok((prepared, total))
}
