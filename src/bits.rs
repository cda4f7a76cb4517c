//! # Field packer
//!
//! Every record and argument header in this format is a 64-bit word built
//! from adjacent bit-ranges. These three functions are the only place that
//! shift-and-mask arithmetic happens; every other module calls through
//! here rather than hand-rolling its own `<<`/`&`.
//!
//! Generalizes `ttlog`'s fixed bit-field packing (`pack_meta`/`unpack_meta`)
//! into a `(value, begin, end)` primitive that works for any field layout,
//! not just the one or two fixed fields a single record kind needs.


/// Build the bits for a value occupying `[begin, end]` (inclusive) of a
/// 64-bit word, shifted into position but not combined with anything else.
///
/// A value wider than the field is silently masked rather than rejected.
/// Callers are expected to assemble headers straight from enum
/// discriminants and pre-validated lengths without a fallible step here.
#[inline]
pub(crate) fn pack_field(value: u64, begin: u32, end: u32) -> u64 {
  debug_assert!(begin <= end && end < 64, "invalid bit range [{begin}..{end}]");
  let width = end - begin + 1;
  (value & field_mask(width)) << begin
}

/// Read the value occupying `[begin, end]` (inclusive) out of `word`.
#[inline]
pub(crate) fn field_value(word: u64, begin: u32, end: u32) -> u64 {
  debug_assert!(begin <= end && end < 64, "invalid bit range [{begin}..{end}]");
  let width = end - begin + 1;
  (word >> begin) & field_mask(width)
}

/// Overwrite the `[begin, end]` (inclusive) bits of `word` with `value`,
/// leaving every other bit untouched.
#[inline]
pub(crate) fn set_field(word: u64, value: u64, begin: u32, end: u32) -> u64 {
  debug_assert!(begin <= end && end < 64, "invalid bit range [{begin}..{end}]");
  let width = end - begin + 1;
  let mask = field_mask(width) << begin;
  (word & !mask) | (pack_field(value, begin, end))
}

#[inline]
fn field_mask(width: u32) -> u64 {
  if width >= 64 {
    u64::MAX
  } else {
    (1u64 << width) - 1
  }
}
