//! Bit reflection.

/// Reverse the low `bits` bits of `value`.
///
/// Bit `i` of the input becomes bit `bits - 1 - i` of the output. Bits at or
/// above `bits` in the input are ignored. `bits == 0` yields `0`, and `bits`
/// above 32 is treated as 32.
///
/// # Examples
///
/// ```
/// use crckit::reflect;
///
/// assert_eq!(reflect(0x80, 8), 0x01);
/// assert_eq!(reflect(0b1100, 4), 0b0011);
/// assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
/// ```
#[inline]
#[must_use]
pub const fn reflect(value: u32, bits: u32) -> u32 {
  match bits {
    0 => 0,
    1..=32 => value.reverse_bits() >> (32 - bits),
    _ => value.reverse_bits(),
  }
}

/// Reverse the bits of one input byte.
#[inline]
#[must_use]
pub(crate) const fn reflect_byte(byte: u8) -> u8 {
  byte.reverse_bits()
}
