//! Const-fn CRC lookup table generation.
//!
//! One table of 256 entries per model. Entry `b` is the remainder left in a
//! zeroed register after the candidate byte `b` is placed in its most
//! significant byte and shifted out through the polynomial, truncated to the
//! register width. With it, the engine consumes a whole byte per lookup
//! instead of a bit per shift-and-test.
//!
//! Tables are MSB-first regardless of reflection; reflected models reverse
//! their input bytes and result instead of using a reversed polynomial.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::width::Width;

/// Number of entries in a byte-at-a-time table.
pub const TABLE_LEN: usize = 256;

/// Generate the lookup table for `polynomial` at `width`.
///
/// The register is only truncated when an entry is stored. Shifts in between
/// may push bits past `width` (and `polynomial` may carry bits above `width`);
/// those bits never move back down, so masking once at the end is exact.
///
/// # Examples
///
/// ```
/// use crckit::{Width, generate_table};
///
/// const TABLE: [u32; 256] = generate_table(Width::W16, 0x1021);
/// assert_eq!(TABLE[0], 0x0000);
/// assert_eq!(TABLE[1], 0x1021);
/// assert_eq!(TABLE[255], 0x1EF0);
/// ```
#[must_use]
pub const fn generate_table(width: Width, polynomial: u32) -> [u32; TABLE_LEN] {
  let cast_mask = width.cast_mask();
  let msb_mask = width.msb_mask();
  let shift = width.shift();

  let mut table = [0u32; TABLE_LEN];
  let mut dividend = 0usize;
  while dividend < TABLE_LEN {
    let mut reg = ((dividend as u32) << shift) & cast_mask;
    let mut bit = 0;
    while bit < 8 {
      reg = if reg & msb_mask != 0 {
        (reg << 1) ^ polynomial
      } else {
        reg << 1
      };
      bit += 1;
    }
    table[dividend] = reg & cast_mask;
    dividend += 1;
  }
  table
}
