//! Bitwise reference kernel.
//!
//! This is the canonical "source of truth" for CRC computation. It processes
//! one bit at a time, MSB-first, with no lookup table, so it directly mirrors
//! polynomial division over GF(2). The table-driven engine must produce
//! identical results for every model and input.
//!
//! It is intentionally slow (~8 shift-and-test steps per byte). Use it for
//! correctness verification, as a test oracle, or when auditing a result.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use super::reflect::{reflect, reflect_byte};
use crate::model::CrcModel;

/// Bitwise CRC computation for any supported model.
///
/// Applies input reflection, result reflection, and the final XOR exactly as
/// the table-driven engine does.
///
/// # Examples
///
/// ```
/// use crckit::{CrcModel, bitwise};
///
/// assert_eq!(bitwise(&CrcModel::CRC8, b"123456789"), 0xF4);
/// assert_eq!(bitwise(&CrcModel::CRC32, b"123456789"), 0xCBF4_3926);
/// ```
#[must_use]
pub const fn bitwise(model: &CrcModel, data: &[u8]) -> u32 {
  finalize(model, update(model, seed(model), data))
}

/// Initial register state, truncated to the model's width.
#[inline]
#[must_use]
pub(crate) const fn seed(model: &CrcModel) -> u32 {
  model.initial() & model.width().cast_mask()
}

/// Shift `data` through the register one bit at a time.
#[must_use]
pub(crate) const fn update(model: &CrcModel, mut crc: u32, data: &[u8]) -> u32 {
  let width = model.width();
  let cast_mask = width.cast_mask();
  let msb_mask = width.msb_mask();
  let shift = width.shift();
  let poly = model.polynomial() & cast_mask;

  let mut i: usize = 0;
  while i < data.len() {
    let byte = if model.input_reflected() {
      reflect_byte(data[i])
    } else {
      data[i]
    };
    crc ^= (byte as u32) << shift;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & msb_mask != 0 {
        ((crc << 1) ^ poly) & cast_mask
      } else {
        (crc << 1) & cast_mask
      };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Apply result reflection and the final XOR.
#[inline]
#[must_use]
pub(crate) const fn finalize(model: &CrcModel, mut crc: u32) -> u32 {
  let width = model.width();
  if model.result_reflected() {
    crc = reflect(crc, width.bits());
  }
  (crc ^ model.final_xor()) & width.cast_mask()
}
