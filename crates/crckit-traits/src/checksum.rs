//! Checksum trait.
//!
//! A checksum here is a pure function of a complete byte sequence. There is
//! no hasher state to update or reset: implementors hold only read-only,
//! precomputed data, so one instance can serve any number of callers.

use core::fmt::Debug;

/// Checksum algorithm over complete byte sequences.
///
/// # Usage
///
/// ```rust,ignore
/// use crckit::{Checksum, CrcEngine, CrcModel};
///
/// let crc32 = CrcEngine::new(CrcModel::CRC32);
/// assert_eq!(crc32.compute(b"123456789"), 0xCBF4_3926);
///
/// // Several buffers are treated as one logical sequence.
/// assert_eq!(crc32.compute_vectored(&[b"1234", b"56789"]), 0xCBF4_3926);
/// ```
///
/// # Implementor Requirements
///
/// - `compute` must be deterministic: equal inputs give equal outputs.
/// - `compute_vectored(bufs)` must equal `compute` of the concatenation of `bufs`.
/// - Results must fit in [`width`](Self::width) bits.
pub trait Checksum {
  /// The checksum output type.
  type Output: Copy + Eq + Debug;

  /// Register width in bits.
  fn width(&self) -> u32;

  /// Compute the checksum of `data`.
  #[must_use]
  fn compute(&self, data: &[u8]) -> Self::Output;

  /// Compute the checksum of the concatenation of `bufs`.
  #[must_use]
  fn compute_vectored(&self, bufs: &[&[u8]]) -> Self::Output;
}
