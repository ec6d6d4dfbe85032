//! CRC model parameters.
//!
//! A model follows the Rocksoft conventions used by the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/):
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `width`   | Register width in bits (8, 16, or 32) |
//! | `polynomial` | Generator polynomial, implicit top bit dropped, MSB-first form |
//! | `initial` | Initial register value |
//! | `final_xor` | Value XORed into the result last |
//! | `input_reflected` | Reverse the bits of each input byte before folding it in |
//! | `result_reflected` | Reverse the register over `width` bits before the final XOR |
//!
//! Only the width is validated. Polynomial, initial, and final XOR values with
//! bits above `width` are stored as given; every consumer masks them to the
//! register width, so those bits never reach a result.

use crckit_traits::InvalidWidth;

use crate::{engine::CrcEngine, width::Width};

/// Parameters of one CRC variant.
///
/// Immutable once built. Two models with equal fields are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcModel {
  width: Width,
  polynomial: u32,
  initial: u32,
  final_xor: u32,
  input_reflected: bool,
  result_reflected: bool,
}

impl CrcModel {
  /// Build a model, validating `width`.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidWidth`] unless `width` is 8, 16, or 32.
  ///
  /// # Examples
  ///
  /// ```
  /// use crckit::CrcModel;
  ///
  /// let modbus = CrcModel::new(16, 0x8005, 0xFFFF, 0x0000, true, true)?;
  /// assert_eq!(modbus, CrcModel::CRC16_MODBUS);
  ///
  /// assert!(CrcModel::new(24, 0x864CFB, 0xB704CE, 0, false, false).is_err());
  /// # Ok::<(), crckit::InvalidWidth>(())
  /// ```
  #[inline]
  pub const fn new(
    width: u8,
    polynomial: u32,
    initial: u32,
    final_xor: u32,
    input_reflected: bool,
    result_reflected: bool,
  ) -> Result<Self, InvalidWidth> {
    match Width::from_bits(width) {
      Ok(width) => Ok(Self::with_width(
        width,
        polynomial,
        initial,
        final_xor,
        input_reflected,
        result_reflected,
      )),
      Err(e) => Err(e),
    }
  }

  /// Build a model from an already validated [`Width`].
  #[inline]
  #[must_use]
  pub const fn with_width(
    width: Width,
    polynomial: u32,
    initial: u32,
    final_xor: u32,
    input_reflected: bool,
    result_reflected: bool,
  ) -> Self {
    Self {
      width,
      polynomial,
      initial,
      final_xor,
      input_reflected,
      result_reflected,
    }
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> Width {
    self.width
  }

  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u32 {
    self.polynomial
  }

  #[inline]
  #[must_use]
  pub const fn initial(&self) -> u32 {
    self.initial
  }

  #[inline]
  #[must_use]
  pub const fn final_xor(&self) -> u32 {
    self.final_xor
  }

  #[inline]
  #[must_use]
  pub const fn input_reflected(&self) -> bool {
    self.input_reflected
  }

  #[inline]
  #[must_use]
  pub const fn result_reflected(&self) -> bool {
    self.result_reflected
  }

  /// Build a [`CrcEngine`] for this model.
  #[inline]
  #[must_use]
  pub fn engine(self) -> CrcEngine {
    CrcEngine::new(self)
  }
}
