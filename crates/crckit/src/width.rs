//! CRC register width.

use core::fmt;

use crckit_traits::InvalidWidth;

/// Register width of a CRC model.
///
/// Only 8, 16, and 32 bits are supported. [`Width::from_bits`] is the single
/// place that enforces this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Width {
  /// 8-bit register.
  W8 = 8,
  /// 16-bit register.
  W16 = 16,
  /// 32-bit register.
  W32 = 32,
}

impl Width {
  /// Validate a width given in bits.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidWidth`] for anything other than 8, 16, or 32.
  #[inline]
  pub const fn from_bits(bits: u8) -> Result<Self, InvalidWidth> {
    match bits {
      8 => Ok(Self::W8),
      16 => Ok(Self::W16),
      32 => Ok(Self::W32),
      other => Err(InvalidWidth::new(other)),
    }
  }

  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u32 {
    self as u32
  }

  /// `(1 << bits) - 1`, the mask that truncates a value to the register.
  #[inline]
  #[must_use]
  pub const fn cast_mask(self) -> u32 {
    u32::MAX >> (32 - self.bits())
  }

  /// `1 << (bits - 1)`, the register's most significant bit.
  #[inline]
  #[must_use]
  pub const fn msb_mask(self) -> u32 {
    1 << (self.bits() - 1)
  }

  /// Distance from bit 0 to the register's most significant byte.
  #[inline]
  #[must_use]
  pub const fn shift(self) -> u32 {
    self.bits() - 8
  }
}

impl TryFrom<u8> for Width {
  type Error = InvalidWidth;

  #[inline]
  fn try_from(bits: u8) -> Result<Self, Self::Error> {
    Self::from_bits(bits)
  }
}

impl fmt::Display for Width {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.bits())
  }
}
