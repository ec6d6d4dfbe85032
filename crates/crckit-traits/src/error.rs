//! Error types for CRC model construction.
//!
//! Width is the only parameter that is validated. Everything else a caller can
//! pass (polynomial, initial value, final XOR) is accepted and masked to the
//! register width downstream.

use thiserror::Error;

/// The requested register width is not one of 8, 16, or 32 bits.
///
/// # Examples
///
/// ```
/// use crckit_traits::InvalidWidth;
///
/// fn check(width: u8) -> Result<u8, InvalidWidth> {
///   match width {
///     8 | 16 | 32 => Ok(width),
///     other => Err(InvalidWidth::new(other)),
///   }
/// }
///
/// assert!(check(16).is_ok());
/// assert_eq!(check(24).unwrap_err().width(), 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("invalid CRC width {width}: expected 8, 16, or 32")]
pub struct InvalidWidth {
  width: u8,
}

impl InvalidWidth {
  /// Create an error for the rejected `width`.
  #[inline]
  #[must_use]
  pub const fn new(width: u8) -> Self {
    Self { width }
  }

  /// The width that was rejected.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.width
  }
}
