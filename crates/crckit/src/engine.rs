//! Table-driven CRC engine.
//!
//! An engine is built once per model. Construction precomputes the 256-entry
//! table eagerly, so by the time a caller holds a [`CrcEngine`] nothing in it
//! will ever be written again. `compute` only reads, which makes a single
//! engine safe to share across threads without locking.

// SAFETY: Table indices are extracted with `& 0xFF`, and the table has 256 entries.
#![allow(clippy::indexing_slicing)]

use crckit_traits::Checksum;

use crate::{
  common::{
    reference,
    reflect::{reflect, reflect_byte},
    tables::{TABLE_LEN, generate_table},
  },
  config::{self, Backend, Force},
  model::CrcModel,
  width::Width,
};

/// Precomputed CRC engine for one [`CrcModel`].
///
/// # Examples
///
/// ```
/// use crckit::{CrcEngine, CrcModel};
///
/// let modbus = CrcEngine::new(CrcModel::CRC16_MODBUS);
/// assert_eq!(modbus.compute(b"123456789"), 0x4B37);
///
/// // Reusable for any number of inputs.
/// assert_eq!(modbus.compute(b""), 0xFFFF);
/// ```
#[derive(Clone, Debug)]
pub struct CrcEngine {
  model: CrcModel,
  cast_mask: u32,
  msb_mask: u32,
  table: [u32; TABLE_LEN],
  backend: Backend,
}

impl CrcEngine {
  /// Build an engine, choosing the backend from the process configuration.
  #[must_use]
  pub fn new(model: CrcModel) -> Self {
    Self::with_backend(model, config::get().effective_backend)
  }

  /// Build an engine with an explicit backend override.
  #[must_use]
  pub fn with_force(model: CrcModel, force: Force) -> Self {
    Self::with_backend(model, force.resolve())
  }

  fn with_backend(model: CrcModel, backend: Backend) -> Self {
    let width = model.width();
    let table = generate_table(width, model.polynomial());
    tracing::debug!(
      width = width.bits(),
      polynomial = model.polynomial(),
      backend = backend.name(),
      "built crc engine"
    );
    Self {
      model,
      cast_mask: width.cast_mask(),
      msb_mask: width.msb_mask(),
      table,
      backend,
    }
  }

  #[inline]
  #[must_use]
  pub const fn model(&self) -> &CrcModel {
    &self.model
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> Width {
    self.model.width()
  }

  /// The precomputed lookup table, indexed by a candidate leading byte.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &[u32; TABLE_LEN] {
    &self.table
  }

  /// `(1 << width) - 1`.
  #[inline]
  #[must_use]
  pub const fn cast_mask(&self) -> u32 {
    self.cast_mask
  }

  /// `1 << (width - 1)`.
  #[inline]
  #[must_use]
  pub const fn msb_mask(&self) -> u32 {
    self.msb_mask
  }

  #[inline]
  #[must_use]
  pub const fn backend(&self) -> Backend {
    self.backend
  }

  /// Name of the kernel `compute` runs, e.g. `"portable/table"`.
  #[inline]
  #[must_use]
  pub const fn backend_name(&self) -> &'static str {
    self.backend.name()
  }

  /// Compute the checksum of `data`.
  ///
  /// The result is always within `0..=cast_mask()`. The empty input yields
  /// the (possibly reflected) initial value XOR the final XOR.
  #[must_use]
  pub fn compute(&self, data: &[u8]) -> u32 {
    match self.backend {
      Backend::Table => self.finalize(self.update(self.model.initial(), data)),
      Backend::Reference => reference::bitwise(&self.model, data),
    }
  }

  /// Compute the checksum of the concatenation of `bufs`.
  #[must_use]
  pub fn compute_vectored(&self, bufs: &[&[u8]]) -> u32 {
    match self.backend {
      Backend::Table => {
        let crc = bufs.iter().fold(self.model.initial(), |crc, buf| self.update(crc, buf));
        self.finalize(crc)
      }
      Backend::Reference => {
        let crc = bufs.iter().fold(reference::seed(&self.model), |crc, buf| {
          reference::update(&self.model, crc, buf)
        });
        reference::finalize(&self.model, crc)
      }
    }
  }

  /// Fold `data` into the register `crc`, one table lookup per byte.
  #[inline]
  fn update(&self, mut crc: u32, data: &[u8]) -> u32 {
    let shift = self.model.width().shift();
    let reflected = self.model.input_reflected();

    for &byte in data {
      let byte = if reflected { reflect_byte(byte) } else { byte };
      // Fold the byte into the register's most significant byte.
      crc = (crc ^ (u32::from(byte) << shift)) & self.cast_mask;
      let pos = ((crc >> shift) & 0xFF) as usize;
      // Shift out the consumed byte and fold in its remainder.
      crc = (crc << 8) & self.cast_mask;
      crc = (crc ^ self.table[pos]) & self.cast_mask;
    }
    crc
  }

  #[inline]
  fn finalize(&self, mut crc: u32) -> u32 {
    if self.model.result_reflected() {
      crc = reflect(crc, self.model.width().bits());
    }
    (crc ^ self.model.final_xor()) & self.cast_mask
  }
}

impl From<CrcModel> for CrcEngine {
  #[inline]
  fn from(model: CrcModel) -> Self {
    Self::new(model)
  }
}

impl Checksum for CrcEngine {
  type Output = u32;

  #[inline]
  fn width(&self) -> u32 {
    self.model.width().bits()
  }

  #[inline]
  fn compute(&self, data: &[u8]) -> u32 {
    CrcEngine::compute(self, data)
  }

  #[inline]
  fn compute_vectored(&self, bufs: &[&[u8]]) -> u32 {
    CrcEngine::compute_vectored(self, bufs)
  }
}
