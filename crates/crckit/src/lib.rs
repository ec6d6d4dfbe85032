//! Parametrized CRC-8, CRC-16, and CRC-32 checksums.
//!
//! A [`CrcModel`] describes one CRC variant (width, polynomial, initial value,
//! final XOR, and the two reflection flags). A [`CrcEngine`] is built once from
//! a model, precomputes a 256-entry lookup table, and then computes checksums
//! with one table lookup per input byte.
//!
//! # Supported Widths
//!
//! | Width | Register | Catalog models |
//! |-------|----------|----------------|
//! | 8  | `u32` (low 8 bits)  | 13 |
//! | 16 | `u32` (low 16 bits) | 24 |
//! | 32 | `u32`               | 9  |
//!
//! Any other width is rejected with [`InvalidWidth`] when the model is built.
//!
//! # Example
//!
//! ```rust
//! use crckit::{CrcEngine, CrcModel, catalog};
//!
//! // A catalog model.
//! let crc32 = CrcEngine::new(CrcModel::CRC32);
//! assert_eq!(crc32.compute(b"123456789"), 0xCBF4_3926);
//!
//! // Looked up by name.
//! let modbus = CrcEngine::new(catalog::get("CRC16_MODBUS").unwrap());
//! assert_eq!(modbus.compute(b"123456789"), 0x4B37);
//!
//! // A custom model.
//! let custom = CrcModel::new(8, 0x07, 0x00, 0x00, false, false)?;
//! assert_eq!(custom.engine().compute(b"123456789"), 0xF4);
//!
//! // Unsupported widths fail up front.
//! assert!(CrcModel::new(24, 0x864CFB, 0xB704CE, 0, false, false).is_err());
//! # Ok::<(), crckit::InvalidWidth>(())
//! ```
//!
//! # Backends
//!
//! Engines use the table-driven kernel unless `CRCKIT_FORCE=reference` is set
//! (or [`CrcEngine::with_force`] is used), in which case the bitwise reference
//! kernel runs instead. Both produce identical results.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use;
//! the environment override is then unavailable.
//!
//! ```toml
//! [dependencies]
//! crckit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(test)]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

mod common;

pub mod catalog;
pub mod config;
mod engine;
mod model;
mod width;

pub use common::{reference::bitwise, reflect::reflect, tables::generate_table};
pub use config::{Backend, Force};
pub use crckit_traits::{Checksum, InvalidWidth};
pub use engine::CrcEngine;
pub use model::CrcModel;
pub use width::Width;
