//! Shared vocabulary for crckit.
//!
//! This crate holds the pieces every CRC implementation in the workspace
//! agrees on. It is `no_std` compatible and depends only on `thiserror`.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | One-shot checksum over a complete byte sequence |
//! | [`InvalidWidth`] | Rejected register width at model construction |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;

pub use checksum::Checksum;
pub use error::InvalidWidth;
