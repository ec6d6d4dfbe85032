//! Common building blocks for CRC computation.
//!
//! This module provides:
//! - Bit reflection over an arbitrary width
//! - Const-fn lookup table generation
//! - The bitwise reference kernel every table-driven result is checked against

pub mod reference;
pub mod reflect;
pub mod tables;

#[cfg(test)]
mod proptests;
