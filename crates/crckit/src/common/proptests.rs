//! Property tests for the engine, table generation, and reflection.
//!
//! The bitwise reference kernel is the oracle: for arbitrary models and inputs,
//! the table-driven engine must agree with it bit for bit.

#![cfg(not(miri))]

use proptest::prelude::*;

use super::{reference::bitwise, reflect::reflect, tables::generate_table};
use crate::{CrcEngine, CrcModel, Force, Width, catalog};

fn any_width() -> impl Strategy<Value = Width> {
  prop_oneof![Just(Width::W8), Just(Width::W16), Just(Width::W32)]
}

/// Arbitrary models, including parameters with bits above the width.
fn any_model() -> impl Strategy<Value = CrcModel> {
  (any_width(), any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), any::<bool>())
    .prop_map(|(w, poly, init, xor, refin, refout)| CrcModel::with_width(w, poly, init, xor, refin, refout))
}

fn any_catalog_model() -> impl Strategy<Value = CrcModel> {
  (0..catalog::ENTRIES.len()).prop_map(|i| catalog::ENTRIES[i].model)
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn table_matches_reference(
    model in any_model(),
    data in proptest::collection::vec(any::<u8>(), 0..=512)
  ) {
    let engine = CrcEngine::with_force(model, Force::Table);
    prop_assert_eq!(engine.compute(&data), bitwise(&model, &data));
  }

  #[test]
  fn catalog_table_matches_reference(
    model in any_catalog_model(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048)
  ) {
    let engine = CrcEngine::with_force(model, Force::Table);
    prop_assert_eq!(engine.compute(&data), bitwise(&model, &data));
  }

  #[test]
  fn deterministic(
    model in any_model(),
    data in proptest::collection::vec(any::<u8>(), 0..=256)
  ) {
    let engine = CrcEngine::new(model);
    prop_assert_eq!(engine.compute(&data), engine.compute(&data));
    prop_assert_eq!(CrcEngine::new(model).compute(&data), engine.compute(&data));
  }

  #[test]
  fn result_fits_width(
    model in any_model(),
    data in proptest::collection::vec(any::<u8>(), 0..=256)
  ) {
    let mask = model.width().cast_mask();
    for force in [Force::Table, Force::Reference] {
      let crc = CrcEngine::with_force(model, force).compute(&data);
      prop_assert_eq!(crc & !mask, 0);
    }
  }

  #[test]
  fn empty_input_is_finalized_initial(model in any_model()) {
    let bits = model.width().bits();
    let mask = model.width().cast_mask();
    let initial = if model.result_reflected() {
      reflect(model.initial(), bits)
    } else {
      model.initial()
    };
    let expected = (initial ^ model.final_xor()) & mask;
    prop_assert_eq!(CrcEngine::new(model).compute(&[]), expected);
  }

  #[test]
  fn vectored_matches_oneshot(
    model in any_model(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    cuts in proptest::collection::vec(any::<usize>(), 0..=4)
  ) {
    let mut cuts: std::vec::Vec<usize> = cuts.into_iter().map(|c| c % (data.len() + 1)).collect();
    cuts.sort_unstable();

    let mut bufs: std::vec::Vec<&[u8]> = std::vec::Vec::new();
    let mut start = 0;
    for cut in cuts {
      bufs.push(&data[start..cut]);
      start = cut;
    }
    bufs.push(&data[start..]);

    for force in [Force::Table, Force::Reference] {
      let engine = CrcEngine::with_force(model, force);
      prop_assert_eq!(engine.compute_vectored(&bufs), engine.compute(&data));
    }
  }

  #[test]
  fn table_entries_fit_width(width in any_width(), poly in any::<u32>()) {
    let table = generate_table(width, poly);
    prop_assert_eq!(table.len(), 256);
    prop_assert!(table.iter().all(|&e| e & !width.cast_mask() == 0));
    prop_assert_eq!(table, generate_table(width, poly & width.cast_mask()));
  }

  #[test]
  fn reflect_is_involution(value in any::<u32>(), bits in 1u32..=32) {
    let mask = if bits == 32 { u32::MAX } else { (1 << bits) - 1 };
    let v = value & mask;
    prop_assert_eq!(reflect(reflect(v, bits), bits), v);
  }

  #[test]
  fn reflect_fits_width(value in any::<u32>(), bits in 1u32..=32) {
    let r = reflect(value, bits);
    if bits < 32 {
      prop_assert_eq!(r >> bits, 0);
    }
  }
}
