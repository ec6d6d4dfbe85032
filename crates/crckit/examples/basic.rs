//! Basic usage: catalog models, custom models, and name lookup.
//!
//! Run with: `cargo run --example basic -p crckit`

use crckit::{CrcEngine, CrcModel, InvalidWidth, catalog};

fn main() -> Result<(), InvalidWidth> {
  println!("=== crckit Basic Examples ===\n");

  catalog_examples();
  custom_model_example()?;
  lookup_example();

  Ok(())
}

/// Prebuilt models: build an engine once, reuse it.
fn catalog_examples() {
  println!("--- Catalog Models ---\n");

  let data = b"123456789";

  // CRC-32 (ISO-HDLC) - Ethernet, gzip, zip, PNG
  let crc32 = CrcEngine::new(CrcModel::CRC32).compute(data);
  println!("CRC-32:          0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  // CRC-16/MODBUS
  let modbus = CrcEngine::new(CrcModel::CRC16_MODBUS).compute(data);
  println!("CRC-16/MODBUS:   0x{modbus:04X}");
  assert_eq!(modbus, 0x4B37);

  // CRC-8/MAXIM - 1-Wire
  let maxim = CrcEngine::new(CrcModel::CRC8_MAXIM).compute(data);
  println!("CRC-8/MAXIM:     0x{maxim:02X}");
  assert_eq!(maxim, 0xA1);

  println!();
}

/// Custom parameters are validated for width only.
fn custom_model_example() -> Result<(), InvalidWidth> {
  println!("--- Custom Model ---\n");

  let model = CrcModel::new(16, 0x1021, 0x1D0F, 0x0000, false, false)?;
  let crc = model.engine().compute(b"123456789");
  println!("poly=0x1021 init=0x1D0F: 0x{crc:04X}");
  assert_eq!(crc, 0xE5CC);

  match CrcModel::new(24, 0x86_4CFB, 0xB7_04CE, 0, false, false) {
    Ok(_) => unreachable!("24-bit models are not supported"),
    Err(e) => println!("width 24: {e}"),
  }

  println!();
  Ok(())
}

/// Every catalog entry, looked up by name.
fn lookup_example() {
  println!("--- Catalog Lookup ---\n");

  for entry in catalog::iter() {
    let Some(model) = catalog::get(entry.name) else {
      continue;
    };
    let crc = CrcEngine::new(model).compute(b"123456789");
    let digits = (model.width().bits() / 4) as usize;
    println!("{:<22} 0x{crc:0digits$X}", entry.name);
    assert_eq!(crc, entry.check);
  }
}
