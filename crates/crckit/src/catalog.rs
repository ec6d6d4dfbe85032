//! Catalog of named CRC models.
//!
//! Every model is a compile-time constant; the catalog is never mutated. Check
//! values are the checksum of the ASCII string `"123456789"`, following the
//! conventions of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).
//!
//! | Width | Models |
//! |-------|--------|
//! | 8  | 13 |
//! | 16 | 24 |
//! | 32 | 9  |

use crate::{model::CrcModel, width::Width};

const fn model(
  width: Width,
  polynomial: u32,
  initial: u32,
  final_xor: u32,
  input_reflected: bool,
  result_reflected: bool,
) -> CrcModel {
  CrcModel::with_width(width, polynomial, initial, final_xor, input_reflected, result_reflected)
}

impl CrcModel {
  /// CRC-8 (SMBus).
  pub const CRC8: Self = model(Width::W8, 0x07, 0x00, 0x00, false, false);
  /// CRC-8/SAE-J1850 (automotive OBD).
  pub const CRC8_SAE_J1850: Self = model(Width::W8, 0x1D, 0xFF, 0xFF, false, false);
  pub const CRC8_SAE_J1850_ZERO: Self = model(Width::W8, 0x1D, 0x00, 0x00, false, false);
  pub const CRC8_8H2F: Self = model(Width::W8, 0x2F, 0xFF, 0xFF, false, false);
  pub const CRC8_CDMA2000: Self = model(Width::W8, 0x9B, 0xFF, 0x00, false, false);
  pub const CRC8_DARC: Self = model(Width::W8, 0x39, 0x00, 0x00, true, true);
  pub const CRC8_DVB_S2: Self = model(Width::W8, 0xD5, 0x00, 0x00, false, false);
  pub const CRC8_EBU: Self = model(Width::W8, 0x1D, 0xFF, 0x00, true, true);
  pub const CRC8_ICODE: Self = model(Width::W8, 0x1D, 0xFD, 0x00, false, false);
  pub const CRC8_ITU: Self = model(Width::W8, 0x07, 0x00, 0x55, false, false);
  /// CRC-8/MAXIM (1-Wire, iButton).
  pub const CRC8_MAXIM: Self = model(Width::W8, 0x31, 0x00, 0x00, true, true);
  pub const CRC8_ROHC: Self = model(Width::W8, 0x07, 0xFF, 0x00, true, true);
  pub const CRC8_WCDMA: Self = model(Width::W8, 0x9B, 0x00, 0x00, true, true);

  pub const CRC16_CCIT_ZERO: Self = model(Width::W16, 0x1021, 0x0000, 0x0000, false, false);
  /// CRC-16/ARC (IBM, LHA).
  pub const CRC16_ARC: Self = model(Width::W16, 0x8005, 0x0000, 0x0000, true, true);
  pub const CRC16_AUG_CCITT: Self = model(Width::W16, 0x1021, 0x1D0F, 0x0000, false, false);
  pub const CRC16_BUYPASS: Self = model(Width::W16, 0x8005, 0x0000, 0x0000, false, false);
  /// CRC-16/CCITT-FALSE (IBM-3740).
  pub const CRC16_CCITT_FALSE: Self = model(Width::W16, 0x1021, 0xFFFF, 0x0000, false, false);
  pub const CRC16_CDMA2000: Self = model(Width::W16, 0xC867, 0xFFFF, 0x0000, false, false);
  pub const CRC16_DDS_110: Self = model(Width::W16, 0x8005, 0x800D, 0x0000, false, false);
  pub const CRC16_DECT_R: Self = model(Width::W16, 0x0589, 0x0000, 0x0001, false, false);
  pub const CRC16_DECT_X: Self = model(Width::W16, 0x0589, 0x0000, 0x0000, false, false);
  pub const CRC16_DNP: Self = model(Width::W16, 0x3D65, 0x0000, 0xFFFF, true, true);
  pub const CRC16_EN_13757: Self = model(Width::W16, 0x3D65, 0x0000, 0xFFFF, false, false);
  pub const CRC16_GENIBUS: Self = model(Width::W16, 0x1021, 0xFFFF, 0xFFFF, false, false);
  pub const CRC16_MAXIM: Self = model(Width::W16, 0x8005, 0x0000, 0xFFFF, true, true);
  pub const CRC16_MCRF4XX: Self = model(Width::W16, 0x1021, 0xFFFF, 0x0000, true, true);
  pub const CRC16_RIELLO: Self = model(Width::W16, 0x1021, 0xB2AA, 0x0000, true, true);
  /// CRC-16/T10-DIF (SCSI data integrity).
  pub const CRC16_T10_DIF: Self = model(Width::W16, 0x8BB7, 0x0000, 0x0000, false, false);
  pub const CRC16_TELEDISK: Self = model(Width::W16, 0xA097, 0x0000, 0x0000, false, false);
  pub const CRC16_TMS37157: Self = model(Width::W16, 0x1021, 0x89EC, 0x0000, true, true);
  /// CRC-16/USB.
  pub const CRC16_USB: Self = model(Width::W16, 0x8005, 0xFFFF, 0xFFFF, true, true);
  pub const CRC16_A: Self = model(Width::W16, 0x1021, 0xC6C6, 0x0000, true, true);
  /// CRC-16/KERMIT (CCITT true).
  pub const CRC16_KERMIT: Self = model(Width::W16, 0x1021, 0x0000, 0x0000, true, true);
  /// CRC-16/MODBUS.
  pub const CRC16_MODBUS: Self = model(Width::W16, 0x8005, 0xFFFF, 0x0000, true, true);
  /// CRC-16/X-25 (HDLC, IBM-SDLC).
  pub const CRC16_X_25: Self = model(Width::W16, 0x1021, 0xFFFF, 0xFFFF, true, true);
  /// CRC-16/XMODEM.
  pub const CRC16_XMODEM: Self = model(Width::W16, 0x1021, 0x0000, 0x0000, false, false);

  /// CRC-32 (ISO-HDLC): Ethernet, gzip, zip, PNG.
  pub const CRC32: Self = model(Width::W32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);
  /// CRC-32/BZIP2.
  pub const CRC32_BZIP2: Self = model(Width::W32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, false, false);
  /// CRC-32C (Castagnoli): iSCSI, SCTP, ext4.
  pub const CRC32_C: Self = model(Width::W32, 0x1EDC_6F41, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);
  pub const CRC32_D: Self = model(Width::W32, 0xA833_982B, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);
  /// CRC-32/MPEG-2.
  pub const CRC32_MPEG2: Self = model(Width::W32, 0x04C1_1DB7, 0xFFFF_FFFF, 0x0000_0000, false, false);
  /// CRC-32/POSIX (cksum).
  pub const CRC32_POSIX: Self = model(Width::W32, 0x04C1_1DB7, 0x0000_0000, 0xFFFF_FFFF, false, false);
  pub const CRC32_Q: Self = model(Width::W32, 0x8141_41AB, 0x0000_0000, 0x0000_0000, false, false);
  /// CRC-32/JAMCRC.
  pub const CRC32_JAMCRC: Self = model(Width::W32, 0x04C1_1DB7, 0xFFFF_FFFF, 0x0000_0000, true, true);
  pub const CRC32_XFER: Self = model(Width::W32, 0x0000_00AF, 0x0000_0000, 0x0000_0000, false, false);
}

/// A named catalog model with its standard check value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
  /// Catalog name, e.g. `"CRC16_MODBUS"`.
  pub name: &'static str,
  /// Model parameters.
  pub model: CrcModel,
  /// Checksum of `b"123456789"` under `model`.
  pub check: u32,
}

const fn entry(name: &'static str, model: CrcModel, check: u32) -> Entry {
  Entry { name, model, check }
}

/// All catalog entries, grouped by width.
pub static ENTRIES: &[Entry] = &[
  entry("CRC8", CrcModel::CRC8, 0xF4),
  entry("CRC8_SAE_J1850", CrcModel::CRC8_SAE_J1850, 0x4B),
  entry("CRC8_SAE_J1850_ZERO", CrcModel::CRC8_SAE_J1850_ZERO, 0x37),
  entry("CRC8_8H2F", CrcModel::CRC8_8H2F, 0xDF),
  entry("CRC8_CDMA2000", CrcModel::CRC8_CDMA2000, 0xDA),
  entry("CRC8_DARC", CrcModel::CRC8_DARC, 0x15),
  entry("CRC8_DVB_S2", CrcModel::CRC8_DVB_S2, 0xBC),
  entry("CRC8_EBU", CrcModel::CRC8_EBU, 0x97),
  entry("CRC8_ICODE", CrcModel::CRC8_ICODE, 0x7E),
  entry("CRC8_ITU", CrcModel::CRC8_ITU, 0xA1),
  entry("CRC8_MAXIM", CrcModel::CRC8_MAXIM, 0xA1),
  entry("CRC8_ROHC", CrcModel::CRC8_ROHC, 0xD0),
  entry("CRC8_WCDMA", CrcModel::CRC8_WCDMA, 0x25),
  entry("CRC16_CCIT_ZERO", CrcModel::CRC16_CCIT_ZERO, 0x31C3),
  entry("CRC16_ARC", CrcModel::CRC16_ARC, 0xBB3D),
  entry("CRC16_AUG_CCITT", CrcModel::CRC16_AUG_CCITT, 0xE5CC),
  entry("CRC16_BUYPASS", CrcModel::CRC16_BUYPASS, 0xFEE8),
  entry("CRC16_CCITT_FALSE", CrcModel::CRC16_CCITT_FALSE, 0x29B1),
  entry("CRC16_CDMA2000", CrcModel::CRC16_CDMA2000, 0x4C06),
  entry("CRC16_DDS_110", CrcModel::CRC16_DDS_110, 0x9ECF),
  entry("CRC16_DECT_R", CrcModel::CRC16_DECT_R, 0x007E),
  entry("CRC16_DECT_X", CrcModel::CRC16_DECT_X, 0x007F),
  entry("CRC16_DNP", CrcModel::CRC16_DNP, 0xEA82),
  entry("CRC16_EN_13757", CrcModel::CRC16_EN_13757, 0xC2B7),
  entry("CRC16_GENIBUS", CrcModel::CRC16_GENIBUS, 0xD64E),
  entry("CRC16_MAXIM", CrcModel::CRC16_MAXIM, 0x44C2),
  entry("CRC16_MCRF4XX", CrcModel::CRC16_MCRF4XX, 0x6F91),
  entry("CRC16_RIELLO", CrcModel::CRC16_RIELLO, 0x63D0),
  entry("CRC16_T10_DIF", CrcModel::CRC16_T10_DIF, 0xD0DB),
  entry("CRC16_TELEDISK", CrcModel::CRC16_TELEDISK, 0x0FB3),
  entry("CRC16_TMS37157", CrcModel::CRC16_TMS37157, 0x26B1),
  entry("CRC16_USB", CrcModel::CRC16_USB, 0xB4C8),
  entry("CRC16_A", CrcModel::CRC16_A, 0xBF05),
  entry("CRC16_KERMIT", CrcModel::CRC16_KERMIT, 0x2189),
  entry("CRC16_MODBUS", CrcModel::CRC16_MODBUS, 0x4B37),
  entry("CRC16_X_25", CrcModel::CRC16_X_25, 0x906E),
  entry("CRC16_XMODEM", CrcModel::CRC16_XMODEM, 0x31C3),
  entry("CRC32", CrcModel::CRC32, 0xCBF4_3926),
  entry("CRC32_BZIP2", CrcModel::CRC32_BZIP2, 0xFC89_1918),
  entry("CRC32_C", CrcModel::CRC32_C, 0xE306_9283),
  entry("CRC32_D", CrcModel::CRC32_D, 0x8731_5576),
  entry("CRC32_MPEG2", CrcModel::CRC32_MPEG2, 0x0376_E6E7),
  entry("CRC32_POSIX", CrcModel::CRC32_POSIX, 0x765E_7680),
  entry("CRC32_Q", CrcModel::CRC32_Q, 0x3010_BF7F),
  entry("CRC32_JAMCRC", CrcModel::CRC32_JAMCRC, 0x340B_C6D9),
  entry("CRC32_XFER", CrcModel::CRC32_XFER, 0xBD0B_E338),
];

/// Iterate over every catalog entry.
#[inline]
pub fn iter() -> impl Iterator<Item = &'static Entry> {
  ENTRIES.iter()
}

/// Look up an entry by name.
///
/// Matching is ASCII case-insensitive and treats `-` as `_`, so
/// `"crc16-modbus"` finds `CRC16_MODBUS`.
///
/// # Examples
///
/// ```
/// use crckit::catalog;
///
/// let entry = catalog::find("crc32-c").unwrap();
/// assert_eq!(entry.name, "CRC32_C");
/// assert_eq!(entry.check, 0xE306_9283);
/// assert!(catalog::find("CRC24_OPENPGP").is_none());
/// ```
#[must_use]
pub fn find(name: &str) -> Option<&'static Entry> {
  ENTRIES.iter().find(|e| names_match(e.name, name))
}

/// Look up a model by name. See [`find`] for matching rules.
#[inline]
#[must_use]
pub fn get(name: &str) -> Option<CrcModel> {
  find(name).map(|e| e.model)
}

fn names_match(canonical: &str, query: &str) -> bool {
  fn fold(b: u8) -> u8 {
    if b == b'-' { b'_' } else { b.to_ascii_uppercase() }
  }

  canonical.len() == query.len() && canonical.bytes().zip(query.bytes()).all(|(a, b)| fold(a) == fold(b))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::reference::bitwise;

  #[test]
  fn catalog_size() {
    assert_eq!(ENTRIES.len(), 46);
    assert_eq!(iter().filter(|e| e.model.width() == Width::W8).count(), 13);
    assert_eq!(iter().filter(|e| e.model.width() == Width::W16).count(), 24);
    assert_eq!(iter().filter(|e| e.model.width() == Width::W32).count(), 9);
  }

  #[test]
  fn names_are_unique() {
    for (i, a) in ENTRIES.iter().enumerate() {
      for b in ENTRIES.iter().skip(i + 1) {
        assert_ne!(a.name, b.name);
      }
    }
  }

  #[test]
  fn check_values_match_reference() {
    for e in iter() {
      assert_eq!(bitwise(&e.model, b"123456789"), e.check, "{}", e.name);
    }
  }

  #[test]
  fn parameters_fit_width() {
    for e in iter() {
      let mask = e.model.width().cast_mask();
      assert_eq!(e.model.polynomial() & !mask, 0, "{}", e.name);
      assert_eq!(e.model.initial() & !mask, 0, "{}", e.name);
      assert_eq!(e.model.final_xor() & !mask, 0, "{}", e.name);
      assert_eq!(e.check & !mask, 0, "{}", e.name);
    }
  }

  #[test]
  fn find_exact_and_folded() {
    assert_eq!(find("CRC16_MODBUS").map(|e| e.model), Some(CrcModel::CRC16_MODBUS));
    assert_eq!(find("crc16_modbus").map(|e| e.name), Some("CRC16_MODBUS"));
    assert_eq!(find("Crc8-Maxim").map(|e| e.name), Some("CRC8_MAXIM"));
    assert_eq!(get("crc32"), Some(CrcModel::CRC32));
  }

  #[test]
  fn find_misses() {
    assert!(find("").is_none());
    assert!(find("CRC64").is_none());
    assert!(find("CRC16_MODBUSX").is_none());
    assert!(find("CRC16 MODBUS").is_none());
  }

  #[test]
  fn aliases_share_parameters() {
    // XMODEM and CCIT_ZERO are the same algorithm under two names.
    assert_eq!(CrcModel::CRC16_XMODEM, CrcModel::CRC16_CCIT_ZERO);
    assert_ne!(find("CRC16_XMODEM"), find("CRC16_CCIT_ZERO"));
  }
}
