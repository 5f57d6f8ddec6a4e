//! Bitwise reference implementation for CRC-32.
//!
//! This module provides the canonical "source of truth" for CRC computation.
//! It processes one bit at a time, making it:
//!
//! - **Obviously correct**: The algorithm directly mirrors the mathematical definition
//! - **Audit-friendly**: ~10 lines of code, no lookup tables
//! - **Const-evaluable**: Can verify check values at compile time
//!
//! The table-driven kernel must produce identical results to this function.
//!
//! # Performance
//!
//! This is intentionally slow (~8 operations per bit). Use for correctness
//! verification and test oracles, not production throughput.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use super::tables::CRC32_POLY;

/// Bitwise CRC-32 computation (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (0xEDB88320 for CRC-32-IEEE)
/// * `init` - Initial register value (typically 0xFFFFFFFF)
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw CRC register state (caller applies final XOR if needed).
#[must_use]
pub const fn crc32_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

// CRC-32-IEEE: init=0xFFFFFFFF, xorout=0xFFFFFFFF
// Check value: 0xCBF43926. If this fails, the build fails.
const _: () = {
  let raw = crc32_bitwise(CRC32_POLY, !0u32, CHECK_INPUT);
  let check = raw ^ !0u32;
  assert!(check == 0xCBF4_3926);
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_input_yields_zero() {
    let raw = crc32_bitwise(CRC32_POLY, !0u32, &[]);
    assert_eq!(raw ^ !0u32, 0);
  }

  #[test]
  fn single_zero_byte() {
    let raw = crc32_bitwise(CRC32_POLY, !0u32, &[0x00]);
    assert_eq!(raw ^ !0u32, 0xD202_EF8D);
  }

  #[test]
  fn incremental_matches_oneshot() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let oneshot = crc32_bitwise(CRC32_POLY, !0u32, data);

    for split in 1..data.len() {
      let first = crc32_bitwise(CRC32_POLY, !0u32, &data[..split]);
      let second = crc32_bitwise(CRC32_POLY, first, &data[split..]);
      assert_eq!(second, oneshot, "incremental mismatch at split {split}");
    }
  }
}
