//! Const-fn CRC-32 lookup table generation.
//!
//! The table is computed with `const fn` and embedded directly in the binary,
//! so no runtime initialization is needed.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// CRC-32 (IEEE 802.3) polynomial (0x04C11DB7) in reflected form.
/// Used by Ethernet, gzip, zip, PNG, etc.
pub const CRC32_POLY: u32 = 0xEDB8_8320;

/// Generate a single CRC-32 lookup table entry.
///
/// Uses bit-by-bit computation with the reflected polynomial.
#[must_use]
pub const fn crc32_table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = index as u32;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate the 256-entry CRC-32 lookup table for byte-at-a-time computation.
///
/// # Arguments
///
/// * `poly` - The reflected polynomial
#[must_use]
pub const fn generate_crc32_table(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];

  let mut i = 0u16;
  while i < 256 {
    table[i as usize] = crc32_table_entry(poly, i as u8);
    i += 1;
  }

  table
}

// The table entry for a single byte must agree with the bitwise reference.
// If these fail, the build fails.
const _: () = {
  let table = generate_crc32_table(CRC32_POLY);
  assert!(table[0] == 0);
  // Entries 1 and 255 per the published zlib table.
  assert!(table[1] == 0x7707_3096);
  assert!(table[255] == 0x2D02_EF8D);
};
