//! CRC-32 (IEEE 802.3 / ISO-HDLC).

use traits::Checksum;

use crate::common::tables::{CRC32_POLY, generate_crc32_table};

/// Byte-at-a-time lookup table, computed at compile time.
static CRC32_TABLE: [u32; 256] = generate_crc32_table(CRC32_POLY);

/// Advance the CRC register over `data`, one table lookup per byte.
#[inline]
#[allow(clippy::indexing_slicing)] // index is 0..=255 by mask, table is [u32; 256]
fn crc32_bytewise(mut crc: u32, data: &[u8]) -> u32 {
  for &b in data {
    let index = ((crc ^ (b as u32)) & 0xFF) as usize;
    crc = CRC32_TABLE[index] ^ (crc >> 8);
  }
  crc
}

/// CRC-32 checksum (IEEE 802.3 / ISO-HDLC).
///
/// Used in Ethernet FCS, ZIP, gzip, PNG, and many other formats.
///
/// # Properties
///
/// - **Polynomial**: 0x04C11DB7 (normal), 0xEDB88320 (reflected)
/// - **Initial value**: 0xFFFFFFFF
/// - **Final XOR**: 0xFFFFFFFF
/// - **Reflect input/output**: Yes
///
/// # Example
///
/// ```
/// use checksum::{Checksum, Crc32};
///
/// let crc = Crc32::checksum(b"123456789");
/// assert_eq!(crc, 0xCBF4_3926);
/// ```
#[derive(Clone)]
pub struct Crc32 {
  // Raw register state. Held pre-inverted; `finalize` applies the final XOR.
  state: u32,
}

impl Default for Crc32 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Checksum for Crc32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self { state: !0 }
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Self { state: initial ^ !0 }
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.state = crc32_bytewise(self.state, data);
  }

  #[inline]
  fn finalize(&self) -> u32 {
    self.state ^ !0
  }

  #[inline]
  fn reset(&mut self) {
    self.state = !0;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const TEST_DATA: &[u8] = b"123456789";

  #[test]
  fn check_value() {
    let crc = Crc32::checksum(TEST_DATA);
    assert_eq!(crc, 0xCBF4_3926);
  }

  #[test]
  fn empty_input() {
    let crc = Crc32::checksum(&[]);
    assert_eq!(crc, 0);
  }

  #[test]
  fn single_zero_byte() {
    let crc = Crc32::checksum(&[0x00]);
    assert_eq!(crc, 0xD202_EF8D);
  }

  #[test]
  fn streaming_matches_oneshot() {
    let oneshot = Crc32::checksum(TEST_DATA);

    let mut hasher = Crc32::new();
    hasher.update(&TEST_DATA[..5]);
    hasher.update(&TEST_DATA[5..]);
    assert_eq!(hasher.finalize(), oneshot);

    let mut hasher = Crc32::new();
    for chunk in TEST_DATA.chunks(3) {
      hasher.update(chunk);
    }
    assert_eq!(hasher.finalize(), oneshot);
  }

  #[test]
  fn finalize_is_idempotent() {
    let mut hasher = Crc32::new();
    hasher.update(TEST_DATA);
    let first = hasher.finalize();
    assert_eq!(hasher.finalize(), first);

    // Further updates continue from the same register state.
    hasher.update(b"more");
    assert_ne!(hasher.finalize(), first);
  }

  #[test]
  fn reset_restores_initial_state() {
    let mut hasher = Crc32::new();
    hasher.update(b"some data");
    hasher.reset();
    hasher.update(TEST_DATA);
    assert_eq!(hasher.finalize(), Crc32::checksum(TEST_DATA));
  }

  #[test]
  fn default_equals_new() {
    let from_default = Crc32::default().finalize();
    let from_new = Crc32::new().finalize();
    assert_eq!(from_default, from_new);
  }

  #[test]
  fn with_initial_resumes_all_splits() {
    for split in 0..=TEST_DATA.len() {
      let (a, b) = TEST_DATA.split_at(split);

      let partial = Crc32::checksum(a);
      let mut resumed = Crc32::with_initial(partial);
      resumed.update(b);

      assert_eq!(resumed.finalize(), Crc32::checksum(TEST_DATA), "failed at split {split}");
    }
  }

  #[test]
  fn vectored_matches_contiguous() {
    let parts: [&[u8]; 3] = [b"123", b"", b"456789"];
    assert_eq!(Crc32::checksum_vectored(&parts), Crc32::checksum(TEST_DATA));
  }
}
