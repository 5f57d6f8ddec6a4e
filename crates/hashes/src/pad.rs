#![allow(clippy::indexing_slicing)] // Block layout offsets are bounded by construction

//! Merkle-Damgård strengthening.
//!
//! Every digest here finishes the same way: append `0x80`, zero-fill to the
//! length-field offset, then write the message length in bits. The families
//! differ only in block size and length-field encoding, so the layout lives
//! in one place and the per-family entry points just pick an encoding.

/// The one or two blocks that close out a message.
pub(crate) struct FinalBlocks<const N: usize> {
  blocks: [[u8; N]; 2],
  count: usize,
}

impl<const N: usize> FinalBlocks<N> {
  /// The padded blocks, in compression order.
  #[inline]
  pub(crate) fn blocks(&self) -> &[[u8; N]] {
    &self.blocks[..self.count]
  }
}

/// Lay out the terminator, zero fill, and length field.
///
/// `remainder` is the buffered message tail (strictly shorter than a block).
/// The result is two blocks exactly when the tail plus terminator would
/// collide with the length field, i.e. when `remainder.len() >= N - L`.
fn lay_out<const N: usize, const L: usize>(remainder: &[u8], len_field: [u8; L]) -> FinalBlocks<N> {
  debug_assert!(remainder.len() < N);

  let split = N - L;
  let mut blocks = [[0u8; N]; 2];

  blocks[0][..remainder.len()].copy_from_slice(remainder);
  blocks[0][remainder.len()] = 0x80;

  let count = if remainder.len() >= split { 2 } else { 1 };
  blocks[count - 1][split..].copy_from_slice(&len_field);

  FinalBlocks { blocks, count }
}

/// 64-byte blocks, little-endian 64-bit length field (MD5).
#[inline]
pub(crate) fn le64(remainder: &[u8], bit_len: u64) -> FinalBlocks<64> {
  lay_out(remainder, bit_len.to_le_bytes())
}

/// 64-byte blocks, big-endian 64-bit length field (SHA-1, SHA-256).
#[inline]
pub(crate) fn be64(remainder: &[u8], bit_len: u64) -> FinalBlocks<64> {
  lay_out(remainder, bit_len.to_be_bytes())
}

/// 128-byte blocks, big-endian 128-bit length field (SHA-384, SHA-512).
///
/// The upper 64 bits of the length field are always zero: message lengths
/// are tracked in a `u64`, which caps supported inputs at 2^64 bits.
#[inline]
pub(crate) fn be128(remainder: &[u8], bit_len: u64) -> FinalBlocks<128> {
  lay_out(remainder, (bit_len as u128).to_be_bytes())
}

#[cfg(test)]
mod tests {
  use super::{be64, be128, le64};

  #[test]
  fn empty_message_is_one_block() {
    let fb = be64(b"", 0);
    let blocks = fb.blocks();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0][0], 0x80);
    assert!(blocks[0][1..].iter().all(|&b| b == 0));
  }

  #[test]
  fn tail_below_split_is_one_block() {
    // 55 bytes is the longest tail that still fits terminator + length.
    let tail = [0xAAu8; 55];
    let fb = be64(&tail, 55 * 8);
    let blocks = fb.blocks();
    assert_eq!(blocks.len(), 1);
    assert_eq!(&blocks[0][..55], &tail[..]);
    assert_eq!(blocks[0][55], 0x80);
    assert_eq!(&blocks[0][56..], &(55u64 * 8).to_be_bytes());
  }

  #[test]
  fn tail_at_split_spills_into_second_block() {
    let tail = [0xBBu8; 56];
    let fb = be64(&tail, 56 * 8);
    let blocks = fb.blocks();
    assert_eq!(blocks.len(), 2);
    assert_eq!(&blocks[0][..56], &tail[..]);
    assert_eq!(blocks[0][56], 0x80);
    assert!(blocks[0][57..].iter().all(|&b| b == 0));
    assert!(blocks[1][..56].iter().all(|&b| b == 0));
    assert_eq!(&blocks[1][56..], &(56u64 * 8).to_be_bytes());
  }

  #[test]
  fn full_tail_puts_terminator_last() {
    let tail = [0xCCu8; 63];
    let fb = be64(&tail, 63 * 8);
    let blocks = fb.blocks();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0][63], 0x80);
    assert_eq!(&blocks[1][56..], &(63u64 * 8).to_be_bytes());
  }

  #[test]
  fn length_field_endianness() {
    let bit_len = 0x0102_0304_0506_0708u64;
    let le = le64(b"", bit_len);
    let be = be64(b"", bit_len);
    assert_eq!(&le.blocks()[0][56..], &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    assert_eq!(&be.blocks()[0][56..], &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
  }

  #[test]
  fn wide_blocks_split_at_112() {
    let below = [0x11u8; 111];
    let fb = be128(&below, 111 * 8);
    assert_eq!(fb.blocks().len(), 1);
    assert_eq!(fb.blocks()[0][111], 0x80);
    assert_eq!(&fb.blocks()[0][112..], &(111u128 * 8).to_be_bytes());

    let at = [0x22u8; 112];
    let fb = be128(&at, 112 * 8);
    assert_eq!(fb.blocks().len(), 2);
    assert_eq!(fb.blocks()[0][112], 0x80);
    assert_eq!(&fb.blocks()[1][112..], &(112u128 * 8).to_be_bytes());
  }

  #[test]
  fn wide_length_field_upper_half_is_zero() {
    let fb = be128(b"", u64::MAX);
    let block = &fb.blocks()[0];
    assert!(block[112..120].iter().all(|&b| b == 0));
    assert_eq!(&block[120..], &u64::MAX.to_be_bytes());
  }
}
