#![allow(clippy::indexing_slicing)] // Fixed-size arrays

use traits::Digest;

use crate::{
  block::Buffer,
  pad,
  sha512::{BLOCK_LEN, compress_block},
};

// SHA-384 is SHA-512 with this IV, truncated to the first six state words.
const H0: [u64; 8] = [
  0xcbbb9d5dc1059ed8,
  0x629a292a367cd507,
  0x9159015a3070dd17,
  0x152fecd8f70e5939,
  0x67332667ffc00b31,
  0x8eb44a8768581511,
  0xdb0c2e0d64f98fa7,
  0x47b5481dbefa4fa4,
];

/// SHA-384 streaming hasher (FIPS 180-4).
#[derive(Clone)]
pub struct Sha384 {
  state: [u64; 8],
  buf: Buffer<BLOCK_LEN>,
  total_len: u64,
}

impl Default for Sha384 {
  #[inline]
  fn default() -> Self {
    Self {
      state: H0,
      buf: Buffer::new(),
      total_len: 0,
    }
  }
}

impl Sha384 {
  #[inline]
  fn finalize_inner(&self) -> [u8; 48] {
    let mut state = self.state;
    let bit_len = self.total_len.wrapping_mul(8);
    for block in pad::be128(self.buf.remainder(), bit_len).blocks() {
      compress_block(&mut state, block);
    }

    let mut out = [0u8; 48];
    for (i, word) in state.iter().copied().take(6).enumerate() {
      let offset = i * 8;
      out[offset..offset + 8].copy_from_slice(&word.to_be_bytes());
    }
    out
  }
}

impl Digest for Sha384 {
  const OUTPUT_SIZE: usize = 48;
  type Output = [u8; 48];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, data: &[u8]) {
    self.total_len = self.total_len.wrapping_add(data.len() as u64);
    let state = &mut self.state;
    self.buf.fold(data, |block| compress_block(state, block));
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.finalize_inner()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::{String, ToString};

  use traits::Digest;

  use super::Sha384;
  use crate::{hex::hex, sha512::Sha512};

  fn digest_hex(data: &[u8]) -> String {
    hex(&Sha384::digest(data)).to_string()
  }

  #[test]
  fn known_vectors() {
    // NIST FIPS 180-4 test vectors (short messages).
    assert_eq!(
      digest_hex(b""),
      "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"
    );
    assert_eq!(
      digest_hex(b"abc"),
      "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
    );
    assert_eq!(
      digest_hex(
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu"
      ),
      "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039"
    );

    // 1,000,000 repetitions of 'a'.
    let million_a = alloc::vec![b'a'; 1_000_000];
    assert_eq!(
      digest_hex(&million_a),
      "9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b07b8b3dc38ecc4ebae97ddd87f3d8985"
    );
  }

  #[test]
  fn distinct_iv_from_sha512() {
    // Same transform, different IV: SHA-384 must not be a prefix of SHA-512.
    let sha384 = Sha384::digest(b"abc");
    let sha512 = Sha512::digest(b"abc");
    assert_ne!(&sha512[..48], &sha384[..]);
  }
}
