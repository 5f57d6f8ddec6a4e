#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use traits::Digest;

use crate::{block::Buffer, pad};

const BLOCK_LEN: usize = 64;

const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

// One constant per 20-round phase.
const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn parity(x: u32, y: u32, z: u32) -> u32 {
  x ^ y ^ z
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

/// SHA-1 streaming hasher (FIPS 180-4).
///
/// Collision resistance is broken; use only for interop and integrity checks.
#[derive(Clone)]
pub struct Sha1 {
  state: [u32; 5],
  buf: Buffer<BLOCK_LEN>,
  total_len: u64,
}

impl Default for Sha1 {
  #[inline]
  fn default() -> Self {
    Self {
      state: H0,
      buf: Buffer::new(),
      total_len: 0,
    }
  }
}

impl Sha1 {
  #[inline(always)]
  fn compress_block(state: &mut [u32; 5], block: &[u8; BLOCK_LEN]) {
    // 16-word ring buffer message schedule, fully unrolled. The expansion
    // word for round `j >= 16` only needs words `j-3`, `j-8`, `j-14` and
    // `j-16`, so the ring slot is rewritten in place right before use.
    let mut w = [0u32; 16];
    let (chunks, _) = block.as_chunks::<4>();
    for (i, c) in chunks.iter().enumerate() {
      w[i] = u32::from_be_bytes(*c);
    }
    let [
      mut w0,
      mut w1,
      mut w2,
      mut w3,
      mut w4,
      mut w5,
      mut w6,
      mut w7,
      mut w8,
      mut w9,
      mut w10,
      mut w11,
      mut w12,
      mut w13,
      mut w14,
      mut w15,
    ] = w;

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    macro_rules! round {
      ($f:expr, $k:expr, $wi:expr) => {{
        let t = a
          .rotate_left(5)
          .wrapping_add($f)
          .wrapping_add(e)
          .wrapping_add($k)
          .wrapping_add($wi);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = t;
      }};
    }

    macro_rules! sched {
      ($w_s:expr, $w_sp2:expr, $w_sp8:expr, $w_sp13:expr) => {{ ($w_s ^ $w_sp2 ^ $w_sp8 ^ $w_sp13).rotate_left(1) }};
    }

    round!(ch(b, c, d), K[0], w0);
    round!(ch(b, c, d), K[0], w1);
    round!(ch(b, c, d), K[0], w2);
    round!(ch(b, c, d), K[0], w3);
    round!(ch(b, c, d), K[0], w4);
    round!(ch(b, c, d), K[0], w5);
    round!(ch(b, c, d), K[0], w6);
    round!(ch(b, c, d), K[0], w7);
    round!(ch(b, c, d), K[0], w8);
    round!(ch(b, c, d), K[0], w9);
    round!(ch(b, c, d), K[0], w10);
    round!(ch(b, c, d), K[0], w11);
    round!(ch(b, c, d), K[0], w12);
    round!(ch(b, c, d), K[0], w13);
    round!(ch(b, c, d), K[0], w14);
    round!(ch(b, c, d), K[0], w15);

    w0 = sched!(w0, w2, w8, w13);
    round!(ch(b, c, d), K[0], w0);
    w1 = sched!(w1, w3, w9, w14);
    round!(ch(b, c, d), K[0], w1);
    w2 = sched!(w2, w4, w10, w15);
    round!(ch(b, c, d), K[0], w2);
    w3 = sched!(w3, w5, w11, w0);
    round!(ch(b, c, d), K[0], w3);

    w4 = sched!(w4, w6, w12, w1);
    round!(parity(b, c, d), K[1], w4);
    w5 = sched!(w5, w7, w13, w2);
    round!(parity(b, c, d), K[1], w5);
    w6 = sched!(w6, w8, w14, w3);
    round!(parity(b, c, d), K[1], w6);
    w7 = sched!(w7, w9, w15, w4);
    round!(parity(b, c, d), K[1], w7);
    w8 = sched!(w8, w10, w0, w5);
    round!(parity(b, c, d), K[1], w8);
    w9 = sched!(w9, w11, w1, w6);
    round!(parity(b, c, d), K[1], w9);
    w10 = sched!(w10, w12, w2, w7);
    round!(parity(b, c, d), K[1], w10);
    w11 = sched!(w11, w13, w3, w8);
    round!(parity(b, c, d), K[1], w11);
    w12 = sched!(w12, w14, w4, w9);
    round!(parity(b, c, d), K[1], w12);
    w13 = sched!(w13, w15, w5, w10);
    round!(parity(b, c, d), K[1], w13);
    w14 = sched!(w14, w0, w6, w11);
    round!(parity(b, c, d), K[1], w14);
    w15 = sched!(w15, w1, w7, w12);
    round!(parity(b, c, d), K[1], w15);
    w0 = sched!(w0, w2, w8, w13);
    round!(parity(b, c, d), K[1], w0);
    w1 = sched!(w1, w3, w9, w14);
    round!(parity(b, c, d), K[1], w1);
    w2 = sched!(w2, w4, w10, w15);
    round!(parity(b, c, d), K[1], w2);
    w3 = sched!(w3, w5, w11, w0);
    round!(parity(b, c, d), K[1], w3);
    w4 = sched!(w4, w6, w12, w1);
    round!(parity(b, c, d), K[1], w4);
    w5 = sched!(w5, w7, w13, w2);
    round!(parity(b, c, d), K[1], w5);
    w6 = sched!(w6, w8, w14, w3);
    round!(parity(b, c, d), K[1], w6);
    w7 = sched!(w7, w9, w15, w4);
    round!(parity(b, c, d), K[1], w7);

    w8 = sched!(w8, w10, w0, w5);
    round!(maj(b, c, d), K[2], w8);
    w9 = sched!(w9, w11, w1, w6);
    round!(maj(b, c, d), K[2], w9);
    w10 = sched!(w10, w12, w2, w7);
    round!(maj(b, c, d), K[2], w10);
    w11 = sched!(w11, w13, w3, w8);
    round!(maj(b, c, d), K[2], w11);
    w12 = sched!(w12, w14, w4, w9);
    round!(maj(b, c, d), K[2], w12);
    w13 = sched!(w13, w15, w5, w10);
    round!(maj(b, c, d), K[2], w13);
    w14 = sched!(w14, w0, w6, w11);
    round!(maj(b, c, d), K[2], w14);
    w15 = sched!(w15, w1, w7, w12);
    round!(maj(b, c, d), K[2], w15);
    w0 = sched!(w0, w2, w8, w13);
    round!(maj(b, c, d), K[2], w0);
    w1 = sched!(w1, w3, w9, w14);
    round!(maj(b, c, d), K[2], w1);
    w2 = sched!(w2, w4, w10, w15);
    round!(maj(b, c, d), K[2], w2);
    w3 = sched!(w3, w5, w11, w0);
    round!(maj(b, c, d), K[2], w3);
    w4 = sched!(w4, w6, w12, w1);
    round!(maj(b, c, d), K[2], w4);
    w5 = sched!(w5, w7, w13, w2);
    round!(maj(b, c, d), K[2], w5);
    w6 = sched!(w6, w8, w14, w3);
    round!(maj(b, c, d), K[2], w6);
    w7 = sched!(w7, w9, w15, w4);
    round!(maj(b, c, d), K[2], w7);
    w8 = sched!(w8, w10, w0, w5);
    round!(maj(b, c, d), K[2], w8);
    w9 = sched!(w9, w11, w1, w6);
    round!(maj(b, c, d), K[2], w9);
    w10 = sched!(w10, w12, w2, w7);
    round!(maj(b, c, d), K[2], w10);
    w11 = sched!(w11, w13, w3, w8);
    round!(maj(b, c, d), K[2], w11);

    w12 = sched!(w12, w14, w4, w9);
    round!(parity(b, c, d), K[3], w12);
    w13 = sched!(w13, w15, w5, w10);
    round!(parity(b, c, d), K[3], w13);
    w14 = sched!(w14, w0, w6, w11);
    round!(parity(b, c, d), K[3], w14);
    w15 = sched!(w15, w1, w7, w12);
    round!(parity(b, c, d), K[3], w15);
    w0 = sched!(w0, w2, w8, w13);
    round!(parity(b, c, d), K[3], w0);
    w1 = sched!(w1, w3, w9, w14);
    round!(parity(b, c, d), K[3], w1);
    w2 = sched!(w2, w4, w10, w15);
    round!(parity(b, c, d), K[3], w2);
    w3 = sched!(w3, w5, w11, w0);
    round!(parity(b, c, d), K[3], w3);
    w4 = sched!(w4, w6, w12, w1);
    round!(parity(b, c, d), K[3], w4);
    w5 = sched!(w5, w7, w13, w2);
    round!(parity(b, c, d), K[3], w5);
    w6 = sched!(w6, w8, w14, w3);
    round!(parity(b, c, d), K[3], w6);
    w7 = sched!(w7, w9, w15, w4);
    round!(parity(b, c, d), K[3], w7);
    w8 = sched!(w8, w10, w0, w5);
    round!(parity(b, c, d), K[3], w8);
    w9 = sched!(w9, w11, w1, w6);
    round!(parity(b, c, d), K[3], w9);
    w10 = sched!(w10, w12, w2, w7);
    round!(parity(b, c, d), K[3], w10);
    w11 = sched!(w11, w13, w3, w8);
    round!(parity(b, c, d), K[3], w11);
    w12 = sched!(w12, w14, w4, w9);
    round!(parity(b, c, d), K[3], w12);
    w13 = sched!(w13, w15, w5, w10);
    round!(parity(b, c, d), K[3], w13);
    w14 = sched!(w14, w0, w6, w11);
    round!(parity(b, c, d), K[3], w14);
    w15 = sched!(w15, w1, w7, w12);
    round!(parity(b, c, d), K[3], w15);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
  }

  #[inline]
  fn finalize_inner(&self) -> [u8; 20] {
    let mut state = self.state;
    let bit_len = self.total_len.wrapping_mul(8);
    for block in pad::be64(self.buf.remainder(), bit_len).blocks() {
      Self::compress_block(&mut state, block);
    }

    let mut out = [0u8; 20];
    for (i, word) in state.iter().copied().enumerate() {
      let offset = i * 4;
      out[offset..offset + 4].copy_from_slice(&word.to_be_bytes());
    }
    out
  }
}

impl Digest for Sha1 {
  const OUTPUT_SIZE: usize = 20;
  type Output = [u8; 20];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, data: &[u8]) {
    self.total_len = self.total_len.wrapping_add(data.len() as u64);
    let state = &mut self.state;
    self.buf.fold(data, |block| Self::compress_block(state, block));
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

  use super::Sha1;
  use crate::hex::hex;

  fn digest_hex(data: &[u8]) -> String {
    hex(&Sha1::digest(data)).to_string()
  }

  #[test]
  fn known_vectors() {
    // NIST FIPS 180-4 test vectors (short messages).
    assert_eq!(digest_hex(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    assert_eq!(digest_hex(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    assert_eq!(
      digest_hex(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
      "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
    );

    // 1,000,000 repetitions of 'a'.
    let million_a = alloc::vec![b'a'; 1_000_000];
    assert_eq!(digest_hex(&million_a), "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
  }

  #[test]
  fn vectored_update_matches_contiguous() {
    let parts: [&[u8]; 4] = [b"ab", b"", b"cdbcdecdefdefgefghfghighijhijkijkl", b"jklmklmnlmnomnopnopq"];
    let mut h = Sha1::new();
    h.update_vectored(&parts);
    assert_eq!(
      hex(&h.finalize()).to_string(),
      "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
    );
  }
}
