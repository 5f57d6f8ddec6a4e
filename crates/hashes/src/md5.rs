#![allow(clippy::indexing_slicing)] // Fixed-size arrays + message word table

use traits::Digest;

use crate::{block::Buffer, pad};

const BLOCK_LEN: usize = 64;

const H0: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

// Per-round left-rotation amounts.
const S: [u32; 64] = [
  7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20,
  4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15,
  21,
];

// Sine-derived additive constants, `floor(2^32 * abs(sin(i + 1)))`.
const K: [u32; 64] = [
  0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501, 0x698098d8,
  0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821, 0xf61e2562, 0xc040b340,
  0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8, 0x21e1cde6, 0xc33707d6, 0xf4d50d87,
  0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a, 0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
  0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70, 0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039,
  0xe6db99e5, 0x1fa27cf8, 0xc4ac5665, 0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92,
  0xffeff47d, 0x85845dd1, 0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb,
  0xeb86d391,
];

// RFC 1321 auxiliary functions.

#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
  (x & y) | (!x & z)
}

#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
  (x & z) | (y & !z)
}

#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
  x ^ y ^ z
}

#[inline(always)]
fn i(x: u32, y: u32, z: u32) -> u32 {
  y ^ (x | !z)
}

/// MD5 streaming hasher (RFC 1321).
///
/// Collision resistance is broken; use only for interop and integrity checks.
#[derive(Clone)]
pub struct Md5 {
  state: [u32; 4],
  buf: Buffer<BLOCK_LEN>,
  total_len: u64,
}

impl Default for Md5 {
  #[inline]
  fn default() -> Self {
    Self {
      state: H0,
      buf: Buffer::new(),
      total_len: 0,
    }
  }
}

impl Md5 {
  #[inline(always)]
  fn compress_block(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    // No expansion schedule: all 64 rounds index straight into the 16
    // little-endian message words. Fully unrolled, with the register
    // rotation folded into the argument order of each `round!`.
    let mut m = [0u32; 16];
    let (chunks, _) = block.as_chunks::<4>();
    for (idx, c) in chunks.iter().enumerate() {
      m[idx] = u32::from_le_bytes(*c);
    }

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];

    macro_rules! round {
      ($fun:ident, $a:ident, $b:ident, $c:ident, $d:ident, $g:expr, $i:expr) => {{
        let t = $a
          .wrapping_add($fun($b, $c, $d))
          .wrapping_add(K[$i])
          .wrapping_add(m[$g]);
        $a = $b.wrapping_add(t.rotate_left(S[$i]));
      }};
    }

    round!(f, a, b, c, d, 0, 0);
    round!(f, d, a, b, c, 1, 1);
    round!(f, c, d, a, b, 2, 2);
    round!(f, b, c, d, a, 3, 3);
    round!(f, a, b, c, d, 4, 4);
    round!(f, d, a, b, c, 5, 5);
    round!(f, c, d, a, b, 6, 6);
    round!(f, b, c, d, a, 7, 7);
    round!(f, a, b, c, d, 8, 8);
    round!(f, d, a, b, c, 9, 9);
    round!(f, c, d, a, b, 10, 10);
    round!(f, b, c, d, a, 11, 11);
    round!(f, a, b, c, d, 12, 12);
    round!(f, d, a, b, c, 13, 13);
    round!(f, c, d, a, b, 14, 14);
    round!(f, b, c, d, a, 15, 15);

    round!(g, a, b, c, d, 1, 16);
    round!(g, d, a, b, c, 6, 17);
    round!(g, c, d, a, b, 11, 18);
    round!(g, b, c, d, a, 0, 19);
    round!(g, a, b, c, d, 5, 20);
    round!(g, d, a, b, c, 10, 21);
    round!(g, c, d, a, b, 15, 22);
    round!(g, b, c, d, a, 4, 23);
    round!(g, a, b, c, d, 9, 24);
    round!(g, d, a, b, c, 14, 25);
    round!(g, c, d, a, b, 3, 26);
    round!(g, b, c, d, a, 8, 27);
    round!(g, a, b, c, d, 13, 28);
    round!(g, d, a, b, c, 2, 29);
    round!(g, c, d, a, b, 7, 30);
    round!(g, b, c, d, a, 12, 31);

    round!(h, a, b, c, d, 5, 32);
    round!(h, d, a, b, c, 8, 33);
    round!(h, c, d, a, b, 11, 34);
    round!(h, b, c, d, a, 14, 35);
    round!(h, a, b, c, d, 1, 36);
    round!(h, d, a, b, c, 4, 37);
    round!(h, c, d, a, b, 7, 38);
    round!(h, b, c, d, a, 10, 39);
    round!(h, a, b, c, d, 13, 40);
    round!(h, d, a, b, c, 0, 41);
    round!(h, c, d, a, b, 3, 42);
    round!(h, b, c, d, a, 6, 43);
    round!(h, a, b, c, d, 9, 44);
    round!(h, d, a, b, c, 12, 45);
    round!(h, c, d, a, b, 15, 46);
    round!(h, b, c, d, a, 2, 47);

    round!(i, a, b, c, d, 0, 48);
    round!(i, d, a, b, c, 7, 49);
    round!(i, c, d, a, b, 14, 50);
    round!(i, b, c, d, a, 5, 51);
    round!(i, a, b, c, d, 12, 52);
    round!(i, d, a, b, c, 3, 53);
    round!(i, c, d, a, b, 10, 54);
    round!(i, b, c, d, a, 1, 55);
    round!(i, a, b, c, d, 8, 56);
    round!(i, d, a, b, c, 15, 57);
    round!(i, c, d, a, b, 6, 58);
    round!(i, b, c, d, a, 13, 59);
    round!(i, a, b, c, d, 4, 60);
    round!(i, d, a, b, c, 11, 61);
    round!(i, c, d, a, b, 2, 62);
    round!(i, b, c, d, a, 9, 63);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
  }

  #[inline]
  fn finalize_inner(&self) -> [u8; 16] {
    let mut state = self.state;
    let bit_len = self.total_len.wrapping_mul(8);
    for block in pad::le64(self.buf.remainder(), bit_len).blocks() {
      Self::compress_block(&mut state, block);
    }

    let mut out = [0u8; 16];
    for (idx, word) in state.iter().copied().enumerate() {
      let offset = idx * 4;
      out[offset..offset + 4].copy_from_slice(&word.to_le_bytes());
    }
    out
  }
}

impl Digest for Md5 {
  const OUTPUT_SIZE: usize = 16;
  type Output = [u8; 16];

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
