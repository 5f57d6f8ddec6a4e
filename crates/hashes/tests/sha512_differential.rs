use hashes::{Sha384, Sha512};
use proptest::prelude::*;
use traits::Digest as _;

fn sha512_ref(data: &[u8]) -> [u8; 64] {
  use sha2::Digest as _;
  let out = sha2::Sha512::digest(data);
  let mut bytes = [0u8; 64];
  bytes.copy_from_slice(&out);
  bytes
}

fn sha384_ref(data: &[u8]) -> [u8; 48] {
  use sha2::Digest as _;
  let out = sha2::Sha384::digest(data);
  let mut bytes = [0u8; 48];
  bytes.copy_from_slice(&out);
  bytes
}

fn pattern(len: usize) -> Vec<u8> {
  (0..len)
    .map(|i| (i as u8).wrapping_mul(13).wrapping_add((i >> 8) as u8))
    .collect()
}

#[test]
fn wide_padding_boundaries_match_sha2_oracle() {
  // Every length through two full 128-byte blocks, covering the 111/112/113
  // split and both block edges.
  for len in 0..=260 {
    let msg = pattern(len);
    assert_eq!(Sha512::digest(&msg), sha512_ref(&msg), "sha512 len={len}");
    assert_eq!(Sha384::digest(&msg), sha384_ref(&msg), "sha384 len={len}");
  }
}

proptest! {
  #[test]
  fn sha512_one_shot_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Sha512::digest(&data), sha512_ref(&data));
  }

  #[test]
  fn sha512_streaming_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    let expected = sha512_ref(&data);

    let mut h = Sha512::new();
    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 97) + 1;
      let end = core::cmp::min(data.len(), i + step);
      h.update(&data[i..end]);
      i = end;
    }

    prop_assert_eq!(h.finalize(), expected);
  }

  #[test]
  fn sha384_one_shot_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Sha384::digest(&data), sha384_ref(&data));
  }

  #[test]
  fn sha384_streaming_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    let expected = sha384_ref(&data);

    let mut h = Sha384::new();
    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 97) + 1;
      let end = core::cmp::min(data.len(), i + step);
      h.update(&data[i..end]);
      i = end;
    }

    prop_assert_eq!(h.finalize(), expected);
  }
}
