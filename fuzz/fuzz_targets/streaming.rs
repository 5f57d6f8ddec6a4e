//! Fuzz target for the streaming update API.
//!
//! Tests that arbitrary sequences of update calls produce the same result
//! as hashing the input in one shot, for every supported algorithm.

#![no_main]

use arbitrary::Arbitrary;
use checksum::Crc32;
use hashes::{Md5, Sha1, Sha256, Sha384, Sha512};
use libfuzzer_sys::fuzz_target;
use traits::{Checksum, Digest};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let sizes = &input.chunk_sizes;

  walk_digest::<Md5>("md5", data, sizes);
  walk_digest::<Sha1>("sha1", data, sizes);
  walk_digest::<Sha256>("sha256", data, sizes);
  walk_digest::<Sha384>("sha384", data, sizes);
  walk_digest::<Sha512>("sha512", data, sizes);
  walk_checksum::<Crc32>("crc32", data, sizes);
});

fn walk_digest<D: Digest>(name: &str, data: &[u8], chunk_sizes: &[usize]) {
  let expected = D::digest(data);

  let mut hasher = D::new();
  for chunk in chunk_walk(data, chunk_sizes) {
    hasher.update(chunk);
  }

  assert_eq!(hasher.finalize(), expected, "{name} streaming mismatch");
}

fn walk_checksum<C: Checksum>(name: &str, data: &[u8], chunk_sizes: &[usize]) {
  let expected = C::checksum(data);

  let mut hasher = C::new();
  for chunk in chunk_walk(data, chunk_sizes) {
    hasher.update(chunk);
  }

  assert_eq!(hasher.finalize(), expected, "{name} streaming mismatch");
}

/// Split `data` into chunks whose sizes cycle through `chunk_sizes`,
/// each clamped to 1..=256 bytes.
fn chunk_walk<'d>(data: &'d [u8], chunk_sizes: &[usize]) -> Vec<&'d [u8]> {
  let mut chunks = Vec::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + size).min(data.len());
    chunks.push(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  chunks
}
