//! Differential fuzzing against reference implementations.
//!
//! Compares every digest against a well-established crate to catch any
//! discrepancies.

#![no_main]

use libfuzzer_sys::fuzz_target;
use traits::{Checksum as _, Digest as _};

fuzz_target!(|data: &[u8]| {
  test_md5(data);
  test_sha1(data);
  test_sha256(data);
  test_sha384(data);
  test_sha512(data);
  test_crc32(data);
});

fn test_md5(data: &[u8]) {
  let ours = hashes::Md5::digest(data);

  use md5::Digest as _;
  let reference = md5::Md5::digest(data);
  let mut expected = [0u8; 16];
  expected.copy_from_slice(&reference);

  assert_eq!(ours, expected, "md5 differential mismatch, len={}", data.len());
}

fn test_sha1(data: &[u8]) {
  let ours = hashes::Sha1::digest(data);

  use sha1::Digest as _;
  let reference = sha1::Sha1::digest(data);
  let mut expected = [0u8; 20];
  expected.copy_from_slice(&reference);

  assert_eq!(ours, expected, "sha1 differential mismatch, len={}", data.len());
}

fn test_sha256(data: &[u8]) {
  let ours = hashes::Sha256::digest(data);

  use sha2::Digest as _;
  let reference = sha2::Sha256::digest(data);
  let mut expected = [0u8; 32];
  expected.copy_from_slice(&reference);

  assert_eq!(ours, expected, "sha256 differential mismatch, len={}", data.len());
}

fn test_sha384(data: &[u8]) {
  let ours = hashes::Sha384::digest(data);

  use sha2::Digest as _;
  let reference = sha2::Sha384::digest(data);
  let mut expected = [0u8; 48];
  expected.copy_from_slice(&reference);

  assert_eq!(ours, expected, "sha384 differential mismatch, len={}", data.len());
}

fn test_sha512(data: &[u8]) {
  let ours = hashes::Sha512::digest(data);

  use sha2::Digest as _;
  let reference = sha2::Sha512::digest(data);
  let mut expected = [0u8; 64];
  expected.copy_from_slice(&reference);

  assert_eq!(ours, expected, "sha512 differential mismatch, len={}", data.len());
}

fn test_crc32(data: &[u8]) {
  let ours = checksum::Crc32::checksum(data);

  let mut hasher = crc32fast::Hasher::new();
  hasher.update(data);
  let reference = hasher.finalize();

  assert_eq!(
    ours,
    reference,
    "crc32 differential mismatch: ours={ours:#010x}, reference={reference:#010x}, len={}",
    data.len()
  );

  // Self-consistency check: streaming should match one-shot
  let mut streaming = checksum::Crc32::new();
  streaming.update(data);
  assert_eq!(streaming.finalize(), ours, "crc32 self-consistency mismatch");
}
