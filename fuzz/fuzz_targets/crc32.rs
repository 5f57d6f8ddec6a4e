//! Fuzz target for the CRC-32 streaming state machine.
//!
//! Tests that:
//! - Incremental updates produce the same result as one-shot
//! - Resuming from a finalized value produces correct results
//! - Reset returns the hasher to its initial state

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Checksum, Crc32};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);

  let oneshot = Crc32::checksum(data);

  let (a, b) = data.split_at(split);
  let mut hasher = Crc32::new();
  hasher.update(a);
  hasher.update(b);
  assert_eq!(hasher.finalize(), oneshot, "crc32 incremental mismatch");

  let mut resumed = Crc32::with_initial(Crc32::checksum(a));
  resumed.update(b);
  assert_eq!(resumed.finalize(), oneshot, "crc32 resume mismatch");

  hasher.reset();
  hasher.update(data);
  assert_eq!(hasher.finalize(), oneshot, "crc32 reset mismatch");
});
