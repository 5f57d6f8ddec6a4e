//! Streaming Merkle-Damgård message digests.
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the streamsum workspace. Dev-only dependencies are used for oracle testing
//! and benchmarking.
//!
//! # Algorithms
//!
//! | Type | Block | Digest | Notes |
//! |------|-------|--------|-------|
//! | [`Md5`] | 64 B | 16 B | RFC 1321. Broken for collision resistance; integrity checks only. |
//! | [`Sha1`] | 64 B | 20 B | FIPS 180-4. Broken for collision resistance; integrity checks only. |
//! | [`Sha256`] | 64 B | 32 B | FIPS 180-4. |
//! | [`Sha384`] | 128 B | 48 B | FIPS 180-4. SHA-512 with a distinct IV, truncated to 48 bytes. |
//! | [`Sha512`] | 128 B | 64 B | FIPS 180-4. |
//!
//! All five share the same streaming shape: bytes accumulate in a one-block
//! buffer, full blocks feed the family's compression function, and
//! [`finalize`](traits::Digest::finalize) pads the remainder without
//! disturbing the running state. Message lengths are tracked in a `u64` byte
//! counter, so inputs up to 2^64 bits are supported (this also bounds the
//! 128-byte families, whose 128-bit length field keeps its upper half zero).
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod block;
mod hex;
mod md5;
mod pad;
mod sha1;
mod sha256;
mod sha384;
mod sha512;
mod util;

pub use hex::{Hex, hex};
pub use md5::Md5;
pub use sha1::Sha1;
pub use sha256::Sha256;
pub use sha384::Sha384;
pub use sha512::Sha512;
pub use traits::Digest;
