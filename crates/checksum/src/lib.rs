//! CRC-32 (IEEE 802.3 / ISO-HDLC) streaming checksum.
//!
//! This crate provides the reflected CRC-32 used by Ethernet, gzip, zip, and
//! PNG, computed one byte per step from a 256-entry lookup table that is
//! generated at compile time.
//!
//! # Parameters
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Polynomial | 0x04C11DB7 (normal), 0xEDB88320 (reflected) |
//! | Initial value | 0xFFFFFFFF |
//! | Final XOR | 0xFFFFFFFF |
//! | Reflect input/output | Yes |
//! | Check value | `crc32(b"123456789") == 0xCBF43926` |
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, Crc32};
//!
//! // One-shot computation
//! let crc = Crc32::checksum(b"123456789");
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut hasher = Crc32::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), crc);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded
//! use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod common;
mod crc32;

pub use crc32::Crc32;
// Re-export the trait for convenience
pub use traits::Checksum;
