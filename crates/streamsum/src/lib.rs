//! Streaming digests for shell-pipeline and multi-gigabyte inputs alike.
//!
//! `streamsum` bundles the digest crates behind one facade and adds the
//! stream driver and worker binaries that turn them into command-line tools:
//! bytes in on stdin, lowercase hex out on stdout, percent progress on
//! stderr.
//!
//! # Quick Start
//!
//! ```
//! use streamsum::{Digest, Sha256, hex};
//!
//! let digest = Sha256::digest(b"abc");
//! assert_eq!(
//!   hex(&digest).to_string(),
//!   "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
//! );
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Enables the stream driver, CLI entry points, and I/O adapters |
//!
//! Without `std`, only the hashers themselves are available.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![cfg_attr(not(feature = "std"), no_std)]

// =============================================================================
// Digests
// =============================================================================

pub use hashes::{Hex, Md5, Sha1, Sha256, Sha384, Sha512, hex};

// =============================================================================
// Checksums
// =============================================================================

pub use checksum::Crc32;

// =============================================================================
// Traits
// =============================================================================

pub use traits::{Checksum, Digest};
#[cfg(feature = "std")]
pub use traits::io;

// =============================================================================
// Stream driver & CLI
// =============================================================================

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub mod stream;
