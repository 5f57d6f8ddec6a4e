//! Core hashing traits for streamsum.
//!
//! This crate provides the foundational traits the streamsum digest and
//! checksum implementations conform to. It is `no_std` compatible and has
//! zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Digest`] | Cryptographic hash functions | MD5, SHA-1, SHA-256, SHA-384, SHA-512 |
//! | [`Checksum`] | Non-cryptographic checksums | CRC-32 |
//!
//! Both traits share the same streaming shape: incremental `update`,
//! idempotent non-consuming `finalize`, and `reset` support, so drivers
//! that feed chunks from a stream work identically for either kind.
//!
//! # I/O Adapters
//!
//! With the `std` feature (default), [`io`] provides reader and writer
//! wrappers that hash bytes transparently as they pass through.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to
//! ensure all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
mod digest;
#[cfg(feature = "std")]
pub mod io;

pub use checksum::Checksum;
pub use digest::Digest;
