//! Non-cryptographic checksum traits.
//!
//! Traits for checksum algorithms like CRC32.
//!
//! - **Performance**: Zero-cost abstractions, inline-friendly
//! - **Streaming**: Incremental updates for large data

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// Provides the core interface for checksum computation with support for
/// incremental updates and streaming data.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, Crc32};
///
/// // One-shot (fastest for data already in memory)
/// let crc = Crc32::checksum(b"hello world");
///
/// // Streaming (for incremental or large data)
/// let mut hasher = Crc32::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// let crc = hasher.finalize();
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  ///
  /// - CRC32: 4
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  ///
  /// Typically `u32` for CRC32.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher with a custom initial value.
  ///
  /// Useful for resuming a checksum computation from a previously
  /// reported value.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each
  /// buffer in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, allowing further updates
  /// if needed (though the result would include all data processed so far).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Compute the checksum of `std::io::IoSlice` buffers in one shot.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn checksum_io_slices(bufs: &[std::io::IoSlice<'_>]) -> Self::Output {
    let mut h = Self::new();
    h.update_io_slices(bufs);
    h.finalize()
  }

  /// Wrap a reader to compute the checksum transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use checksum::Crc32;
  /// use std::fs::File;
  ///
  /// let file = File::open("data.bin")?;
  /// let mut reader = Crc32::reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC: {:08x}", reader.crc());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer to compute the checksum transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use checksum::Crc32;
  /// use std::fs::File;
  ///
  /// let file = File::create("output.bin")?;
  /// let mut writer = Crc32::writer(file);
  /// writer.write_all(b"hello world")?;
  /// let (file, crc) = writer.into_parts();
  /// println!("CRC: {:08x}", crc);
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}
