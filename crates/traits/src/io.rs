//! I/O adapters for checksums and digests.
//!
//! Wrappers around [`Read`] and [`Write`] that feed every byte passing
//! through them into a [`Checksum`] or [`Digest`] hasher. Readers hash the
//! bytes actually read (short reads included); writers hash before
//! delegating, so a failed write never leaves the hasher behind the caller's
//! view of the stream.
//!
//! # Example
//!
//! ```rust
//! # use traits::Digest;
//! # #[derive(Clone, Default)]
//! # struct XorDigest(u8);
//! # impl Digest for XorDigest {
//! #   const OUTPUT_SIZE: usize = 1;
//! #   type Output = [u8; 1];
//! #   fn new() -> Self { Self(0) }
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc ^ b);
//! #   }
//! #   fn finalize(&self) -> Self::Output { [self.0] }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = XorDigest::reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.digest(), [b'a' ^ b'b' ^ b'c']);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, IoSlice, IoSliceMut, Read, Write};

use crate::{Checksum, Digest};

#[inline]
fn read_and_update<R: Read>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> io::Result<usize> {
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn read_vectored_and_update<R: Read>(
  inner: &mut R,
  bufs: &mut [IoSliceMut<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> io::Result<usize> {
  let n = inner.read_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      break;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

#[inline]
fn write_and_update<W: Write>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> io::Result<usize> {
  on_data(buf);
  inner.write(buf)
}

#[inline]
fn write_vectored_and_update<W: Write>(
  inner: &mut W,
  bufs: &[IoSlice<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> io::Result<usize> {
  for buf in bufs {
    on_data(buf);
  }
  inner.write_vectored(bufs)
}

// ─────────────────────────────────────────────────────────────────────────────
// Checksum I/O Adapters
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Read`] and computes a checksum transparently.
///
/// All reads from this type pass through to the inner reader while
/// updating the checksum with the actual bytes read (handling short reads).
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `C`: The checksum algorithm type (e.g., `Crc32`)
///
/// # Example
///
/// ```rust
/// # use traits::Checksum;
/// # #[derive(Clone, Default)]
/// # struct Sum(u32);
/// # impl Checksum for Sum {
/// #   const OUTPUT_SIZE: usize = 4;
/// #   type Output = u32;
/// #   fn new() -> Self { Self(0) }
/// #   fn with_initial(initial: Self::Output) -> Self { Self(initial) }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
/// #   }
/// #   fn finalize(&self) -> Self::Output { self.0 }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
/// # use std::io::Cursor;
/// let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
/// std::io::copy(&mut reader, &mut std::io::sink())?;
/// assert_eq!(
///   reader.crc(),
///   u32::from(b'a') + u32::from(b'b') + u32::from(b'c')
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct ChecksumReader<R, C: Checksum> {
  inner: R,
  hasher: C,
}

impl<R, C: Checksum> ChecksumReader<R, C> {
  /// Create a new reader wrapper with the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self {
      inner,
      hasher: C::new(),
    }
  }

  /// Create a new reader wrapper with a custom initial state.
  ///
  /// Useful for resuming a checksum computation from a known state.
  #[inline]
  #[must_use]
  pub fn with_initial(inner: R, initial: C::Output) -> Self {
    Self {
      inner,
      hasher: C::with_initial(initial),
    }
  }

  /// Get the current checksum value.
  ///
  /// This does not consume the reader or finalize the hasher -
  /// further reads will continue updating the checksum.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut C {
    &mut self.hasher
  }

  /// Unwrap this `ChecksumReader`, returning the inner reader and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (R, C::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap this `ChecksumReader`, returning the inner reader and discarding the checksum.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// Get a mutable reference to the inner reader.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: Read, C: Checksum> Read for ChecksumReader<R, C> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    read_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

/// Wraps a [`Write`] and computes a checksum transparently.
///
/// All writes to this type pass through to the inner writer while
/// updating the checksum with the bytes being written.
///
/// # Important: Hash-Then-Write Order
///
/// The checksum is updated **before** writing to the inner writer.
/// This ensures that if the write fails, the caller knows exactly
/// what data was hashed vs what was successfully written.
///
/// # Type Parameters
///
/// - `W`: The inner writer type
/// - `C`: The checksum algorithm type (e.g., `Crc32`)
///
/// # Example
///
/// ```rust
/// # use traits::Checksum;
/// # #[derive(Clone, Default)]
/// # struct Sum(u32);
/// # impl Checksum for Sum {
/// #   const OUTPUT_SIZE: usize = 4;
/// #   type Output = u32;
/// #   fn new() -> Self { Self(0) }
/// #   fn with_initial(initial: Self::Output) -> Self { Self(initial) }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
/// #   }
/// #   fn finalize(&self) -> Self::Output { self.0 }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
/// # use std::io::Write;
/// let mut writer = Sum::writer(Vec::new());
/// writer.write_all(b"hello world")?;
/// let (out, checksum) = writer.into_parts();
/// assert_eq!(out, b"hello world".to_vec());
/// assert_eq!(
///   checksum,
///   b"hello world"
///     .iter()
///     .fold(0u32, |acc, &b| acc.wrapping_add(u32::from(b)))
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct ChecksumWriter<W, C: Checksum> {
  inner: W,
  hasher: C,
}

impl<W, C: Checksum> ChecksumWriter<W, C> {
  /// Create a new writer wrapper with the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self {
      inner,
      hasher: C::new(),
    }
  }

  /// Create a new writer wrapper with a custom initial state.
  #[inline]
  #[must_use]
  pub fn with_initial(inner: W, initial: C::Output) -> Self {
    Self {
      inner,
      hasher: C::with_initial(initial),
    }
  }

  /// Get the current checksum value.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut C {
    &mut self.hasher
  }

  /// Unwrap this `ChecksumWriter`, returning the inner writer and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (W, C::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap this `ChecksumWriter`, returning the inner writer and discarding the checksum.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  /// Get a mutable reference to the inner writer.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: Write, C: Checksum> Write for ChecksumWriter<W, C> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    write_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Digest I/O Adapters
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Read`] and computes a digest transparently.
///
/// All reads from this type pass through to the inner reader while
/// updating the digest with the actual bytes read (handling short reads).
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `D`: The digest algorithm type (e.g., `Sha256`)
///
/// # Example
///
/// ```rust
/// # use traits::Digest;
/// # #[derive(Clone, Default)]
/// # struct XorDigest(u8);
/// # impl Digest for XorDigest {
/// #   const OUTPUT_SIZE: usize = 1;
/// #   type Output = [u8; 1];
/// #   fn new() -> Self { Self(0) }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc ^ b);
/// #   }
/// #   fn finalize(&self) -> Self::Output { [self.0] }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
/// # use std::io::Cursor;
/// let mut reader = XorDigest::reader(Cursor::new(b"abc".to_vec()));
/// std::io::copy(&mut reader, &mut std::io::sink())?;
/// assert_eq!(reader.digest(), [b'a' ^ b'b' ^ b'c']);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct DigestReader<R, D: Digest> {
  inner: R,
  hasher: D,
}

impl<R, D: Digest> DigestReader<R, D> {
  /// Create a new reader wrapper with the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self {
      inner,
      hasher: D::new(),
    }
  }

  /// Get the current digest value.
  ///
  /// This does not consume the reader or finalize the hasher -
  /// further reads will continue updating the digest.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut D {
    &mut self.hasher
  }

  /// Unwrap this `DigestReader`, returning the inner reader and the final digest.
  #[inline]
  pub fn into_parts(self) -> (R, D::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap this `DigestReader`, returning the inner reader and discarding the digest.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// Get a mutable reference to the inner reader.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: Read, D: Digest> Read for DigestReader<R, D> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    read_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

/// Wraps a [`Write`] and computes a digest transparently.
///
/// All writes to this type pass through to the inner writer while
/// updating the digest with the bytes being written.
///
/// # Important: Hash-Then-Write Order
///
/// The digest is updated **before** writing to the inner writer.
/// This ensures that if the write fails, the caller knows exactly
/// what data was hashed vs what was successfully written.
///
/// # Type Parameters
///
/// - `W`: The inner writer type
/// - `D`: The digest algorithm type (e.g., `Sha256`)
///
/// # Example
///
/// ```rust
/// # use traits::Digest;
/// # #[derive(Clone, Default)]
/// # struct XorDigest(u8);
/// # impl Digest for XorDigest {
/// #   const OUTPUT_SIZE: usize = 1;
/// #   type Output = [u8; 1];
/// #   fn new() -> Self { Self(0) }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc ^ b);
/// #   }
/// #   fn finalize(&self) -> Self::Output { [self.0] }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
/// # use std::io::Write;
/// let mut writer = XorDigest::writer(Vec::new());
/// writer.write_all(b"abc")?;
/// let (out, digest) = writer.into_parts();
/// assert_eq!(out, b"abc".to_vec());
/// assert_eq!(digest, [b'a' ^ b'b' ^ b'c']);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct DigestWriter<W, D: Digest> {
  inner: W,
  hasher: D,
}

impl<W, D: Digest> DigestWriter<W, D> {
  /// Create a new writer wrapper with the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self {
      inner,
      hasher: D::new(),
    }
  }

  /// Get the current digest value.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut D {
    &mut self.hasher
  }

  /// Unwrap this `DigestWriter`, returning the inner writer and the final digest.
  #[inline]
  pub fn into_parts(self) -> (W, D::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap this `DigestWriter`, returning the inner writer and discarding the digest.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  /// Get a mutable reference to the inner writer.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: Write, D: Digest> Write for DigestWriter<W, D> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    write_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

#[cfg(test)]
mod tests {
  use std::io::{Cursor, Read, Write};
  use std::vec::Vec;

  use super::*;

  #[derive(Clone, Default)]
  struct ByteCount(u64);

  impl Checksum for ByteCount {
    const OUTPUT_SIZE: usize = 8;

    type Output = u64;

    fn new() -> Self {
      Self(0)
    }

    fn with_initial(initial: Self::Output) -> Self {
      Self(initial)
    }

    fn update(&mut self, data: &[u8]) {
      self.0 += data.len() as u64;
    }

    fn finalize(&self) -> Self::Output {
      self.0
    }

    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  /// Reader that returns at most two bytes per call, forcing short reads.
  struct Trickle<R>(R);

  impl<R: Read> Read for Trickle<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      let cap = buf.len().min(2);
      self.0.read(&mut buf[..cap])
    }
  }

  #[test]
  fn reader_hashes_only_bytes_read() {
    let data = b"0123456789".to_vec();
    let mut reader = ChecksumReader::<_, ByteCount>::new(Trickle(Cursor::new(data)));
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    assert_eq!(out.len(), 10);
    assert_eq!(reader.crc(), 10);
  }

  #[test]
  fn reader_with_initial_resumes() {
    let mut reader = ChecksumReader::<_, ByteCount>::with_initial(Cursor::new(b"abc".to_vec()), 100);
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    let (_, count) = reader.into_parts();
    assert_eq!(count, 103);
  }

  #[test]
  fn read_vectored_hashes_across_buffers() {
    let data = b"0123456789".to_vec();
    let mut reader = ChecksumReader::<_, ByteCount>::new(Cursor::new(data));
    let mut a = [0u8; 3];
    let mut b = [0u8; 4];
    let mut bufs = [IoSliceMut::new(&mut a), IoSliceMut::new(&mut b)];
    let n = reader.read_vectored(&mut bufs).unwrap();
    assert_eq!(reader.crc(), n as u64);
  }

  #[test]
  fn writer_hashes_written_bytes() {
    let mut writer = ChecksumWriter::<_, ByteCount>::new(Vec::new());
    writer.write_all(b"hello").unwrap();
    writer.write_all(b" world").unwrap();
    let (out, count) = writer.into_parts();
    assert_eq!(out, b"hello world".to_vec());
    assert_eq!(count, 11);
  }

  #[test]
  fn write_vectored_hashes_all_buffers() {
    let mut writer = ChecksumWriter::<_, ByteCount>::new(Vec::new());
    let bufs = [IoSlice::new(b"abc"), IoSlice::new(b"defg")];
    let n = writer.write_vectored(&bufs).unwrap();
    assert_eq!(n, 7);
    assert_eq!(writer.crc(), 7);
  }
}
