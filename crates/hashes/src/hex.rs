use core::fmt;

/// Lowercase hexadecimal display adapter for digest bytes.
///
/// Renders two characters per byte, no separators or prefix, which is the
/// conventional presentation for message digests.
#[derive(Clone, Copy)]
pub struct Hex<'a>(&'a [u8]);

/// Wrap `bytes` for lowercase hex rendering via [`Display`](fmt::Display).
///
/// ```rust
/// use hashes::{Digest, Sha256, hex};
///
/// let digest = Sha256::digest(b"abc");
/// assert_eq!(
///   hex(&digest).to_string(),
///   "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
#[inline]
#[must_use]
pub fn hex(bytes: &[u8]) -> Hex<'_> {
  Hex(bytes)
}

impl fmt::Display for Hex<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for b in self.0 {
      write!(f, "{b:02x}")?;
    }
    Ok(())
  }
}

impl fmt::Debug for Hex<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}
