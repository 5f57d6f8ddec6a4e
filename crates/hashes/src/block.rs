#![allow(clippy::indexing_slicing)] // Partial-block copies are bounded by `len < N`

/// One-block accumulator shared by every digest in this crate.
///
/// Holds at most `N - 1` pending bytes between calls. [`fold`](Self::fold)
/// tops up the pending block, hands every full block to the compression
/// callback, and stashes the tail, so callers never see a partial block.
#[derive(Clone)]
pub(crate) struct Buffer<const N: usize> {
  block: [u8; N],
  len: usize,
}

impl<const N: usize> Buffer<N> {
  #[inline]
  pub(crate) const fn new() -> Self {
    Self {
      block: [0u8; N],
      len: 0,
    }
  }

  /// Feed `data` through the accumulator, invoking `f` once per full block.
  ///
  /// Blocks are delivered in message order. After this returns, fewer than
  /// `N` bytes remain buffered.
  pub(crate) fn fold(&mut self, mut data: &[u8], mut f: impl FnMut(&[u8; N])) {
    if data.is_empty() {
      return;
    }

    if self.len != 0 {
      let take = core::cmp::min(N - self.len, data.len());
      self.block[self.len..self.len + take].copy_from_slice(&data[..take]);
      self.len += take;
      data = &data[take..];

      if self.len == N {
        let block = self.block;
        f(&block);
        self.len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<N>();
    for block in blocks {
      f(block);
    }
    data = rest;

    if !data.is_empty() {
      self.block[..data.len()].copy_from_slice(data);
      self.len = data.len();
    }
  }

  /// The buffered tail: bytes ingested but not yet compressed.
  #[inline]
  pub(crate) fn remainder(&self) -> &[u8] {
    &self.block[..self.len]
  }
}

impl<const N: usize> Default for Buffer<N> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}
