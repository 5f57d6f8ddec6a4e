//! Chunked stream driver with percent-grained progress reporting.
//!
//! [`consume`] reads a stream to end-of-file in fixed-size chunks and hands
//! each chunk to a caller-supplied sink, reporting progress between chunks.
//! Memory use is one chunk regardless of stream length.

use std::io::{self, Read, Write};

/// Read size for the streaming loop.
///
/// Large enough to amortize per-read overhead; small enough to keep the
/// resident footprint flat for multi-gigabyte inputs.
pub const CHUNK_LEN: usize = 64 * 1024;

/// Percent-grained progress reporter.
///
/// Writes `PROGRESS:<percent>` lines to the wrapped sink, one line per
/// percent change. Constructed with `total == 0`, it stays silent.
#[derive(Debug)]
pub struct Progress<W: Write> {
  out: W,
  total: u64,
  last: Option<u32>,
}

impl<W: Write> Progress<W> {
  /// Create a reporter for a stream expected to carry `total` bytes.
  pub fn new(out: W, total: u64) -> Self {
    Self { out, total, last: None }
  }

  /// Report `processed` bytes against the expected total.
  ///
  /// Emits nothing when the total is zero, when the percent has not moved
  /// since the last call, or when the sink fails. Progress is advisory and
  /// never aborts the stream.
  pub fn report(&mut self, processed: u64) {
    if self.total == 0 {
      return;
    }
    let pct = percent(processed, self.total);
    if self.last == Some(pct) {
      return;
    }
    self.last = Some(pct);
    let _ = writeln!(self.out, "PROGRESS:{pct}");
  }

  /// Consume the reporter and hand back the sink.
  pub fn into_inner(self) -> W {
    self.out
  }
}

/// Integer percent of `processed` against a nonzero `total`, clamped to 100.
///
/// The clamp covers streams that outgrow their size hint, as a pipe can when
/// the producer keeps writing past the announced length.
fn percent(processed: u64, total: u64) -> u32 {
  let pct = u128::from(processed) * 100 / u128::from(total);
  pct.min(100) as u32
}

/// Consume `reader` to end-of-stream in [`CHUNK_LEN`] slices.
///
/// Each slice is passed to `on_chunk` in stream order. Progress is reported
/// once before the first read and again as each chunk lands. Returns the
/// total number of bytes consumed.
///
/// # Errors
///
/// Returns any I/O error from the underlying reader. Interrupted reads are
/// retried.
pub fn consume<R, W, F>(reader: &mut R, progress: &mut Progress<W>, mut on_chunk: F) -> io::Result<u64>
where
  R: Read,
  W: Write,
  F: FnMut(&[u8]),
{
  let mut buf = vec![0u8; CHUNK_LEN];
  let mut processed: u64 = 0;

  progress.report(0);
  loop {
    let n = match reader.read(&mut buf) {
      Ok(0) => break,
      Ok(n) => n,
      Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
      Err(e) => return Err(e),
    };
    if let Some(chunk) = buf.get(..n) {
      on_chunk(chunk);
    }
    processed += n as u64;
    progress.report(processed);
  }

  Ok(processed)
}
