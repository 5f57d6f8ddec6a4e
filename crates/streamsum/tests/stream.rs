//! Stream driver behavior: chunking equivalence and progress cadence.

use std::io::{self, Cursor, Read};

use streamsum::stream::{self, CHUNK_LEN, Progress};
use streamsum::{Checksum, Crc32, Digest, Sha256};

/// Reader that returns at most `max` bytes per read.
struct Trickle<R> {
  inner: R,
  max: usize,
}

impl<R: Read> Read for Trickle<R> {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let cap = buf.len().min(self.max);
    self.inner.read(&mut buf[..cap])
  }
}

fn patterned(len: usize) -> Vec<u8> {
  (0..len).map(|i| (i % 251) as u8).collect()
}

fn progress_lines(raw: &[u8]) -> Vec<u32> {
  let text = String::from_utf8(raw.to_vec()).unwrap();
  text
    .lines()
    .map(|line| {
      let value = line.strip_prefix("PROGRESS:").unwrap();
      value.parse().unwrap()
    })
    .collect()
}

#[test]
fn chunked_digest_matches_oneshot() {
  let data = patterned(3 * CHUNK_LEN + 17);
  let mut progress = Progress::new(Vec::new(), data.len() as u64);
  let mut hasher = Sha256::new();

  let consumed = stream::consume(&mut Cursor::new(&data), &mut progress, |chunk| {
    hasher.update(chunk);
  })
  .unwrap();

  assert_eq!(consumed, data.len() as u64);
  assert_eq!(hasher.finalize(), Sha256::digest(&data));
}

#[test]
fn chunked_checksum_matches_oneshot() {
  let data = patterned(2 * CHUNK_LEN + 101);
  let mut progress = Progress::new(Vec::new(), data.len() as u64);
  let mut hasher = Crc32::new();

  stream::consume(&mut Cursor::new(&data), &mut progress, |chunk| {
    hasher.update(chunk);
  })
  .unwrap();

  assert_eq!(hasher.finalize(), Crc32::checksum(&data));
}

#[test]
fn zero_total_stays_silent() {
  let data = patterned(CHUNK_LEN + 5);
  let mut progress = Progress::new(Vec::new(), 0);

  stream::consume(&mut Cursor::new(&data), &mut progress, |_| {}).unwrap();

  assert!(progress.into_inner().is_empty());
}

#[test]
fn progress_starts_at_zero_and_ends_at_hundred() {
  let data = patterned(200 * 1024);
  let mut progress = Progress::new(Vec::new(), data.len() as u64);

  stream::consume(&mut Cursor::new(&data), &mut progress, |_| {}).unwrap();

  let lines = progress_lines(&progress.into_inner());
  assert_eq!(lines.first(), Some(&0));
  assert_eq!(lines.last(), Some(&100));
}

#[test]
fn progress_is_strictly_increasing() {
  let data = patterned(5 * CHUNK_LEN + 1234);
  let mut progress = Progress::new(Vec::new(), data.len() as u64);

  stream::consume(&mut Cursor::new(&data), &mut progress, |_| {}).unwrap();

  let lines = progress_lines(&progress.into_inner());
  assert!(lines.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn overrun_clamps_to_hundred() {
  // The stream carries twice the announced total, as a pipe can when the
  // producer keeps writing past the size hint.
  let data = patterned(4 * CHUNK_LEN);
  let mut progress = Progress::new(Vec::new(), (data.len() / 2) as u64);

  stream::consume(&mut Cursor::new(&data), &mut progress, |_| {}).unwrap();

  let lines = progress_lines(&progress.into_inner());
  assert!(lines.iter().all(|&pct| pct <= 100));
  assert_eq!(lines.last(), Some(&100));
  assert_eq!(lines.iter().filter(|&&pct| pct == 100).count(), 1);
}

#[test]
fn empty_stream_with_hint_reports_zero_only() {
  let empty: &[u8] = &[];
  let mut progress = Progress::new(Vec::new(), 5);
  let mut hasher = Sha256::new();

  let consumed = stream::consume(&mut Cursor::new(empty), &mut progress, |chunk| {
    hasher.update(chunk);
  })
  .unwrap();

  assert_eq!(consumed, 0);
  assert_eq!(progress_lines(&progress.into_inner()), vec![0]);
  assert_eq!(hasher.finalize(), Sha256::digest(b""));
}

#[test]
fn short_reads_do_not_change_the_digest() {
  let data = patterned(1000);
  let mut reader = Trickle { inner: Cursor::new(&data), max: 7 };
  let mut progress = Progress::new(Vec::new(), data.len() as u64);
  let mut hasher = Sha256::new();

  let consumed = stream::consume(&mut reader, &mut progress, |chunk| {
    hasher.update(chunk);
  })
  .unwrap();

  assert_eq!(consumed, data.len() as u64);
  assert_eq!(hasher.finalize(), Sha256::digest(&data));

  let lines = progress_lines(&progress.into_inner());
  assert!(lines.windows(2).all(|pair| pair[0] < pair[1]));
  assert_eq!(lines.last(), Some(&100));
}

#[test]
fn report_dedupes_equal_percent() {
  let mut progress = Progress::new(Vec::new(), 1000);
  progress.report(10);
  progress.report(10);
  progress.report(14);

  assert_eq!(progress_lines(&progress.into_inner()), vec![1]);
}
