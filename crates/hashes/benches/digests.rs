use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hashes::{Md5, Sha1, Sha256, Sha384, Sha512};
use traits::Digest as _;

mod common;

fn digests(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("hashes/digests");

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("md5/streamsum", len), data, |b, d| {
      b.iter(|| black_box(Md5::digest(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("md5/md-5", len), data, |b, d| {
      b.iter(|| {
        use md5::Digest as _;
        let out = md5::Md5::digest(black_box(d));
        black_box(out)
      })
    });

    group.bench_with_input(BenchmarkId::new("sha1/streamsum", len), data, |b, d| {
      b.iter(|| black_box(Sha1::digest(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("sha1/sha1", len), data, |b, d| {
      b.iter(|| {
        use sha1::Digest as _;
        let out = sha1::Sha1::digest(black_box(d));
        black_box(out)
      })
    });

    group.bench_with_input(BenchmarkId::new("sha256/streamsum", len), data, |b, d| {
      b.iter(|| black_box(Sha256::digest(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("sha256/sha2", len), data, |b, d| {
      b.iter(|| {
        use sha2::Digest as _;
        let out = sha2::Sha256::digest(black_box(d));
        black_box(out)
      })
    });

    group.bench_with_input(BenchmarkId::new("sha384/streamsum", len), data, |b, d| {
      b.iter(|| black_box(Sha384::digest(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("sha384/sha2", len), data, |b, d| {
      b.iter(|| {
        use sha2::Digest as _;
        let out = sha2::Sha384::digest(black_box(d));
        black_box(out)
      })
    });

    group.bench_with_input(BenchmarkId::new("sha512/streamsum", len), data, |b, d| {
      b.iter(|| black_box(Sha512::digest(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("sha512/sha2", len), data, |b, d| {
      b.iter(|| {
        use sha2::Digest as _;
        let out = sha2::Sha512::digest(black_box(d));
        black_box(out)
      })
    });
  }

  group.finish();
}

fn streaming(c: &mut Criterion) {
  // Chunked updates model the stdin-driven use, where data arrives in
  // fixed-size reads rather than one contiguous slice.
  let data = common::pseudo_random_bytes(1024 * 1024, 0x5EED_CAFE_F00D_BEEF);
  let mut group = c.benchmark_group("hashes/streaming");
  group.throughput(criterion::Throughput::Bytes(data.len() as u64));

  for chunk in [4 * 1024usize, 64 * 1024] {
    group.bench_with_input(BenchmarkId::new("sha256/chunked", chunk), &data, |b, d| {
      b.iter(|| {
        let mut h = Sha256::new();
        for part in d.chunks(chunk) {
          h.update(black_box(part));
        }
        black_box(h.finalize())
      })
    });
  }

  group.finish();
}

criterion_group!(benches, digests, streaming);
criterion_main!(benches);
