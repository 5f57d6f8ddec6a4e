//! SHA-1 worker: hashes stdin, prints the digest.

use std::process::ExitCode;

use streamsum::{Sha1, cli};

fn main() -> ExitCode {
  cli::digest_main::<Sha1>("sha1")
}
