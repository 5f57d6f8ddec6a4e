//! SHA-256 worker: hashes stdin, prints the digest.

use std::process::ExitCode;

use streamsum::{Sha256, cli};

fn main() -> ExitCode {
  cli::digest_main::<Sha256>("sha256")
}
