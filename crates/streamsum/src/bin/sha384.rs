//! SHA-384 worker: hashes stdin, prints the digest.

use std::process::ExitCode;

use streamsum::{Sha384, cli};

fn main() -> ExitCode {
  cli::digest_main::<Sha384>("sha384")
}
