//! SHA-512 worker: hashes stdin, prints the digest.

use std::process::ExitCode;

use streamsum::{Sha512, cli};

fn main() -> ExitCode {
  cli::digest_main::<Sha512>("sha512")
}
