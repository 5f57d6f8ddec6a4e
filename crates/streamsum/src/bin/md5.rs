//! MD5 worker: hashes stdin, prints the digest.

use std::process::ExitCode;

use streamsum::{Md5, cli};

fn main() -> ExitCode {
  cli::digest_main::<Md5>("md5")
}
